//! Unit tests for the members file format.

use chrono::NaiveDate;
use gymtrack::members::{Member, MemberCodec, MemberStatus};
use gymtrack::storage::codec::{decode, encode};
use gymtrack::storage::CodecError;

fn create_member(id: u32) -> Member {
    let mut m = Member::with_join_date(
        id,
        format!("Member {id}"),
        18 + id % 60,
        ["Basic", "Premium", "VIP"][id as usize % 3].to_string(),
        NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + chrono::Days::new(id as u64),
    );
    m.set_measurements(1.5 + (id % 50) as f64 / 100.0, 50.0 + id as f64 * 0.37);
    if id % 4 == 0 {
        m.status = MemberStatus::Inactive;
    }
    m
}

fn assert_same_fields(a: &Member, b: &Member) {
    assert_eq!(a.id(), b.id());
    assert_eq!(a.name, b.name);
    assert_eq!(a.age, b.age);
    assert_eq!(a.membership_type, b.membership_type);
    assert_eq!(a.height_m(), b.height_m());
    assert_eq!(a.weight_kg(), b.weight_kg());
    assert_eq!(a.bmi(), b.bmi());
    assert_eq!(a.join_date(), b.join_date());
    assert_eq!(a.status, b.status);
}

#[test]
fn test_single_member_round_trip() {
    let members = vec![create_member(1)];
    let decoded = decode::<MemberCodec>(&encode::<MemberCodec>(&members));

    assert!(decoded.error.is_none());
    assert_eq!(decoded.records.len(), 1);
    assert_same_fields(&decoded.records[0], &members[0]);
}

#[test]
fn test_many_members_round_trip_in_order() {
    let members: Vec<Member> = (1..=60).map(create_member).collect();
    let decoded = decode::<MemberCodec>(&encode::<MemberCodec>(&members));

    assert!(decoded.error.is_none());
    assert_eq!(decoded.records.len(), members.len());
    for (a, b) in decoded.records.iter().zip(&members) {
        assert_same_fields(a, b);
    }
}

#[test]
fn test_unset_measurements_round_trip() {
    let m = Member::with_join_date(
        3,
        "New Joiner".to_string(),
        25,
        "Gold".to_string(),
        NaiveDate::from_ymd_opt(2025, 7, 4).unwrap(),
    );
    let text = encode::<MemberCodec>(std::slice::from_ref(&m));
    assert!(text.contains("Height: 0.0m\n"));
    assert!(text.contains("Weight: 0.0kg\n"));
    assert!(text.contains("BMI: 0.00 (Underweight)\n"));

    let decoded = decode::<MemberCodec>(&text);
    assert_eq!(decoded.records, vec![m]);
}

#[test]
fn test_reads_java_style_numbers() {
    let text = "Member ID: 12\n\
                Name: Old Record\n\
                Age: 52\n\
                Membership Type: Silver\n\
                Height: 1.8m\n\
                Weight: 81kg\n\
                BMI: 25.0 (Overweight)\n\
                Join Date: 2021-11-02\n\
                Status: Active\n\
                ---\n";
    let decoded = decode::<MemberCodec>(text);

    assert!(decoded.error.is_none());
    let m = &decoded.records[0];
    assert_eq!(m.weight_kg(), 81.0);
    assert!((m.bmi() - 25.0).abs() < 1e-9);
}

#[test]
fn test_malformed_age_keeps_earlier_members() {
    let mut text = encode::<MemberCodec>(&[create_member(1), create_member(2)]);
    text.push_str(
        "Member ID: 3\nName: Broken\nAge: thirty\nMembership Type: Basic\n\
         Height: 0.0m\nWeight: 0.0kg\nBMI: 0.00 (Underweight)\n\
         Join Date: 2024-01-01\nStatus: Active\n---\n",
    );
    text.push_str(&encode::<MemberCodec>(&[create_member(4)]));

    let decoded = decode::<MemberCodec>(&text);

    let ids: Vec<u32> = decoded.records.iter().map(|m| m.id()).collect();
    assert_eq!(ids, vec![1, 2]);
    assert!(matches!(
        decoded.error,
        Some(CodecError::InvalidNumber { line: 23, label: "Age:", .. })
    ));
}

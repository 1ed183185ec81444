//! Unit tests for the workouts file format.

use chrono::NaiveDate;
use gymtrack::storage::codec::{decode, encode};
use gymtrack::storage::CodecError;
use gymtrack::workouts::{Workout, WorkoutCodec};

fn create_workout(id: u32) -> Workout {
    Workout::with_date(
        id,
        id % 7 + 1,
        ["Squat", "Bench Press", "Deadlift", "Row"][id as usize % 4].to_string(),
        id % 10 + 1,
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap() + chrono::Days::new(id as u64),
    )
}

#[test]
fn test_single_workout_round_trip() {
    let workouts = vec![create_workout(1)];
    let decoded = decode::<WorkoutCodec>(&encode::<WorkoutCodec>(&workouts));

    assert!(decoded.error.is_none());
    assert_eq!(decoded.records, workouts);
}

#[test]
fn test_many_workouts_round_trip_in_order() {
    let workouts: Vec<Workout> = (1..=75).map(create_workout).collect();
    let decoded = decode::<WorkoutCodec>(&encode::<WorkoutCodec>(&workouts));

    assert!(decoded.error.is_none());
    assert_eq!(decoded.records, workouts);
}

#[test]
fn test_windows_line_endings() {
    let text = encode::<WorkoutCodec>(&[create_workout(1), create_workout(2)]).replace('\n', "\r\n");
    let decoded = decode::<WorkoutCodec>(&text);

    assert!(decoded.error.is_none());
    assert_eq!(decoded.records, vec![create_workout(1), create_workout(2)]);
}

#[test]
fn test_truncated_file_keeps_complete_workouts() {
    let mut text = encode::<WorkoutCodec>(&[create_workout(1)]);
    text.push_str("Workout ID: 2\nMember ID: 3\n");

    let decoded = decode::<WorkoutCodec>(&text);

    assert_eq!(decoded.records, vec![create_workout(1)]);
    assert_eq!(
        decoded.error,
        Some(CodecError::MissingField {
            line: 9,
            label: "Exercise:"
        })
    );
}

#[test]
fn test_empty_input() {
    let decoded = decode::<WorkoutCodec>("");
    assert!(decoded.records.is_empty());
    assert!(decoded.error.is_none());
    assert_eq!(encode::<WorkoutCodec>(&[]), "");
}

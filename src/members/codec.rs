//! Text layout of the members file.

use crate::members::types::{Member, MemberStatus};
use crate::storage::codec::{format_decimal, push_field, FieldLines, RecordCodec, DATE_FORMAT};
use crate::storage::error::{CodecError, RecordKind};

const NAME: &str = "Name:";
const AGE: &str = "Age:";
const MEMBERSHIP_TYPE: &str = "Membership Type:";
const HEIGHT: &str = "Height:";
const WEIGHT: &str = "Weight:";
const BMI: &str = "BMI:";
const JOIN_DATE: &str = "Join Date:";
const STATUS: &str = "Status:";

/// Codec for `Member ID:` blocks.
///
/// The BMI line is written for readers of the file but ignored on load; BMI
/// is recomputed from the stored height and weight.
pub struct MemberCodec;

impl RecordCodec for MemberCodec {
    type Record = Member;

    const KIND: RecordKind = RecordKind::Member;
    const START_LABEL: &'static str = "Member ID:";
    const REQUIRED: bool = true;

    fn encode_fields(member: &Member, out: &mut String) {
        push_field(out, NAME, &member.name);
        push_field(out, AGE, member.age);
        push_field(out, MEMBERSHIP_TYPE, &member.membership_type);
        push_field(out, HEIGHT, format!("{}m", format_decimal(member.height_m())));
        push_field(out, WEIGHT, format!("{}kg", format_decimal(member.weight_kg())));
        push_field(
            out,
            BMI,
            format!("{:.2} ({})", member.bmi(), member.bmi_status()),
        );
        push_field(out, JOIN_DATE, member.join_date().format(DATE_FORMAT));
        push_field(out, STATUS, member.status);
    }

    fn decode_fields(id: u32, fields: &mut FieldLines<'_>) -> Result<Member, CodecError> {
        let name = fields.text(NAME)?;
        let age = fields.number(AGE, "")?;
        let membership_type = fields.text(MEMBERSHIP_TYPE)?;
        let height = fields.number(HEIGHT, "m")?;
        let weight = fields.number(WEIGHT, "kg")?;
        fields.skip(BMI)?;
        let join_date = fields.date(JOIN_DATE)?;
        let status = fields.parsed(STATUS, |line, value| {
            value
                .parse::<MemberStatus>()
                .map_err(|_| CodecError::InvalidStatus {
                    line,
                    value: value.to_string(),
                })
        })?;

        let mut member = Member::with_join_date(id, name, age, membership_type, join_date);
        member.set_measurements(height, weight);
        member.status = status;
        Ok(member)
    }
}

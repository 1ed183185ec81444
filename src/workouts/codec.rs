//! Text layout of the workouts file.

use crate::storage::codec::{push_field, FieldLines, RecordCodec, DATE_FORMAT};
use crate::storage::error::{CodecError, RecordKind};
use crate::workouts::types::Workout;

const MEMBER_ID: &str = "Member ID:";
const EXERCISE: &str = "Exercise:";
const SETS: &str = "Sets:";
const DATE: &str = "Date:";

/// Codec for `Workout ID:` blocks.
pub struct WorkoutCodec;

impl RecordCodec for WorkoutCodec {
    type Record = Workout;

    const KIND: RecordKind = RecordKind::Workout;
    const START_LABEL: &'static str = "Workout ID:";
    const REQUIRED: bool = false;

    fn encode_fields(workout: &Workout, out: &mut String) {
        push_field(out, MEMBER_ID, workout.member_id());
        push_field(out, EXERCISE, &workout.exercise);
        push_field(out, SETS, workout.sets);
        push_field(out, DATE, workout.date().format(DATE_FORMAT));
    }

    fn decode_fields(id: u32, fields: &mut FieldLines<'_>) -> Result<Workout, CodecError> {
        let member_id = fields.number(MEMBER_ID, "")?;
        let exercise = fields.text(EXERCISE)?;
        let sets = fields.number(SETS, "")?;
        let date = fields.date(DATE)?;
        Ok(Workout::with_date(id, member_id, exercise, sets, date))
    }
}

//! Workout entity.

use chrono::{Local, NaiveDate};
use std::fmt;

use crate::storage::codec::Record;

/// One recorded workout for a member.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    id: u32,
    member_id: u32,
    /// Exercise name
    pub exercise: String,
    /// Number of sets (or minutes, depending on how the gym logs intensity)
    pub sets: u32,
    date: NaiveDate,
}

impl Workout {
    /// Create a workout dated today.
    pub fn new(id: u32, member_id: u32, exercise: String, sets: u32) -> Self {
        Self::with_date(id, member_id, exercise, sets, Local::now().date_naive())
    }

    pub fn with_date(
        id: u32,
        member_id: u32,
        exercise: String,
        sets: u32,
        date: NaiveDate,
    ) -> Self {
        Self {
            id,
            member_id,
            exercise,
            sets,
            date,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    /// Member this workout was recorded for. The member may since have been
    /// removed.
    pub fn member_id(&self) -> u32 {
        self.member_id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Record for Workout {
    fn id(&self) -> u32 {
        self.id
    }
}

impl fmt::Display for Workout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Workout ID: {}\nExercise: {}\nSets: {}\nDate: {}",
            self.id, self.exercise, self.sets, self.date
        )
    }
}

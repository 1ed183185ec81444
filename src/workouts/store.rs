//! Workout log backed by the workouts file.

use std::path::{Path, PathBuf};

use crate::members::MemberStore;
use crate::storage::codec::ensure_single_line;
use crate::storage::error::{RecordKind, StoreError};
use crate::storage::record_store::{LoadStatus, RecordStore};
use crate::workouts::codec::WorkoutCodec;
use crate::workouts::types::Workout;

/// Text shown when a member has no recorded workouts.
pub const NO_HISTORY: &str = "No workout history found.";

/// Log of recorded workouts.
///
/// The member reference is checked once, when a workout is recorded.
/// Removing a member later leaves its workouts untouched.
pub struct WorkoutStore {
    records: RecordStore<WorkoutCodec>,
}

impl WorkoutStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            records: RecordStore::open(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.records.path()
    }

    pub fn load_status(&self) -> &LoadStatus {
        self.records.load_status()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record a workout dated today for an existing member.
    ///
    /// Fails with `NotFound` without touching the log if the member is
    /// unknown, and with `MultilineText` if the exercise spans lines.
    pub fn record(
        &mut self,
        members: &MemberStore,
        member_id: u32,
        exercise: &str,
        sets: u32,
    ) -> Result<u32, StoreError> {
        members.get(member_id)?;
        ensure_single_line(RecordKind::Workout, "exercise", exercise)?;

        let id = self
            .records
            .insert_with(|id| Workout::new(id, member_id, exercise.to_string(), sets))?;
        tracing::info!(id, member_id, exercise, sets, "Workout recorded");
        Ok(id)
    }

    pub fn get(&self, id: u32) -> Result<&Workout, StoreError> {
        self.records.get(id)
    }

    /// Snapshot of every workout in recording order.
    pub fn list(&self) -> Vec<Workout> {
        self.records.list()
    }

    /// Workouts of one member in recording order, or `None` when there are
    /// none.
    pub fn history(&self, member_id: u32) -> Option<Vec<Workout>> {
        let workouts: Vec<Workout> = self
            .records
            .iter()
            .filter(|w| w.member_id() == member_id)
            .cloned()
            .collect();

        if workouts.is_empty() {
            None
        } else {
            Some(workouts)
        }
    }

    /// Text rendering of a member's history, blank-line separated.
    pub fn render_history(&self, member_id: u32) -> String {
        match self.history(member_id) {
            Some(workouts) => workouts
                .iter()
                .map(Workout::to_string)
                .collect::<Vec<_>>()
                .join("\n\n"),
            None => NO_HISTORY.to_string(),
        }
    }

    pub fn render_info(&self, id: u32) -> Result<String, StoreError> {
        self.get(id).map(Workout::to_string)
    }

    /// Correct the exercise or set count of a recorded workout.
    pub fn update(&mut self, id: u32, exercise: &str, sets: u32) -> Result<(), StoreError> {
        ensure_single_line(RecordKind::Workout, "exercise", exercise)?;
        self.records.update(id, |w| {
            w.exercise = exercise.to_string();
            w.sets = sets;
        })
    }

    pub fn remove(&mut self, id: u32) -> Result<Workout, StoreError> {
        self.records.remove(id)
    }
}

//! Gym facade owning the member registry and the workout log.
//!
//! This is the surface front ends talk to.

use crate::members::{Member, MemberStore};
use crate::storage::config::AppConfig;
use crate::storage::error::StoreError;
use crate::workouts::{Workout, WorkoutStore};

/// Both record stores, opened from one configuration.
pub struct Gym {
    members: MemberStore,
    workouts: WorkoutStore,
}

impl Gym {
    /// Open both stores at the paths named by `config`.
    pub fn open(config: &AppConfig) -> Self {
        let members = MemberStore::open(config.members_path());
        let workouts = WorkoutStore::open(config.workouts_path());

        tracing::info!(
            members = members.len(),
            workouts = workouts.len(),
            "Gym records opened"
        );

        Self { members, workouts }
    }

    pub fn members(&self) -> &MemberStore {
        &self.members
    }

    pub fn members_mut(&mut self) -> &mut MemberStore {
        &mut self.members
    }

    pub fn workouts(&self) -> &WorkoutStore {
        &self.workouts
    }

    pub fn workouts_mut(&mut self) -> &mut WorkoutStore {
        &mut self.workouts
    }

    pub fn register_member(
        &mut self,
        name: &str,
        age: u32,
        membership_type: &str,
    ) -> Result<u32, StoreError> {
        self.members.register(name, age, membership_type)
    }

    pub fn member(&self, id: u32) -> Result<&Member, StoreError> {
        self.members.get(id)
    }

    pub fn list_members(&self) -> Vec<Member> {
        self.members.list()
    }

    pub fn member_info(&self, id: u32) -> Result<String, StoreError> {
        self.members.render_info(id)
    }

    pub fn set_height(&mut self, id: u32, height_m: f64) -> Result<(), StoreError> {
        self.members.set_height(id, height_m)
    }

    pub fn set_weight(&mut self, id: u32, weight_kg: f64) -> Result<(), StoreError> {
        self.members.set_weight(id, weight_kg)
    }

    /// Record a workout, checking the member exists.
    pub fn record_workout(
        &mut self,
        member_id: u32,
        exercise: &str,
        sets: u32,
    ) -> Result<u32, StoreError> {
        self.workouts
            .record(&self.members, member_id, exercise, sets)
    }

    /// A member's workouts, or `None` when there are none.
    pub fn workout_history(&self, member_id: u32) -> Option<Vec<Workout>> {
        self.workouts.history(member_id)
    }
}

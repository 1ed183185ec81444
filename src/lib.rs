//! GymTrack - Gym Member and Workout Records
//!
//! Keeps a registry of gym members with derived BMI and a log of their
//! workouts. Both collections live in memory and are rewritten to flat text
//! files after every change, then reloaded on the next start.

pub mod gym;
pub mod members;
pub mod menu;
pub mod storage;
pub mod workouts;

// Re-export commonly used types
pub use gym::Gym;
pub use members::{BmiStatus, Member, MemberStatus, MemberStore};
pub use storage::config::AppConfig;
pub use storage::{LoadStatus, StoreError};
pub use workouts::{Workout, WorkoutStore};

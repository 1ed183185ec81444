//! Workout log: entity, file layout and store.

pub mod codec;
pub mod store;
pub mod types;

pub use codec::WorkoutCodec;
pub use store::{WorkoutStore, NO_HISTORY};
pub use types::Workout;

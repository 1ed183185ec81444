//! Gym members: entity, file layout and registry.

pub mod codec;
pub mod store;
pub mod types;

pub use codec::MemberCodec;
pub use store::MemberStore;
pub use types::{calculate_bmi, BmiStatus, Member, MemberStatus};

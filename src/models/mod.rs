//! Data models for the crew roster manager.
//!
//! These models match the frontend JSON contract exactly (camelCase
//! field names) for seamless interoperability.

mod crew;
mod rower;

pub use crew::*;
pub use rower::*;

//! The engagement engine: alternating turns until one roster falls.
//!
//! ## States
//!
//! `Ongoing` until a roster has no living fighter, then `PlayerWon` or
//! `CpuWon`. `Draw` exists for mutual elimination, which single-target
//! attacks cannot produce from a valid start.

pub mod engine;
pub mod error;
pub mod outcome;

pub use engine::Engagement;
pub use error::EngagementError;
pub use outcome::{Outcome, TurnReport};

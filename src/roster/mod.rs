//! Rosters: five fighters on one side of a battle.
//!
//! A roster's alignment is decided by majority of `good` members (neutral
//! fighters side with `bad`). Fighters whose own alignment matches the
//! roster's get a boosting affinity factor, the rest a penalising one.

pub mod team;

pub use team::{LivingIndices, Roster, RosterError, TeamAlignment, AFFINITY_ROLL, GOOD_MAJORITY};

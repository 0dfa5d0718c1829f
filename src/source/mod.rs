//! Character data: records, validation and random lineups.
//!
//! Battles need ten distinct, valid characters. The source is a trait so a
//! remote provider can stand in for the bundled [`Catalog`].

pub mod catalog;
pub mod record;

pub use catalog::{Catalog, CharacterSource, SourceError, ATTEMPTS_PER_CHARACTER};
pub use record::{CharacterRecord, RecordError};

use crate::core::ROSTER_SIZE;
use crate::fighter::FighterProfile;

/// Split a ten-character lineup into two teams of five.
///
/// The first five go to team 1. Returns `None` unless the lineup has exactly
/// two rosters' worth of characters.
#[must_use]
pub fn split_lineup(mut lineup: Vec<FighterProfile>) -> Option<(Vec<FighterProfile>, Vec<FighterProfile>)> {
    if lineup.len() != 2 * ROSTER_SIZE {
        return None;
    }
    let second = lineup.split_off(ROSTER_SIZE);
    Some((lineup, second))
}

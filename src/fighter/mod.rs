//! Fighters: raw character data turned into combat-ready stats.
//!
//! ## Derivation
//!
//! - Combat attributes: `floor((2 * raw + stamina) / 1.1 * affinity)`
//! - Hit points: `floor((str * 0.8 + dur * 0.7 + pow) / 2 * (1 + stamina / 10)) + 100`
//! - Attacks: weighted sums of three combat attributes times affinity
//!   (see [`AttackKind`])

pub mod alignment;
pub mod attack;
pub mod attributes;
pub mod combatant;
pub mod summary;

pub use alignment::{Alignment, ParseAlignmentError};
pub use attack::{AttackKind, Attacks};
pub use attributes::{Attribute, Attributes};
pub use combatant::{Fighter, FighterProfile, FighterStateError, Status, ATTRIBUTE_DIVISOR, BASE_HIT_POINTS, STAMINA_MAX};
pub use summary::{display_damage, format_hit_points, FighterSummary};

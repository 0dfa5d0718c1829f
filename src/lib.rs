//! # hero-clash
//!
//! A turn-based battle engine: two rosters of five characters fight until
//! one side has nobody left standing.
//!
//! ## Design Principles
//!
//! 1. **Injectable randomness**: every draw (stamina, affinity, cpu choices,
//!    attack kind, victim) goes through [`RandomSource`]. Seeded battles are
//!    reproducible bit for bit.
//!
//! 2. **Step-driven engine**: [`Engagement`] never reads input. Front ends
//!    submit selections and own their re-prompt loops.
//!
//! 3. **Fixed rules**: stat formulas are constants next to the code that
//!    applies them; configuration only covers how a session runs.
//!
//! ## Modules
//!
//! - `core`: sides, RNG, configuration
//! - `fighter`: attributes, derived stats, damage and status
//! - `roster`: team alignment and affinity assignment
//! - `engagement`: the turn state machine and win condition
//! - `source`: character records and random lineups
//! - `session`: from a character source to a ready engagement

pub mod core;
pub mod engagement;
pub mod fighter;
pub mod roster;
pub mod session;
pub mod source;

// Re-export commonly used types
pub use crate::core::{BattleConfig, ConfigError, GameRng, RandomSource, Side, SideMap, ROSTER_SIZE};

pub use crate::fighter::{
    Alignment, AttackKind, Attacks, Attribute, Attributes, Fighter, FighterProfile, FighterSummary, Status,
};

pub use crate::roster::{Roster, RosterError, TeamAlignment};

pub use crate::engagement::{Engagement, EngagementError, Outcome, TurnReport};

pub use crate::source::{Catalog, CharacterRecord, CharacterSource, RecordError, SourceError};

pub use crate::session::{Matchup, SessionError, TeamNumber};

//! Core engine types: sides, RNG, configuration.
//!
//! These are the building blocks shared by fighters, rosters and the
//! engagement engine.

pub mod config;
pub mod rng;
pub mod side;

pub use config::{BattleConfig, ConfigError, ROSTER_SIZE};
pub use rng::{GameRng, RandomSource};
pub use side::{Side, SideMap};

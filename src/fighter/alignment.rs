//! Biographical alignment of a character.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Alignment as reported by the character's biography.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Good,
    Bad,
    Neutral,
}

impl Alignment {
    /// Lowercase name, as used by the character data.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Alignment::Good => "good",
            Alignment::Bad => "bad",
            Alignment::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alignment text that is not one of `good`, `bad` or `neutral`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown alignment {0:?}")]
pub struct ParseAlignmentError(pub String);

impl FromStr for Alignment {
    type Err = ParseAlignmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "good" => Ok(Alignment::Good),
            "bad" => Ok(Alignment::Bad),
            "neutral" => Ok(Alignment::Neutral),
            other => Err(ParseAlignmentError(other.to_string())),
        }
    }
}

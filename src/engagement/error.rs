//! Errors surfaced by the engagement engine.
//!
//! Selection errors are recoverable: the caller re-prompts and the battle
//! state is left exactly as it was.

use thiserror::Error;

use super::outcome::Outcome;
use crate::core::Side;

pub type Result<T> = std::result::Result<T, EngagementError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngagementError {
    #[error("the {0} roster has no fighter left standing")]
    EmptyRoster(Side),

    #[error("{input:?} is not a number")]
    NotANumber { input: String },

    #[error("selection {index} is out of range, choose 1 to {living}")]
    SelectionOutOfRange { index: usize, living: usize },

    #[error("it is the {to_move} side's turn")]
    NotYourTurn { to_move: Side },

    #[error("the battle is over ({outcome})")]
    BattleOver { outcome: Outcome },

    #[error("no winner after {turns} turns")]
    TurnLimit { turns: u32 },
}

impl EngagementError {
    /// Whether the caller should simply ask for another selection.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            EngagementError::NotANumber { .. } | EngagementError::SelectionOutOfRange { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable() {
        assert!(EngagementError::NotANumber { input: "x".into() }.is_recoverable());
        assert!(EngagementError::SelectionOutOfRange { index: 9, living: 5 }.is_recoverable());
        assert!(!EngagementError::BattleOver { outcome: Outcome::CpuWon }.is_recoverable());
        assert!(!EngagementError::EmptyRoster(Side::Cpu).is_recoverable());
    }

    #[test]
    fn test_messages() {
        let err = EngagementError::SelectionOutOfRange { index: 7, living: 3 };
        assert_eq!(err.to_string(), "selection 7 is out of range, choose 1 to 3");

        let err = EngagementError::NotYourTurn { to_move: Side::Cpu };
        assert_eq!(err.to_string(), "it is the cpu side's turn");
    }
}

//! Battle outcome and per-turn reports.

use serde::{Deserialize, Serialize};

use crate::core::Side;
use crate::fighter::{format_hit_points, AttackKind, Status};

/// State of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Both sides still have fighters standing.
    Ongoing,
    /// Every cpu fighter is down.
    PlayerWon,
    /// Every player fighter is down.
    CpuWon,
    /// Both sides went down together.
    ///
    /// A single attack only ever downs one fighter, so a battle that starts
    /// with both sides standing cannot end this way.
    Draw,
}

impl Outcome {
    /// Evaluate the win condition from living fighter counts.
    #[must_use]
    pub const fn evaluate(player_living: usize, cpu_living: usize) -> Self {
        match (player_living, cpu_living) {
            (0, 0) => Outcome::Draw,
            (_, 0) => Outcome::PlayerWon,
            (0, _) => Outcome::CpuWon,
            _ => Outcome::Ongoing,
        }
    }

    /// Whether the battle has ended.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// The winning side, if there is one.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            Outcome::PlayerWon => Some(Side::Player),
            Outcome::CpuWon => Some(Side::Cpu),
            Outcome::Ongoing | Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => f.write_str("ongoing"),
            Outcome::PlayerWon => f.write_str("player won"),
            Outcome::CpuWon => f.write_str("cpu won"),
            Outcome::Draw => f.write_str("draw"),
        }
    }
}

/// What happened during one resolved attack.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Turn number, starting at 1.
    pub turn: u32,
    /// Round number; both sides act once per round.
    pub round: u32,
    pub side: Side,
    pub attacker: String,
    pub attack: AttackKind,
    pub damage: f64,
    pub victim: String,
    pub victim_hit_points: f64,
    pub victim_status: Status,
    /// Battle state after this attack.
    pub outcome: Outcome,
}

impl TurnReport {
    /// Whether the battle continues after this turn.
    #[must_use]
    pub fn continues(&self) -> bool {
        !self.outcome.is_terminal()
    }
}

impl std::fmt::Display for TurnReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "'{}' is doing a '{}' attack ({:.2} HP) on '{}' -> {} {} HP left",
            self.attacker,
            self.attack.label().to_lowercase(),
            self.damage,
            self.victim,
            self.victim_status.glyph(),
            format_hit_points(self.victim_hit_points),
        )
    }
}

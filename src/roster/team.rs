//! Roster construction, alignment and stat derivation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use crate::core::{RandomSource, ROSTER_SIZE};
use crate::fighter::{Alignment, Fighter, FighterSummary};

/// Affinity rolls are `1 + n` for `n` drawn from `0..AFFINITY_ROLL`.
pub const AFFINITY_ROLL: usize = 10;

/// Number of `good` members that makes a roster `good`.
pub const GOOD_MAJORITY: usize = 3;

/// Indices of living fighters. Never longer than a roster.
pub type LivingIndices = SmallVec<[usize; ROSTER_SIZE]>;

/// Collective alignment of a roster. There are no neutral rosters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamAlignment {
    Good,
    Bad,
}

impl TeamAlignment {
    /// Whether a fighter with `alignment` fights in line with this roster.
    ///
    /// Neutral fighters count as `bad` for the roster vote but never match.
    #[must_use]
    pub fn matches(self, alignment: Alignment) -> bool {
        matches!(
            (self, alignment),
            (TeamAlignment::Good, Alignment::Good) | (TeamAlignment::Bad, Alignment::Bad)
        )
    }
}

impl std::fmt::Display for TeamAlignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamAlignment::Good => f.write_str("good"),
            TeamAlignment::Bad => f.write_str("bad"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("a roster needs exactly {expected} fighters, got {actual}")]
    WrongSize { expected: usize, actual: usize },

    #[error("roster fighters were derived without a roster alignment")]
    Unaligned,

    #[error("roster is marked updated but {name} has no affinity")]
    MissingAffinity { name: String },
}

/// Five fighters fighting on one side.
///
/// Insertion order is kept; it defines the selection indices shown to the
/// player.
///
/// Deserializing goes through [`Roster::new`], so the size rule holds for
/// stored rosters too.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RosterState")]
pub struct Roster {
    fighters: Vec<Fighter>,
    alignment: Option<TeamAlignment>,
    fighters_updated: bool,
}

#[derive(Deserialize)]
struct RosterState {
    fighters: Vec<Fighter>,
    alignment: Option<TeamAlignment>,
    fighters_updated: bool,
}

impl TryFrom<RosterState> for Roster {
    type Error = RosterError;

    fn try_from(state: RosterState) -> Result<Self, Self::Error> {
        let mut roster = Self::new(state.fighters)?;

        if state.fighters_updated {
            if state.alignment.is_none() {
                return Err(RosterError::Unaligned);
            }
            if let Some(fighter) = roster.fighters.iter().find(|f| f.affinity().is_none()) {
                return Err(RosterError::MissingAffinity {
                    name: fighter.name().to_string(),
                });
            }
        }

        roster.alignment = state.alignment;
        roster.fighters_updated = state.fighters_updated;
        Ok(roster)
    }
}

impl Roster {
    /// Group exactly [`ROSTER_SIZE`] fighters.
    pub fn new(fighters: Vec<Fighter>) -> Result<Self, RosterError> {
        if fighters.len() != ROSTER_SIZE {
            return Err(RosterError::WrongSize {
                expected: ROSTER_SIZE,
                actual: fighters.len(),
            });
        }

        Ok(Self {
            fighters,
            alignment: None,
            fighters_updated: false,
        })
    }

    /// Group fighters, decide the alignment and derive every fighter's stats.
    pub fn assemble(fighters: Vec<Fighter>, rng: &mut impl RandomSource) -> Result<Self, RosterError> {
        let mut roster = Self::new(fighters)?;
        roster.compute_alignment();
        roster.update_fighters(rng);
        Ok(roster)
    }

    /// Decide the roster alignment.
    ///
    /// `good` as soon as [`GOOD_MAJORITY`] members are exactly `good`,
    /// otherwise `bad`. Computed once; later calls return the stored value.
    pub fn compute_alignment(&mut self) -> TeamAlignment {
        if let Some(alignment) = self.alignment {
            return alignment;
        }

        let mut good_count = 0;
        let mut alignment = TeamAlignment::Bad;
        for fighter in &self.fighters {
            if fighter.alignment() == Alignment::Good {
                good_count += 1;
            }
            if good_count == GOOD_MAJORITY {
                alignment = TeamAlignment::Good;
                break;
            }
        }

        tracing::debug!(%alignment, good_count, "roster alignment decided");
        self.alignment = Some(alignment);
        alignment
    }

    /// The roster alignment, once computed.
    #[must_use]
    pub fn alignment(&self) -> Option<TeamAlignment> {
        self.alignment
    }

    /// Assign every fighter's affinity factor and derive its stats.
    ///
    /// Matching fighters get `1 + n`, the others `1 / (1 + n)`, with `n`
    /// drawn from `0..10`. Stats are then derived in order: attributes, hit
    /// points, attacks. Runs once per roster.
    pub fn update_fighters(&mut self, rng: &mut impl RandomSource) {
        if self.fighters_updated {
            tracing::warn!("roster fighters already updated");
            return;
        }
        let alignment = self.compute_alignment();

        for fighter in &mut self.fighters {
            let roll = (1 + rng.gen_range_usize(0..AFFINITY_ROLL)) as f64;
            let affinity = if alignment.matches(fighter.alignment()) {
                roll
            } else {
                roll.recip()
            };

            fighter.assign_affinity(affinity);
            fighter.derive_attributes();
            fighter.derive_hit_points();
            fighter.derive_attacks();

            tracing::debug!(
                fighter = fighter.name(),
                stamina = fighter.stamina(),
                affinity,
                hit_points = fighter.hit_points(),
                "fighter ready"
            );
        }
        self.fighters_updated = true;
    }

    /// All fighters, in insertion order.
    #[must_use]
    pub fn fighters(&self) -> &[Fighter] {
        &self.fighters
    }

    #[must_use]
    pub fn fighter(&self, index: usize) -> Option<&Fighter> {
        self.fighters.get(index)
    }

    pub(crate) fn fighter_mut(&mut self, index: usize) -> Option<&mut Fighter> {
        self.fighters.get_mut(index)
    }

    /// Roster indices of fighters with positive hit points, in order.
    #[must_use]
    pub fn living_indices(&self) -> LivingIndices {
        self.fighters
            .iter()
            .enumerate()
            .filter(|(_, f)| f.is_alive())
            .map(|(i, _)| i)
            .collect()
    }

    /// Fighters with positive hit points, in order.
    pub fn living(&self) -> impl Iterator<Item = &Fighter> {
        self.fighters.iter().filter(|f| f.is_alive())
    }

    #[must_use]
    pub fn living_count(&self) -> usize {
        self.living().count()
    }

    /// Whether every fighter is down.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.living_count() == 0
    }

    /// Summaries for a team listing.
    #[must_use]
    pub fn summaries(&self, show_rolls: bool) -> Vec<FighterSummary> {
        self.fighters
            .iter()
            .map(|f| {
                let summary = FighterSummary::of(f);
                if show_rolls {
                    summary.with_rolls(f)
                } else {
                    summary
                }
            })
            .collect()
    }
}

impl std::fmt::Display for Roster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.alignment {
            Some(alignment) => write!(f, "alignment: {alignment}"),
            None => write!(f, "alignment: undecided"),
        }
    }
}

//! Battle setup: from a character source to a ready engagement.
//!
//! ```
//! use hero_clash::core::GameRng;
//! use hero_clash::session::{Matchup, TeamNumber};
//! use hero_clash::source::Catalog;
//!
//! let mut catalog = Catalog::bundled().unwrap();
//! let mut rng = GameRng::new(42);
//!
//! let matchup = Matchup::draw(&mut catalog, &mut rng).unwrap();
//! let battle = matchup.start(TeamNumber::One, rng).unwrap();
//! assert_eq!(battle.attacker_choices().len(), 5);
//! ```

use std::str::FromStr;
use thiserror::Error;

use crate::core::{RandomSource, ROSTER_SIZE};
use crate::engagement::{Engagement, EngagementError};
use crate::fighter::{Fighter, FighterProfile};
use crate::roster::{Roster, RosterError};
use crate::source::{split_lineup, CharacterSource, SourceError};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error(transparent)]
    Engagement(#[from] EngagementError),

    #[error("expected {expected} characters, got {actual}")]
    LineupSize { expected: usize, actual: usize },
}

/// One of the two teams on offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TeamNumber {
    One,
    Two,
}

impl TeamNumber {
    pub const ALL: [TeamNumber; 2] = [TeamNumber::One, TeamNumber::Two];

    /// The other team.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            TeamNumber::One => TeamNumber::Two,
            TeamNumber::Two => TeamNumber::One,
        }
    }

    const fn index(self) -> usize {
        match self {
            TeamNumber::One => 0,
            TeamNumber::Two => 1,
        }
    }
}

impl std::fmt::Display for TeamNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Team {}", self.index() + 1)
    }
}

/// Team choice text that is not `1` or `2`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0:?} is not a team, enter 1 or 2")]
pub struct ParseTeamError(pub String);

impl FromStr for TeamNumber {
    type Err = ParseTeamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(TeamNumber::One),
            "2" => Ok(TeamNumber::Two),
            other => Err(ParseTeamError(other.to_string())),
        }
    }
}

/// Two assembled rosters waiting for the player to pick a side.
#[derive(Clone, Debug)]
pub struct Matchup {
    teams: [Roster; 2],
}

impl Matchup {
    /// Draw ten characters and assemble both teams.
    pub fn draw(
        source: &mut impl CharacterSource,
        rng: &mut impl RandomSource,
    ) -> Result<Self, SessionError> {
        let lineup = source.draw_lineup(rng, 2 * ROSTER_SIZE)?;
        let actual = lineup.len();
        let (first, second) = split_lineup(lineup).ok_or(SessionError::LineupSize {
            expected: 2 * ROSTER_SIZE,
            actual,
        })?;
        Self::from_profiles(first, second, rng)
    }

    /// Assemble both teams from explicit profiles.
    ///
    /// All ten fighters are created (drawing their stamina) before either
    /// roster derives stats.
    pub fn from_profiles(
        first: Vec<FighterProfile>,
        second: Vec<FighterProfile>,
        rng: &mut impl RandomSource,
    ) -> Result<Self, SessionError> {
        let first: Vec<Fighter> = first.into_iter().map(|p| Fighter::new(p, &mut *rng)).collect();
        let second: Vec<Fighter> = second.into_iter().map(|p| Fighter::new(p, &mut *rng)).collect();

        let mut teams = [Roster::new(first)?, Roster::new(second)?];
        for team in &mut teams {
            team.compute_alignment();
        }
        for team in &mut teams {
            team.update_fighters(rng);
        }
        Ok(Self { teams })
    }

    #[must_use]
    pub fn team(&self, number: TeamNumber) -> &Roster {
        &self.teams[number.index()]
    }

    /// Start the battle with the player controlling `player_team`.
    pub fn start<R: RandomSource>(
        self,
        player_team: TeamNumber,
        rng: R,
    ) -> Result<Engagement<R>, SessionError> {
        let [one, two] = self.teams;
        let (player, cpu) = match player_team {
            TeamNumber::One => (one, two),
            TeamNumber::Two => (two, one),
        };
        Ok(Engagement::new(player, cpu, rng)?)
    }
}

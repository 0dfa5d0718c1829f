//! Turn-by-turn battle state machine.
//!
//! The engine never blocks on input. A front end drives it one step at a
//! time:
//!
//! - On the player's turn, call [`Engagement::submit_selection`] with the
//!   1-based index of a living fighter. Invalid indices return a
//!   recoverable error and leave the state untouched.
//! - On the cpu's turn, call [`Engagement::play_automated_turn`].
//!
//! Each call resolves exactly one attack: pick the attack kind at random,
//! pick a living victim at random, apply the damage, then re-evaluate the
//! win condition. The turn passes only while the battle is ongoing.

use super::error::{EngagementError, Result};
use super::outcome::{Outcome, TurnReport};
use crate::core::{GameRng, RandomSource, Side, SideMap};
use crate::fighter::{AttackKind, Fighter};
use crate::roster::Roster;

/// A battle between two assembled rosters.
#[derive(Clone, Debug)]
pub struct Engagement<R = GameRng> {
    rosters: SideMap<Roster>,
    to_move: Side,
    turn_count: u32,
    outcome: Outcome,
    rng: R,
}

impl<R: RandomSource> Engagement<R> {
    /// Start a battle. The player side moves first.
    ///
    /// Both rosters must have at least one living fighter.
    pub fn new(player: Roster, cpu: Roster, rng: R) -> Result<Self> {
        let rosters = SideMap::from_pair(player, cpu);
        for (side, roster) in rosters.iter() {
            if roster.is_defeated() {
                return Err(EngagementError::EmptyRoster(side));
            }
        }

        tracing::info!(
            player = %rosters[Side::Player],
            cpu = %rosters[Side::Cpu],
            "battle started"
        );

        Ok(Self {
            rosters,
            to_move: Side::Player,
            turn_count: 0,
            outcome: Outcome::Ongoing,
            rng,
        })
    }

    #[must_use]
    pub fn roster(&self, side: Side) -> &Roster {
        &self.rosters[side]
    }

    /// Side whose turn it is.
    #[must_use]
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Completed turns that did not end the battle.
    #[must_use]
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// Current round; both sides act once per round.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.turn_count / 2 + 1
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Living fighters of the side to move, in selection order.
    ///
    /// Position `i` in this list is selected with index `i + 1`.
    pub fn attacker_choices(&self) -> Vec<&Fighter> {
        self.rosters[self.to_move].living().collect()
    }

    /// Parse raw text into a 1-based selection index.
    pub fn parse_selection(input: &str) -> Result<usize> {
        let trimmed = input.trim();
        trimmed.parse().map_err(|_| EngagementError::NotANumber {
            input: trimmed.to_string(),
        })
    }

    /// Check a 1-based selection against the living attackers.
    ///
    /// Returns the roster index of the selected fighter.
    pub fn validate_selection(&self, index: usize) -> Result<usize> {
        self.ensure_ongoing()?;
        let living = self.rosters[self.to_move].living_indices();
        if index == 0 || index > living.len() {
            return Err(EngagementError::SelectionOutOfRange {
                index,
                living: living.len(),
            });
        }
        Ok(living[index - 1])
    }

    /// Resolve the player's attack with the fighter at 1-based `index`.
    pub fn submit_selection(&mut self, index: usize) -> Result<TurnReport> {
        self.ensure_turn(Side::Player)?;
        let attacker = self.validate_selection(index)?;
        self.resolve(attacker)
    }

    /// Resolve the cpu's attack with a uniformly random living fighter.
    pub fn play_automated_turn(&mut self) -> Result<TurnReport> {
        self.ensure_turn(Side::Cpu)?;
        let living = self.rosters[Side::Cpu].living_indices();
        let pick = self
            .rng
            .pick_index(living.len())
            .ok_or(EngagementError::EmptyRoster(Side::Cpu))?;
        self.resolve(living[pick])
    }

    /// Play the whole battle, choosing player attackers with `choose`.
    ///
    /// `choose` receives the engine and returns a 1-based selection.
    /// Recoverable selection errors from `choose` are propagated, so a
    /// scripted caller must stay in range. Fails with
    /// [`EngagementError::TurnLimit`] if no side wins within `turn_limit`
    /// turns (possible only with zero-damage rosters).
    pub fn run_automated(
        &mut self,
        turn_limit: u32,
        mut choose: impl FnMut(&Self) -> usize,
    ) -> Result<Outcome> {
        let mut turns = 0;
        while !self.is_over() {
            if turns == turn_limit {
                return Err(EngagementError::TurnLimit { turns });
            }
            match self.to_move {
                Side::Player => {
                    let index = choose(self);
                    self.submit_selection(index)?;
                }
                Side::Cpu => {
                    self.play_automated_turn()?;
                }
            }
            turns += 1;
        }
        Ok(self.outcome)
    }

    /// Hand the rosters back, e.g. for a final listing.
    #[must_use]
    pub fn into_rosters(self) -> (Roster, Roster) {
        self.rosters.into_pair()
    }

    fn ensure_ongoing(&self) -> Result<()> {
        if self.is_over() {
            return Err(EngagementError::BattleOver {
                outcome: self.outcome,
            });
        }
        Ok(())
    }

    fn ensure_turn(&self, side: Side) -> Result<()> {
        self.ensure_ongoing()?;
        if self.to_move != side {
            return Err(EngagementError::NotYourTurn {
                to_move: self.to_move,
            });
        }
        Ok(())
    }

    fn resolve(&mut self, attacker_index: usize) -> Result<TurnReport> {
        let side = self.to_move;
        let defender = side.opponent();

        let kind_pick = self.rng.gen_range_usize(0..AttackKind::ALL.len());
        let attack = AttackKind::ALL[kind_pick];

        let victims = self.rosters[defender].living_indices();
        let victim_pick = self
            .rng
            .pick_index(victims.len())
            .ok_or(EngagementError::EmptyRoster(defender))?;
        let victim_index = victims[victim_pick];

        let attacker = self.rosters[side]
            .fighter(attacker_index)
            .ok_or(EngagementError::EmptyRoster(side))?;
        let attacker_name = attacker.name().to_string();
        let damage = attacker.attack_damage(attack);

        let victim = self.rosters[defender]
            .fighter_mut(victim_index)
            .ok_or(EngagementError::EmptyRoster(defender))?;
        victim.apply_damage(damage);
        victim.refresh_status();
        let victim_name = victim.name().to_string();
        let victim_hit_points = victim.hit_points();
        let victim_status = victim.status();

        let turn = self.turn_count + 1;
        let round = self.round();
        self.outcome = Outcome::evaluate(
            self.rosters[Side::Player].living_count(),
            self.rosters[Side::Cpu].living_count(),
        );

        tracing::debug!(
            turn,
            %side,
            attacker = %attacker_name,
            %attack,
            damage,
            victim = %victim_name,
            victim_hit_points,
            "attack resolved"
        );

        if self.outcome.is_terminal() {
            tracing::info!(outcome = %self.outcome, turn, "battle finished");
        } else {
            self.to_move = defender;
            self.turn_count += 1;
        }

        Ok(TurnReport {
            turn,
            round,
            side,
            attacker: attacker_name,
            attack,
            damage,
            victim: victim_name,
            victim_hit_points,
            victim_status,
            outcome: self.outcome,
        })
    }
}

//! Renderable fighter summaries for front ends.

use serde::{Deserialize, Serialize};

use super::alignment::Alignment;
use super::attack::AttackKind;
use super::combatant::{Fighter, Status};

/// Snapshot of what a team listing shows for one fighter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FighterSummary {
    pub status: Status,
    pub name: String,
    pub alignment: Alignment,
    pub hit_points: f64,
    /// Attack damage rounded to whole points, in `AttackKind::ALL` order.
    pub attacks: [i64; 3],
    /// Stamina and affinity rolls, when the front end asks for them.
    pub rolls: Option<(u32, f64)>,
}

impl FighterSummary {
    /// Summarise a fighter.
    #[must_use]
    pub fn of(fighter: &Fighter) -> Self {
        Self {
            status: fighter.status(),
            name: fighter.name().to_string(),
            alignment: fighter.alignment(),
            hit_points: fighter.hit_points(),
            attacks: AttackKind::ALL.map(|kind| display_damage(fighter.attack_damage(kind))),
            rolls: None,
        }
    }

    /// Include the stamina and affinity rolls.
    #[must_use]
    pub fn with_rolls(mut self, fighter: &Fighter) -> Self {
        self.rolls = Some((fighter.stamina(), fighter.affinity().unwrap_or(0.0)));
        self
    }
}

/// Attack damage as shown in listings: nearest whole point, halves to even.
#[must_use]
pub fn display_damage(damage: f64) -> i64 {
    damage.round_ties_even() as i64
}

/// Hit points without a trailing `.0` when whole.
pub fn format_hit_points(hit_points: f64) -> String {
    if hit_points.fract() == 0.0 {
        format!("{hit_points:.0}")
    } else {
        format!("{hit_points:.1}")
    }
}

impl std::fmt::Display for FighterSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "  {} {} ({}), HP: {}",
            self.status.glyph(),
            self.name,
            self.alignment,
            format_hit_points(self.hit_points)
        )?;
        write!(
            f,
            "     Attacks (damage): Mental ({}), Strong ({}), Fast ({})",
            self.attacks[0], self.attacks[1], self.attacks[2]
        )?;
        if let Some((stamina, affinity)) = self.rolls {
            write!(f, "\n     Rolls: stamina {stamina}, affinity {affinity:.2}")?;
        }
        Ok(())
    }
}

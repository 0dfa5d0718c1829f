//! A single combatant.
//!
//! ## Lifecycle
//!
//! 1. Created from a validated [`FighterProfile`]; the stamina roll is drawn
//!    here and never changes.
//! 2. Placed on a roster, which assigns the affinity factor once.
//! 3. Derived stats computed in strict order: attributes, hit points,
//!    attacks.
//! 4. During combat only [`Fighter::apply_damage`] and
//!    [`Fighter::refresh_status`] mutate it. A defeated fighter stays on its
//!    roster for display.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::alignment::Alignment;
use super::attack::{AttackKind, Attacks};
use super::attributes::Attributes;
use crate::core::RandomSource;

/// Highest stamina roll (inclusive).
pub const STAMINA_MAX: u32 = 10;

/// Divisor applied when deriving combat attributes.
pub const ATTRIBUTE_DIVISOR: f64 = 1.1;

/// Flat hit points every fighter gets on top of the stat-based pool.
pub const BASE_HIT_POINTS: f64 = 100.0;

/// Character data a fighter is built from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FighterProfile {
    pub name: String,
    pub alignment: Alignment,
    pub attributes: Attributes,
}

impl FighterProfile {
    pub fn new(name: impl Into<String>, alignment: Alignment, attributes: Attributes) -> Self {
        Self {
            name: name.into(),
            alignment,
            attributes,
        }
    }
}

/// Fighter status, derived from hit points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// No damage taken yet.
    Healthy,
    /// Damaged but still standing.
    Wounded,
    /// Hit points reached zero.
    Defeated,
}

impl Status {
    /// Glyph used in team listings.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Status::Healthy => "🟢",
            Status::Wounded => "🟡",
            Status::Defeated => "🔴",
        }
    }
}

/// Serialized fighter state that no fighter could have reached.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FighterStateError {
    #[error("{name}: stamina {stamina} is above {max}", max = STAMINA_MAX)]
    Stamina { name: String, stamina: u32 },

    #[error("{name}: affinity must be positive, got {affinity}")]
    Affinity { name: String, affinity: f64 },

    #[error("{name}: attacks are derived but no affinity is assigned")]
    MissingAffinity { name: String },

    #[error("{name}: hit points must be a non-negative number, got {hit_points}")]
    HitPoints { name: String, hit_points: f64 },
}

/// A combatant with raw and derived stats.
///
/// Deserializing checks the stored state against the fighter lifecycle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FighterState")]
pub struct Fighter {
    name: String,
    alignment: Alignment,
    /// Attributes as received. Never mutated.
    raw: Attributes,
    /// Attributes used in combat. Equal to `raw` until derived.
    attributes: Attributes,
    stamina: u32,
    affinity: Option<f64>,
    attacks: Option<Attacks>,
    hit_points: f64,
    status: Status,
}

#[derive(Deserialize)]
struct FighterState {
    name: String,
    alignment: Alignment,
    raw: Attributes,
    attributes: Attributes,
    stamina: u32,
    affinity: Option<f64>,
    attacks: Option<Attacks>,
    hit_points: f64,
    status: Status,
}

impl TryFrom<FighterState> for Fighter {
    type Error = FighterStateError;

    fn try_from(state: FighterState) -> Result<Self, Self::Error> {
        let FighterState {
            name,
            alignment,
            raw,
            attributes,
            stamina,
            affinity,
            attacks,
            hit_points,
            status,
        } = state;

        if stamina > STAMINA_MAX {
            return Err(FighterStateError::Stamina { name, stamina });
        }
        match affinity {
            Some(affinity) if !(affinity.is_finite() && affinity > 0.0) => {
                return Err(FighterStateError::Affinity { name, affinity });
            }
            None if attacks.is_some() => return Err(FighterStateError::MissingAffinity { name }),
            _ => {}
        }
        if !(hit_points.is_finite() && hit_points >= 0.0) {
            return Err(FighterStateError::HitPoints { name, hit_points });
        }

        Ok(Self {
            name,
            alignment,
            raw,
            attributes,
            stamina,
            affinity,
            attacks,
            hit_points,
            status,
        })
    }
}

impl Fighter {
    /// Create a fighter, drawing its stamina roll from `rng`.
    pub fn new(profile: FighterProfile, rng: &mut impl RandomSource) -> Self {
        let stamina = rng.gen_range_usize(0..STAMINA_MAX as usize + 1) as u32;
        Self::with_stamina(profile, stamina)
    }

    /// Create a fighter with a fixed stamina roll.
    ///
    /// Values above [`STAMINA_MAX`] are clamped.
    #[must_use]
    pub fn with_stamina(profile: FighterProfile, stamina: u32) -> Self {
        let FighterProfile {
            name,
            alignment,
            attributes,
        } = profile;

        Self {
            name,
            alignment,
            raw: attributes,
            attributes,
            stamina: stamina.min(STAMINA_MAX),
            affinity: None,
            attacks: None,
            hit_points: 0.0,
            status: Status::Healthy,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Attributes as received from the character data.
    #[must_use]
    pub fn raw_attributes(&self) -> &Attributes {
        &self.raw
    }

    /// Attributes used in combat.
    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    #[must_use]
    pub fn stamina(&self) -> u32 {
        self.stamina
    }

    /// Affinity factor, once the fighter has been placed on a roster.
    #[must_use]
    pub fn affinity(&self) -> Option<f64> {
        self.affinity
    }

    /// Derived attacks, once computed.
    #[must_use]
    pub fn attacks(&self) -> Option<&Attacks> {
        self.attacks.as_ref()
    }

    /// Damage of one attack kind. Zero before attacks are derived.
    #[must_use]
    pub fn attack_damage(&self, kind: AttackKind) -> f64 {
        self.attacks.map_or(0.0, |attacks| attacks.get(kind))
    }

    #[must_use]
    pub fn hit_points(&self) -> f64 {
        self.hit_points
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// A fighter is alive while it has positive hit points.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.hit_points > 0.0
    }

    /// Assign the affinity factor.
    ///
    /// The factor is set once; later calls are ignored.
    pub fn assign_affinity(&mut self, factor: f64) {
        if let Some(current) = self.affinity {
            tracing::warn!(
                fighter = %self.name,
                current,
                rejected = factor,
                "affinity already assigned"
            );
            return;
        }
        debug_assert!(factor > 0.0, "affinity must be positive");
        self.affinity = Some(factor);
    }

    fn affinity_or_unit(&self) -> f64 {
        debug_assert!(self.affinity.is_some(), "affinity must be assigned before deriving stats");
        self.affinity.unwrap_or(1.0)
    }

    /// Derive combat attributes: `floor((2 * raw + stamina) / 1.1 * affinity)`.
    ///
    /// Always computed from the raw attributes, so repeating it is harmless.
    pub fn derive_attributes(&mut self) {
        let stamina = f64::from(self.stamina);
        let affinity = self.affinity_or_unit();

        self.attributes = self.raw.map(|_, raw| {
            ((2.0 * f64::from(raw) + stamina) / ATTRIBUTE_DIVISOR * affinity).floor() as u32
        });
    }

    /// Derive hit points from the combat attributes:
    /// `floor((strength * 0.8 + durability * 0.7 + power) / 2 * (1 + stamina / 10)) + 100`.
    pub fn derive_hit_points(&mut self) {
        let a = &self.attributes;
        let pool = f64::from(a.strength) * 0.8 + f64::from(a.durability) * 0.7 + f64::from(a.power);
        let stamina_bonus = 1.0 + f64::from(self.stamina) / 10.0;

        self.hit_points = (pool / 2.0 * stamina_bonus).floor() + BASE_HIT_POINTS;
    }

    /// Derive the three attack values. Does nothing if already derived.
    pub fn derive_attacks(&mut self) {
        if self.attacks.is_some() {
            return;
        }
        self.attacks = Some(Attacks::compute(&self.attributes, self.affinity_or_unit()));
    }

    /// Run all three derivation steps in order.
    pub fn derive_all(&mut self) {
        self.derive_attributes();
        self.derive_hit_points();
        self.derive_attacks();
    }

    /// Subtract `amount` from hit points, clamping at zero.
    pub fn apply_damage(&mut self, amount: f64) {
        debug_assert!(amount >= 0.0, "damage must be non-negative");
        self.hit_points = (self.hit_points - amount).max(0.0);
    }

    /// Update status after damage: wounded while standing, defeated at zero.
    pub fn refresh_status(&mut self) {
        self.status = if self.is_alive() {
            Status::Wounded
        } else {
            Status::Defeated
        };
    }

    #[cfg(test)]
    pub(crate) fn set_hit_points(&mut self, hit_points: f64) {
        self.hit_points = hit_points;
    }
}

//! Attack kinds and their damage formulas.
//!
//! Each kind is a weighted sum of three derived attributes, scaled by the
//! fighter's affinity factor:
//!
//! | Kind   | Weights                                   |
//! |--------|-------------------------------------------|
//! | Mental | intelligence 0.7, speed 0.2, combat 0.1   |
//! | Strong | strength 0.6, power 0.2, combat 0.2       |
//! | Fast   | speed 0.55, durability 0.25, strength 0.2 |

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::attributes::{Attribute, Attributes};

/// One of the three attack types a fighter can use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttackKind {
    Mental,
    Strong,
    Fast,
}

impl AttackKind {
    /// All kinds, in display order.
    pub const ALL: [AttackKind; 3] = [AttackKind::Mental, AttackKind::Strong, AttackKind::Fast];

    /// Attributes and weights feeding this attack.
    #[must_use]
    pub const fn weights(self) -> [(Attribute, f64); 3] {
        match self {
            AttackKind::Mental => [
                (Attribute::Intelligence, 0.7),
                (Attribute::Speed, 0.2),
                (Attribute::Combat, 0.1),
            ],
            AttackKind::Strong => [
                (Attribute::Strength, 0.6),
                (Attribute::Power, 0.2),
                (Attribute::Combat, 0.2),
            ],
            AttackKind::Fast => [
                (Attribute::Speed, 0.55),
                (Attribute::Durability, 0.25),
                (Attribute::Strength, 0.2),
            ],
        }
    }

    /// Damage of this attack for the given attributes and affinity factor.
    #[must_use]
    pub fn damage(self, attributes: &Attributes, affinity: f64) -> f64 {
        let weighted: f64 = self
            .weights()
            .iter()
            .map(|&(attribute, weight)| f64::from(attributes[attribute]) * weight)
            .sum();
        weighted * affinity
    }

    /// Capitalised name for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            AttackKind::Mental => "Mental",
            AttackKind::Strong => "Strong",
            AttackKind::Fast => "Fast",
        }
    }

    const fn index(self) -> usize {
        match self {
            AttackKind::Mental => 0,
            AttackKind::Strong => 1,
            AttackKind::Fast => 2,
        }
    }
}

impl std::fmt::Display for AttackKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Damage values for all three attack kinds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Attacks([f64; 3]);

impl Attacks {
    /// Compute every attack for the given attributes and affinity factor.
    #[must_use]
    pub fn compute(attributes: &Attributes, affinity: f64) -> Self {
        Self(AttackKind::ALL.map(|kind| kind.damage(attributes, affinity)))
    }

    /// Damage of a single attack kind.
    #[must_use]
    pub fn get(&self, kind: AttackKind) -> f64 {
        self.0[kind.index()]
    }

    /// Iterate over (kind, damage) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (AttackKind, f64)> + '_ {
        AttackKind::ALL.into_iter().map(move |k| (k, self.get(k)))
    }

    /// Number of attack values (always three).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl Index<AttackKind> for Attacks {
    type Output = f64;

    fn index(&self, kind: AttackKind) -> &Self::Output {
        &self.0[kind.index()]
    }
}

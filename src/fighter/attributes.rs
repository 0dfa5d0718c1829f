//! The six combat attributes of a character.
//!
//! Characters arrive with raw attribute values (roughly 0-100). Once placed
//! on a roster they get a second, derived set that scales with their stamina
//! roll and affinity factor. Both sets share the `Attributes` type.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Key for one of the six combat attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attribute {
    Combat,
    Durability,
    Intelligence,
    Power,
    Speed,
    Strength,
}

impl Attribute {
    /// All attributes, in data order.
    pub const ALL: [Attribute; 6] = [
        Attribute::Combat,
        Attribute::Durability,
        Attribute::Intelligence,
        Attribute::Power,
        Attribute::Speed,
        Attribute::Strength,
    ];

    /// Lowercase field name used by the character data.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Attribute::Combat => "combat",
            Attribute::Durability => "durability",
            Attribute::Intelligence => "intelligence",
            Attribute::Power => "power",
            Attribute::Speed => "speed",
            Attribute::Strength => "strength",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A full set of combat attribute values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attributes {
    pub combat: u32,
    pub durability: u32,
    pub intelligence: u32,
    pub power: u32,
    pub speed: u32,
    pub strength: u32,
}

impl Attributes {
    /// Get a single attribute value.
    #[must_use]
    pub const fn get(&self, attribute: Attribute) -> u32 {
        match attribute {
            Attribute::Combat => self.combat,
            Attribute::Durability => self.durability,
            Attribute::Intelligence => self.intelligence,
            Attribute::Power => self.power,
            Attribute::Speed => self.speed,
            Attribute::Strength => self.strength,
        }
    }

    /// Build a new set by transforming every attribute.
    #[must_use]
    pub fn map(&self, mut f: impl FnMut(Attribute, u32) -> u32) -> Self {
        Self {
            combat: f(Attribute::Combat, self.combat),
            durability: f(Attribute::Durability, self.durability),
            intelligence: f(Attribute::Intelligence, self.intelligence),
            power: f(Attribute::Power, self.power),
            speed: f(Attribute::Speed, self.speed),
            strength: f(Attribute::Strength, self.strength),
        }
    }

    /// Iterate over (Attribute, value) pairs in data order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, u32)> + '_ {
        Attribute::ALL.into_iter().map(move |a| (a, self.get(a)))
    }
}

impl Index<Attribute> for Attributes {
    type Output = u32;

    fn index(&self, attribute: Attribute) -> &Self::Output {
        match attribute {
            Attribute::Combat => &self.combat,
            Attribute::Durability => &self.durability,
            Attribute::Intelligence => &self.intelligence,
            Attribute::Power => &self.power,
            Attribute::Speed => &self.speed,
            Attribute::Strength => &self.strength,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Attributes {
        Attributes {
            combat: 1,
            durability: 2,
            intelligence: 3,
            power: 4,
            speed: 5,
            strength: 6,
        }
    }

    #[test]
    fn test_get_and_index_agree() {
        let attrs = sample();
        for attribute in Attribute::ALL {
            assert_eq!(attrs.get(attribute), attrs[attribute]);
        }
        assert_eq!(attrs[Attribute::Speed], 5);
    }

    #[test]
    fn test_map() {
        let doubled = sample().map(|_, v| v * 2);
        assert_eq!(doubled.combat, 2);
        assert_eq!(doubled.strength, 12);

        let only_power = sample().map(|a, v| if a == Attribute::Power { v } else { 0 });
        assert_eq!(only_power.iter().map(|(_, v)| v).sum::<u32>(), 4);
    }

    #[test]
    fn test_iter_order() {
        let names: Vec<_> = sample().iter().map(|(a, _)| a.name()).collect();
        assert_eq!(
            names,
            vec!["combat", "durability", "intelligence", "power", "speed", "strength"]
        );
    }
}

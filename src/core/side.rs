//! Battle sides and per-side data storage.
//!
//! ## Side
//!
//! A battle always has exactly two sides: the human-controlled one and the
//! automated one.
//!
//! ## SideMap
//!
//! Per-side storage with O(1) access, indexable by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Human-controlled side. Always moves first.
    Player,
    /// Automated side, acting uniformly at random.
    Cpu,
}

impl Side {
    /// Both sides, in turn order.
    pub const ALL: [Side; 2] = [Side::Player, Side::Cpu];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Cpu,
            Side::Cpu => Side::Player,
        }
    }

    #[must_use]
    const fn index(self) -> usize {
        match self {
            Side::Player => 0,
            Side::Cpu => 1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Cpu => write!(f, "cpu"),
        }
    }
}

/// Per-side data storage.
///
/// ## Example
///
/// ```
/// use hero_clash::core::{Side, SideMap};
///
/// let mut turns: SideMap<u32> = SideMap::new(|_| 0);
/// turns[Side::Cpu] += 1;
/// assert_eq!(turns[Side::Player], 0);
/// assert_eq!(turns[Side::Cpu], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(mut factory: impl FnMut(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Player), factory(Side::Cpu)],
        }
    }

    /// Create a map from explicit player and cpu values.
    pub fn from_pair(player: T, cpu: T) -> Self {
        Self { data: [player, cpu] }
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Split into (player, cpu) values.
    pub fn into_pair(self) -> (T, T) {
        let [player, cpu] = self.data;
        (player, cpu)
    }

    /// Iterate over (Side, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Side::Player.opponent(), Side::Cpu);
        assert_eq!(Side::Cpu.opponent(), Side::Player);
        assert_eq!(format!("{}", Side::Player), "player");
    }

    #[test]
    fn test_side_map_new() {
        let map = SideMap::new(|side| side == Side::Cpu);
        assert!(!map[Side::Player]);
        assert!(map[Side::Cpu]);
    }

    #[test]
    fn test_side_map_iter_order() {
        let map = SideMap::from_pair("first", "second");
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Side::Player, &"first"), (Side::Cpu, &"second")]);
        assert_eq!(map.into_pair(), ("first", "second"));
    }

    #[test]
    fn test_side_serialization() {
        let json = serde_json::to_string(&Side::Cpu).unwrap();
        assert_eq!(json, "\"cpu\"");
        let side: Side = serde_json::from_str("\"player\"").unwrap();
        assert_eq!(side, Side::Player);
    }
}

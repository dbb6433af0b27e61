//! The two sides of a War game and per-side data storage.
//!
//! ## Side
//!
//! A game is always the user against the computer. Round outcomes are stated
//! from the user's point of view.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One side of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    User,
    Computer,
}

impl Side {
    /// Both sides, user first.
    pub const ALL: [Side; 2] = [Side::User, Side::Computer];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::User => Side::Computer,
            Side::Computer => Side::User,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::User => write!(f, "user"),
            Side::Computer => write!(f, "computer"),
        }
    }
}

/// Per-side data storage.
///
/// ```
/// use war_cards::core::{Side, SideMap};
///
/// let mut wins: SideMap<u32> = SideMap::default();
/// wins[Side::User] += 1;
/// assert_eq!(wins[Side::User], 1);
/// assert_eq!(wins[Side::Computer], 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    user: T,
    computer: T,
}

impl<T> SideMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            user: factory(Side::User),
            computer: factory(Side::Computer),
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::User => &self.user,
            Side::Computer => &self.computer,
        }
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::User => &mut self.user,
            Side::Computer => &mut self.computer,
        }
    }

    /// Iterate over (Side, &T) pairs, user first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().map(move |side| (side, self.get(side)))
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

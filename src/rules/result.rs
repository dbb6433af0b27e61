//! Result of a completed game.

use serde::{Deserialize, Serialize};

use crate::core::{Side, SideMap};

/// Who won a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    /// Single winner.
    Winner(Side),
    /// Equal number of round wins.
    Draw,
}

impl GameResult {
    /// Decide a game from each side's round wins.
    #[must_use]
    pub fn from_wins(wins: &SideMap<u32>) -> Self {
        let user = wins[Side::User];
        let computer = wins[Side::Computer];
        match user.cmp(&computer) {
            std::cmp::Ordering::Greater => GameResult::Winner(Side::User),
            std::cmp::Ordering::Less => GameResult::Winner(Side::Computer),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, GameResult::Winner(s) if *s == side)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(side) => write!(f, "{side} wins"),
            GameResult::Draw => write!(f, "draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_winner() {
        let result = GameResult::Winner(Side::Computer);
        assert!(!result.is_winner(Side::User));
        assert!(result.is_winner(Side::Computer));

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(Side::User));
        assert!(!draw.is_winner(Side::Computer));
    }

    #[test]
    fn test_from_wins() {
        let mut wins: SideMap<u32> = SideMap::default();
        assert_eq!(GameResult::from_wins(&wins), GameResult::Draw);

        wins[Side::User] = 12;
        wins[Side::Computer] = 9;
        assert_eq!(GameResult::from_wins(&wins), GameResult::Winner(Side::User));

        wins[Side::Computer] = 13;
        assert_eq!(GameResult::from_wins(&wins), GameResult::Winner(Side::Computer));
    }

    #[test]
    fn test_display() {
        assert_eq!(GameResult::Winner(Side::User).to_string(), "user wins");
        assert_eq!(GameResult::Draw.to_string(), "draw");
    }
}

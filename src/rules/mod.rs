//! Game rules.
//!
//! - `round`: resolve a single round between a user card and a computer card
//! - `result`: decide a finished game from the round tallies
//!
//! Both are pure functions of their inputs; game progression lives in
//! `games::war`.

pub mod round;
pub mod result;

pub use round::{resolve_round, RoundOutcome};
pub use result::GameResult;

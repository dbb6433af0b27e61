//! Core types: errors, sides, RNG, configuration.
//!
//! Nothing here knows about card values; the card model lives in `cards`.

pub mod error;
pub mod side;
pub mod rng;
pub mod config;

pub use error::{Result, WarError};
pub use side::{Side, SideMap};
pub use rng::GameRng;
pub use config::{WarConfig, MAX_ROUNDS};

//! Playable games built on the card model and rules.

pub mod war;

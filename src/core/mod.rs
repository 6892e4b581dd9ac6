//! Core engine types: RNG, configuration, errors.
//!
//! Nothing here knows about card attributes; the game and session layers
//! are built on top.

pub mod rng;
pub mod config;
pub mod error;

pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, ReplacementPolicy, SET_SIZE};
pub use error::ConfigError;

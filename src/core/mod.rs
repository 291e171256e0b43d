//! Core types: lane configuration, frames, RNG.
//!
//! These are the building blocks the rules and the game state machine are
//! written against.

pub mod config;
pub mod frame;
pub mod rng;

pub use config::{ConfigError, LaneConfig, DEFAULT_FRAMES, DEFAULT_PINS};
pub use frame::Frame;
pub use rng::GameRng;

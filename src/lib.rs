//! # tenpin
//!
//! A ten-pin bowling game state machine and scoring engine.
//!
//! Rolls are submitted one at a time. Each is checked against the physical
//! rules (pin counts, frame structure, final-frame bonus rolls) before it is
//! accepted, and the official score is available once the final frame is
//! complete. A best-effort running score is available at any point.
//!
//! ## Architecture
//!
//! - **Frame stack + open frame**: regular frames are closed onto a stack;
//!   the final frame stays open for the rest of the game.
//!
//! - **Backward fold**: scoring walks frames last to first, carrying the two
//!   look-ahead rolls strike and spare bonuses need.
//!
//! - **Replay, not snapshots**: a game is persisted as its rolls and
//!   restored by feeding them back through `Game::roll`.
//!
//! ## Modules
//!
//! - `core`: Lane configuration, frames, RNG
//! - `rules`: Errors, pin-count validation, scoring fold
//! - `game`: The `Game` state machine and `RollLog`
//! - `sim`: Seeded bowler that plays random legal games
//!
//! ```
//! use tenpin::{Game, RunningScore};
//!
//! let mut game = Game::new();
//! game.roll(10).unwrap();
//! assert_eq!(game.current_score(), RunningScore::Pending);
//!
//! game.roll(5).unwrap();
//! game.roll(3).unwrap();
//! assert_eq!(game.current_score(), RunningScore::Score(26));
//! ```

pub mod core;
pub mod rules;
pub mod game;
pub mod sim;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{ConfigError, Frame, GameRng, LaneConfig};

pub use crate::rules::{BowlingError, RunningScore};

pub use crate::game::{Game, RollLog, RollLogError};

pub use crate::sim::{Bowler, BowlerConfig};

//! The bowling game: state machine plus its replayable log.

mod bowling;
mod log;

pub use bowling::Game;
pub use log::{RollLog, RollLogError};

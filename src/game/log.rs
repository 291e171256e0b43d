//! Replayable record of a game.
//!
//! A game is persisted as its lane config plus the rolls bowled, never as
//! frame state. Restoring means replaying every roll through `Game::roll`,
//! so a log that decodes can still be rejected by the rules.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{ConfigError, LaneConfig};
use crate::rules::BowlingError;

use super::bowling::Game;

/// Failure to restore a game from a log.
#[derive(Debug, Error)]
pub enum RollLogError {
    /// Bytes are not a valid encoded log.
    #[error("failed to decode roll log: {0}")]
    Codec(#[from] bincode::Error),

    /// The logged lane cannot be bowled on.
    #[error("roll log has an invalid lane: {0}")]
    Config(#[from] ConfigError),

    /// A logged roll was rejected on replay.
    #[error("roll log does not replay: {0}")]
    Replay(#[from] BowlingError),
}

/// Lane config plus rolls in the order bowled.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollLog {
    pub config: LaneConfig,
    pub rolls: Vec<u8>,
}

impl RollLog {
    /// Capture a game's rolls.
    #[must_use]
    pub fn from_game(game: &Game) -> Self {
        Self {
            config: *game.config(),
            rolls: game.rolls(),
        }
    }

    /// Rebuild the game by replaying every roll.
    pub fn replay(&self) -> Result<Game, RollLogError> {
        self.config.validate()?;
        Ok(Game::replay(self.config, self.rolls.iter().copied())?)
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, RollLogError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a log produced by `to_bytes`.
    ///
    /// A log whose lane has no frames or no pins fails to decode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RollLogError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl From<&Game> for RollLog {
    fn from(game: &Game) -> Self {
        Self::from_game(game)
    }
}

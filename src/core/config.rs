//! Lane configuration.
//!
//! A `LaneConfig` fixes the two numbers every bowling rule is written in
//! terms of: how many frames make up a game and how many pins stand on the
//! lane at the start of a frame. The default is the regulation ten-pin game.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Frames in a regulation game.
pub const DEFAULT_FRAMES: u8 = 10;

/// Pins racked at the start of a regulation frame.
pub const DEFAULT_PINS: u8 = 10;

/// A lane that no game can be bowled on.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Must have at least 1 frame")]
    ZeroFrames,

    #[error("Must have at least 1 pin")]
    ZeroPins,
}

/// Game shape: frame count and pins per rack.
///
/// Deserialization goes through `validate`, so a decoded config is always
/// bowlable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawLaneConfig")]
pub struct LaneConfig {
    /// Number of frames in a game. The last one is the final frame.
    pub frames: u8,

    /// Pins standing at the start of each rack.
    pub pins: u8,
}

/// Unchecked wire form of `LaneConfig`.
#[derive(Deserialize)]
struct RawLaneConfig {
    frames: u8,
    pins: u8,
}

impl TryFrom<RawLaneConfig> for LaneConfig {
    type Error = ConfigError;

    fn try_from(raw: RawLaneConfig) -> Result<Self, Self::Error> {
        Self::try_new(raw.frames, raw.pins)
    }
}

impl Default for LaneConfig {
    fn default() -> Self {
        Self {
            frames: DEFAULT_FRAMES,
            pins: DEFAULT_PINS,
        }
    }
}

impl LaneConfig {
    /// Create the regulation configuration (10 frames, 10 pins).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration, rejecting an empty game or an empty rack.
    pub fn try_new(frames: u8, pins: u8) -> Result<Self, ConfigError> {
        let config = Self { frames, pins };
        config.validate()?;
        Ok(config)
    }

    /// Check that at least one frame is bowled with at least one pin.
    ///
    /// The fields are public, so anything built by hand should pass through
    /// here before a game is played on it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frames == 0 {
            return Err(ConfigError::ZeroFrames);
        }
        if self.pins == 0 {
            return Err(ConfigError::ZeroPins);
        }
        Ok(())
    }

    /// Set the number of frames.
    #[must_use]
    pub fn with_frames(mut self, frames: u8) -> Self {
        assert!(frames > 0, "Must have at least 1 frame");
        self.frames = frames;
        self
    }

    /// Set the number of pins per rack.
    #[must_use]
    pub fn with_pins(mut self, pins: u8) -> Self {
        assert!(pins > 0, "Must have at least 1 pin");
        self.pins = pins;
        self
    }

    /// Number of frames that are closed onto the frame stack before the
    /// final frame begins.
    #[must_use]
    pub const fn regular_frames(&self) -> usize {
        (self.frames as usize).saturating_sub(1)
    }

    /// Best possible score: every roll a strike.
    #[must_use]
    pub const fn perfect_score(&self) -> u32 {
        self.pins as u32 * 3 * self.frames as u32
    }
}

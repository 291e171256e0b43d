//! Errors raised by the bowling state machine.

use thiserror::Error;

/// Rejected roll or premature score request.
///
/// Every variant is a synchronous validation failure. A game that returns one
/// of these from `roll` is left exactly as it was before the call.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum BowlingError {
    /// Pin count below zero.
    #[error("Negative roll is invalid (got {pins})")]
    NegativeRoll { pins: i32 },

    /// Pin count above the rack size.
    #[error("Pin count exceeds pins on the lane (got {pins}, max {max})")]
    RollExceedsLane { pins: i32, max: u8 },

    /// Rolls within one rack add up to more pins than were standing.
    #[error("Pin count exceeds pins on the lane (frame total {total}, max {max})")]
    FrameSumExceedsLane { total: u32, max: u8 },

    /// The final frame is complete.
    #[error("Cannot roll after game is over")]
    GameOver,

    /// `score` requested before the final frame is complete.
    #[error("Score cannot be taken until the end of the game")]
    GameNotFinished,
}

impl BowlingError {
    /// A single roll outside `0..=pins`.
    #[must_use]
    pub fn is_invalid_roll(&self) -> bool {
        matches!(self, Self::NegativeRoll { .. } | Self::RollExceedsLane { .. })
    }

    /// A frame whose rolls do not fit in one rack.
    #[must_use]
    pub fn is_invalid_frame(&self) -> bool {
        matches!(self, Self::FrameSumExceedsLane { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            BowlingError::NegativeRoll { pins: -1 }.to_string(),
            "Negative roll is invalid (got -1)"
        );
        assert_eq!(
            BowlingError::RollExceedsLane { pins: 11, max: 10 }.to_string(),
            "Pin count exceeds pins on the lane (got 11, max 10)"
        );
        assert_eq!(
            BowlingError::GameOver.to_string(),
            "Cannot roll after game is over"
        );
        assert_eq!(
            BowlingError::GameNotFinished.to_string(),
            "Score cannot be taken until the end of the game"
        );
    }

    #[test]
    fn test_families() {
        assert!(BowlingError::NegativeRoll { pins: -3 }.is_invalid_roll());
        assert!(BowlingError::RollExceedsLane { pins: 12, max: 10 }.is_invalid_roll());
        assert!(!BowlingError::GameOver.is_invalid_roll());

        let frame = BowlingError::FrameSumExceedsLane { total: 11, max: 10 };
        assert!(frame.is_invalid_frame());
        assert!(!frame.is_invalid_roll());
    }
}

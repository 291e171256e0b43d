//! Pin-count validation and the final-frame completion rule.
//!
//! - `check_roll`: a single roll must be within `0..=pins`
//! - `check_frame`: a closed two-roll regular frame fits in one rack
//! - `check_final_frame`: after a strike, the two bonus rolls share a rack
//!   unless the first of them is itself a strike
//! - `is_final_frame_finished`: the bonus-roll table for the final frame

use crate::core::{Frame, LaneConfig};

use super::error::BowlingError;

/// Validate a raw pin count against the lane.
pub fn check_roll(pins: i32, config: &LaneConfig) -> Result<u8, BowlingError> {
    if pins < 0 {
        return Err(BowlingError::NegativeRoll { pins });
    }
    if pins > i32::from(config.pins) {
        return Err(BowlingError::RollExceedsLane {
            pins,
            max: config.pins,
        });
    }
    // Bounded by config.pins above
    Ok(pins as u8)
}

/// Validate a regular frame that is about to close.
///
/// Only a two-roll frame can overflow the rack; a strike closes after one.
pub fn check_frame(frame: &Frame, config: &LaneConfig) -> Result<(), BowlingError> {
    if frame.len() == 2 && frame.pin_total() > u32::from(config.pins) {
        return Err(BowlingError::FrameSumExceedsLane {
            total: frame.pin_total(),
            max: config.pins,
        });
    }
    Ok(())
}

/// Validate the final frame after a roll has been appended.
///
/// The only cross-roll constraint: strike, non-strike, then a third roll
/// that would need more pins than the second left standing.
pub fn check_final_frame(frame: &Frame, config: &LaneConfig) -> Result<(), BowlingError> {
    if let (3, Some(second), Some(third)) = (frame.len(), frame.second(), frame.third()) {
        let total = u32::from(second) + u32::from(third);
        if frame.is_strike(config.pins) && second != config.pins && total > u32::from(config.pins) {
            return Err(BowlingError::FrameSumExceedsLane {
                total,
                max: config.pins,
            });
        }
    }
    Ok(())
}

/// Whether the final frame has all the rolls it is owed.
///
/// | rolls | opened with strike / spare | finished |
/// |-------|----------------------------|----------|
/// | 0, 1  | -                          | no       |
/// | 2     | yes                        | no       |
/// | 2     | no                         | yes      |
/// | 3     | any                        | yes      |
#[must_use]
pub fn is_final_frame_finished(frame: &Frame, config: &LaneConfig) -> bool {
    match frame.len() {
        0 | 1 => false,
        2 => !(frame.is_strike(config.pins) || frame.is_spare(config.pins)),
        _ => true,
    }
}

/// Largest roll physically possible next in `frame`.
///
/// A fresh rack is set after a strike or spare; otherwise only the pins left
/// by the previous roll are still standing.
///
/// This is the physical limit, not the rules limit. In the final frame a
/// second roll after a non-strike is only bounded by the rack, so `roll`
/// accepts more than this reports. Do not use it as validation.
#[must_use]
pub fn pins_standing(frame: &Frame, is_final: bool, config: &LaneConfig) -> u8 {
    let pins = config.pins;
    match (frame.len(), frame.first(), frame.second()) {
        (0, _, _) => pins,
        (1, Some(first), _) if first == pins => pins,
        (1, Some(first), _) => pins - first,
        (2, Some(first), Some(second)) if is_final && first == pins && second != pins => {
            pins - second
        }
        _ => pins,
    }
}

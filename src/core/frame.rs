//! Frame representation: an ordered run of 1-3 rolls.
//!
//! Regular frames hold one roll (a strike) or two. The final frame holds two,
//! or three when it opens with a strike or a spare. Strike and spare checks
//! take the rack size so they work for any `LaneConfig`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Rolls knocked down in a single frame.
///
/// ## Example
///
/// ```
/// use tenpin::core::Frame;
///
/// let strike = Frame::from_rolls(&[10]);
/// assert!(strike.is_strike(10));
///
/// let spare = Frame::from_rolls(&[6, 4]);
/// assert!(spare.is_spare(10));
/// assert!(!spare.is_strike(10));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Frame {
    /// Pin counts in roll order.
    /// SmallVec keeps the at-most-three rolls inline.
    rolls: SmallVec<[u8; 3]>,
}

impl Frame {
    /// Create an empty frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a frame holding the given rolls.
    #[must_use]
    pub fn from_rolls(rolls: &[u8]) -> Self {
        Self {
            rolls: SmallVec::from_slice(rolls),
        }
    }

    /// Append a roll.
    pub fn push(&mut self, pins: u8) {
        self.rolls.push(pins);
    }

    /// Number of rolls so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rolls.len()
    }

    /// Check if no roll has been made in this frame.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }

    /// Get the rolls as a slice.
    #[must_use]
    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    /// Get a roll by position (0-based).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.rolls.get(index).copied()
    }

    /// First roll, if bowled.
    #[must_use]
    pub fn first(&self) -> Option<u8> {
        self.get(0)
    }

    /// Second roll, if bowled.
    #[must_use]
    pub fn second(&self) -> Option<u8> {
        self.get(1)
    }

    /// Third roll (final frame bonus), if bowled.
    #[must_use]
    pub fn third(&self) -> Option<u8> {
        self.get(2)
    }

    /// First roll knocked down the whole rack.
    #[must_use]
    pub fn is_strike(&self, pins: u8) -> bool {
        self.first() == Some(pins)
    }

    /// First two rolls together knocked down the whole rack.
    ///
    /// A strike followed by a gutter ball is also reported as a spare here;
    /// callers check `is_strike` first.
    #[must_use]
    pub fn is_spare(&self, pins: u8) -> bool {
        match (self.first(), self.second()) {
            (Some(a), Some(b)) => u16::from(a) + u16::from(b) == u16::from(pins),
            _ => false,
        }
    }

    /// Sum of every roll in the frame.
    #[must_use]
    pub fn pin_total(&self) -> u32 {
        self.rolls.iter().map(|&r| u32::from(r)).sum()
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, roll) in self.rolls.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", roll)?;
        }
        write!(f, "]")
    }
}

//! Backward scoring fold.
//!
//! Frames are scored from last to first. Two look-ahead rolls are carried
//! backward: the first and second rolls bowled after the frame being scored.
//! A strike frame has no second roll of its own, so stepping over one shifts
//! the carried `next_roll` into the `next_roll_of_next_roll` slot.
//!
//! Missing look-ahead rolls are `None` and poison the whole fold, which is
//! how an in-progress game reports `RunningScore::Pending`.

use serde::{Deserialize, Serialize};

use crate::core::Frame;

/// Best-effort score of a game that may still be in progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RunningScore {
    /// Some completed frame is still waiting on a bonus roll.
    Pending,
    /// Running total of all scoreable frames.
    Score(u32),
}

impl RunningScore {
    /// Marker shown on a scoresheet for a frame that cannot be totalled yet.
    pub const PENDING_MARKER: &'static str = "xx";

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Numeric score, if one is known.
    #[must_use]
    pub fn value(&self) -> Option<u32> {
        match self {
            Self::Pending => None,
            Self::Score(score) => Some(*score),
        }
    }
}

impl std::fmt::Display for RunningScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "{}", Self::PENDING_MARKER),
            Self::Score(score) => write!(f, "{}", score),
        }
    }
}

/// The two rolls bowled after the frame currently being scored.
#[derive(Clone, Copy, Debug)]
struct Lookahead {
    next_roll: Option<u8>,
    next_roll_of_next_roll: Option<u8>,
}

impl Lookahead {
    fn seeded_from(frame: &Frame) -> Self {
        Self {
            next_roll: frame.first(),
            next_roll_of_next_roll: frame.second(),
        }
    }

    /// Step one frame earlier.
    fn behind(self, frame: &Frame, pins: u8) -> Self {
        let next_roll_of_next_roll = if frame.is_strike(pins) {
            self.next_roll
        } else {
            frame.second()
        };
        Self {
            next_roll: frame.first(),
            next_roll_of_next_roll,
        }
    }
}

/// Contribution of one frame given the rolls that follow it.
///
/// Strike: rack + next two rolls. Spare: rack + next roll. Open: its rolls.
#[must_use]
pub fn frame_score(
    frame: &Frame,
    next_roll: Option<u8>,
    next_roll_of_next_roll: Option<u8>,
    pins: u8,
) -> Option<u32> {
    let rack = u32::from(pins);
    if frame.is_strike(pins) {
        Some(rack + u32::from(next_roll?) + u32::from(next_roll_of_next_roll?))
    } else if frame.is_spare(pins) {
        Some(rack + u32::from(next_roll?))
    } else {
        Some(u32::from(frame.first()?) + u32::from(frame.second()?))
    }
}

/// Contribution of the final frame, scored from its own rolls.
///
/// Its bonus rolls are passed third-then-second: a spare reads the third roll
/// as its single bonus, a strike adds both.
#[must_use]
pub fn final_frame_score(frame: &Frame, pins: u8) -> Option<u32> {
    frame_score(frame, frame.third(), frame.second(), pins)
}

/// Fold `completed` frames backward in front of `tail`.
///
/// `tail` seeds the look-ahead and contributes `tail_score`. Returns the
/// per-frame contributions in frame order (`completed.len() + 1` entries),
/// or `None` if any frame needs a roll that has not been bowled.
#[must_use]
pub fn fold_frames(completed: &[Frame], tail: &Frame, tail_score: u32, pins: u8) -> Option<Vec<u32>> {
    let mut scores = Vec::with_capacity(completed.len() + 1);
    scores.push(tail_score);

    let mut lookahead = Lookahead::seeded_from(tail);
    for frame in completed.iter().rev() {
        scores.push(frame_score(
            frame,
            lookahead.next_roll,
            lookahead.next_roll_of_next_roll,
            pins,
        )?);
        lookahead = lookahead.behind(frame, pins);
    }

    scores.reverse();
    Some(scores)
}

/// Per-frame contributions of a finished game.
#[must_use]
pub fn score_frames(completed: &[Frame], final_frame: &Frame, pins: u8) -> Option<Vec<u32>> {
    let final_score = final_frame_score(final_frame, pins)?;
    fold_frames(completed, final_frame, final_score, pins)
}

/// Running total of a game in progress.
///
/// The open frame contributes nothing; a half-bowled frame makes the whole
/// total pending.
#[must_use]
pub fn running_score(completed: &[Frame], current: &Frame, pins: u8) -> RunningScore {
    if current.len() == 1 {
        return RunningScore::Pending;
    }
    match fold_frames(completed, current, 0, pins) {
        Some(scores) => RunningScore::Score(scores.iter().sum()),
        None => RunningScore::Pending,
    }
}

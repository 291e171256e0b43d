//! Bowling rules.
//!
//! - `error`: what a rejected roll or premature score request reports
//! - `validate`: pin-count checks and the final-frame completion rule
//! - `scoring`: the backward fold that turns frames into a score
//!
//! Everything here is a pure function of frames and a `LaneConfig`; the
//! `game` module owns the state these are applied to.

pub mod error;
pub mod scoring;
pub mod validate;

pub use error::BowlingError;
pub use scoring::{final_frame_score, fold_frames, frame_score, running_score, score_frames, RunningScore};
pub use validate::{check_final_frame, check_frame, check_roll, is_final_frame_finished, pins_standing};

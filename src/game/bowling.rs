//! Bowling game state machine.

use tracing::{debug, info, trace, warn};

use crate::core::{Frame, LaneConfig};
use crate::rules::{
    check_final_frame, check_frame, check_roll, is_final_frame_finished, pins_standing,
    running_score, score_frames, BowlingError, RunningScore,
};

/// One bowler's game, fed a roll at a time.
///
/// Regular frames are pushed onto the frame stack as they close. The final
/// frame never leaves `current_frame`; once it has all its bonus rolls the
/// game is finished and further rolls are rejected.
///
/// ## Example
///
/// ```
/// use tenpin::Game;
///
/// let mut game = Game::new();
/// for _ in 0..12 {
///     game.roll(10).unwrap();
/// }
/// assert!(game.is_finished());
/// assert_eq!(game.score(), Ok(300));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Game {
    config: LaneConfig,
    /// Closed regular frames, oldest first.
    frame_stack: Vec<Frame>,
    /// Frame being bowled. Holds the final frame once the stack is full.
    current_frame: Frame,
    started: bool,
    finished: bool,
}

impl Game {
    /// Create an empty regulation game.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty game on a custom lane.
    ///
    /// Panics if the lane has no frames or no pins; use
    /// `LaneConfig::validate` first on configs built by hand.
    #[must_use]
    pub fn with_config(config: LaneConfig) -> Self {
        if let Err(err) = config.validate() {
            panic!("{}", err);
        }
        Self {
            config,
            ..Self::default()
        }
    }

    /// Rebuild a game by feeding `rolls` through `roll` in order.
    ///
    /// Stops at the first rejected roll.
    pub fn replay<I>(config: LaneConfig, rolls: I) -> Result<Self, BowlingError>
    where
        I: IntoIterator,
        I::Item: Into<i32>,
    {
        let mut game = Self::with_config(config);
        for pins in rolls {
            game.roll(pins.into())?;
        }
        Ok(game)
    }

    // === Operations ===

    /// Record a roll.
    ///
    /// Checks, in order: the pin count is within the lane, the game is not
    /// over, and the frame's rolls fit the rack. On error nothing changes.
    pub fn roll(&mut self, pins: i32) -> Result<(), BowlingError> {
        let frame_number = self.frame_number();
        self.apply_roll(pins).inspect_err(|err| {
            warn!(frame = frame_number, pins, error = %err, "roll rejected");
        })
    }

    /// Final score. Only available once the last frame is complete.
    pub fn score(&self) -> Result<u32, BowlingError> {
        self.breakdown().map(|scores| scores.iter().sum())
    }

    /// Score contributed by each frame of a finished game, first to last.
    pub fn breakdown(&self) -> Result<Vec<u32>, BowlingError> {
        if !self.started || !self.finished {
            return Err(BowlingError::GameNotFinished);
        }
        score_frames(&self.frame_stack, &self.current_frame, self.config.pins)
            .ok_or(BowlingError::GameNotFinished)
    }

    /// Best-effort total at any point in the game.
    ///
    /// Pending while a frame is half bowled or a strike/spare is still
    /// waiting on its bonus rolls. The final frame is not included.
    #[must_use]
    pub fn current_score(&self) -> RunningScore {
        running_score(&self.frame_stack, &self.current_frame, self.config.pins)
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &LaneConfig {
        &self.config
    }

    /// At least one roll has been accepted.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// The final frame has all its rolls.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Whether the frame being bowled is the final frame.
    #[must_use]
    pub fn is_final_frame(&self) -> bool {
        self.frame_stack.len() == self.config.regular_frames()
    }

    /// 1-based number of the frame being bowled.
    #[must_use]
    pub fn frame_number(&self) -> usize {
        self.frame_stack.len() + 1
    }

    /// Closed regular frames, oldest first.
    #[must_use]
    pub fn completed_frames(&self) -> &[Frame] {
        &self.frame_stack
    }

    /// The frame being bowled (or the finished final frame).
    #[must_use]
    pub fn current_frame(&self) -> &Frame {
        &self.current_frame
    }

    /// Every accepted roll, in the order bowled.
    #[must_use]
    pub fn rolls(&self) -> Vec<u8> {
        self.frame_stack
            .iter()
            .chain(std::iter::once(&self.current_frame))
            .flat_map(|frame| frame.rolls().iter().copied())
            .collect()
    }

    /// Most pins the next roll can physically knock down.
    ///
    /// `None` once the game is finished. Not a validation bound: see
    /// `rules::pins_standing`.
    #[must_use]
    pub fn pins_standing(&self) -> Option<u8> {
        if self.finished {
            return None;
        }
        Some(pins_standing(&self.current_frame, self.is_final_frame(), &self.config))
    }

    // === Internals ===

    fn apply_roll(&mut self, pins: i32) -> Result<(), BowlingError> {
        let pins = check_roll(pins, &self.config)?;
        if self.finished {
            return Err(BowlingError::GameOver);
        }

        let frame_number = self.frame_number();
        let mut frame = self.current_frame.clone();
        frame.push(pins);

        if self.is_final_frame() {
            check_final_frame(&frame, &self.config)?;
            self.finished = is_final_frame_finished(&frame, &self.config);
            self.current_frame = frame;
            self.started = true;
            trace!(frame = frame_number, pins, "final frame roll");
            if self.finished {
                info!(rolls = self.rolls().len(), "game finished");
            }
            return Ok(());
        }

        if frame.len() == 2 || frame.is_strike(self.config.pins) {
            check_frame(&frame, &self.config)?;
            debug!(frame = frame_number, rolls = %frame, "frame closed");
            self.frame_stack.push(frame);
            self.current_frame = Frame::new();
        } else {
            self.current_frame = frame;
        }
        self.started = true;
        trace!(frame = frame_number, pins, "roll accepted");
        Ok(())
    }
}

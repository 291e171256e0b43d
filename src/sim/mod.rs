//! Simulated play.
//!
//! A `Bowler` bowls complete, legal games from a seed. Each roll is drawn
//! from the pins actually standing, so every generated game is accepted by
//! `Game::roll` and can be scored.
//!
//! ```
//! use tenpin::sim::{Bowler, BowlerConfig};
//!
//! let bowler = Bowler::new(BowlerConfig::new().with_strike_rate(0.3));
//! let game = bowler.play_game(42).unwrap();
//! assert!(game.is_finished());
//! ```

pub mod bowler;

pub use bowler::{Bowler, BowlerConfig};

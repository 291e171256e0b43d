//! Simulated bowler producing random legal games.

use tracing::debug;

use crate::core::{GameRng, LaneConfig};
use crate::game::Game;
use crate::rules::BowlingError;

/// Configuration for a simulated bowler.
#[derive(Clone, Debug)]
pub struct BowlerConfig {
    /// Lane the games are bowled on.
    pub lane: LaneConfig,

    /// Probability that a roll knocks down every standing pin.
    /// Otherwise the pin count is uniform over what is standing.
    pub strike_rate: f64,

    /// Seed offset for RNG (combined with the game seed).
    pub seed_offset: u64,
}

impl Default for BowlerConfig {
    fn default() -> Self {
        Self {
            lane: LaneConfig::default(),
            strike_rate: 0.2,
            seed_offset: 0,
        }
    }
}

impl BowlerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lane(mut self, lane: LaneConfig) -> Self {
        self.lane = lane;
        self
    }

    /// Set the chance of clearing the standing pins.
    pub fn with_strike_rate(mut self, rate: f64) -> Self {
        assert!((0.0..=1.0).contains(&rate), "Strike rate must be in 0.0..=1.0");
        self.strike_rate = rate;
        self
    }

    pub fn with_seed_offset(mut self, offset: u64) -> Self {
        self.seed_offset = offset;
        self
    }
}

/// Plays complete games one legal roll at a time.
#[derive(Clone, Debug, Default)]
pub struct Bowler {
    config: BowlerConfig,
}

impl Bowler {
    pub fn new(config: BowlerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BowlerConfig {
        &self.config
    }

    /// Bowl a full game. The same seed always bowls the same game.
    pub fn play_game(&self, seed: u64) -> Result<Game, BowlingError> {
        let mut rng = GameRng::new(seed.wrapping_add(self.config.seed_offset));
        self.bowl(&mut rng)
    }

    /// Bowl `count` games from independent forks of one seed.
    pub fn play_games(&self, count: usize, seed: u64) -> Result<Vec<Game>, BowlingError> {
        let mut root = GameRng::new(seed.wrapping_add(self.config.seed_offset));
        (0..count).map(|_| self.bowl(&mut root.fork())).collect()
    }

    fn bowl(&self, rng: &mut GameRng) -> Result<Game, BowlingError> {
        let mut game = Game::with_config(self.config.lane);

        while let Some(standing) = game.pins_standing() {
            let pins = if rng.gen_bool(self.config.strike_rate) {
                standing
            } else {
                rng.gen_pins(standing)
            };
            game.roll(i32::from(pins))?;
        }

        debug!(seed = rng.seed(), rolls = game.rolls().len(), "simulated game complete");
        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_completes() {
        let game = Bowler::default().play_game(42).unwrap();
        assert!(game.is_finished());
        assert!(game.score().unwrap() <= 300);
    }

    #[test]
    fn test_deterministic() {
        let bowler = Bowler::default();
        assert_eq!(bowler.play_game(7).unwrap(), bowler.play_game(7).unwrap());
    }

    #[test]
    fn test_perfect_bowler() {
        let bowler = Bowler::new(BowlerConfig::new().with_strike_rate(1.0));
        let game = bowler.play_game(1).unwrap();
        assert_eq!(game.rolls(), vec![10; 12]);
        assert_eq!(game.score(), Ok(300));
    }

    #[test]
    fn test_play_games() {
        let games = Bowler::default().play_games(20, 99).unwrap();
        assert_eq!(games.len(), 20);
        assert!(games.iter().all(Game::is_finished));
        // Forked streams should not all bowl the same game
        assert!(games.iter().any(|g| g.rolls() != games[0].rolls()));
    }

    #[test]
    #[should_panic(expected = "Strike rate must be in 0.0..=1.0")]
    fn test_invalid_strike_rate() {
        let _ = BowlerConfig::new().with_strike_rate(1.5);
    }
}

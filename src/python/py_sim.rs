//! Simulated bowler bindings for Python.

use pyo3::prelude::*;

use crate::sim::{Bowler, BowlerConfig};

use super::py_game::PyGame;
use super::to_py_err;

/// Python wrapper for Bowler.
#[pyclass(name = "Bowler")]
pub struct PyBowler(Bowler);

#[pymethods]
impl PyBowler {
    #[new]
    #[pyo3(signature = (strike_rate = 0.2, seed_offset = 0))]
    fn new(strike_rate: f64, seed_offset: u64) -> Self {
        let config = BowlerConfig::new()
            .with_strike_rate(strike_rate)
            .with_seed_offset(seed_offset);
        Self(Bowler::new(config))
    }

    /// Bowl one complete game.
    fn play_game(&self, seed: u64) -> PyResult<PyGame> {
        self.0.play_game(seed).map(PyGame).map_err(to_py_err)
    }

    /// Bowl several games from forks of one seed.
    fn play_games(&self, count: usize, seed: u64) -> PyResult<Vec<PyGame>> {
        let games = self.0.play_games(count, seed).map_err(to_py_err)?;
        Ok(games.into_iter().map(PyGame).collect())
    }
}

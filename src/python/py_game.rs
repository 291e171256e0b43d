//! Game bindings for Python.

use numpy::PyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::LaneConfig;
use crate::game::Game;

use super::to_py_err;

/// Python wrapper for Game.
#[pyclass(name = "Game")]
#[derive(Clone, Debug)]
pub struct PyGame(pub Game);

#[pymethods]
impl PyGame {
    /// Create a new game. Raises ValueError for an empty lane.
    ///
    /// # Arguments
    /// - frames: Frames per game
    /// - pins: Pins per rack
    #[new]
    #[pyo3(signature = (frames = 10, pins = 10))]
    fn new(frames: u8, pins: u8) -> PyResult<Self> {
        let config = LaneConfig::try_new(frames, pins)
            .map_err(|err| PyErr::new::<PyValueError, _>(err.to_string()))?;
        Ok(Self(Game::with_config(config)))
    }

    /// Record a roll. Raises ValueError if the roll is not allowed.
    fn roll(&mut self, pins: i32) -> PyResult<()> {
        self.0.roll(pins).map_err(to_py_err)
    }

    /// Final score. Raises ValueError before the game is finished.
    fn score(&self) -> PyResult<u32> {
        self.0.score().map_err(to_py_err)
    }

    /// Running score, or None while it is pending.
    fn current_score(&self) -> Option<u32> {
        self.0.current_score().value()
    }

    /// Per-frame scores of a finished game as a numpy array.
    fn breakdown<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray1<u32>>> {
        let scores = self.0.breakdown().map_err(to_py_err)?;
        Ok(PyArray1::from_slice_bound(py, &scores))
    }

    /// Every roll bowled so far.
    fn rolls(&self) -> Vec<u8> {
        self.0.rolls()
    }

    #[getter]
    fn is_started(&self) -> bool {
        self.0.is_started()
    }

    #[getter]
    fn is_finished(&self) -> bool {
        self.0.is_finished()
    }

    #[getter]
    fn frame_number(&self) -> usize {
        self.0.frame_number()
    }

    /// Most pins the next roll can knock down, or None once finished.
    fn pins_standing(&self) -> Option<u8> {
        self.0.pins_standing()
    }

    fn __repr__(&self) -> String {
        format!(
            "Game(frame={}, score={})",
            self.0.frame_number(),
            self.0.current_score()
        )
    }
}

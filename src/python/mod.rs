//! Python bindings for the tenpin bowling engine.
//!
//! # Quick Start
//!
//! ```python
//! import tenpin
//!
//! game = tenpin.Game()
//! for pins in [10, 5, 3]:
//!     game.roll(pins)
//! game.current_score()   # 26
//!
//! bowler = tenpin.Bowler(strike_rate=0.3)
//! finished = bowler.play_game(seed=42)
//! finished.breakdown()   # numpy array of per-frame scores
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::rules::BowlingError;

mod py_game;
mod py_sim;

pub use py_game::*;
pub use py_sim::*;

pub(crate) fn to_py_err(err: BowlingError) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

/// tenpin: ten-pin bowling scoring.
#[pymodule]
fn tenpin(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGame>()?;
    m.add_class::<PyBowler>()?;
    Ok(())
}

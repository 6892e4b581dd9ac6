//! Python bindings for the Set engine.
//!
//! Lets a Python view layer drive a session.
//!
//! ```python
//! import set_game
//!
//! game = set_game.SetGame(seed=42)
//! table = game.cards()
//! game.choose(table[0].id)
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// set_game: a rules engine for the Set card game.
#[pymodule]
fn set_game(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCard>()?;
    m.add_class::<PySetGame>()?;

    Ok(())
}

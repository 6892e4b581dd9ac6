//! Session bindings for Python.

use pyo3::prelude::*;

use crate::cards::{Card, CardId};
use crate::session::SetGameSession;

/// Python wrapper for a card on the table.
#[pyclass(name = "Card")]
#[derive(Clone, Debug)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    #[getter]
    fn id(&self) -> u32 {
        self.0.id.raw()
    }

    /// Symbol count, 1 to 3.
    #[getter]
    fn number(&self) -> u8 {
        self.0.content.number.count()
    }

    #[getter]
    fn shape(&self) -> String {
        self.0.content.shape.to_string()
    }

    #[getter]
    fn shading(&self) -> String {
        self.0.content.shading.to_string()
    }

    #[getter]
    fn color(&self) -> String {
        self.0.content.color.to_string()
    }

    #[getter]
    fn is_chosen(&self) -> bool {
        self.0.is_chosen
    }

    #[getter]
    fn is_matched(&self) -> bool {
        self.0.is_matched
    }

    fn __repr__(&self) -> String {
        format!("Card(id={}, {})", self.0.id.raw(), self.0.content)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }

    fn __hash__(&self) -> u64 {
        u64::from(self.0.id.raw())
    }
}

/// Python wrapper for a game session.
#[pyclass(name = "SetGame", unsendable)]
pub struct PySetGame {
    session: SetGameSession,
}

#[pymethods]
impl PySetGame {
    #[new]
    #[pyo3(signature = (seed = 0))]
    fn new(seed: u64) -> Self {
        Self {
            session: SetGameSession::new(seed),
        }
    }

    /// Cards on the table.
    fn cards(&self) -> Vec<PyCard> {
        self.session.cards().into_iter().map(PyCard).collect()
    }

    /// Returns None while selecting, else whether the three chosen cards are a set.
    fn choose(&mut self, card_id: u32) -> Option<bool> {
        self.session.choose(CardId::new(card_id)).as_match()
    }

    fn add_three_more_cards(&mut self) -> bool {
        self.session.add_three_more_cards()
    }

    fn start_new_game(&mut self) {
        self.session.start_new_game();
    }

    fn shuffle(&mut self) {
        self.session.shuffle();
    }

    #[getter]
    fn is_set_selected(&self) -> bool {
        self.session.is_set_selected()
    }

    #[getter]
    fn is_set_matched(&self) -> bool {
        self.session.is_set_matched()
    }

    #[getter]
    fn remaining_in_pile(&self) -> usize {
        self.session.game().remaining_in_pile()
    }

    /// Every set on the table as id triples.
    fn available_sets(&self) -> Vec<(u32, u32, u32)> {
        self.session
            .game()
            .available_sets()
            .into_iter()
            .map(|[a, b, c]| (a.raw(), b.raw(), c.raw()))
            .collect()
    }

    fn is_finished(&self) -> bool {
        self.session.game().is_finished()
    }

    fn __len__(&self) -> usize {
        self.session.game().visible_count()
    }

    fn __repr__(&self) -> String {
        format!(
            "SetGame(table={}, pile={})",
            self.session.game().visible_count(),
            self.session.game().remaining_in_pile()
        )
    }
}

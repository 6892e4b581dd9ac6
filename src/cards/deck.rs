//! Deck generation.
//!
//! The deck is the Cartesian product of the four attributes. Generation is
//! deterministic; shuffling is a separate step driven by `GameRng`.

use super::attributes::{CardContent, Color, Number, Shading, Shape};
use super::card::{Card, CardId};
use crate::core::GameRng;

/// Number of distinct cards (3^4).
pub const DECK_SIZE: usize = 81;

/// Every card face, color outermost and number innermost.
pub fn universe() -> impl Iterator<Item = CardContent> {
    Color::ALL.into_iter().flat_map(|color| {
        Shape::ALL.into_iter().flat_map(move |shape| {
            Shading::ALL.into_iter().flat_map(move |shading| {
                Number::ALL
                    .into_iter()
                    .map(move |number| CardContent::new(number, shape, shading, color))
            })
        })
    })
}

/// The full deck in generation order, ids `0..81`.
#[must_use]
pub fn generate() -> Vec<Card> {
    universe()
        .enumerate()
        .map(|(i, content)| Card::new(CardId::new(i as u32), content))
        .collect()
}

/// Permute the cards uniformly. Contents and flags are untouched.
pub fn shuffle(cards: &mut [Card], rng: &mut GameRng) {
    rng.shuffle(cards);
}

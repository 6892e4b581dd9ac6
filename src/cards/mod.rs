//! Card model: attributes, cards, and the deck.
//!
//! ## Key Types
//!
//! - `Number`, `Shape`, `Shading`, `Color`: the four attributes
//! - `CardContent`: one value per attribute, immutable
//! - `CardId`: stable identity within a game
//! - `Card`: content plus shown/chosen/matched flags
//! - `deck`: the 81-card universe and shuffling

pub mod attributes;
pub mod card;
pub mod deck;

pub use attributes::{CardContent, Color, Number, Shading, Shape};
pub use card::{Card, CardId};
pub use deck::DECK_SIZE;

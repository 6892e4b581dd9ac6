//! # set-game
//!
//! A rules engine for the Set card-matching game.
//!
//! ## Design Principles
//!
//! 1. **One Mutator**: `SetGame` owns the card sequence; everything else
//!    reads immutable `GameSnapshot`s.
//!
//! 2. **Deterministic**: all randomness comes from a seeded `GameRng`, so a
//!    seed replays a whole session.
//!
//! 3. **No Fatal Edge Cases**: unknown ids, an empty draw pile, and
//!    incomplete selections are no-ops or documented fallbacks.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: attributes, cards, the 81-card deck
//! - `rules`: the set rule and set search
//! - `game`: the engine and snapshots
//! - `session`: view-facing façade with observers
//!
//! ## Example
//!
//! ```
//! use set_game::{ChooseOutcome, SetGame};
//!
//! let mut game = SetGame::new(42);
//! assert_eq!(game.visible_cards().len(), 12);
//!
//! if let Some([a, b, c]) = game.available_sets().first().copied() {
//!     game.choose(a);
//!     game.choose(b);
//!     assert_eq!(game.choose(c), ChooseOutcome::Matched);
//!     game.add_and_replace_three_more_cards();
//! }
//! assert_eq!(game.visible_cards().len(), 12);
//! ```

pub mod core;
pub mod cards;
pub mod rules;
pub mod game;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{ConfigError, GameConfig, GameRng, GameRngState, ReplacementPolicy, SET_SIZE};

pub use crate::cards::{Card, CardContent, CardId, Color, Number, Shading, Shape, DECK_SIZE};

pub use crate::rules::{find_sets, is_valid_set, third_card};

pub use crate::game::{ChooseOutcome, GameSnapshot, SetGame};

pub use crate::session::{GameObserver, SetGameSession};

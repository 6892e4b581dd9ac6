//! Cards in play.
//!
//! A `Card` pairs an immutable `CardContent` with the three flags the engine
//! mutates during play. Flag transitions belong to `SetGame`; consumers only
//! read them.

use serde::{Deserialize, Serialize};

use super::attributes::CardContent;

/// Stable identifier of a card for the lifetime of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A card and its play state.
///
/// ## Flags
///
/// - `is_shown`: dealt to the table (otherwise still in the draw pile)
/// - `is_chosen`: selected by the player
/// - `is_matched`: part of a completed set; implies `is_chosen` and `is_shown`
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub content: CardContent,
    pub is_chosen: bool,
    pub is_matched: bool,
    pub is_shown: bool,
}

impl Card {
    /// Create an undealt card with all flags cleared.
    #[must_use]
    pub const fn new(id: CardId, content: CardContent) -> Self {
        Self {
            id,
            content,
            is_chosen: false,
            is_matched: false,
            is_shown: false,
        }
    }

    /// Chosen, matched and on the table: a completed set waiting to be cleared.
    #[must_use]
    pub const fn is_pending_match(&self) -> bool {
        self.is_chosen && self.is_matched && self.is_shown
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.id, self.content)
    }
}

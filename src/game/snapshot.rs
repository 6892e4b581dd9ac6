//! Immutable views of a game.
//!
//! A `GameSnapshot` shares structure with the engine's card sequence through
//! `im::Vector`, so taking one after every command is O(1). Presentation code
//! holds snapshots; only `SetGame` mutates.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};

/// Point-in-time copy of every card and its flags, in sequence order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    cards: Vector<Card>,
}

impl GameSnapshot {
    pub(crate) fn new(cards: Vector<Card>) -> Self {
        Self { cards }
    }

    /// All cards still in the game, dealt or not.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// Cards on the table, in sequence order.
    pub fn visible(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter().filter(|card| card.is_shown)
    }

    /// Owned copy of the table.
    #[must_use]
    pub fn visible_cards(&self) -> Vec<Card> {
        self.visible().cloned().collect()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible().count()
    }

    /// Cards currently selected.
    pub fn chosen(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter().filter(|card| card.is_chosen)
    }

    /// Cards left in the draw pile.
    #[must_use]
    pub fn remaining_in_pile(&self) -> usize {
        self.cards.iter().filter(|card| !card.is_shown).count()
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::deck;

    fn sample() -> GameSnapshot {
        let mut cards = deck::generate();
        for card in cards.iter_mut().take(5) {
            card.is_shown = true;
        }
        cards[1].is_chosen = true;
        GameSnapshot::new(cards.into_iter().take(10).collect())
    }

    #[test]
    fn test_snapshot_queries() {
        let snapshot = sample();
        assert_eq!(snapshot.cards().len(), 10);
        assert_eq!(snapshot.visible_count(), 5);
        assert_eq!(snapshot.remaining_in_pile(), 5);

        let chosen: Vec<_> = snapshot.chosen().map(|card| card.id).collect();
        assert_eq!(chosen, vec![CardId::new(1)]);

        let visible: Vec<_> = snapshot.visible().map(|card| card.id.raw()).collect();
        assert_eq!(visible, vec![0, 1, 2, 3, 4]);
        assert_eq!(snapshot.visible_cards().len(), 5);
    }

    #[test]
    fn test_snapshot_card_lookup() {
        let snapshot = sample();
        assert!(snapshot.card(CardId::new(3)).is_some());
        assert!(snapshot.card(CardId::new(50)).is_none());
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = sample();
        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, deserialized);
    }
}

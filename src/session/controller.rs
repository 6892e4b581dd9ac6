//! Presentation-facing session.
//!
//! `SetGameSession` wraps a `SetGame` with the bookkeeping a view needs:
//! whether the last three choices formed a set, the table-size cap, and
//! observer notification. The engine stays unaware of all three.

use log::debug;

use super::observer::GameObserver;
use crate::cards::{Card, CardId};
use crate::core::{ConfigError, GameConfig};
use crate::game::{ChooseOutcome, GameSnapshot, SetGame};

/// One player's session: engine plus view state.
pub struct SetGameSession {
    game: SetGame,
    is_set_selected: bool,
    is_set_matched: bool,
    observers: Vec<Box<dyn GameObserver>>,
}

impl std::fmt::Debug for SetGameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SetGameSession")
            .field("game", &self.game)
            .field("is_set_selected", &self.is_set_selected)
            .field("is_set_matched", &self.is_set_matched)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl SetGameSession {
    /// Start a standard session from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_game(SetGame::new(seed))
    }

    /// Start a session with a custom configuration.
    pub fn with_config(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        SetGame::with_config(config, seed).map(Self::from_game)
    }

    /// Wrap an existing engine.
    #[must_use]
    pub fn from_game(game: SetGame) -> Self {
        Self {
            game,
            is_set_selected: false,
            is_set_matched: false,
            observers: Vec::new(),
        }
    }

    /// Register an observer. It is not called until the next command.
    pub fn subscribe(&mut self, observer: impl GameObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Drop all observers.
    pub fn clear_observers(&mut self) {
        self.observers.clear();
    }

    // === Queries ===

    #[must_use]
    pub fn game(&self) -> &SetGame {
        &self.game
    }

    /// The table, in sequence order.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.game.visible_cards()
    }

    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    /// Three cards are chosen and have been judged.
    #[must_use]
    pub fn is_set_selected(&self) -> bool {
        self.is_set_selected
    }

    /// The judged three cards form a set.
    #[must_use]
    pub fn is_set_matched(&self) -> bool {
        self.is_set_matched
    }

    /// Three cards are chosen and are not a set; views highlight these.
    #[must_use]
    pub fn is_mismatch(&self) -> bool {
        self.is_set_selected && !self.is_set_matched
    }

    // === Commands ===

    pub fn start_new_game(&mut self) {
        self.game.start_new_game();
        self.reset_selection();
        self.notify();
    }

    pub fn shuffle(&mut self) {
        self.game.shuffle();
        self.notify();
    }

    /// Replace a matched set if one is waiting, otherwise deal more cards
    /// without taking the table past `max_visible`.
    ///
    /// Returns whether the table changed.
    pub fn add_three_more_cards(&mut self) -> bool {
        let changed = if self.is_set_selected && self.is_set_matched {
            let replaced = self.game.add_and_replace_three_more_cards();
            self.reset_selection();
            replaced
        } else if self.game.visible_count() < self.game.config().max_visible {
            let room = self.game.config().max_visible - self.game.visible_count();
            let count = room.min(self.game.config().deal_size);
            self.game.deal_up_to(count) > 0
        } else {
            debug!("table full at {} cards", self.game.visible_count());
            false
        };
        self.notify();
        changed
    }

    pub fn choose(&mut self, id: CardId) -> ChooseOutcome {
        let outcome = self.game.choose(id);
        match outcome.as_match() {
            Some(matched) => {
                self.is_set_selected = true;
                self.is_set_matched = matched;
            }
            None => self.reset_selection(),
        }
        self.notify();
        outcome
    }

    fn reset_selection(&mut self) {
        self.is_set_selected = false;
        self.is_set_matched = false;
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.game.snapshot();
        for observer in &mut self.observers {
            observer.on_change(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::deck;
    use crate::core::GameRng;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn arranged_session(shown: usize) -> SetGameSession {
        let mut cards = deck::generate();
        for card in cards.iter_mut().take(shown) {
            card.is_shown = true;
        }
        SetGameSession::from_game(SetGame::from_cards(GameConfig::default(), GameRng::new(1), cards).unwrap())
    }

    #[test]
    fn test_flags_follow_outcome() {
        let mut session = arranged_session(12);

        session.choose(CardId::new(0));
        session.choose(CardId::new(1));
        assert!(!session.is_set_selected());

        session.choose(CardId::new(3));
        assert!(session.is_set_selected());
        assert!(!session.is_set_matched());
        assert!(session.is_mismatch());

        session.choose(CardId::new(0));
        assert!(!session.is_set_selected());
        assert!(!session.is_mismatch());
    }

    #[test]
    fn test_add_replaces_pending_match() {
        let mut session = arranged_session(12);
        session.choose(CardId::new(0));
        session.choose(CardId::new(1));
        assert_eq!(session.choose(CardId::new(2)), ChooseOutcome::Matched);
        assert!(session.is_set_matched());

        assert!(session.add_three_more_cards());
        assert_eq!(session.cards().len(), 12);
        assert!(!session.is_set_selected());
        assert!(!session.is_set_matched());
        assert!(session.game().card(CardId::new(0)).is_none());
    }

    #[test]
    fn test_add_stops_at_cap() {
        let mut session = SetGameSession::new(5);
        for _ in 0..4 {
            assert!(session.add_three_more_cards());
        }
        assert_eq!(session.cards().len(), 24);

        assert!(!session.add_three_more_cards());
        assert_eq!(session.cards().len(), 24);
    }

    #[test]
    fn test_add_never_passes_uneven_cap() {
        let config = GameConfig::new().with_max_visible(13);
        let mut session = SetGameSession::with_config(config, 1).unwrap();

        assert!(session.add_three_more_cards());
        assert_eq!(session.cards().len(), 13);

        assert!(!session.add_three_more_cards());
        assert_eq!(session.cards().len(), 13);
    }

    #[test]
    fn test_start_new_game_resets_flags() {
        let mut session = arranged_session(12);
        session.choose(CardId::new(0));
        session.choose(CardId::new(1));
        session.choose(CardId::new(2));

        session.start_new_game();
        assert!(!session.is_set_selected());
        assert!(!session.is_set_matched());
        assert_eq!(session.cards().len(), 12);
    }

    #[test]
    fn test_observers_receive_snapshots() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut session = arranged_session(12);
        session.subscribe(move |snapshot: &GameSnapshot| {
            sink.borrow_mut().push(snapshot.chosen().count());
        });

        session.choose(CardId::new(0));
        session.choose(CardId::new(1));
        session.shuffle();
        session.add_three_more_cards();

        assert_eq!(*seen.borrow(), vec![1, 2, 2, 2]);

        session.clear_observers();
        session.choose(CardId::new(5));
        assert_eq!(seen.borrow().len(), 4);
    }
}

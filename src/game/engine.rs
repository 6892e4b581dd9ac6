//! The Set game engine.
//!
//! `SetGame` owns the card sequence. Its order is the shuffle order: the
//! table is the shown subsequence and the draw pile is the rest, drawn
//! first-found.
//!
//! ## Selection
//!
//! ```text
//! 0..2 chosen --choose--> toggle target
//!                         3rd chosen: valid   -> all 3 matched, Matched
//!                                     invalid -> stay chosen,   Mismatched
//! 3 chosen    --choose--> matched removed / unmatched deselected,
//!                         then toggle target, Pending
//! ```
//!
//! Unknown ids and cards still in the draw pile are ignored.

use im::Vector;
use log::{debug, trace};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use super::snapshot::GameSnapshot;
use crate::cards::{deck, Card, CardId};
use crate::core::{ConfigError, GameConfig, GameRng, GameRngState, ReplacementPolicy, SET_SIZE};
use crate::rules;

/// Result of a `choose` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChooseOutcome {
    /// Selection still in progress (or the previous set was just cleared).
    Pending,
    /// The third choice completed a valid set.
    Matched,
    /// The third choice completed three cards that are not a set.
    Mismatched,
}

impl ChooseOutcome {
    /// `None` while pending, otherwise whether the set matched.
    #[must_use]
    pub fn as_match(self) -> Option<bool> {
        match self {
            ChooseOutcome::Pending => None,
            ChooseOutcome::Matched => Some(true),
            ChooseOutcome::Mismatched => Some(false),
        }
    }
}

type Selection = SmallVec<[CardId; SET_SIZE]>;

/// Authoritative state of one play session.
#[derive(Clone, Debug)]
pub struct SetGame {
    config: GameConfig,
    rng: GameRng,
    cards: Vector<Card>,
}

impl SetGame {
    /// Start a standard game from a seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::start(GameConfig::default(), GameRng::new(seed))
    }

    /// Start a game with a custom configuration.
    pub fn with_config(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, GameRng::new(seed))
    }

    /// Start a game drawing randomness from an existing RNG.
    pub fn with_rng(config: GameConfig, rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::start(config, rng))
    }

    /// Build a game over an arranged card sequence, keeping its flags.
    ///
    /// Useful for puzzles and replays. Pass `GameRng::from_state` with a
    /// captured `rng_state()` to continue a session exactly where it was;
    /// `start_new_game` returns to a dealt deck as usual.
    ///
    /// The arrangement must satisfy the play invariants: unique ids and
    /// faces, at most three chosen cards, and every matched card chosen
    /// and shown.
    pub fn from_cards(
        config: GameConfig,
        rng: GameRng,
        cards: impl IntoIterator<Item = Card>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let cards: Vector<Card> = cards.into_iter().collect();
        Self::check_arrangement(&cards)?;
        Ok(Self { config, rng, cards })
    }

    /// Continue a captured session: same cards, same RNG position.
    pub fn resume(
        config: GameConfig,
        rng_state: &GameRngState,
        cards: impl IntoIterator<Item = Card>,
    ) -> Result<Self, ConfigError> {
        Self::from_cards(config, GameRng::from_state(rng_state), cards)
    }

    fn check_arrangement(cards: &Vector<Card>) -> Result<(), ConfigError> {
        let mut ids = FxHashSet::default();
        let mut faces = FxHashSet::default();
        let mut chosen = 0;

        for card in cards.iter() {
            if !ids.insert(card.id) {
                return Err(ConfigError::DuplicateCard(card.id));
            }
            if !faces.insert(card.content) {
                return Err(ConfigError::DuplicateContent(card.content));
            }
            if card.is_matched && !(card.is_chosen && card.is_shown) {
                return Err(ConfigError::StrayMatch(card.id));
            }
            if card.is_chosen {
                chosen += 1;
            }
        }

        if chosen > SET_SIZE {
            return Err(ConfigError::TooManyChosen(chosen));
        }
        Ok(())
    }

    fn start(config: GameConfig, mut rng: GameRng) -> Self {
        let cards = Self::deal(&config, &mut rng);
        debug!("new game: seed {}, {} cards shown", rng.seed(), config.initial_deal);
        Self { config, rng, cards }
    }

    fn deal(config: &GameConfig, rng: &mut GameRng) -> Vector<Card> {
        let mut cards = deck::generate();
        deck::shuffle(&mut cards, rng);
        for card in cards.iter_mut().take(config.initial_deal) {
            card.is_shown = true;
        }
        Vector::from(cards)
    }

    /// Throw away the current game and deal a fresh one.
    ///
    /// The RNG stream continues, so each new game differs while the whole
    /// session stays reproducible from its seed.
    pub fn start_new_game(&mut self) {
        self.cards = Self::deal(&self.config, &mut self.rng);
        debug!("restarted game, {} cards shown", self.config.initial_deal);
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// All cards still in the game, in sequence order.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Cards on the table, in sequence order.
    #[must_use]
    pub fn visible_cards(&self) -> Vec<Card> {
        self.cards.iter().filter(|card| card.is_shown).cloned().collect()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.cards.iter().filter(|card| card.is_shown).count()
    }

    /// Cards left in the draw pile.
    #[must_use]
    pub fn remaining_in_pile(&self) -> usize {
        self.cards.iter().filter(|card| !card.is_shown).count()
    }

    pub(crate) fn chosen_cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter().filter(|card| card.is_chosen)
    }

    fn chosen_ids(&self) -> Selection {
        self.chosen_cards().map(|card| card.id).collect()
    }

    fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|card| card.id == id)
    }

    fn first_unshown(&self) -> Option<usize> {
        self.cards.iter().position(|card| !card.is_shown)
    }

    /// Immutable copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::new(self.cards.clone())
    }

    /// Table cards still in play; matched cards are on their way out.
    fn playable_cards(&self) -> Vec<Card> {
        self.cards
            .iter()
            .filter(|card| card.is_shown && !card.is_matched)
            .cloned()
            .collect()
    }

    /// Every set among the unmatched table cards, as ids in sequence order.
    #[must_use]
    pub fn available_sets(&self) -> Vec<[CardId; SET_SIZE]> {
        rules::find_sets(&self.playable_cards())
    }

    /// No cards left to deal and no set left among the unmatched table cards.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.remaining_in_pile() == 0 && !rules::has_set(&self.playable_cards())
    }

    /// Position of the RNG, for replaying the rest of the session.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    // === Commands ===

    /// Re-permute the whole sequence. Flags are untouched, so only the
    /// table order and the draw order change.
    pub fn shuffle(&mut self) {
        let mut cards: Vec<Card> = self.cards.iter().cloned().collect();
        deck::shuffle(&mut cards, &mut self.rng);
        self.cards = Vector::from(cards);
        trace!("shuffled {} cards", self.cards.len());
    }

    /// Deal up to `deal_size` cards from the pile, first-found.
    ///
    /// Returns how many were dealt; 0 once the pile is empty.
    pub fn add_three_more_cards(&mut self) -> usize {
        self.deal_up_to(self.config.deal_size)
    }

    /// Deal at most `limit` cards from the pile, first-found.
    pub fn deal_up_to(&mut self, limit: usize) -> usize {
        let mut dealt = 0;
        while dealt < limit {
            let Some(index) = self.first_unshown() else {
                break;
            };
            if let Some(card) = self.cards.get_mut(index) {
                card.is_shown = true;
            }
            dealt += 1;
        }
        debug!("dealt {} cards, {} left in pile", dealt, self.remaining_in_pile());
        dealt
    }

    /// Replace a completed set with cards from the pile.
    ///
    /// Only acts when exactly three cards are chosen, matched and shown.
    /// Each matched card, in sequence order, is swapped for the first
    /// undealt card, which moves into its slot. If the pile runs out the
    /// configured `ReplacementPolicy` decides the slot's fate.
    ///
    /// Returns whether a set was cleared.
    pub fn add_and_replace_three_more_cards(&mut self) -> bool {
        let pending: Selection = self
            .cards
            .iter()
            .filter(|card| card.is_pending_match())
            .map(|card| card.id)
            .collect();

        if pending.len() != SET_SIZE {
            trace!("replace ignored: {} pending matched cards", pending.len());
            return false;
        }

        for id in pending {
            let Some(slot) = self.position(id) else {
                continue;
            };
            match self.first_unshown() {
                Some(from) => {
                    let mut drawn = self.cards.remove(from);
                    drawn.is_shown = true;
                    let slot = if from < slot { slot - 1 } else { slot };
                    trace!("{} replaces {}", drawn.id, id);
                    self.cards.set(slot, drawn);
                }
                None => match self.config.replacement_policy {
                    ReplacementPolicy::RemoveMatched => {
                        self.cards.remove(slot);
                        trace!("pile empty, removed {}", id);
                    }
                    ReplacementPolicy::LeaveInPlace => {
                        trace!("pile empty, left {} in place", id);
                    }
                },
            }
        }

        debug!("replaced matched set, {} left in pile", self.remaining_in_pile());
        true
    }

    /// Select or deselect a card on the table.
    ///
    /// See the module docs for the state machine. Cards that are not on the
    /// table are ignored and yield `Pending`.
    pub fn choose(&mut self, id: CardId) -> ChooseOutcome {
        if !self.card(id).is_some_and(|card| card.is_shown) {
            trace!("choose ignored: {} is not on the table", id);
            return ChooseOutcome::Pending;
        }

        let chosen = self.chosen_ids();
        if self.needs_resolution(&chosen) {
            self.resolve_selection();
            self.toggle(id);
            return ChooseOutcome::Pending;
        }

        self.toggle(id);

        let chosen = self.chosen_ids();
        if chosen.len() < SET_SIZE {
            return ChooseOutcome::Pending;
        }

        let is_set = {
            let triple: SmallVec<[&Card; SET_SIZE]> = self.chosen_cards().collect();
            rules::is_valid_card_set([triple[0], triple[1], triple[2]])
        };

        if is_set {
            for card in self.cards.iter_mut().filter(|card| card.is_chosen) {
                card.is_matched = true;
            }
            debug!("set found: {:?}", chosen.as_slice());
            ChooseOutcome::Matched
        } else {
            debug!("not a set: {:?}", chosen.as_slice());
            ChooseOutcome::Mismatched
        }
    }

    /// A full selection, or matched cards left over from an exhausted-pile
    /// replacement, must be cleared before the next choice registers.
    fn needs_resolution(&self, chosen: &Selection) -> bool {
        chosen.len() >= SET_SIZE
            || chosen
                .iter()
                .any(|&id| self.card(id).is_some_and(|card| card.is_matched))
    }

    /// Remove matched cards from the game and deselect the rest.
    fn resolve_selection(&mut self) {
        let before = self.cards.len();
        self.cards.retain(|card| !(card.is_chosen && card.is_matched));
        let removed = before - self.cards.len();

        for card in self.cards.iter_mut().filter(|card| card.is_chosen) {
            card.is_chosen = false;
        }
        trace!("selection resolved, {} matched cards removed", removed);
    }

    fn toggle(&mut self, id: CardId) {
        let Some(index) = self.position(id) else {
            return;
        };
        if let Some(card) = self.cards.get_mut(index) {
            card.is_chosen = !card.is_chosen;
            trace!("{} chosen: {}", id, card.is_chosen);
        }
    }
}

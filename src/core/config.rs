//! Engine configuration.
//!
//! The defaults are the standard table rules: deal 12, add 3 at a time, and
//! cap the table at 24 cards. `GameConfig::validate` rejects combinations the
//! engine cannot honour.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::DECK_SIZE;

/// Cards required to form a set.
pub const SET_SIZE: usize = 3;

/// What happens to a matched card when the draw pile can't replace it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReplacementPolicy {
    /// Drop the matched card from the table, shrinking it.
    #[default]
    RemoveMatched,
    /// Keep the matched card on the table; the next choice clears it.
    LeaveInPlace,
}

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Cards shown when a game starts.
    pub initial_deal: usize,

    /// Cards shown per `add_three_more_cards` call.
    pub deal_size: usize,

    /// Largest table a session will deal up to.
    pub max_visible: usize,

    /// Fallback when replacing a matched set from an exhausted pile.
    pub replacement_policy: ReplacementPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_deal: 12,
            deal_size: 3,
            max_visible: 24,
            replacement_policy: ReplacementPolicy::default(),
        }
    }
}

impl GameConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of cards dealt at game start.
    #[must_use]
    pub fn with_initial_deal(mut self, count: usize) -> Self {
        self.initial_deal = count;
        self
    }

    /// Set how many cards each deal adds.
    #[must_use]
    pub fn with_deal_size(mut self, count: usize) -> Self {
        self.deal_size = count;
        self
    }

    /// Set the table cap enforced by the session.
    #[must_use]
    pub fn with_max_visible(mut self, count: usize) -> Self {
        self.max_visible = count;
        self
    }

    /// Set the exhausted-pile replacement policy.
    #[must_use]
    pub fn with_replacement_policy(mut self, policy: ReplacementPolicy) -> Self {
        self.replacement_policy = policy;
        self
    }

    /// Check the configuration against the deck.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_deal == 0 || self.initial_deal > DECK_SIZE {
            return Err(ConfigError::InitialDeal(self.initial_deal));
        }
        if self.deal_size == 0 {
            return Err(ConfigError::DealSize);
        }
        if self.max_visible < self.initial_deal {
            return Err(ConfigError::MaxVisible {
                max_visible: self.max_visible,
                initial_deal: self.initial_deal,
            });
        }
        Ok(())
    }
}

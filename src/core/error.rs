//! Configuration errors.

use crate::cards::{CardContent, CardId, DECK_SIZE};

/// Rejected `GameConfig` values and card arrangements.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("initial deal of {0} cards must be between 1 and {}", DECK_SIZE)]
    InitialDeal(usize),
    #[error("deal size must be at least 1")]
    DealSize,
    #[error("table cap of {max_visible} is below the initial deal of {initial_deal}")]
    MaxVisible {
        max_visible: usize,
        initial_deal: usize,
    },
    #[error("{0} appears more than once")]
    DuplicateCard(CardId),
    #[error("face {0} appears more than once")]
    DuplicateContent(CardContent),
    #[error("{0} cards chosen, at most 3 allowed")]
    TooManyChosen(usize),
    #[error("{0} is matched but not chosen and shown")]
    StrayMatch(CardId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigError::InitialDeal(0).to_string(),
            "initial deal of 0 cards must be between 1 and 81"
        );
        assert_eq!(
            ConfigError::MaxVisible {
                max_visible: 9,
                initial_deal: 12
            }
            .to_string(),
            "table cap of 9 is below the initial deal of 12"
        );
        assert_eq!(
            ConfigError::StrayMatch(CardId::new(7)).to_string(),
            "Card(7) is matched but not chosen and shown"
        );
    }
}

//! Set validation.
//!
//! The engine calls `is_valid_set` when a third card is chosen; `find_sets`
//! and `has_set` back hints and end-of-game detection.

pub mod set_rule;

pub use set_rule::{distinct_counts, find_sets, has_set, is_valid_card_set, is_valid_set, third_card};

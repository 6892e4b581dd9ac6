//! Game engine: card sequence, selection state, set clearing.
//!
//! `SetGame` is the only mutator. Consumers read `GameSnapshot`s.

pub mod engine;
pub mod snapshot;

pub use engine::{ChooseOutcome, SetGame};
pub use snapshot::GameSnapshot;

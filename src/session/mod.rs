//! Session layer between the engine and a view.
//!
//! Replaces published mutable state with explicit snapshots pushed to
//! registered observers.

pub mod controller;
pub mod observer;

pub use controller::SetGameSession;
pub use observer::GameObserver;

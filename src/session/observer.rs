//! Change notification for presentation layers.

use crate::game::GameSnapshot;

/// Receives a snapshot after every command a session applies.
///
/// Closures taking `&GameSnapshot` implement this directly.
pub trait GameObserver {
    fn on_change(&mut self, snapshot: &GameSnapshot);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameSnapshot),
{
    fn on_change(&mut self, snapshot: &GameSnapshot) {
        self(snapshot)
    }
}

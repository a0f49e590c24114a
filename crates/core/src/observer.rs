//! State-change notification.
//!
//! The engine calls its listener synchronously, on the caller's thread, exactly
//! once per accepted mutation (start, restart, resume, or a move that changed
//! the board). No-op moves are silent. The listener receives a copy of the new
//! state rather than the engine, so it cannot re-enter it.

use std::sync::mpsc::Sender;

use log::trace;

/// State after an accepted mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StateChange {
    pub score: u64,
    pub won: bool,
    pub lost: bool,
    pub episode_id: u32,
    pub moves: u32,
}

/// Receives a [`StateChange`] after every accepted mutation
pub trait StateListener {
    fn state_changed(&mut self, change: &StateChange);
}

impl<F> StateListener for F
where
    F: FnMut(&StateChange),
{
    fn state_changed(&mut self, change: &StateChange) {
        self(change)
    }
}

/// Forwards every change into an mpsc channel
///
/// A disconnected receiver is ignored; the game keeps running.
#[derive(Debug, Clone)]
pub struct ChannelListener {
    tx: Sender<StateChange>,
}

impl ChannelListener {
    pub fn new(tx: Sender<StateChange>) -> Self {
        Self { tx }
    }
}

impl StateListener for ChannelListener {
    fn state_changed(&mut self, change: &StateChange) {
        if self.tx.send(*change).is_err() {
            trace!("state listener channel closed; dropping {:?}", change);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn closures_are_listeners() {
        let mut seen = Vec::new();
        {
            let mut listener = |c: &StateChange| seen.push(c.score);
            listener.state_changed(&StateChange {
                score: 8,
                ..Default::default()
            });
        }
        assert_eq!(seen, vec![8]);
    }

    #[test]
    fn channel_listener_forwards_and_survives_disconnect() {
        let (tx, rx) = mpsc::channel();
        let mut listener = ChannelListener::new(tx);
        let change = StateChange {
            score: 4,
            won: true,
            ..Default::default()
        };
        listener.state_changed(&change);
        assert_eq!(rx.try_recv(), Ok(change));

        drop(rx);
        listener.state_changed(&change);
    }
}

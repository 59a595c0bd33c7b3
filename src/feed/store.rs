//! Observable container for [`FeedState`].
//!
//! Backed by a `tokio::sync::watch` channel: one writer (the store), any
//! number of readers. Readers get notified on every dispatch and always
//! see the latest snapshot; intermediate values may be skipped.

use std::sync::Arc;

use tokio::sync::watch;

use crate::ui::feed::{FeedIntent, FeedReducer, FeedState};
use crate::ui::mvi::Reducer;

#[derive(Clone)]
pub struct FeedStore {
    tx: Arc<watch::Sender<FeedState>>,
}

impl Default for FeedStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedStore {
    /// Starts empty: no items, not errored.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(FeedState::default());
        Self { tx: Arc::new(tx) }
    }

    pub fn subscribe(&self) -> watch::Receiver<FeedState> {
        self.tx.subscribe()
    }

    pub fn snapshot(&self) -> FeedState {
        self.tx.borrow().clone()
    }

    /// Run the reducer on the current state and notify subscribers.
    pub fn dispatch(&self, intent: FeedIntent) {
        self.tx
            .send_modify(|state| *state = FeedReducer::reduce(std::mem::take(state), intent));
    }
}

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::config::ParsePolicy;
use crate::feed::error::FetchError;
use crate::feed::store::FeedStore;
use crate::loader::{DataLoader, LoadError};
use crate::ui::feed::{FeedIntent, FeedState};

/// Owns the loader and the feed store. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct FeedViewModel {
    loader: Arc<DataLoader>,
    store: FeedStore,
    policy: ParsePolicy,
}

impl FeedViewModel {
    pub fn new(loader: DataLoader, policy: ParsePolicy) -> Self {
        Self {
            loader: Arc::new(loader),
            store: FeedStore::new(),
            policy,
        }
    }

    pub fn loader(&self) -> &DataLoader {
        &self.loader
    }

    pub fn subscribe(&self) -> watch::Receiver<FeedState> {
        self.store.subscribe()
    }

    pub fn state(&self) -> FeedState {
        self.store.snapshot()
    }

    /// Load the resource on a blocking worker and publish the outcome.
    ///
    /// Recoverable failures end up in the state as `errored` and return
    /// `Ok`. Everything else is returned and leaves items and `errored`
    /// untouched.
    pub async fn fetch(&self) -> Result<(), FetchError> {
        self.store.dispatch(FeedIntent::Started);

        let loader = Arc::clone(&self.loader);
        let outcome = match tokio::task::spawn_blocking(move || loader.load()).await {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::error!(error = %err, "load task did not complete");
                self.store.dispatch(FeedIntent::Abandoned);
                return Err(FetchError::Task(err));
            }
        };

        match outcome {
            Ok(items) => {
                tracing::info!(
                    origin = %self.loader.resource().origin(),
                    count = items.len(),
                    "feed loaded"
                );
                self.store.dispatch(FeedIntent::Loaded { items });
                Ok(())
            }
            Err(err) if self.recovers(&err) => {
                tracing::warn!(error = %err, "feed load failed");
                self.store.dispatch(FeedIntent::Failed);
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "feed load failed, not recoverable");
                self.store.dispatch(FeedIntent::Abandoned);
                Err(FetchError::Load(err))
            }
        }
    }

    /// Start a fetch on the current runtime and return its handle.
    pub fn spawn_fetch(&self) -> JoinHandle<Result<(), FetchError>> {
        let view_model = self.clone();
        tokio::spawn(async move { view_model.fetch().await })
    }

    fn recovers(&self, err: &LoadError) -> bool {
        match self.policy {
            ParsePolicy::Recover => true,
            ParsePolicy::Propagate => err.is_io(),
        }
    }
}

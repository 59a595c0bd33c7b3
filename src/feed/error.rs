use thiserror::Error;

use crate::loader::LoadError;

/// Failures that `fetch` hands back to its caller instead of publishing.
#[derive(Debug, Error)]
pub enum FetchError {
    /// A load error the configured policy does not turn into the error view.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The blocking worker panicked or was cancelled.
    #[error("Load task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

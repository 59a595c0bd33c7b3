use thiserror::Error;

/// Errors that can occur while loading the feed resource.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read resource '{origin}': {source}")]
    Io {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Resource '{origin}' is not a JSON array of objects: {source}")]
    Malformed {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Item {index} in '{origin}' needs string fields 'title' and 'body': {source}")]
    InvalidItem {
        origin: String,
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// True for failures to open or read the resource.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

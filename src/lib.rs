//! Loads a JSON list of `{title, body}` items on a background worker and
//! shows it as scrollable cards in the terminal, with a retry control when
//! the load fails.

pub mod cli;
pub mod config;
pub mod feed;
pub mod loader;
pub mod logging;
pub mod model;
pub mod resource;
pub mod shutdown;
pub mod ui;

pub use feed::{FeedStore, FeedViewModel, FetchError};
pub use loader::{DataLoader, LoadError};
pub use model::Item;
pub use resource::Resource;

use crate::model::Item;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum FeedIntent {
    /// A fetch has been dispatched to the background worker.
    Started,
    /// The loader produced a full list. Replaces the previous items.
    Loaded { items: Vec<Item> },
    /// The loader failed in a way the screen should report.
    Failed,
    /// The fetch ended with an error that is handed to the caller instead.
    Abandoned,
}

impl Intent for FeedIntent {}

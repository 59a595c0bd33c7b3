use crate::model::Item;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeedState {
    pub items: Vec<Item>,
    /// Drives the choice between the error view and the list.
    pub errored: bool,
    /// A fetch is in flight. With overlapping fetches the last one to finish clears it.
    pub loading: bool,
}

impl UiState for FeedState {}

/// What the body region shows. Exactly one variant is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedView<'a> {
    List(&'a [Item]),
    Error,
}

impl FeedState {
    pub fn view(&self) -> FeedView<'_> {
        if self.errored {
            FeedView::Error
        } else {
            FeedView::List(&self.items)
        }
    }
}

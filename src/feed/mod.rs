//! View state holder: owns the observable feed state and the fetch operation.

mod error;
mod store;
mod view_model;

pub use error::FetchError;
pub use store::FeedStore;
pub use view_model::FeedViewModel;

mod intent;
mod reducer;
mod state;

pub use intent::FeedIntent;
pub use reducer::FeedReducer;
pub use state::{FeedState, FeedView};

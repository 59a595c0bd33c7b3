use crate::ui::feed::intent::FeedIntent;
use crate::ui::feed::state::FeedState;
use crate::ui::mvi::Reducer;

pub struct FeedReducer;

impl Reducer for FeedReducer {
    type State = FeedState;
    type Intent = FeedIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FeedIntent::Started => FeedState {
                loading: true,
                ..state
            },
            FeedIntent::Loaded { items } => FeedState {
                items,
                errored: false,
                loading: false,
            },
            // Prior items stay put so a later success can replace them wholesale.
            FeedIntent::Failed => FeedState {
                errored: true,
                loading: false,
                ..state
            },
            FeedIntent::Abandoned => FeedState {
                loading: false,
                ..state
            },
        }
    }
}

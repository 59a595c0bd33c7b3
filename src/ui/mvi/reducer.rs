use super::intent::Intent;
use super::state::UiState;

/// The only place where state transitions happen.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Pure function: no I/O, no clocks, no channels.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

/// Marker trait for renderable UI state.
///
/// States are published by value to subscribers, so they must be cheap to
/// clone and comparable for change detection.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}

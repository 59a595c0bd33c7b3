/// Marker trait for events that drive a state transition.
///
/// Intents cross task boundaries (a blocking load reports back into the
/// store), so they must be `Send`.
pub trait Intent: Send + 'static {}

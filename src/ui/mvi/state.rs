/// Marker for state owned by a reducer.
///
/// `Default` lets `App` move the state out with `std::mem::take` before
/// handing it to the reducer; `PartialEq` lets callers tell whether a
/// dispatch changed anything.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Marker for values a reducer consumes: key-driven actions on the widget.
pub trait Intent: Send + 'static {}

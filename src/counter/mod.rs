//! Bounded counter core.
//!
//! Everything that decides what the widget *is* lives here: the clamped
//! value, the colors derived from it, and the edge detector that decides
//! when arriving at the maximum should be celebrated. Nothing in this module
//! touches the terminal.

mod bounded;
mod color;
mod edge;
mod error;

pub use bounded::{BoundedCounter, CounterSnapshot, DEFAULT_MAX, DEFAULT_MIN};
pub use color::{color_for, DisplayColor, MILESTONE_A, MILESTONE_B};
pub use edge::{CelebrationEdge, CelebrationPhase};
pub use error::CounterError;

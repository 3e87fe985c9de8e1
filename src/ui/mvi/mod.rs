//! Model-View-Intent primitives for the widget.
//!
//! ```text
//! key ──→ Intent ──→ Reducer ──→ State ──→ draw
//!  ↑                                         │
//!  └─────────────────────────────────────────┘
//! ```
//!
//! Reducers are pure. Anything with an effect (scheduling the celebration,
//! logging) happens in `App` around the dispatch.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;

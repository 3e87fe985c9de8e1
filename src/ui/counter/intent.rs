use crate::ui::mvi::Intent;

/// The two user-facing commands of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterIntent {
    Increase,
    Decrease,
}

impl Intent for CounterIntent {}

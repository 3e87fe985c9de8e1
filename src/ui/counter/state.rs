use crate::counter::BoundedCounter;
use crate::ui::mvi::UiState;

impl UiState for BoundedCounter {}

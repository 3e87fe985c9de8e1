use crate::counter::BoundedCounter;
use crate::ui::mvi::Reducer;

use super::intent::CounterIntent;

/// Applies counter intents. Boundary hits come back unchanged; arrival
/// detection is the caller's job.
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = BoundedCounter;
    type Intent = CounterIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CounterIntent::Increase => {
                state.increment();
            }
            CounterIntent::Decrease => {
                state.decrement();
            }
        }
        state
    }
}

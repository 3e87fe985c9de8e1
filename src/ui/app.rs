use crate::celebration::LazyCelebration;
use crate::counter::{BoundedCounter, CelebrationEdge, CounterError, CounterSnapshot};
use crate::i18n::{Localizer, Strings};
use crate::ui::counter::{CounterIntent, CounterReducer};
use crate::ui::mvi::Reducer;
use ratatui::layout::Rect;
use std::collections::VecDeque;

/// Which control Enter/Space activates.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ControlFocus {
    Decrease,
    Increase,
}

impl ControlFocus {
    pub fn intent(self) -> CounterIntent {
        match self {
            ControlFocus::Decrease => CounterIntent::Decrease,
            ControlFocus::Increase => CounterIntent::Increase,
        }
    }

    fn other(self) -> Self {
        match self {
            ControlFocus::Decrease => ControlFocus::Increase,
            ControlFocus::Increase => ControlFocus::Decrease,
        }
    }
}

/// Work deferred until the next frame has been drawn.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PostRenderTask {
    Celebrate,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: ControlFocus,
    /// Counter state (MVI pattern).
    counter: BoundedCounter,
    edge: CelebrationEdge,
    post_render: VecDeque<PostRenderTask>,
    celebration: LazyCelebration,
    localizer: Localizer,
    arrivals: u64,
}

impl App {
    pub fn new(counter: BoundedCounter, localizer: Localizer) -> Self {
        Self::with_celebration(counter, localizer, LazyCelebration::confetti())
    }

    /// Builds the app with a caller-supplied celebration. A counter that
    /// starts at `max` schedules one celebration for after the first frame.
    pub fn with_celebration(
        counter: BoundedCounter,
        localizer: Localizer,
        celebration: LazyCelebration,
    ) -> Self {
        let mut app = Self {
            should_quit: false,
            focus: ControlFocus::Increase,
            counter,
            edge: CelebrationEdge::new(),
            post_render: VecDeque::new(),
            celebration,
            localizer,
            arrivals: 0,
        };
        app.observe_counter();
        app.settle_focus();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn counter(&self) -> &BoundedCounter {
        &self.counter
    }

    pub fn snapshot(&self) -> CounterSnapshot {
        self.counter.snapshot()
    }

    pub fn strings(&self) -> &Strings {
        self.localizer.strings()
    }

    pub fn celebration(&self) -> &LazyCelebration {
        &self.celebration
    }

    /// Number of arrivals at max seen so far.
    pub fn arrivals(&self) -> u64 {
        self.arrivals
    }

    pub fn pending_post_render(&self) -> usize {
        self.post_render.len()
    }

    pub fn focus(&self) -> ControlFocus {
        self.focus
    }

    pub fn move_focus(&mut self) {
        let next = self.focus.other();
        if self.is_enabled(next.intent()) {
            self.focus = next;
        }
    }

    /// Increase is disabled at max, decrease at min.
    pub fn is_enabled(&self, intent: CounterIntent) -> bool {
        match intent {
            CounterIntent::Increase => !self.counter.at_max(),
            CounterIntent::Decrease => !self.counter.at_min(),
        }
    }

    /// Runs a user action. Disabled actions are rejected before reaching the
    /// reducer; returns whether the action ran.
    pub fn activate(&mut self, intent: CounterIntent) -> bool {
        if !self.is_enabled(intent) {
            tracing::debug!(?intent, count = self.counter.count(), "Ignoring disabled action");
            return false;
        }
        self.dispatch(intent);
        true
    }

    pub fn activate_focused(&mut self) -> bool {
        self.activate(self.focus.intent())
    }

    /// Programmatic set, re-validated against the range.
    pub fn set_count(&mut self, value: i64) -> Result<(), CounterError> {
        self.counter.set(value)?;
        self.observe_counter();
        self.settle_focus();
        Ok(())
    }

    /// Drains work queued for after the frame. `target` is the area the
    /// celebration draws over, `None` if the frame had no room for it.
    pub fn after_render(&mut self, target: Option<Rect>) {
        while let Some(task) = self.post_render.pop_front() {
            match task {
                PostRenderTask::Celebrate => {
                    self.celebration.trigger(target);
                }
            }
        }
    }

    pub fn on_tick(&mut self) {
        self.celebration.tick();
    }

    fn dispatch(&mut self, intent: CounterIntent) {
        dispatch_mvi!(self, counter, CounterReducer, intent);
        tracing::trace!(?intent, count = self.counter.count(), "Counter updated");
        self.observe_counter();
        self.settle_focus();
    }

    fn observe_counter(&mut self) {
        if self.edge.observe(&self.counter) {
            self.arrivals += 1;
            tracing::info!(max = self.counter.max(), "Counter reached max");
            self.post_render.push_back(PostRenderTask::Celebrate);
        }
    }

    /// A focused control that just became disabled hands focus to the other one.
    fn settle_focus(&mut self) {
        if !self.is_enabled(self.focus.intent()) && self.is_enabled(self.focus.other().intent()) {
            self.focus = self.focus.other();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(count: i64, min: i64, max: i64) -> App {
        App::new(BoundedCounter::new(count, min, max).unwrap(), Localizer::default())
    }

    #[test]
    fn disabled_increase_is_rejected() {
        let mut app = app(10, 0, 10);
        assert!(!app.activate(CounterIntent::Increase));
        assert_eq!(app.counter().count(), 10);
    }

    #[test]
    fn focus_leaves_disabled_control() {
        let mut app = app(9, 0, 10);
        assert_eq!(app.focus(), ControlFocus::Increase);
        assert!(app.activate_focused());
        assert_eq!(app.focus(), ControlFocus::Decrease);
    }

    #[test]
    fn move_focus_skips_disabled_control() {
        let mut app = app(0, 0, 10);
        app.move_focus();
        assert_eq!(app.focus(), ControlFocus::Increase);
    }

    #[test]
    fn starting_at_max_queues_one_celebration() {
        let app = app(10, 0, 10);
        assert_eq!(app.arrivals(), 1);
        assert_eq!(app.pending_post_render(), 1);
    }

    #[test]
    fn set_count_to_max_is_an_arrival() {
        let mut app = app(2, 0, 10);
        app.set_count(10).unwrap();
        assert_eq!(app.arrivals(), 1);
        assert!(app.set_count(11).is_err());
        assert_eq!(app.counter().count(), 10);
    }
}

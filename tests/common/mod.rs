//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use counter_app::celebration::{CelebrationEffect, LazyCelebration};
use counter_app::counter::BoundedCounter;
use counter_app::i18n::Localizer;
use counter_app::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Target handed to `App::after_render` when a test simulates a drawn frame.
pub const FRAME_TARGET: Rect = Rect {
    x: 0,
    y: 3,
    width: 40,
    height: 10,
};

/// Effect that only counts how often it popped.
pub struct SpyEffect {
    pops: Arc<AtomicUsize>,
}

impl CelebrationEffect for SpyEffect {
    fn pop(&mut self, _target: Rect) {
        self.pops.fetch_add(1, Ordering::SeqCst);
    }

    fn tick(&mut self) {}

    fn is_active(&self) -> bool {
        false
    }

    fn render(&self, _buf: &mut Buffer) {}
}

/// Pop counter shared with a `SpyEffect`.
#[derive(Clone, Default)]
pub struct Pops(Arc<AtomicUsize>);

impl Pops {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

pub fn spy_celebration() -> (LazyCelebration, Pops) {
    let pops = Pops::default();
    let shared = Arc::clone(&pops.0);
    let celebration = LazyCelebration::new(move || Box::new(SpyEffect { pops: shared }));
    (celebration, pops)
}

pub fn counter(count: i64, min: i64, max: i64) -> BoundedCounter {
    BoundedCounter::new(count, min, max).expect("valid range")
}

pub fn make_app(count: i64, min: i64, max: i64) -> App {
    App::new(counter(count, min, max), Localizer::default())
}

pub fn make_spy_app(count: i64, min: i64, max: i64) -> (App, Pops) {
    let (celebration, pops) = spy_celebration();
    let app = App::with_celebration(counter(count, min, max), Localizer::default(), celebration);
    (app, pops)
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

/// Text of one buffer row.
pub fn row_text(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width)
        .map(|x| buf[(x, y)].symbol().to_string())
        .collect()
}

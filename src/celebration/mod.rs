//! Celebration effect fired when the counter arrives at its maximum.
//!
//! The effect is an opaque capability behind [`CelebrationEffect`]. `App`
//! holds it through [`LazyCelebration`], which builds the effect on the
//! first trigger and keeps it afterwards.

mod confetti;

pub use confetti::{Confetti, BURST_TICKS};

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

/// A decorative effect drawn over the widget.
pub trait CelebrationEffect: Send {
    /// Starts (or restarts) the effect over `target`.
    fn pop(&mut self, target: Rect);

    /// Advances the animation by one tick.
    fn tick(&mut self);

    fn is_active(&self) -> bool;

    /// Draws the current frame. Cells outside the buffer are skipped.
    fn render(&self, buf: &mut Buffer);
}

pub type EffectLoader = Box<dyn FnOnce() -> Box<dyn CelebrationEffect> + Send>;

/// Lazily resolved celebration effect.
///
/// Until the first trigger nothing is built, ticks are no-ops and nothing is
/// rendered.
pub struct LazyCelebration {
    loader: Option<EffectLoader>,
    effect: Option<Box<dyn CelebrationEffect>>,
}

impl Default for LazyCelebration {
    fn default() -> Self {
        Self::confetti()
    }
}

impl LazyCelebration {
    pub fn new<F>(loader: F) -> Self
    where
        F: FnOnce() -> Box<dyn CelebrationEffect> + Send + 'static,
    {
        Self {
            loader: Some(Box::new(loader)),
            effect: None,
        }
    }

    pub fn confetti() -> Self {
        Self::new(|| Box::new(Confetti::new()))
    }

    pub fn is_resolved(&self) -> bool {
        self.effect.is_some()
    }

    /// Fires the effect over `target`.
    ///
    /// Resolves the effect first if needed. A missing or empty target makes
    /// this a no-op; returns whether the effect actually popped.
    pub fn trigger(&mut self, target: Option<Rect>) -> bool {
        if self.effect.is_none() {
            if let Some(loader) = self.loader.take() {
                tracing::debug!(target: "celebration", "Resolving celebration effect");
                self.effect = Some(loader());
            }
        }
        let Some(effect) = self.effect.as_mut() else {
            return false;
        };
        match target {
            Some(area) if !area.is_empty() => {
                effect.pop(area);
                true
            }
            _ => {
                tracing::debug!(target: "celebration", "No celebration target, skipping");
                false
            }
        }
    }

    pub fn tick(&mut self) {
        if let Some(effect) = self.effect.as_mut() {
            effect.tick();
        }
    }

    pub fn is_active(&self) -> bool {
        self.effect.as_ref().is_some_and(|effect| effect.is_active())
    }

    pub fn render(&self, buf: &mut Buffer) {
        if let Some(effect) = self.effect.as_ref() {
            if effect.is_active() {
                effect.render(buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingEffect {
        pops: Arc<AtomicUsize>,
    }

    impl CelebrationEffect for CountingEffect {
        fn pop(&mut self, _target: Rect) {
            self.pops.fetch_add(1, Ordering::SeqCst);
        }
        fn tick(&mut self) {}
        fn is_active(&self) -> bool {
            false
        }
        fn render(&self, _buf: &mut Buffer) {}
    }

    fn counting(loads: Arc<AtomicUsize>, pops: Arc<AtomicUsize>) -> LazyCelebration {
        LazyCelebration::new(move || {
            loads.fetch_add(1, Ordering::SeqCst);
            Box::new(CountingEffect { pops })
        })
    }

    #[test]
    fn unresolved_until_first_trigger() {
        let loads = Arc::new(AtomicUsize::new(0));
        let pops = Arc::new(AtomicUsize::new(0));
        let mut celebration = counting(Arc::clone(&loads), Arc::clone(&pops));
        celebration.tick();
        assert!(!celebration.is_resolved());
        assert_eq!(loads.load(Ordering::SeqCst), 0);

        assert!(celebration.trigger(Some(Rect::new(0, 0, 10, 4))));
        assert!(celebration.is_resolved());
        assert_eq!(pops.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn loader_runs_once() {
        let loads = Arc::new(AtomicUsize::new(0));
        let pops = Arc::new(AtomicUsize::new(0));
        let mut celebration = counting(Arc::clone(&loads), Arc::clone(&pops));
        celebration.trigger(Some(Rect::new(0, 0, 10, 4)));
        celebration.trigger(Some(Rect::new(0, 0, 10, 4)));
        assert_eq!(loads.load(Ordering::SeqCst), 1);
        assert_eq!(pops.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn missing_target_is_noop() {
        let loads = Arc::new(AtomicUsize::new(0));
        let pops = Arc::new(AtomicUsize::new(0));
        let mut celebration = counting(Arc::clone(&loads), Arc::clone(&pops));
        assert!(!celebration.trigger(None));
        assert!(!celebration.trigger(Some(Rect::new(0, 0, 0, 3))));
        assert_eq!(pops.load(Ordering::SeqCst), 0);
    }
}

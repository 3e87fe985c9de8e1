use super::bounded::BoundedCounter;

/// Where the counter sits relative to its maximum, as far as celebrating
/// is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CelebrationPhase {
    #[default]
    BelowMax,
    AtMax,
}

/// Edge detector for arrivals at `max`.
///
/// Fires on the `BelowMax -> AtMax` transition only. Staying at max (no-op
/// increments, redraws) never fires again; any observation below max re-arms
/// the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CelebrationEdge {
    phase: CelebrationPhase,
}

impl CelebrationEdge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> CelebrationPhase {
        self.phase
    }

    /// Records the counter's current state. Returns `true` when this
    /// observation is an arrival at max.
    pub fn observe(&mut self, counter: &BoundedCounter) -> bool {
        let next = if counter.at_max() {
            CelebrationPhase::AtMax
        } else {
            CelebrationPhase::BelowMax
        };
        let arrived = self.phase == CelebrationPhase::BelowMax && next == CelebrationPhase::AtMax;
        self.phase = next;
        arrived
    }
}

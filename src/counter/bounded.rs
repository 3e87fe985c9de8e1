use super::color::{color_for, DisplayColor};
use super::error::CounterError;

pub const DEFAULT_MIN: i64 = 0;
pub const DEFAULT_MAX: i64 = 10;

/// Integer counter clamped to the closed range `[min, max]`.
///
/// `min` and `max` are fixed once the counter exists. The count only moves
/// by unit steps through [`increment`](Self::increment) and
/// [`decrement`](Self::decrement), or through [`set`](Self::set) which
/// re-validates the range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedCounter {
    count: i64,
    min: i64,
    max: i64,
    title: String,
}

/// Read-only projection handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterSnapshot {
    pub count: i64,
    pub min: i64,
    pub max: i64,
    pub at_min: bool,
    pub at_max: bool,
    pub color: DisplayColor,
}

impl Default for BoundedCounter {
    fn default() -> Self {
        Self {
            count: 0,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            title: String::new(),
        }
    }
}

impl BoundedCounter {
    /// Builds a counter, failing fast on an inverted range or a start value
    /// outside it.
    pub fn new(count: i64, min: i64, max: i64) -> Result<Self, CounterError> {
        if min > max {
            return Err(CounterError::InvalidRange { min, max });
        }
        if !(min..=max).contains(&count) {
            return Err(CounterError::OutOfRange {
                value: count,
                min,
                max,
            });
        }
        Ok(Self {
            count,
            min,
            max,
            title: String::new(),
        })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn at_min(&self) -> bool {
        self.count == self.min
    }

    pub fn at_max(&self) -> bool {
        self.count == self.max
    }

    pub fn display_color(&self) -> DisplayColor {
        color_for(self.count, self.min, self.max)
    }

    /// Steps up by one unless already at `max`. Returns whether the count moved.
    pub fn increment(&mut self) -> bool {
        if self.count < self.max {
            self.count += 1;
            true
        } else {
            false
        }
    }

    /// Steps down by one unless already at `min`. Returns whether the count moved.
    pub fn decrement(&mut self) -> bool {
        if self.count > self.min {
            self.count -= 1;
            true
        } else {
            false
        }
    }

    /// Sets the count directly. Values outside `[min, max]` are rejected and
    /// leave the counter untouched.
    pub fn set(&mut self, value: i64) -> Result<(), CounterError> {
        if !(self.min..=self.max).contains(&value) {
            return Err(CounterError::OutOfRange {
                value,
                min: self.min,
                max: self.max,
            });
        }
        self.count = value;
        Ok(())
    }

    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            count: self.count,
            min: self.min,
            max: self.max,
            at_min: self.at_min(),
            at_max: self.at_max(),
            color: self.display_color(),
        }
    }
}

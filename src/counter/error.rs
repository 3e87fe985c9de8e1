use thiserror::Error;

/// Errors raised when a counter is built or set with values outside its range.
///
/// Boundary clamping during increment/decrement is not an error and never
/// produces one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CounterError {
    #[error("min ({min}) must not exceed max ({max})")]
    InvalidRange { min: i64, max: i64 },

    #[error("count {value} is outside the range [{min}, {max}]")]
    OutOfRange { value: i64, min: i64, max: i64 },
}

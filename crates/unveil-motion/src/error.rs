//! Error types for group registration.

use thiserror::Error;

/// Errors rejected at `register` time.
///
/// Registration is all-or-nothing; a rejected group leaves no partial
/// subscription behind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotionError {
    /// An element declared a negative stagger delay.
    #[error("element {index} has a negative delay of {delay_ms} ms")]
    NegativeDelay { index: usize, delay_ms: f32 },

    /// The trigger threshold is outside the valid [0, 1] range.
    #[error("visibility threshold {value} is outside [0, 1]")]
    ThresholdOutOfRange { value: f32 },
}

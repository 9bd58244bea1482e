//! Error types for the encoder state tracker.

use crate::kinematics::KinematicsError;
use thiserror::Error;

/// Errors that can surface from encoder operations.
#[derive(Error, Debug)]
pub enum EncoderError {
    /// An integrity guard no longer holds its magic value. This means the
    /// state block was overwritten by something else — memory corruption,
    /// fatal-class. Reported, never repaired here; the health-check caller
    /// decides whether to halt or reset.
    #[error("encoder assertion failure: {guard} guard is {found:#010x}, expected {expected:#010x}")]
    AssertionFailure {
        /// Which guard mismatched ("start" or "end")
        guard: &'static str,
        /// Value actually read
        found: u32,
        /// The magic constant that should be there
        expected: u32,
    },

    /// Motor index outside `0..MOTOR_COUNT`.
    #[error("invalid motor index {motor} (motor count is {count})")]
    InvalidMotor {
        /// Index supplied by the caller
        motor: usize,
        /// Configured motor count
        count: usize,
    },

    /// Kinematics transform failure, propagated through `align` unchanged.
    #[error("kinematics: {source}")]
    Kinematics {
        /// Source kinematics error
        #[from]
        source: KinematicsError,
    },
}

/// Result type for encoder operations
pub type EncoderResult<T> = Result<T, EncoderError>;

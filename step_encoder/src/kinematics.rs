//! Kinematics seam between axis space and motor step space.
//!
//! The encoder only needs the inverse direction: an absolute axis-space
//! position (machine units, e.g. mm or degrees) into a floating-point
//! step position per motor. The full kinematics model belongs to the
//! motion pipeline; this trait is the interface boundary the alignment
//! operation calls through.

use crate::consts::{AXIS_COUNT, MOTOR_COUNT};
use thiserror::Error;

/// Errors a kinematics transform can produce.
#[derive(Error, Debug)]
pub enum KinematicsError {
    /// The axis position has no valid step-space image (e.g. a singular
    /// or unreachable configuration for non-Cartesian machines).
    #[error("unreachable axis position: {detail}")]
    Unreachable {
        /// Human-readable description of the failing input
        detail: String,
    },

    /// The transform produced a non-finite step position.
    #[error("non-finite step position for motor {motor}")]
    NonFinite {
        /// Motor whose step position was NaN or infinite
        motor: usize,
    },
}

/// Axis-space to step-space transform.
///
/// Pure and side-effect-free from the encoder's point of view. Fallible so
/// machine geometries with unreachable regions can reject an input; the
/// failure propagates out of [`crate::EncoderSet::align`] unchanged.
pub trait Kinematics {
    /// Convert an absolute axis position into floating-point step
    /// positions, one per motor.
    fn axis_to_steps(
        &self,
        axis_position: &[f64; AXIS_COUNT],
    ) -> Result<[f64; MOTOR_COUNT], KinematicsError>;
}

/// Per-motor linear scaling: motor `i` follows axis `i` at a fixed
/// steps-per-unit ratio. The Cartesian default; enough for the self-test
/// binary and the integration tests.
#[derive(Debug, Clone)]
pub struct LinearKinematics {
    steps_per_unit: [f64; MOTOR_COUNT],
}

impl LinearKinematics {
    /// Create a linear transform from per-motor scale factors.
    pub fn new(steps_per_unit: [f64; MOTOR_COUNT]) -> Self {
        Self { steps_per_unit }
    }
}

impl Kinematics for LinearKinematics {
    fn axis_to_steps(
        &self,
        axis_position: &[f64; AXIS_COUNT],
    ) -> Result<[f64; MOTOR_COUNT], KinematicsError> {
        let mut steps = [0.0; MOTOR_COUNT];
        for (motor, step) in steps.iter_mut().enumerate() {
            *step = axis_position[motor] * self.steps_per_unit[motor];
            if !step.is_finite() {
                return Err(KinematicsError::NonFinite { motor });
            }
        }
        Ok(steps)
    }
}

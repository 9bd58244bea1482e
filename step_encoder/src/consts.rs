//! Compile-time counts for the motion system.
//!
//! Single source of truth for the axis and motor dimensions. Both are
//! build-time properties of the machine, not runtime configuration: the
//! step-loading path indexes fixed arrays and must not allocate.

use static_assertions::const_assert;

/// Number of logical axes (X, Y, Z, A, B, C).
pub const AXIS_COUNT: usize = 6;

/// Number of physical stepper motors.
pub const MOTOR_COUNT: usize = 6;

// The bundled linear kinematics maps motor i to axis i.
const_assert!(MOTOR_COUNT <= AXIS_COUNT);
const_assert!(MOTOR_COUNT > 0);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_consistent() {
        assert!(AXIS_COUNT > 0 && AXIS_COUNT <= 16);
        assert!(MOTOR_COUNT > 0 && MOTOR_COUNT <= AXIS_COUNT);
    }
}

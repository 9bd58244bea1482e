//! # Step Encoder
//!
//! Step-count position feedback for an open-loop stepper motion controller.
//! The machine has no physical position sensor, so the "encoder" is a
//! software accumulator fed by the step-pulse generator: every completed
//! motion segment folds its realized step count into a per-motor integer
//! accumulator at the load event. The floating-point target/commanded
//! position lives elsewhere in the system; this crate tracks what was
//! actually stepped.
//!
//! ## Responsibilities
//!
//! 1. **Lifecycle** — construct/reset the per-motor state block and its
//!    integrity guards ([`EncoderSet::new`], [`EncoderSet::reset`],
//!    [`EncoderSet::verify_integrity`])
//! 2. **Ingestion** — absolute alignment from an axis-space position via
//!    the kinematics seam ([`EncoderSet::align`]), plus whole-step deltas
//!    from the pulse/load subsystem ([`EncoderSet::accumulate`])
//! 3. **Query** — rounded floating-point position reports for homing
//!    validation and drift diagnostics ([`EncoderSet::read`])
//!
//! ## What this crate is not
//!
//! No velocity estimation, no filtering, no drift correction. It is a pure
//! integer accumulator with a read-side rounding convention.

pub mod config;
pub mod consts;
pub mod error;
pub mod kinematics;
pub mod state;

pub use config::EncoderConfig;
pub use consts::{AXIS_COUNT, MOTOR_COUNT};
pub use error::{EncoderError, EncoderResult};
pub use kinematics::{Kinematics, KinematicsError, LinearKinematics};
pub use state::{EncoderChannel, EncoderSet};

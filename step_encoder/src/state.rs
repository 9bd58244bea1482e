//! Encoder state block: per-motor step accumulators with integrity guards.
//!
//! One [`EncoderChannel`] per physical motor holds the signed count of
//! step pulses issued since the last alignment. The block is bracketed by
//! two magic-value guards so a health sweep can detect an overrun from an
//! adjacent subsystem clobbering it.
//!
//! The original firmware mutated the accumulators only at its segment-load
//! interrupt level and relied on single-core priority ordering for
//! exclusion. That guarantee does not exist here, so each accumulator is
//! an atomic integer: accumulation is a single `fetch_add`, alignment a
//! `store`, query a `load`. A reader always observes a value before or
//! after a segment's contribution, never a torn one.

use std::sync::atomic::{AtomicI32, Ordering};

use tracing::debug;

use crate::config::EncoderConfig;
use crate::consts::{AXIS_COUNT, MOTOR_COUNT};
use crate::error::{EncoderError, EncoderResult};
use crate::kinematics::Kinematics;

/// Magic value held by both integrity guards.
const ENCODER_MAGIC: u32 = 0xB5E5_CA7E;

/// One stepper motor's step-count accumulator.
///
/// Updated only by whole-pulse increments/decrements; never holds a
/// fractional value.
#[derive(Debug)]
pub struct EncoderChannel {
    steps: AtomicI32,
}

impl EncoderChannel {
    const fn new() -> Self {
        Self {
            steps: AtomicI32::new(0),
        }
    }

    /// Current accumulator value in whole steps.
    #[inline]
    pub fn steps(&self) -> i32 {
        self.steps.load(Ordering::Acquire)
    }

    #[inline]
    fn set_steps(&self, steps: i32) {
        self.steps.store(steps, Ordering::Release);
    }

    /// Fold a signed whole-step delta into the accumulator, returning the
    /// new value.
    #[inline]
    pub fn accumulate(&self, delta: i32) -> i32 {
        self.steps.fetch_add(delta, Ordering::AcqRel) + delta
    }
}

/// The whole-system encoder state: one channel per motor, guarded.
///
/// Constructed once at startup and lives for the process lifetime. The
/// step-loading path mutates single channels via [`accumulate`]; the
/// alignment operation overwrites all channels at once; diagnostics read.
/// No channel is ever individually reset outside [`reset`].
///
/// [`accumulate`]: EncoderSet::accumulate
/// [`reset`]: EncoderSet::reset
#[derive(Debug)]
pub struct EncoderSet {
    magic_start: u32,
    channels: [EncoderChannel; MOTOR_COUNT],
    /// Read-side rounding bias in steps, from configuration.
    step_rounding: f64,
    magic_end: u32,
}

impl EncoderSet {
    /// Create a zeroed encoder set with both guards installed.
    ///
    /// Runs once at startup, before the motion pipeline is enabled;
    /// cannot fail.
    pub fn new(config: &EncoderConfig) -> Self {
        Self {
            magic_start: ENCODER_MAGIC,
            channels: [const { EncoderChannel::new() }; MOTOR_COUNT],
            step_rounding: config.step_rounding,
            magic_end: ENCODER_MAGIC,
        }
    }

    /// Re-initialize: zero every accumulator and rewrite both guards.
    ///
    /// The only way any channel returns to zero outside construction.
    pub fn reset(&mut self) {
        for channel in &self.channels {
            channel.set_steps(0);
        }
        self.magic_start = ENCODER_MAGIC;
        self.magic_end = ENCODER_MAGIC;
        debug!("encoder set reset, all channels zeroed");
    }

    /// Check both integrity guards.
    ///
    /// Pure read, no allocation, no blocking; callable at any time after
    /// construction, including from fault-handling paths. A mismatch
    /// means the state block was overwritten and is fatal-class — this
    /// reports, it does not repair.
    pub fn verify_integrity(&self) -> EncoderResult<()> {
        if self.magic_start != ENCODER_MAGIC {
            return Err(EncoderError::AssertionFailure {
                guard: "start",
                found: self.magic_start,
                expected: ENCODER_MAGIC,
            });
        }
        if self.magic_end != ENCODER_MAGIC {
            return Err(EncoderError::AssertionFailure {
                guard: "end",
                found: self.magic_end,
                expected: ENCODER_MAGIC,
            });
        }
        Ok(())
    }

    /// Set every channel to match an absolute axis-space position.
    ///
    /// Converts the axis position to floating-point step positions through
    /// the kinematics transform, rounds each half-away-from-zero (the same
    /// convention the pulse generator applies to fractional step targets)
    /// and stores the integer result. This establishes the step grid
    /// relative to the given machine position; the accumulators are whole
    /// steps, so they represent it exactly only at integer-step
    /// granularity.
    ///
    /// Caller precondition: the machine must be stationary and no segment
    /// load in flight. Aligning during motion produces a discontinuity;
    /// it is not detected here. Transform failures propagate unchanged.
    pub fn align<K: Kinematics>(
        &self,
        kinematics: &K,
        axis_position: &[f64; AXIS_COUNT],
    ) -> EncoderResult<()> {
        let step_position = kinematics.axis_to_steps(axis_position)?;
        for (motor, channel) in self.channels.iter().enumerate() {
            channel.set_steps(step_position[motor].round() as i32);
        }
        debug!(?step_position, "encoders aligned to axis position");
        Ok(())
    }

    /// Read one motor's position as a float, with the rounding bias added.
    ///
    /// The pulse generator counts steps per segment; those counts are
    /// folded into the accumulator only at the load event, once the
    /// segment has fully executed. The value returned here is therefore
    /// always stable — but it lags both the commanded target and the
    /// instantaneous physical position until the current segment
    /// completes. That lag is a designed property: the accumulator only
    /// ever holds fully-realized step counts, never speculative ones.
    pub fn read(&self, motor: usize) -> EncoderResult<f64> {
        let channel = self.channel(motor)?;
        Ok(f64::from(channel.steps()) + self.step_rounding)
    }

    /// Fold a completed segment's signed step delta into one channel.
    ///
    /// Mutation target for the external pulse/load subsystem; the timing
    /// (one call per load event) is driven there, not here. Returns the
    /// new accumulator value.
    pub fn accumulate(&self, motor: usize, delta: i32) -> EncoderResult<i32> {
        Ok(self.channel(motor)?.accumulate(delta))
    }

    /// Borrow one channel, rejecting out-of-range motor indices.
    pub fn channel(&self, motor: usize) -> EncoderResult<&EncoderChannel> {
        self.channels.get(motor).ok_or(EncoderError::InvalidMotor {
            motor,
            count: MOTOR_COUNT,
        })
    }
}

// ─── Tests ──────────────────────────────────────────────────────────

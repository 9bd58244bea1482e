//! TOML configuration loader with validation.
//!
//! Owns the two calibration surfaces the encoder core consumes but does
//! not compute: the read-side rounding bias and the per-motor scaling for
//! the bundled linear kinematics.

use crate::consts::MOTOR_COUNT;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Default read-side rounding bias, in steps.
pub const DEFAULT_STEP_ROUNDING: f64 = 0.125;

/// Configuration loading/validation error.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File I/O error.
    #[error("config I/O error: {0}")]
    Io(String),
    /// TOML parse error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Parameter validation error.
    #[error("config validation: {0}")]
    Validation(String),
}

/// Encoder calibration and machine scaling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncoderConfig {
    /// Additive bias applied to every read, in steps. Biases the reported
    /// value away from systematic truncation toward the physical center
    /// of a step. Calibration constant; nothing in the core computes it.
    #[serde(default = "default_step_rounding")]
    pub step_rounding: f64,

    /// Steps per machine unit for each motor (linear kinematics scale).
    /// Negative values reverse the motor's direction.
    pub steps_per_unit: [f64; MOTOR_COUNT],
}

fn default_step_rounding() -> f64 {
    DEFAULT_STEP_ROUNDING
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            step_rounding: DEFAULT_STEP_ROUNDING,
            steps_per_unit: [80.0; MOTOR_COUNT],
        }
    }
}

impl EncoderConfig {
    /// Load and validate a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("failed to read {}: {e}", path.display())))?;
        let config: Self =
            toml::from_str(&text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate parameter bounds.
    ///
    /// The bias must stay below half a step; a larger value would cross
    /// into the neighboring step and defeat the rounding convention.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.step_rounding.is_finite() || self.step_rounding < 0.0 || self.step_rounding >= 0.5
        {
            return Err(ConfigError::Validation(format!(
                "step_rounding must be in [0, 0.5), got {}",
                self.step_rounding
            )));
        }
        for (motor, &spu) in self.steps_per_unit.iter().enumerate() {
            if !spu.is_finite() || spu == 0.0 {
                return Err(ConfigError::Validation(format!(
                    "steps_per_unit[{motor}] must be finite and non-zero, got {spu}"
                )));
            }
        }
        Ok(())
    }
}

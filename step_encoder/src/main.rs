//! # Encoder Self-Test
//!
//! Stand-alone diagnostic sweep for the encoder state tracker: loads the
//! calibration config, constructs the encoder set, runs the integrity
//! check, aligns to the machine origin and reports every motor's reading.
//! Exits non-zero if any check fails, so it can run from a system health
//! sweep.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{error, info, warn};

use step_encoder::{EncoderConfig, EncoderSet, LinearKinematics, AXIS_COUNT, MOTOR_COUNT};

/// Encoder state tracker — diagnostic self-test
#[derive(Parser, Debug)]
#[command(name = "step_encoder")]
#[command(version)]
#[command(about = "Self-test sweep for the step-count encoder")]
struct Args {
    /// Path to the encoder calibration TOML.
    #[arg(default_value = "config/encoder.toml")]
    config: PathBuf,

    /// Enable verbose logging (DEBUG level).
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| level.into()),
        )
        .init();

    info!("encoder self-test v{} starting", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&args) {
        error!("FATAL: {e}");
        process::exit(1);
    }

    info!("encoder self-test passed");
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = match EncoderConfig::load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            warn!("{e}; falling back to default calibration");
            EncoderConfig::default()
        }
    };

    let kinematics = LinearKinematics::new(config.steps_per_unit);
    let encoders = EncoderSet::new(&config);

    encoders.verify_integrity()?;
    info!("integrity guards OK");

    encoders.align(&kinematics, &[0.0; AXIS_COUNT])?;
    for motor in 0..MOTOR_COUNT {
        info!("motor {motor}: {} steps", encoders.read(motor)?);
    }

    Ok(())
}

// ABOUTME: Display binary for the fitness tracker sensor block
// ABOUTME: Decodes captured sensor packages and prints one summary line per workout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Tracker Project

//! Workout summary printer for the fitness tracker.
//!
//! Decodes the packages captured from the sensor block and prints the
//! display summary for each workout to stdout, one line per package.
//! Diagnostics go to stderr and never mix with the summary lines.
//!
//! Usage:
//! ```bash
//! # Print summaries for the captured packages
//! cargo run --bin fitness-tracker
//!
//! # Verbose decode tracing on stderr
//! RUST_LOG=debug cargo run --bin fitness-tracker
//!
//! # Machine-readable diagnostics
//! LOG_FORMAT=json cargo run --bin fitness-tracker
//! ```

use anyhow::{Context, Result};
use tracing::{debug, info};

use fitness_tracker::logging;
use fitness_tracker::models::Workout;

/// Packages captured from the sensor block.
///
/// Each entry is a workout code plus the positional data tuple the
/// sensors transmitted for that workout.
const PACKAGES: &[(&str, &[f64])] = &[
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

fn main() -> Result<()> {
    logging::init_from_env()?;

    info!(package_count = PACKAGES.len(), "Processing sensor packages");

    for (code, data) in PACKAGES {
        let workout = Workout::from_package(code, data)
            .with_context(|| format!("failed to decode package '{code}'"))?;
        let summary = workout
            .summary()
            .with_context(|| format!("failed to summarize package '{code}'"))?;

        debug!(
            code = %workout.code(),
            type_name = workout.type_name(),
            distance_km = summary.distance_km,
            mean_speed_kmh = summary.mean_speed_kmh,
            calories = summary.calories,
            "Decoded package"
        );

        println!("{summary}");
    }

    info!("All packages processed");

    Ok(())
}

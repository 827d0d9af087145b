// ABOUTME: Main library entry point for the fitness tracker
// ABOUTME: Decodes sensor workout packages and computes distance, speed and calorie summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Tracker Project

#![deny(unsafe_code)]

//! # Fitness Tracker
//!
//! A software module for a fitness tracker sensor block. The sensors
//! report each finished workout as a package: a short type code plus a
//! positional tuple of numeric readings. This crate decodes those
//! packages, computes the workout metrics, and renders the display
//! summary shown to the athlete.
//!
//! ## Features
//!
//! - **Three workout types**: running, sports walking and pool swimming
//! - **Per-type metrics**: distance, mean speed and spent calories
//! - **Display summaries**: one fixed-format report line per workout
//! - **Strict decoding**: unknown codes and malformed tuples are rejected
//!
//! ## Architecture
//!
//! - **Models**: workout codes, per-type records and the [`models::Workout`]
//!   dispatcher
//! - **Metrics**: the [`metrics::WorkoutMetrics`] trait with shared distance
//!   and speed formulas plus per-type calorie formulas
//! - **Summary**: the computed metric snapshot and its display rendering
//! - **Constants**: sensor calibration values and formula coefficients
//!
//! ## Example Usage
//!
//! ```rust
//! use fitness_tracker::errors::TrackerResult;
//! use fitness_tracker::models::Workout;
//!
//! fn main() -> TrackerResult<()> {
//!     let workout = Workout::from_package("RUN", &[15000.0, 1.0, 75.0])?;
//!     println!("{}", workout.summary()?);
//!     Ok(())
//! }
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// These modules are used by the binary crate (src/bin/) and integration
// tests (tests/). They must remain `pub` so external consumers can access
// them.

/// Sensor calibration values and formula coefficients
pub mod constants;

/// Unified error handling with stable error codes
pub mod errors;

/// Structured logging configuration
pub mod logging;

/// Workout metric formulas shared across workout types
pub mod metrics;

/// Workout codes, records and package decoding
pub mod models;

/// Computed metric snapshots and display rendering
pub mod summary;

// ABOUTME: Core data models for the fitness tracker
// ABOUTME: Defines WorkoutCode, the workout record structs and the Workout dispatcher
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Tracker Project

//! # Data Models
//!
//! This module contains the core data structures of the fitness tracker.
//! Sensor hardware reports each finished workout as a package: a short
//! code string identifying the workout type plus a positional tuple of
//! numeric readings. The models here turn such packages into strongly
//! typed records.
//!
//! ## Core Models
//!
//! - [`WorkoutCode`]: Enumeration of supported workout type codes
//! - [`Running`], [`SportsWalking`], [`Swimming`]: Per-type workout records
//! - [`Workout`]: Decoded workout, dispatching metric computation to the
//!   record it wraps

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{TrackerError, TrackerResult};
use crate::metrics::WorkoutMetrics;
use crate::summary::WorkoutSummary;

/// Workout type codes emitted by the sensor block.
///
/// Codes are matched exactly as transmitted. Lowercase or otherwise
/// mangled variants are rejected so that a corrupted package never
/// silently decodes as the wrong workout type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkoutCode {
    /// Pool swimming
    Swm,
    /// Running
    Run,
    /// Sports walking
    Wlk,
}

impl WorkoutCode {
    /// Wire form of the code, exactly as the sensor transmits it.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Swm => "SWM",
            Self::Run => "RUN",
            Self::Wlk => "WLK",
        }
    }

    /// Number of data fields a package with this code must carry.
    #[must_use]
    pub const fn field_count(self) -> usize {
        match self {
            Self::Swm => 5,
            Self::Run => 3,
            Self::Wlk => 4,
        }
    }
}

impl FromStr for WorkoutCode {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SWM" => Ok(Self::Swm),
            "RUN" => Ok(Self::Run),
            "WLK" => Ok(Self::Wlk),
            other => Err(TrackerError::invalid_argument(format!(
                "Unknown workout code: '{other}'. Valid codes: SWM, RUN, WLK"
            ))),
        }
    }
}

impl fmt::Display for WorkoutCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A running workout decoded from a `RUN` package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Running {
    /// Steps counted during the workout
    pub action_count: u32,
    /// Workout duration in hours
    pub duration_hours: f64,
    /// Athlete weight in kilograms
    pub weight_kg: f64,
}

impl Running {
    /// Create a running record from raw sensor readings.
    #[must_use]
    pub const fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
        }
    }
}

/// A sports walking workout decoded from a `WLK` package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportsWalking {
    /// Steps counted during the workout
    pub action_count: u32,
    /// Workout duration in hours
    pub duration_hours: f64,
    /// Athlete weight in kilograms
    pub weight_kg: f64,
    /// Athlete height in centimeters
    pub height_cm: f64,
}

impl SportsWalking {
    /// Create a walking record from raw sensor readings.
    #[must_use]
    pub const fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
            height_cm,
        }
    }
}

/// A pool swimming workout decoded from a `SWM` package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Swimming {
    /// Strokes counted during the workout
    pub action_count: u32,
    /// Workout duration in hours
    pub duration_hours: f64,
    /// Athlete weight in kilograms
    pub weight_kg: f64,
    /// Pool length in meters
    pub pool_length_m: f64,
    /// Number of pool lengths swum
    pub pool_lap_count: u32,
}

impl Swimming {
    /// Create a swimming record from raw sensor readings.
    #[must_use]
    pub const fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_lap_count: u32,
    ) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
            pool_length_m,
            pool_lap_count,
        }
    }
}

/// A decoded workout of any supported type.
///
/// Wraps the per-type record and routes every metric request to it, so
/// callers read distance, mean speed, calories and the display summary
/// without caring which workout type the package carried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Workout {
    /// Running workout
    Running(Running),
    /// Sports walking workout
    SportsWalking(SportsWalking),
    /// Pool swimming workout
    Swimming(Swimming),
}

impl Workout {
    /// Decode one sensor package into a typed workout record.
    ///
    /// Data fields are positional per workout code:
    ///
    /// | Code  | Fields |
    /// |-------|--------|
    /// | `SWM` | strokes, duration (h), weight (kg), pool length (m), pool laps |
    /// | `RUN` | steps, duration (h), weight (kg) |
    /// | `WLK` | steps, duration (h), weight (kg), height (cm) |
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidArgument`] when the code is not one
    /// of `SWM`, `RUN`, `WLK`, or when the data tuple length does not
    /// match the code.
    pub fn from_package(code: &str, data: &[f64]) -> TrackerResult<Self> {
        let code = code.parse::<WorkoutCode>()?;
        match (code, data) {
            (WorkoutCode::Swm, &[actions, duration, weight, pool_length, laps]) => {
                Ok(Self::Swimming(Swimming::new(
                    actions as u32,
                    duration,
                    weight,
                    pool_length,
                    laps as u32,
                )))
            }
            (WorkoutCode::Run, &[actions, duration, weight]) => {
                Ok(Self::Running(Running::new(actions as u32, duration, weight)))
            }
            (WorkoutCode::Wlk, &[actions, duration, weight, height]) => Ok(Self::SportsWalking(
                SportsWalking::new(actions as u32, duration, weight, height),
            )),
            _ => Err(TrackerError::invalid_argument(format!(
                "Workout code '{code}' expects {} data fields, got {}",
                code.field_count(),
                data.len()
            ))),
        }
    }

    /// Code of the wrapped workout type.
    #[must_use]
    pub const fn code(&self) -> WorkoutCode {
        match self {
            Self::Running(_) => WorkoutCode::Run,
            Self::SportsWalking(_) => WorkoutCode::Wlk,
            Self::Swimming(_) => WorkoutCode::Swm,
        }
    }

    fn metrics(&self) -> &dyn WorkoutMetrics {
        match self {
            Self::Running(workout) => workout,
            Self::SportsWalking(workout) => workout,
            Self::Swimming(workout) => workout,
        }
    }

    /// Human-readable name of the workout type.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.metrics().type_name()
    }

    /// Distance covered, in kilometers.
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        self.metrics().distance_km()
    }

    /// Mean speed over the whole workout, in km/h.
    #[must_use]
    pub fn mean_speed_kmh(&self) -> f64 {
        self.metrics().mean_speed_kmh()
    }

    /// Calories burned during the workout.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidOperation`] if the wrapped record
    /// does not provide a calorie formula. All shipped workout types do,
    /// so this surfaces only when a new type is wired up incompletely.
    pub fn spent_calories(&self) -> TrackerResult<f64> {
        self.metrics().spent_calories()
    }

    /// Compute the full display summary for this workout.
    ///
    /// # Errors
    ///
    /// Propagates [`TrackerError::InvalidOperation`] from
    /// [`Self::spent_calories`].
    pub fn summary(&self) -> TrackerResult<WorkoutSummary> {
        let metrics = self.metrics();
        Ok(WorkoutSummary {
            type_name: metrics.type_name().to_owned(),
            duration_hours: metrics.duration_hours(),
            distance_km: metrics.distance_km(),
            mean_speed_kmh: metrics.mean_speed_kmh(),
            calories: metrics.spent_calories()?,
        })
    }
}

// ABOUTME: Workout metric formulas - distance, mean speed, and calorie calculations
// ABOUTME: Base formulas live in the WorkoutMetrics trait; each workout type overrides its specializations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Tracker Project

//! # Workout Metric Formulas
//!
//! The metric capability is a trait with provided base methods, mirroring
//! the sensor unit's reference hierarchy: a generic workout knows how to
//! derive distance and mean speed from its action count, and each concrete
//! workout type overrides exactly the formulas it specializes.
//!
//! Overrides per type:
//!
//! - `Running`: calories
//! - `SportsWalking`: calories
//! - `Swimming`: step length (stroke length), mean speed, calories
//!
//! The provided calorie method is a design guard: it returns
//! [`TrackerError::InvalidOperation`] so that a workout type without its own
//! calorie formula cannot silently report zero. No type constructed by the
//! package decoder hits it.

use crate::constants::{distance, running, swimming, units, walking};
use crate::errors::{TrackerError, TrackerResult};
use crate::models::{Running, SportsWalking, Swimming};

/// Metric formulas shared by all workout types
///
/// Implementors supply the raw sensor accessors; the provided methods derive
/// the metrics. Speeds are km/h, distances km, durations hours.
pub trait WorkoutMetrics {
    /// Number of actions recorded by the sensor (steps or strokes)
    fn action_count(&self) -> u32;

    /// Workout duration in hours
    ///
    /// Assumed positive; the metric formulas divide by it.
    fn duration_hours(&self) -> f64;

    /// Athlete weight in kilograms
    fn weight_kg(&self) -> f64;

    /// Human-readable workout type name as printed in summaries
    fn type_name(&self) -> &'static str;

    /// Distance covered by a single action (meters)
    ///
    /// Step-based workouts use the default step length; swimming overrides
    /// this with its stroke length.
    fn step_length_m(&self) -> f64 {
        distance::STEP_LENGTH_M
    }

    /// Distance covered during the workout (kilometers)
    ///
    /// Formula: `action_count * step_length_m / meters_per_km`
    fn distance_km(&self) -> f64 {
        f64::from(self.action_count()) * self.step_length_m() / distance::METERS_PER_KM
    }

    /// Mean speed over the workout (km/h)
    ///
    /// Formula: `distance_km / duration_hours`
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration_hours()
    }

    /// Calories burned during the workout (kcal)
    ///
    /// # Errors
    ///
    /// The provided body returns [`TrackerError::InvalidOperation`]: there is
    /// no generic calorie formula, so every workout type must override this
    /// method.
    fn spent_calories(&self) -> TrackerResult<f64> {
        Err(TrackerError::invalid_operation(format!(
            "spent_calories must be overridden for workout type '{}'",
            self.type_name()
        )))
    }
}

impl WorkoutMetrics for Running {
    fn action_count(&self) -> u32 {
        self.action_count
    }

    fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn type_name(&self) -> &'static str {
        "Running"
    }

    /// Formula: `(18 * speed_kmh + 1.79) * weight_kg / 1000 * duration_minutes`
    fn spent_calories(&self) -> TrackerResult<f64> {
        let duration_minutes = self.duration_hours * units::MINUTES_PER_HOUR;
        Ok(
            running::MEAN_SPEED_MULTIPLIER.mul_add(self.mean_speed_kmh(), running::MEAN_SPEED_SHIFT)
                * self.weight_kg
                / distance::METERS_PER_KM
                * duration_minutes,
        )
    }
}

impl WorkoutMetrics for SportsWalking {
    fn action_count(&self) -> u32 {
        self.action_count
    }

    fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn type_name(&self) -> &'static str {
        "SportsWalking"
    }

    /// Formula: `(0.035 * weight + speed_m_per_s^2 / height_m * 0.029 * weight)
    /// * duration_minutes`
    fn spent_calories(&self) -> TrackerResult<f64> {
        let speed_m_per_s = self.mean_speed_kmh() * units::KMH_TO_M_PER_S;
        let height_m = self.height_cm / units::CM_PER_M;
        let duration_minutes = self.duration_hours * units::MINUTES_PER_HOUR;
        let speed_term =
            speed_m_per_s.powi(2) / height_m * walking::SPEED_HEIGHT_MULTIPLIER * self.weight_kg;
        Ok(walking::WEIGHT_MULTIPLIER.mul_add(self.weight_kg, speed_term) * duration_minutes)
    }
}

impl WorkoutMetrics for Swimming {
    fn action_count(&self) -> u32 {
        self.action_count
    }

    fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn type_name(&self) -> &'static str {
        "Swimming"
    }

    fn step_length_m(&self) -> f64 {
        distance::STROKE_LENGTH_M
    }

    /// Formula: `pool_length_m * pool_lap_count / meters_per_km / duration_hours`
    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_lap_count)
            / distance::METERS_PER_KM
            / self.duration_hours
    }

    /// Formula: `(speed_kmh + 1.1) * 2 * weight_kg * duration_hours`
    fn spent_calories(&self) -> TrackerResult<f64> {
        Ok((self.mean_speed_kmh() + swimming::MEAN_SPEED_SHIFT)
            * swimming::WEIGHT_MULTIPLIER
            * self.weight_kg
            * self.duration_hours)
    }
}

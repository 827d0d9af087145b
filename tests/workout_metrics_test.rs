// ABOUTME: Integration tests for workout metric formulas through public interfaces
// ABOUTME: Checks distance, mean speed and calorie values for every workout type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Tracker Project

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitness_tracker::metrics::WorkoutMetrics;
use fitness_tracker::models::{Running, SportsWalking, Swimming};

// === Running Metrics ===

#[test]
fn test_running_distance_from_step_count() {
    let workout = Running::new(15000, 1.0, 75.0);

    // Expected: 15000 * 0.65 / 1000 = 9.75
    let distance = workout.distance_km();
    assert!(
        (distance - 9.75).abs() < 1e-9,
        "Running distance should be 9.75 km, got {distance}"
    );
}

#[test]
fn test_running_mean_speed() {
    let workout = Running::new(15000, 1.0, 75.0);

    // Expected: 9.75 km over 1 h = 9.75 km/h
    let speed = workout.mean_speed_kmh();
    assert!(
        (speed - 9.75).abs() < 1e-9,
        "Running mean speed should be 9.75 km/h, got {speed}"
    );
}

#[test]
fn test_running_mean_speed_scales_with_duration() {
    let workout = Running::new(15000, 0.5, 75.0);

    // Same distance in half the time doubles the speed: 9.75 / 0.5 = 19.5
    let speed = workout.mean_speed_kmh();
    assert!(
        (speed - 19.5).abs() < 1e-9,
        "Running mean speed should be 19.5 km/h, got {speed}"
    );
}

#[test]
fn test_running_calories() {
    let workout = Running::new(15000, 1.0, 75.0);

    // Expected: (18 * 9.75 + 1.79) * 75 / 1000 * 60 = 797.805
    let calories = workout.spent_calories().unwrap();
    assert!(
        (calories - 797.805).abs() < 1e-6,
        "Running calories should be 797.805 kcal, got {calories}"
    );
}

// === Sports Walking Metrics ===

#[test]
fn test_walking_distance_uses_step_length() {
    let workout = SportsWalking::new(9000, 1.0, 75.0, 180.0);

    // Expected: 9000 * 0.65 / 1000 = 5.85
    let distance = workout.distance_km();
    assert!(
        (distance - 5.85).abs() < 1e-9,
        "Walking distance should be 5.85 km, got {distance}"
    );
}

#[test]
fn test_walking_calories() {
    let workout = SportsWalking::new(9000, 1.0, 75.0, 180.0);

    // Speed 5.85 km/h = 1.6263 m/s, height 1.8 m.
    // Expected: (0.035 * 75 + 1.6263^2 / 1.8 * 0.029 * 75) * 60 = 349.251747525
    let calories = workout.spent_calories().unwrap();
    assert!(
        (calories - 349.251_747_525).abs() < 1e-6,
        "Walking calories should be 349.2517 kcal, got {calories}"
    );
}

#[test]
fn test_walking_calories_depend_on_height() {
    let short = SportsWalking::new(9000, 1.0, 75.0, 160.0);
    let tall = SportsWalking::new(9000, 1.0, 75.0, 190.0);

    // Height divides the speed term, so the shorter athlete burns more
    let short_calories = short.spent_calories().unwrap();
    let tall_calories = tall.spent_calories().unwrap();
    assert!(
        short_calories > tall_calories,
        "Expected {short_calories} > {tall_calories}"
    );
}

// === Swimming Metrics ===

#[test]
fn test_swimming_distance_uses_stroke_length() {
    let workout = Swimming::new(720, 1.0, 80.0, 25.0, 40);

    // Strokes are longer than steps: 720 * 1.38 / 1000 = 0.9936
    let distance = workout.distance_km();
    assert!(
        (distance - 0.9936).abs() < 1e-9,
        "Swimming distance should be 0.9936 km, got {distance}"
    );
}

#[test]
fn test_swimming_mean_speed_from_pool_laps() {
    let workout = Swimming::new(720, 1.0, 80.0, 25.0, 40);

    // Expected: 25 * 40 / 1000 / 1 = 1.0
    let speed = workout.mean_speed_kmh();
    assert!(
        (speed - 1.0).abs() < 1e-9,
        "Swimming mean speed should be 1.0 km/h, got {speed}"
    );
}

#[test]
fn test_swimming_mean_speed_ignores_stroke_count() {
    let lazy = Swimming::new(500, 1.0, 80.0, 25.0, 40);
    let busy = Swimming::new(900, 1.0, 80.0, 25.0, 40);

    // Speed comes from pool length and lap count, not strokes
    let diff = (lazy.mean_speed_kmh() - busy.mean_speed_kmh()).abs();
    assert!(diff < f64::EPSILON, "Speeds should match, differ by {diff}");
}

#[test]
fn test_swimming_calories() {
    let workout = Swimming::new(720, 1.0, 80.0, 25.0, 40);

    // Expected: (1.0 + 1.1) * 2 * 80 * 1 = 336
    let calories = workout.spent_calories().unwrap();
    assert!(
        (calories - 336.0).abs() < 1e-6,
        "Swimming calories should be 336 kcal, got {calories}"
    );
}

// === Calorie Formula Fallback ===

/// A workout type whose calorie formula has not been calibrated yet.
/// Only the required accessors are implemented; every derived metric
/// comes from the trait defaults.
struct PrototypeWorkout {
    action_count: u32,
    duration_hours: f64,
    weight_kg: f64,
}

impl WorkoutMetrics for PrototypeWorkout {
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
        "Prototype"
    }
}

#[test]
fn test_prototype_distance_uses_default_step_length() {
    let workout = PrototypeWorkout {
        action_count: 1000,
        duration_hours: 1.0,
        weight_kg: 70.0,
    };

    // Expected: 1000 * 0.65 / 1000 = 0.65
    let distance = workout.distance_km();
    assert!(
        (distance - 0.65).abs() < 1e-9,
        "Default distance should be 0.65 km, got {distance}"
    );
}

#[test]
fn test_prototype_calories_require_override() {
    let workout = PrototypeWorkout {
        action_count: 1000,
        duration_hours: 1.0,
        weight_kg: 70.0,
    };

    let err = workout.spent_calories().unwrap_err();
    assert_eq!(err.code(), "INVALID_OPERATION");
    assert!(
        err.to_string().contains("must be overridden"),
        "Unexpected message: {err}"
    );
    assert!(
        err.to_string().contains("Prototype"),
        "Message should name the offending type: {err}"
    );
}

#[test]
fn test_prototype_weight_accessor_is_exposed() {
    let workout = PrototypeWorkout {
        action_count: 1000,
        duration_hours: 1.0,
        weight_kg: 70.0,
    };

    let weight = workout.weight_kg();
    assert!(
        (weight - 70.0).abs() < f64::EPSILON,
        "Weight accessor should return 70, got {weight}"
    );
}

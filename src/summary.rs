// ABOUTME: Workout summary record and its fixed-format report sentence
// ABOUTME: Display renders the Russian summary line with three-decimal rounding per field
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Tracker Project

//! # Workout Summary
//!
//! [`WorkoutSummary`] is the computed report for one workout: type name plus
//! the four derived metrics. It is created once per computation and never
//! mutated; formatting is pure, so rendering the same summary twice yields
//! identical sentences.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Computed metrics for one workout, ready for reporting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    /// Workout type name as printed in the report
    pub type_name: String,
    /// Workout duration in hours
    pub duration_hours: f64,
    /// Distance covered in kilometers
    pub distance_km: f64,
    /// Mean speed in km/h
    pub mean_speed_kmh: f64,
    /// Calories burned in kcal
    pub calories: f64,
}

impl fmt::Display for WorkoutSummary {
    /// Renders the fixed report sentence.
    ///
    /// Each metric is rounded to three decimals independently; the sentence
    /// layout and punctuation are byte-stable across runs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.type_name,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories
        )
    }
}

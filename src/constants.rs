//! Formula constants for workout metric calculations
//!
//! This module contains the coefficients used by the distance, mean speed,
//! and calorie formulas. The values mirror the sensor unit's reference
//! implementation and must not drift from it: summary output is compared
//! byte-for-byte against reference reports.

/// Distance conversion constants shared by all workout types
pub mod distance {
    /// Meters in one kilometer, as a float for direct use in formulas
    pub const METERS_PER_KM: f64 = 1000.0;

    /// Distance covered by one step (meters)
    ///
    /// Applies to step-based workouts (running, sports walking).
    pub const STEP_LENGTH_M: f64 = 0.65;

    /// Distance covered by one swimming stroke (meters)
    ///
    /// Swimming replaces the step length with this stroke length in the
    /// base distance formula.
    pub const STROKE_LENGTH_M: f64 = 1.38;
}

/// Unit conversion constants
pub mod units {
    /// Minutes in one hour, as a float for duration conversion
    pub const MINUTES_PER_HOUR: f64 = 60.0;

    /// Conversion factor from km/h to m/s
    ///
    /// The walking calorie formula squares speed in m/s; sensor speeds are
    /// carried in km/h everywhere else.
    pub const KMH_TO_M_PER_S: f64 = 0.278;

    /// Centimeters in one meter, as a float for height conversion
    pub const CM_PER_M: f64 = 100.0;
}

/// Running calorie formula coefficients
///
/// Formula: `(MEAN_SPEED_MULTIPLIER * speed_kmh + MEAN_SPEED_SHIFT)
/// * weight_kg / METERS_PER_KM * duration_minutes`
pub mod running {
    /// Empirical multiplier applied to mean speed (km/h)
    pub const MEAN_SPEED_MULTIPLIER: f64 = 18.0;

    /// Empirical shift added to the scaled mean speed
    pub const MEAN_SPEED_SHIFT: f64 = 1.79;
}

/// Sports walking calorie formula coefficients
///
/// Formula: `(WEIGHT_MULTIPLIER * weight_kg
/// + speed_m_per_s^2 / height_m * SPEED_HEIGHT_MULTIPLIER * weight_kg)
/// * duration_minutes`
pub mod walking {
    /// Weight coefficient of the resting term
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;

    /// Weight coefficient of the speed/height term
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

/// Swimming calorie formula coefficients
///
/// Formula: `(speed_kmh + MEAN_SPEED_SHIFT) * WEIGHT_MULTIPLIER
/// * weight_kg * duration_hours`
pub mod swimming {
    /// Empirical shift added to the mean speed (km/h)
    pub const MEAN_SPEED_SHIFT: f64 = 1.1;

    /// Multiplier applied to body weight
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}

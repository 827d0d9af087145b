// ABOUTME: Error types for sensor package decoding and metric computation
// ABOUTME: Defines TrackerError with stable error codes and helper constructors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Tracker Project

//! # Error Handling
//!
//! The tracker has exactly two failure modes:
//!
//! - [`TrackerError::InvalidArgument`]: a sensor package could not be
//!   decoded (unrecognized workout code, or a field count that does not
//!   match the code). Raised by the dispatcher; propagates uncaught and
//!   terminates the run.
//! - [`TrackerError::InvalidOperation`]: a metric was requested from a
//!   workout type that does not specialize it. This guards the base
//!   calorie formula; no package produced by the dispatcher can reach it.

use thiserror::Error;

/// Unified error type for sensor decoding and metric computation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    /// A sensor package could not be decoded into a workout
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Why the package was rejected
        message: String,
    },

    /// A metric is not specialized for the requested workout type
    #[error("Invalid operation: {message}")]
    InvalidOperation {
        /// Which metric was requested and why it is unavailable
        message: String,
    },
}

impl TrackerError {
    /// Create an "invalid argument" error
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an "invalid operation" error
    #[must_use]
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation {
            message: message.into(),
        }
    }

    /// Stable machine-readable code for this error kind
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
            Self::InvalidOperation { .. } => "INVALID_OPERATION",
        }
    }
}

/// Result type alias for tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

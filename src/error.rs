//! Error types raised at the engine boundary.

use thiserror::Error;

/// Which end of the route a stop reference designates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopRole {
    /// The fixed first stop.
    Start,
    /// The fixed last stop.
    End,
}

impl std::fmt::Display for StopRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

/// Errors raised while validating an optimization call.
///
/// All variants are detected before any distance matrix or route is built,
/// so a failed call never yields a partial result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// A start or end name does not match any supplied point.
    #[error("{role} stop '{name}' not found among the supplied points")]
    UnknownStop {
        /// Which reference failed to resolve.
        role: StopRole,
        /// The name that was looked up.
        name: String,
    },
    /// A point has a latitude or longitude outside the valid range.
    #[error("point '{name}' has invalid coordinates ({lat}, {lon})")]
    InvalidCoordinates {
        /// Name of the offending point.
        name: String,
        /// Supplied latitude in degrees.
        lat: f64,
        /// Supplied longitude in degrees.
        lon: f64,
    },
    /// Two supplied points share the same name.
    #[error("point name '{name}' is used more than once")]
    DuplicateName {
        /// The repeated name.
        name: String,
    },
}

//! Error types for configuration and integration failures
//!
//! Two families of failure can stop a run:
//!
//! - [`ConfigurationError`]: the run was set up wrong (unknown scheme or
//!   shape name, grid too small, unusable velocity). Always raised before the
//!   first step.
//! - [`NumericalError`]: the integration produced NaN or infinity, typically
//!   from an unstable (velocity, grid, step count) combination.
//!
//! Both are wrapped by [`AdvectError`], the error type of every fallible
//! operation in the core.

use std::fmt;
use thiserror::Error;

/// Top-level error for the advection core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AdvectError {
    /// Invalid configuration, detected before any stepping
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Non-finite values produced during integration
    #[error("numerical error: {0}")]
    Numerical(#[from] NumericalError),

    /// A multi-step scheme was handed fewer prior states than it needs
    #[error("{scheme} needs {required} prior states, only {available} available")]
    InsufficientHistory {
        scheme: &'static str,
        required: usize,
        available: usize,
    },
}

impl AdvectError {
    /// True for errors raised while validating the configuration
    pub fn is_configuration(&self) -> bool {
        matches!(self, AdvectError::Configuration(_))
    }

    /// True for errors raised by an unstable integration
    pub fn is_numerical(&self) -> bool {
        matches!(self, AdvectError::Numerical(_))
    }
}

/// Configuration problems
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("unknown advection scheme `{0}` (expected upwind, rungakutta or adamsbashforth)")]
    UnknownScheme(String),

    #[error("unknown initial shape `{0}` (expected sine or step)")]
    UnknownShape(String),

    #[error("grid must have at least {minimum} cells, got {cells}")]
    GridTooSmall { cells: usize, minimum: usize },

    #[error("velocity must be finite, got {0}")]
    NonFiniteVelocity(f64),

    /// The upwind stencil takes its donor cell from index `i - 1`, which is
    /// only upstream for flow toward increasing index.
    #[error("upwind scheme requires a non-negative velocity, got {0}")]
    NegativeUpwindVelocity(f64),

    #[error("cannot convert domain cycles to time steps with velocity {0}")]
    CyclesNeedPositiveVelocity(f64),

    #[error("state must hold at least 2 points, got {0}")]
    StateTooShort(usize),

    #[error("state is not periodic: q[0] = {first}, q[N] = {last}")]
    NotPeriodic { first: f64, last: f64 },

    #[error("snapshot interval must be at least 1")]
    ZeroSnapshotInterval,
}

/// Kind of non-finite value found in a state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonFinite {
    NaN,
    Infinity,
}

impl fmt::Display for NonFinite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NonFinite::NaN => write!(f, "NaN"),
            NonFinite::Infinity => write!(f, "Infinity"),
        }
    }
}

/// Non-finite value detected after a time step
#[derive(Debug, Clone, PartialEq, Error)]
#[error(
    "{kind} detected at grid point {index} after step {step}; \
     the scheme is unstable for this velocity, reduce |u|"
)]
pub struct NumericalError {
    pub kind: NonFinite,
    pub step: usize,
    pub index: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_wraps() {
        let error: AdvectError = ConfigurationError::UnknownScheme("foo".to_string()).into();

        assert!(error.is_configuration());
        assert!(!error.is_numerical());
        assert!(error.to_string().contains("`foo`"));
    }

    #[test]
    fn test_numerical_error_message() {
        let error: AdvectError = NumericalError {
            kind: NonFinite::Infinity,
            step: 12,
            index: 3,
        }
        .into();

        assert!(error.is_numerical());
        let message = error.to_string();
        assert!(message.contains("Infinity"));
        assert!(message.contains("step 12"));
        assert!(message.contains("grid point 3"));
    }
}

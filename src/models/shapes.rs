//! Named initial profiles
//!
//! Defines the scalar field q(x, t=0) on the periodic grid.
//!
//! # Available Shapes
//!
//! - **Sine**: one full period across the domain, `q[i] = sin(i / N · 2π)`
//! - **Step**: top hat, `q[i] = 1` for `i < ⌊(N+1)/2⌋`, else `0`
//!
//! After evaluation the ring is closed (`q[0] := q[N]`), which for the step
//! puts point 0 on the low side of the jump.
//!
//! # Example
//!
//! ```rust
//! use advect_rs::models::{initialize, InitialShape};
//!
//! let shape: InitialShape = "step".parse().unwrap();
//! let state = initialize(shape, 10).unwrap();
//!
//! assert_eq!(state.len(), 11);
//! assert_eq!(state.as_slice()[0], 0.0);
//! assert_eq!(state.as_slice()[1], 1.0);
//! ```

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigurationError;
use crate::physics::PeriodicState;

/// Smallest grid the initializer accepts
pub const MIN_GRID_CELLS: usize = 1;

/// Initial profile shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InitialShape {
    /// One sine period across the domain
    ///
    /// # Formula
    ///
    /// ```text
    /// q[i] = sin(i / N · 2π)        i = 0..=N
    /// ```
    Sine,

    /// Top hat covering the first half of the stored points
    ///
    /// # Formula
    ///
    /// ```text
    /// q[i] = 1   for i < ⌊(N+1)/2⌋
    /// q[i] = 0   otherwise
    /// ```
    Step,
}

impl InitialShape {
    /// Every available shape
    pub const ALL: [InitialShape; 2] = [InitialShape::Sine, InitialShape::Step];

    /// Name used on the command line and in file names
    pub fn name(&self) -> &'static str {
        match self {
            InitialShape::Sine => "sine",
            InitialShape::Step => "step",
        }
    }

    /// Evaluate the raw profile at point `i` of a grid with `points` values
    fn evaluate(&self, i: usize, points: usize) -> f64 {
        match self {
            InitialShape::Sine => (i as f64 / (points - 1) as f64 * 2.0 * PI).sin(),
            InitialShape::Step => {
                if i < points / 2 { 1.0 } else { 0.0 }
            }
        }
    }
}

impl fmt::Display for InitialShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InitialShape {
    type Err = ConfigurationError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "sine" => Ok(InitialShape::Sine),
            "step" => Ok(InitialShape::Step),
            _ => Err(ConfigurationError::UnknownShape(name.to_string())),
        }
    }
}

/// Build the initial state of a grid with `grid_cells` periodic cells
///
/// Returns `N + 1` values with `q[0] == q[N]`.
///
/// # Errors
///
/// [`ConfigurationError::GridTooSmall`] when `grid_cells` is zero.
pub fn initialize(shape: InitialShape, grid_cells: usize) -> Result<PeriodicState, ConfigurationError> {
    if grid_cells < MIN_GRID_CELLS {
        return Err(ConfigurationError::GridTooSmall {
            cells: grid_cells,
            minimum: MIN_GRID_CELLS,
        });
    }

    let points = grid_cells + 1;
    let values: Vec<f64> = (0..points).map(|i| shape.evaluate(i, points)).collect();

    PeriodicState::closed(values)
}

/// Parse a shape name and build its initial state
pub fn initialize_named(name: &str, grid_cells: usize) -> Result<PeriodicState, ConfigurationError> {
    initialize(name.parse()?, grid_cells)
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_shapes() {
        assert_eq!("sine".parse::<InitialShape>(), Ok(InitialShape::Sine));
        assert_eq!(" STEP ".parse::<InitialShape>(), Ok(InitialShape::Step));
        assert_eq!(
            "gauss".parse::<InitialShape>(),
            Err(ConfigurationError::UnknownShape("gauss".to_string()))
        );
    }

    #[test]
    fn test_names_round_trip() {
        for shape in InitialShape::ALL {
            assert_eq!(shape.name().parse::<InitialShape>(), Ok(shape));
            assert_eq!(shape.to_string(), shape.name());
        }
    }

    #[test]
    fn test_step_profile() {
        let state = initialize(InitialShape::Step, 100).unwrap();
        let q = state.as_slice();

        assert_eq!(q.len(), 101);
        // Points 1..50 are high, 50..=100 low, 0 copies 100
        assert!(q[1..50].iter().all(|v| *v == 1.0));
        assert!(q[50..].iter().all(|v| *v == 0.0));
        assert_eq!(q[0], 0.0);
        assert_eq!(state.total_mass(), 49.0);
    }

    #[test]
    fn test_step_profile_odd_points() {
        // 8 points: first 4 high, then the ring is closed
        let state = initialize(InitialShape::Step, 7).unwrap();
        assert_eq!(state.as_slice(), &[0.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_sine_profile() {
        let state = initialize(InitialShape::Sine, 4).unwrap();
        let q = state.as_slice();

        assert!(state.is_periodic());
        assert_relative_eq!(q[1], 1.0, epsilon = 1e-15);
        assert!(q[2].abs() < 1e-15);
        assert_relative_eq!(q[3], -1.0, epsilon = 1e-15);
        assert_eq!(q[0], q[4]);
    }

    #[test]
    fn test_sine_has_zero_mean() {
        let state = initialize(InitialShape::Sine, 50).unwrap();
        assert!(state.mean().abs() < 1e-15);
        assert_relative_eq!(state.amplitude(), 1.0, epsilon = 1e-2);
    }

    #[test]
    fn test_empty_grid_rejected() {
        assert_eq!(
            initialize(InitialShape::Sine, 0),
            Err(ConfigurationError::GridTooSmall { cells: 0, minimum: 1 })
        );
    }

    #[test]
    fn test_initialize_named() {
        assert!(initialize_named("sine", 8).is_ok());
        assert!(matches!(
            initialize_named("square", 8),
            Err(ConfigurationError::UnknownShape(_))
        ));
    }
}

//! Initial-versus-final profile statistics
//!
//! Linear advection on a periodic domain conserves the mean of the profile
//! exactly, so `mean_drift` measures round-off only. Over- and undershoot
//! relative to the initial extrema show dispersive ringing; the L2
//! difference after a whole number of cycles measures the total error.

use std::fmt;

use crate::physics::PeriodicState;

/// Summary of how a run changed its profile
///
/// # Example
///
/// ```rust
/// use advect_rs::output::ProfileComparison;
/// use advect_rs::physics::PeriodicState;
///
/// let before = PeriodicState::closed(vec![0.0, 1.0, 0.0, 0.0]).unwrap();
/// let after = PeriodicState::closed(vec![0.0, 0.0, 1.0, 0.0]).unwrap();
///
/// let comparison = ProfileComparison::between(&before, &after);
/// assert_eq!(comparison.mean_drift(), 0.0);
/// assert!(comparison.l2_difference > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileComparison {
    pub initial_mean: f64,
    pub final_mean: f64,
    pub initial_min: f64,
    pub initial_max: f64,
    pub final_min: f64,
    pub final_max: f64,
    /// Root-mean-square difference over the periodic cells
    pub l2_difference: f64,
    pub max_abs_difference: f64,
}

impl ProfileComparison {
    /// Compare two states on the same grid
    pub fn between(initial: &PeriodicState, final_state: &PeriodicState) -> Self {
        Self {
            initial_mean: initial.mean(),
            final_mean: final_state.mean(),
            initial_min: initial.min(),
            initial_max: initial.max(),
            final_min: final_state.min(),
            final_max: final_state.max(),
            l2_difference: initial.l2_difference(final_state),
            max_abs_difference: initial.max_abs_difference(final_state),
        }
    }

    /// Change of the mean (zero up to round-off)
    pub fn mean_drift(&self) -> f64 {
        self.final_mean - self.initial_mean
    }

    /// How far the final profile rises above the initial maximum
    pub fn overshoot(&self) -> f64 {
        (self.final_max - self.initial_max).max(0.0)
    }

    /// How far the final profile falls below the initial minimum
    pub fn undershoot(&self) -> f64 {
        (self.initial_min - self.final_min).max(0.0)
    }
}

impl fmt::Display for ProfileComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "mean     {:>12.6} -> {:>12.6} (drift {:.3e})", self.initial_mean, self.final_mean, self.mean_drift())?;
        writeln!(f, "min      {:>12.6} -> {:>12.6}", self.initial_min, self.final_min)?;
        writeln!(f, "max      {:>12.6} -> {:>12.6}", self.initial_max, self.final_max)?;
        write!(f, "L2 diff  {:>12.6}   max diff {:.6}", self.l2_difference, self.max_abs_difference)
    }
}

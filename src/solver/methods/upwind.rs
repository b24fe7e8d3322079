//! First-order upwind scheme
//!
//! # Mathematical Background
//!
//! For `∂q/∂t + u ∂q/∂x = 0` with `u ≥ 0` the donor cell of point `i` is
//! `i - 1`. With `u` in cells per step, one step reads:
//!
//! ```text
//! q'[i] = q[i] + u·q[i-1] - u·q[i]      i = 1..=N
//! q'[0] = q'[N]
//! ```
//!
//! # Characteristics
//!
//! - **Order**: First-order accurate
//! - **Stability**: `0 ≤ u ≤ 1`
//! - **Complexity**: 1 stencil evaluation per step
//! - **Memory**: O(1), no history
//!
//! # Advantages
//!
//! ✅ Monotone for `0 ≤ u ≤ 1`: no new extrema, no over/undershoot at steps
//! ✅ Conserves the interior sum exactly in exact arithmetic
//!
//! # Limitations
//!
//! ⚠️ Strong numerical diffusion (a step profile smears out over a few cycles)
//! ⚠️ Only defined for non-negative velocity
//!
//! At `u = 1` the scheme is an exact shift by one cell per step.

use crate::error::AdvectError;
use crate::physics::{PeriodicState, PhysicalModel};
use crate::solver::{History, TimeStepper};

// =================================================================================================
// Upwind stepper
// =================================================================================================

/// Upwind (donor cell) time stepper
///
/// # Example
///
/// ```rust
/// use advect_rs::physics::{LinearAdvection, PeriodicState};
/// use advect_rs::solver::{History, TimeStepper, UpwindStepper};
///
/// let model = LinearAdvection::new(1.0);
/// let state = PeriodicState::closed(vec![0.0, 1.0, 0.0, 0.0]).unwrap();
///
/// // u = 1 shifts the profile by exactly one cell
/// let next = UpwindStepper::new()
///     .step(&model, &state, &mut History::empty())
///     .unwrap();
/// assert_eq!(next.as_slice(), &[0.0, 0.0, 1.0, 0.0]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UpwindStepper;

impl UpwindStepper {
    /// Create a new upwind stepper
    pub fn new() -> Self {
        Self
    }
}

impl TimeStepper for UpwindStepper {
    fn step(
        &self,
        model: &dyn PhysicalModel,
        state: &PeriodicState,
        _history: &mut History,
    ) -> Result<PeriodicState, AdvectError> {
        Ok(model.upwind_update(state))
    }

    fn evaluations_per_step(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "Upwind"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

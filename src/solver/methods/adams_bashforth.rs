//! Third-order Adams-Bashforth (AB3) on the centered tendency
//!
//! # Mathematical Background
//!
//! A linear multistep scheme: the new state extrapolates the tendencies of
//! the current and the two previous states.
//!
//! ```text
//! qₙ₊₁ = qₙ + (23·T(qₙ) − 16·T(qₙ₋₁) + 5·T(qₙ₋₂)) / 12
//! ```
//!
//! # Characteristics
//!
//! - **Order**: Third-order in time, second-order in space
//! - **Stability**: `|u| ≲ 0.72`
//! - **Complexity**: 1 new stencil evaluation per step (older tendencies are
//!   cached in the [`History`])
//! - **Memory**: two prior states and their tendencies
//!
//! # Start-up
//!
//! A run starts with both history slots holding the initial state. The first
//! step therefore reduces to `qₙ + 12·T(qₙ)/12`, a forward Euler step, and the
//! second step still sees the initial state in its oldest slot. Only from the
//! third step on does the scheme use three distinct states.
//!
//! # Limitations
//!
//! ⚠️ Smallest stability range of the three schemes
//! ⚠️ Start-up steps are only first-order accurate
//! ⚠️ Centered differencing rings next to discontinuities

use crate::error::AdvectError;
use crate::physics::{PeriodicState, PhysicalModel};
use crate::solver::{History, TimeStepper};

/// Number of prior states AB3 consumes
const AB3_HISTORY_DEPTH: usize = 2;

// =================================================================================================
// AB3 Stepper
// =================================================================================================

/// Third-order Adams-Bashforth stepper
///
/// # Example
///
/// ```rust
/// use advect_rs::physics::{LinearAdvection, PeriodicState};
/// use advect_rs::solver::{AdamsBashforth3Stepper, History, TimeStepper};
///
/// let model = LinearAdvection::new(0.25);
/// let state = PeriodicState::closed(vec![0.0, 1.0, 0.0, 0.0, 0.0]).unwrap();
/// let stepper = AdamsBashforth3Stepper::new();
///
/// let mut history = History::seeded(&state, stepper.history_depth());
/// let next = stepper.step(&model, &state, &mut history).unwrap();
/// assert!(next.is_periodic());
///
/// // Without prior states the step is refused
/// assert!(stepper.step(&model, &state, &mut History::empty()).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AdamsBashforth3Stepper;

impl AdamsBashforth3Stepper {
    /// Create a new AB3 stepper
    pub fn new() -> Self {
        Self
    }
}

impl TimeStepper for AdamsBashforth3Stepper {
    fn step(
        &self,
        model: &dyn PhysicalModel,
        state: &PeriodicState,
        history: &mut History,
    ) -> Result<PeriodicState, AdvectError> {
        let insufficient = |available| AdvectError::InsufficientHistory {
            scheme: "Adams-Bashforth 3",
            required: AB3_HISTORY_DEPTH,
            available,
        };

        if history.len() < AB3_HISTORY_DEPTH {
            return Err(insufficient(history.len()));
        }

        let current = model.compute_tendency(state);
        for age in 0..AB3_HISTORY_DEPTH {
            history.ensure_tendency(age, model, state, &current);
        }

        let (Some(previous), Some(older)) = (history.cached_tendency(0), history.cached_tendency(1))
        else {
            return Err(insufficient(history.len()));
        };

        let dqdt = (&current * 23.0 - previous * 16.0 + older * 5.0) / 12.0;
        let next = state + &dqdt;

        history.record_tendency(current);
        Ok(next)
    }

    fn history_depth(&self) -> usize {
        AB3_HISTORY_DEPTH
    }

    fn evaluations_per_step(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "Adams-Bashforth 3"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

//! Time integration of the periodic advection problem
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! 1. **Scenario** ([`Scenario`]) - WHAT to solve
//!    - Physical model (velocity and stencils)
//!    - Initial periodic state
//!
//! 2. **Configuration** ([`SolverConfiguration`]) - HOW to solve
//!    - Scheme (upwind, Adams-Bashforth 3, Runge-Kutta 4)
//!    - Number of time steps, snapshot interval
//!
//! 3. **Time stepper** ([`TimeStepper`] trait) - The numerical method
//!    - Combines stencil evaluations into one step
//!    - Independent of the physics it is handed
//!
//! [`Simulation`] drives the loop: it owns the current state and the
//! [`History`] ring, checks every new state for NaN/Inf and rotates the
//! history after each step.
//!
//! # Module Organization
//!
//! - **`traits`**: `TimeStepper`, `SolverConfiguration`, `SimulationResult`
//! - **`scheme`**: `Scheme`, the closed set of methods selectable by name
//! - **`history`**: prior states (and their cached tendencies) for AB3
//! - **`scenario`**: `Scenario`, model + initial state
//! - **`driver`**: `Simulation`, the step loop
//! - **`methods`**: `UpwindStepper`, `AdamsBashforth3Stepper`, `RK4Stepper`
//!
//! # Quick Start Example
//!
//! ```rust
//! use advect_rs::models::{initialize, InitialShape};
//! use advect_rs::physics::LinearAdvection;
//! use advect_rs::solver::{Scenario, Scheme, Simulation, SolverConfiguration};
//!
//! # fn main() -> Result<(), advect_rs::AdvectError> {
//! // 1. Create scenario (WHAT to solve)
//! let initial = initialize(InitialShape::Sine, 64)?;
//! let scenario = Scenario::new(Box::new(LinearAdvection::new(0.2)), initial)?;
//!
//! // 2. Create configuration (HOW to solve)
//! let config = SolverConfiguration::new(Scheme::RungeKutta4, 320);
//!
//! // 3. Solve
//! let result = Simulation::solve(&scenario, &config)?;
//! assert_eq!(result.steps, 320);
//! assert!(result.final_state.is_periodic());
//! # Ok(())
//! # }
//! ```
//!
//! # Stability
//!
//! The velocity is the Courant number. The centered tendency has purely
//! imaginary eigenvalues `-i·u·sin(θ)`, so a scheme is stable when its
//! stability region covers `[-i|u|, i|u|]`:
//!
//! | Scheme | Stable for       | Evals/Step |
//! |--------|------------------|------------|
//! | Upwind | `0 ≤ u ≤ 1`      | 1          |
//! | AB3    | `|u| ≲ 0.72`     | 1          |
//! | RK4    | `|u| ≤ 2√2`      | 4          |
//!
//! Outside these ranges the run will usually end with a
//! [`NumericalError`](crate::error::NumericalError).

// =================================================================================================
// Module Declarations
// =================================================================================================
mod traits;
mod scheme;
mod history;
mod scenario;
mod driver;
pub mod methods;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// Deciding *when* to hand a stencil sweep to Rayon is a numerical-execution
// concern, not a physics concern, so the knob lives here and the stencils
// read it.
//
// Relaxed ordering is sufficient: the value is a performance hint, not a
// synchronisation point.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of grid points above which stencil sweeps run in parallel
const DEFAULT_PARALLEL_THRESHOLD: usize = 999;

/// Runtime-configurable parallel-execution threshold.
static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-execution threshold.
///
/// Stencils iterate sequentially over grids with at most this many points
/// and switch to Rayon above it, but only when the crate is compiled with
/// the `parallel` feature.
///
/// # Example
///
/// ```rust
/// use advect_rs::solver::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`.
///
/// # Example
///
/// ```rust
/// use advect_rs::solver::{parallel_threshold, set_parallel_threshold};
///
/// let previous = parallel_threshold();
/// set_parallel_threshold(4096);
/// assert!(parallel_threshold() > 0);
///
/// // Restore so other code is not affected.
/// set_parallel_threshold(previous);
/// ```
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

#[cfg(test)]
static GUARD_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// RAII guard that saves the current threshold on construction and restores
/// it on drop.
///
/// Only compiled in test builds. Guards are serialized through a lock, so
/// two tests never see each other's threshold.
///
/// ```rust,ignore
/// let _guard = crate::solver::ThresholdGuard::save(50);
/// // threshold is now 50 …
/// // … and is automatically restored when _guard is dropped.
/// ```
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[cfg(test)]
impl ThresholdGuard {
    /// Set the threshold to `new_value` and return a guard that will
    /// restore the previous value on drop.
    pub(crate) fn save(new_value: usize) -> Self {
        let lock = GUARD_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self {
            previous,
            _lock: lock,
        }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        // Bypass the public setter so that restoring never panics.
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{SimulationResult, SolverConfiguration, TimeStepper};

pub use driver::Simulation;
pub use history::History;
pub use scenario::Scenario;
pub use scheme::Scheme;

pub use methods::{AdamsBashforth3Stepper, RK4Stepper, UpwindStepper};

// =================================================================================================
// Helper Functions
// =================================================================================================

use crate::error::NumericalError;
use crate::physics::PeriodicState;

/// Validate a freshly computed state for numerical blow-up
///
/// Reports the first NaN or infinite value, with the step that produced it.
///
/// ```rust,ignore
/// validate_state(&state, 42)?;  // state produced by step 42
/// ```
pub(crate) fn validate_state(state: &PeriodicState, step: usize) -> Result<(), NumericalError> {
    match state.first_non_finite() {
        Some((index, kind)) => Err(NumericalError { kind, step, index }),
        None => Ok(()),
    }
}

// =================================================================================================
// Tests
// =================================================================================================

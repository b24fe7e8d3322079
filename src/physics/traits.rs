//! Physical model trait
//!
//! This module defines the seam between physics and numerics:
//! - `PhysicalModel`: the spatial operators a time stepper may call
//!
//! The model provides the "physics" (stencils), the time stepper provides
//! the "numerics" (how stencil outputs are combined across stages and steps).

use crate::physics::PeriodicState;

// ==================================================================================================
// Physical Model Trait
// =================================================================================================

/// Trait for advection models
///
/// # Responsibility
///
/// Evaluates the spatial discretization of the advection operator at a given
/// state. Does NOT advance time (that's the stepper's job).
///
/// # Contract
///
/// Both operations are pure functions of the state and the model's
/// velocity: no hidden state, input never mutated, output the same length
/// as the input and periodic (`out[0] == out[N]`).
pub trait PhysicalModel: Send + Sync {
    /// Uniform advection velocity, in grid cells per time step
    fn velocity(&self) -> f64;

    /// One complete upwind update
    ///
    /// Returns the NEW state (not a tendency). Only consistent for
    /// non-negative velocity.
    fn upwind_update(&self, state: &PeriodicState) -> PeriodicState;

    /// Centered (FTCS) tendency at the given state
    ///
    /// Returns the change per time step, the building block reused by the
    /// multi-stage and multi-step schemes.
    fn compute_tendency(&self, state: &PeriodicState) -> PeriodicState;

    /// Name of the model (used to display and logging)
    fn name(&self) -> &str;

    /// Description of the model (option)
    fn description(&self) -> Option<&str> {
        None
    }
}

//! Linear advection at a uniform velocity
//!
//! ```text
//! ∂q/∂t + u ∂q/∂x = 0        u constant, x periodic
//! ```
//!
//! The velocity is expressed in grid cells per time step, so it doubles as
//! the Courant number of every scheme in this crate.

use crate::physics::{stencil, PeriodicState, PhysicalModel};

/// Uniform-velocity advection on a periodic grid
///
/// # Example
///
/// ```rust
/// use advect_rs::physics::{LinearAdvection, PeriodicState, PhysicalModel};
///
/// let model = LinearAdvection::new(0.25);
/// let state = PeriodicState::uniform(10, 1.0);
///
/// // A uniform field does not change
/// assert_eq!(model.upwind_update(&state), state);
/// assert_eq!(model.name(), "Linear Advection");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearAdvection {
    velocity: f64,
}

impl LinearAdvection {
    /// Create a model advecting at `velocity` grid cells per time step
    pub fn new(velocity: f64) -> Self {
        Self { velocity }
    }

    /// Courant number `|u|` of the discretization
    pub fn courant_number(&self) -> f64 {
        self.velocity.abs()
    }
}

impl PhysicalModel for LinearAdvection {
    fn velocity(&self) -> f64 {
        self.velocity
    }

    fn upwind_update(&self, state: &PeriodicState) -> PeriodicState {
        stencil::upwind(state, self.velocity)
    }

    fn compute_tendency(&self, state: &PeriodicState) -> PeriodicState {
        stencil::centered_tendency(state, self.velocity)
    }

    fn name(&self) -> &str {
        "Linear Advection"
    }
}

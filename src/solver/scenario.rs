//! Simulation scenario definition
//!
//! A scenario combines a physical model with the initial state it acts on.
use crate::error::ConfigurationError;
use crate::physics::{PeriodicState, PhysicalModel};
use crate::solver::Scheme;

/// Simulation scenario
///
/// Defines a specific case to simulate:
/// - Physical model (velocity and stencils)
/// - Initial state on the periodic grid
///
/// # Design
///
/// The same scenario can be solved with different schemes.
/// This is the "WHAT to solve" (not "HOW to solve").
///
/// # Examples
///
/// ```rust
/// use advect_rs::models::{initialize, InitialShape};
/// use advect_rs::physics::LinearAdvection;
/// use advect_rs::solver::{Scenario, Scheme};
///
/// let initial = initialize(InitialShape::Step, 50).unwrap();
/// let scenario = Scenario::new(Box::new(LinearAdvection::new(-0.25)), initial).unwrap();
///
/// assert_eq!(scenario.grid_cells(), 50);
/// assert!(scenario.validate_for(Scheme::RungeKutta4).is_ok());
/// assert!(scenario.validate_for(Scheme::Upwind).is_err());
/// ```
pub struct Scenario {
    /// Physical model (equations)
    pub model: Box<dyn PhysicalModel>,

    /// State at step 0
    pub initial: PeriodicState,
}

impl Scenario {
    /// Create a scenario
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::NonFiniteVelocity`] for a NaN or infinite velocity
    /// - [`ConfigurationError::NotPeriodic`] when `q[0] != q[N]`
    pub fn new(model: Box<dyn PhysicalModel>, initial: PeriodicState) -> Result<Self, ConfigurationError> {
        let scenario = Self { model, initial };
        scenario.validate()?;
        Ok(scenario)
    }

    /// Verifying scenario content
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let velocity = self.model.velocity();
        if !velocity.is_finite() {
            return Err(ConfigurationError::NonFiniteVelocity(velocity));
        }

        if !self.initial.is_periodic() {
            let q = self.initial.as_slice();
            return Err(ConfigurationError::NotPeriodic {
                first: q[0],
                last: q[q.len() - 1],
            });
        }

        Ok(())
    }

    /// Verify the scenario can be stepped with `scheme`
    pub fn validate_for(&self, scheme: Scheme) -> Result<(), ConfigurationError> {
        self.validate()?;
        scheme.accepts_velocity(self.model.velocity())
    }

    /// Get model name
    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    pub fn velocity(&self) -> f64 {
        self.model.velocity()
    }

    /// Number of distinct periodic cells
    pub fn grid_cells(&self) -> usize {
        self.initial.grid_cells()
    }
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario")
            .field("model", &self.model_name())
            .field("velocity", &self.velocity())
            .field("grid cells", &self.grid_cells())
            .finish()
    }
}

// ================================================================================================
// Tests
// ================================================================================================

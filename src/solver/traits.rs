//! Time-stepping traits and types
//!
//! # Design Philosophy
//!
//! - `TimeStepper` trait: the single stepping interface every scheme exposes
//! - `SolverConfiguration`: HOW to solve (scheme, step count, snapshots)
//! - `SimulationResult`: initial and final states plus run metadata

use std::collections::HashMap;

use crate::error::{AdvectError, ConfigurationError};
use crate::output::ProfileComparison;
use crate::physics::{PeriodicState, PhysicalModel};
use crate::solver::{History, Scheme};

// =================================================================================================
// Time Stepper
// =================================================================================================

/// One explicit time step
///
/// # Contract
///
/// - `state` satisfies `q[0] == q[N]` and so does the returned state
/// - `history` holds the prior states the scheme asked for through
///   [`history_depth`](TimeStepper::history_depth), most recent first; the
///   stepper may cache tendencies in it but never rotates it (the driver
///   does, after the step)
/// - `model` is the only source of stencil evaluations
pub trait TimeStepper {
    /// Advance `state` by one time step
    fn step(
        &self,
        model: &dyn PhysicalModel,
        state: &PeriodicState,
        history: &mut History,
    ) -> Result<PeriodicState, AdvectError>;

    /// Number of prior states the scheme consumes
    fn history_depth(&self) -> usize {
        0
    }

    /// Stencil evaluations per step once the history is warm
    fn evaluations_per_step(&self) -> usize;

    /// Display name of the method
    fn name(&self) -> &'static str;
}

// =================================================================================================
// Solver configuration
// =================================================================================================

/// Configuration of one advection run
///
/// # Examples
///
/// ```rust
/// use advect_rs::solver::{Scheme, SolverConfiguration};
///
/// // Fixed step count
/// let config = SolverConfiguration::new(Scheme::RungeKutta4, 200);
/// assert_eq!(config.time_steps, 200);
///
/// // Two trips around a 100-cell ring at u = 0.25
/// let config = SolverConfiguration::from_cycles(Scheme::Upwind, 100, 0.25, 2).unwrap();
/// assert_eq!(config.time_steps, 800);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SolverConfiguration {
    /// Time-stepping scheme, fixed for the run
    pub scheme: Scheme,

    /// Number of steps to take (zero returns the initial state)
    pub time_steps: usize,

    /// Keep a copy of the state every k steps (None keeps none)
    pub snapshot_interval: Option<usize>,
}

impl SolverConfiguration {
    /// Create a configuration for `time_steps` steps of `scheme`
    pub fn new(scheme: Scheme, time_steps: usize) -> Self {
        Self {
            scheme,
            time_steps,
            snapshot_interval: None,
        }
    }

    /// Step count for `cycles` trips of the profile around the domain
    ///
    /// The profile moves `velocity` cells per step, so one trip takes
    /// `grid_cells / velocity` steps; the product is truncated.
    pub fn from_cycles(
        scheme: Scheme,
        grid_cells: usize,
        velocity: f64,
        cycles: usize,
    ) -> Result<Self, ConfigurationError> {
        if !(velocity.is_finite() && velocity > 0.0) {
            return Err(ConfigurationError::CyclesNeedPositiveVelocity(velocity));
        }

        let time_steps = (grid_cells as f64 / velocity * cycles as f64) as usize;
        Ok(Self::new(scheme, time_steps))
    }

    /// Builder pattern: keep a snapshot every `interval` steps
    pub fn with_snapshot_interval(mut self, interval: usize) -> Self {
        self.snapshot_interval = Some(interval);
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.snapshot_interval == Some(0) {
            return Err(ConfigurationError::ZeroSnapshotInterval);
        }
        Ok(())
    }
}

// =================================================================================================
// Simulation result
// =================================================================================================

/// Outcome of an advection run
#[derive(Clone, Debug)]
pub struct SimulationResult {
    /// Scheme the run used
    pub scheme: Scheme,

    /// State before the first step
    pub initial_state: PeriodicState,

    /// State after the last step
    pub final_state: PeriodicState,

    /// `(step, state)` pairs kept at the configured interval, step 0 first
    pub snapshots: Vec<(usize, PeriodicState)>,

    /// Steps actually taken
    pub steps: usize,

    /// Diagnostics for reports and exported files
    pub metadata: HashMap<String, String>,
}

impl SimulationResult {
    pub fn new(
        scheme: Scheme,
        initial_state: PeriodicState,
        final_state: PeriodicState,
        steps: usize,
    ) -> Self {
        Self {
            scheme,
            initial_state,
            final_state,
            snapshots: Vec::new(),
            steps,
            metadata: HashMap::new(),
        }
    }

    /// Add a metadata entry
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Initial versus final profile statistics
    pub fn comparison(&self) -> ProfileComparison {
        ProfileComparison::between(&self.initial_state, &self.final_state)
    }
}

//! Step loop
//!
//! [`Simulation`] owns the evolving state of one run: the current
//! [`PeriodicState`], the [`History`] a multi-step scheme reads, the step
//! counter and the snapshots. Every step goes through the same sequence:
//!
//! 1. the scheme computes the next state from the current one
//! 2. the new state is checked for NaN/Inf
//! 3. the state just stepped from is pushed into the history
//! 4. a snapshot is kept if the step count is a multiple of the interval

use log::{debug, info, warn};

use crate::error::AdvectError;
use crate::physics::{PeriodicState, PhysicalModel};
use crate::solver::{
    validate_state, History, Scenario, Scheme, SimulationResult, SolverConfiguration, TimeStepper,
};

/// One advection run in progress
///
/// # Example
///
/// ```rust
/// use advect_rs::models::{initialize, InitialShape};
/// use advect_rs::physics::LinearAdvection;
/// use advect_rs::solver::{Scenario, Scheme, Simulation, SolverConfiguration};
///
/// let initial = initialize(InitialShape::Step, 20).unwrap();
/// let scenario = Scenario::new(Box::new(LinearAdvection::new(1.0)), initial.clone()).unwrap();
/// let config = SolverConfiguration::new(Scheme::Upwind, 20);
///
/// let mut simulation = Simulation::new(&scenario, &config).unwrap();
/// simulation.advance().unwrap();
/// assert_eq!(simulation.steps_taken(), 1);
///
/// // Twenty unit shifts bring the step back to where it started
/// let result = simulation.run().unwrap();
/// assert_eq!(result.steps, 20);
/// assert_eq!(result.final_state, initial);
/// ```
pub struct Simulation<'a> {
    model: &'a dyn PhysicalModel,
    scheme: Scheme,
    time_steps: usize,
    snapshot_interval: Option<usize>,

    initial: PeriodicState,
    state: PeriodicState,
    history: History,
    steps_taken: usize,
    snapshots: Vec<(usize, PeriodicState)>,
}

impl<'a> Simulation<'a> {
    /// Prepare a run of `scenario` under `config`
    ///
    /// # Errors
    ///
    /// [`AdvectError::Configuration`] when the configuration is invalid or
    /// the velocity does not suit the scheme. Nothing is stepped.
    pub fn new(scenario: &'a Scenario, config: &SolverConfiguration) -> Result<Self, AdvectError> {
        // ====== Validation ======
        config.validate()?;
        scenario.validate_for(config.scheme)?;

        let scheme = config.scheme;
        let velocity = scenario.velocity();

        if velocity.abs() > scheme.stability_limit() {
            warn!(
                "{} is unstable above |u| = {:.3}, got u = {}; expect the run to blow up",
                scheme.label(),
                scheme.stability_limit(),
                velocity
            );
        }

        debug!(
            "{} run: {} cells, u = {}, {} steps",
            scheme.label(),
            scenario.grid_cells(),
            velocity,
            config.time_steps
        );

        // ====== Initial state and history ======
        let initial = scenario.initial.clone();
        let history = History::seeded(&initial, scheme.history_depth());

        let mut snapshots = Vec::new();
        if config.snapshot_interval.is_some() {
            snapshots.push((0, initial.clone()));
        }

        Ok(Self {
            model: scenario.model.as_ref(),
            scheme,
            time_steps: config.time_steps,
            snapshot_interval: config.snapshot_interval,
            state: initial.clone(),
            initial,
            history,
            steps_taken: 0,
            snapshots,
        })
    }

    /// Take one step and return the new state
    ///
    /// # Errors
    ///
    /// [`AdvectError::Numerical`] when the new state contains NaN or
    /// infinity. The simulation keeps the last finite state.
    pub fn advance(&mut self) -> Result<&PeriodicState, AdvectError> {
        let step = self.steps_taken + 1;

        let next = self.scheme.step(self.model, &self.state, &mut self.history)?;
        validate_state(&next, step)?;
        debug_assert!(next.is_periodic(), "step {step} broke q[0] == q[N]");

        let previous = std::mem::replace(&mut self.state, next);
        self.history.rotate(previous);
        self.steps_taken = step;

        if let Some(interval) = self.snapshot_interval {
            if step % interval == 0 {
                self.snapshots.push((step, self.state.clone()));
            }
        }

        Ok(&self.state)
    }

    /// Step until the configured number of steps is reached
    pub fn run(mut self) -> Result<SimulationResult, AdvectError> {
        while self.steps_taken < self.time_steps {
            self.advance()?;
        }

        let mut result = SimulationResult::new(self.scheme, self.initial, self.state, self.steps_taken);
        result.snapshots = self.snapshots;

        // Add metadata for diagnostics and reproducibility
        result.add_metadata("solver", self.scheme.label());
        result.add_metadata("time steps", &self.steps_taken.to_string());
        result.add_metadata("velocity", &self.model.velocity().to_string());
        result.add_metadata("grid cells", &result.final_state.grid_cells().to_string());
        result.add_metadata(
            "stencil evaluations",
            &(self.steps_taken * self.scheme.evaluations_per_step()).to_string(),
        );

        info!(
            "{}: {} steps done, mean drift {:.3e}",
            self.scheme.label(),
            result.steps,
            result.comparison().mean_drift()
        );

        Ok(result)
    }

    /// Validate, run every step and collect the result
    pub fn solve(scenario: &Scenario, config: &SolverConfiguration) -> Result<SimulationResult, AdvectError> {
        Simulation::new(scenario, config)?.run()
    }

    pub fn state(&self) -> &PeriodicState {
        &self.state
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }
}

// =================================================================================================
// Tests
// =================================================================================================

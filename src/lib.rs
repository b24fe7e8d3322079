//! advect-rs: Periodic 1-D Advection Scheme Comparison
//!
//! Integrates the linear advection equation `∂q/∂t + u ∂q/∂x = 0` on a
//! periodic grid with several explicit time-stepping schemes, so their
//! numerical diffusion and dispersion can be compared against the initial
//! condition.
//!
//! # Architecture
//!
//! advect-rs separates physics (what to solve) from numerics (how to solve it):
//!
//! 1. **Physics** ([`physics`]): the spatial stencils (upwind flux
//!    difference, centered FTCS tendency) behind the [`PhysicalModel`] trait.
//! 2. **Numerics** ([`solver`]): the time steppers (upwind, Adams-Bashforth 3,
//!    Runge-Kutta 4), the history buffers and the simulation driver.
//! 3. **Collaborators**: initial shapes ([`models`]), plots and CSV export
//!    ([`output`]), and the command-line front end ([`cli`]).
//!
//! Grid convention: a state holds `N + 1` values, indices `0..=N`, where
//! index `0` and index `N` are the same periodic point.
//!
//! # Quick Start
//!
//! ```rust
//! use advect_rs::prelude::*;
//!
//! # fn main() -> Result<(), AdvectError> {
//! // 1. Initial condition and physics
//! let initial = initialize(InitialShape::Step, 100)?;
//! let scenario = Scenario::new(Box::new(LinearAdvection::new(0.25)), initial)?;
//!
//! // 2. Scheme and step count
//! let config = SolverConfiguration::new(Scheme::Upwind, 100);
//!
//! // 3. Run
//! let result = Simulation::solve(&scenario, &config)?;
//!
//! let comparison = result.comparison();
//! assert!(comparison.mean_drift().abs() < 1e-12);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: periodic state, stencils, advection model
//! - [`solver`]: schemes, history, driver
//! - [`models`]: named initial shapes
//! - [`output`]: comparison report, plots, CSV export
//! - [`cli`]: argument parsing and run orchestration for the `advect` binary

pub mod error;
pub mod physics;
pub mod models;
pub mod solver;
pub mod output;
pub mod cli;

pub use error::{AdvectError, ConfigurationError, NumericalError};
pub use physics::PhysicalModel;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use advect_rs::prelude::*;
    //! ```
    pub use crate::error::{AdvectError, ConfigurationError, NumericalError};
    pub use crate::models::{initialize, InitialShape};
    pub use crate::physics::{LinearAdvection, PeriodicState, PhysicalModel};
    pub use crate::solver::{History,
                            Scenario,
                            Scheme,
                            Simulation,
                            SimulationResult,
                            SolverConfiguration,
                            TimeStepper};
    pub use crate::output::ProfileComparison;
}

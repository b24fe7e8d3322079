//! Time-stepping methods
//!
//! Concrete implementations of the [`TimeStepper`](crate::solver::TimeStepper)
//! trait. Each stepper is stateless; everything a multi-step method needs
//! from earlier steps lives in the [`History`](crate::solver::History) the
//! driver hands it.
//!
//! # Available Methods
//!
//! - **[`UpwindStepper`]**: first-order donor cell update
//!   - Cost: 1 stencil evaluation per step
//!   - Use: monotone transport of discontinuous profiles, `0 ≤ u ≤ 1`
//!
//! - **[`AdamsBashforth3Stepper`]**: third-order linear multistep
//!   - Cost: 1 stencil evaluation per step, two prior states
//!   - Use: cheap higher-order transport of smooth profiles
//!
//! - **[`RK4Stepper`]**: classical fourth-order Runge-Kutta
//!   - Cost: 4 stencil evaluations per step
//!   - Use: the most accurate of the three, widest stability range
//!
//! Pick one at runtime through [`Scheme`](crate::solver::Scheme).

mod adams_bashforth;
mod rk4;
mod upwind;

// Re-exports for convenience
pub use adams_bashforth::AdamsBashforth3Stepper;
pub use rk4::RK4Stepper;
pub use upwind::UpwindStepper;

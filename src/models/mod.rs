//! Initial conditions for advection runs
//!
//! The solver only ever sees a [`PeriodicState`](crate::physics::PeriodicState);
//! this module turns a shape name and a grid size into one.
//!
//! # Available Shapes
//!
//! ## [`InitialShape::Sine`]
//!
//! One smooth period across the ring. Shows the phase (dispersion) error of
//! a scheme without much amplitude loss.
//!
//! ## [`InitialShape::Step`]
//!
//! A top hat with two discontinuities. Shows numerical diffusion (upwind)
//! and spurious oscillations (centered schemes).

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod shapes;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use shapes::{initialize, initialize_named, InitialShape, MIN_GRID_CELLS};

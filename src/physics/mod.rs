//! Physics of periodic 1-D advection
//!
//! This module provides the spatial side of the problem:
//!
//! - **Periodic State** ([`PeriodicState`]): the `N + 1` grid values, with
//!   point 0 identified with point N
//! - **Stencils** ([`stencil`]): upwind flux difference and centered (FTCS)
//!   tendency, both periodic and pure
//! - **Physical Model** ([`PhysicalModel`]): the trait time steppers call,
//!   implemented by [`LinearAdvection`]
//!
//! # Architecture
//!
//! Physical models are **separate from time stepping**:
//! - The model provides the **stencils** (physics)
//! - The stepper provides the **scheme** that combines them (numerics)
//!
//! # Example
//!
//! ```rust
//! use advect_rs::physics::{LinearAdvection, PeriodicState, PhysicalModel};
//!
//! let model = LinearAdvection::new(0.5);
//! let state = PeriodicState::closed(vec![0.0, 0.0, 1.0, 0.0]).unwrap();
//!
//! let dqdt = model.compute_tendency(&state);
//! assert_eq!(dqdt.len(), state.len());
//! ```

// module declaration
pub mod state;
pub mod stencil;
pub mod traits;
pub mod advection;

// re-export commonly used types for convenience
pub use state::PeriodicState;
pub use traits::PhysicalModel;
pub use advection::LinearAdvection;

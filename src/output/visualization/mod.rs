//! Visualization of advection results
//!
//! This module provides tools to visualize simulation results using the `plotters` library.
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`)
//! - **profile**: Spatial plots (q over the grid index)
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use advect_rs::output::visualization::{plot_comparison, PlotConfig};
//!
//! let result = Simulation::solve(&scenario, &config)?;
//!
//! let plot = PlotConfig::comparison(format!("nt={}, u={}", result.steps, 0.25));
//! plot_comparison(&result.initial_state, &result.final_state, "run.svg", Some(&plot))?;
//! ```
//!
//! # When to Use Which Function
//!
//! | Use Case | Function |
//! |----------|----------|
//! | Initial vs final profile, with means | `plot_comparison` |
//! | Profile at every snapshot | `plot_profile_evolution` |

pub mod config;
pub mod profile;

pub use config::PlotConfig;

pub use profile::{default_plot_filename, plot_comparison, plot_profile_evolution};

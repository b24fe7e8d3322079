//! Output module for simulation results
//!
//! - **Report**: initial-versus-final statistics ([`ProfileComparison`])
//! - **Visualization**: PNG/SVG plots using plotters
//! - **Export**: CSV data export for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── report.rs           ← Means, extrema, L2 difference
//! ├── visualization/      ← Plots and graphics
//! │   ├── config.rs
//! │   └── profile.rs
//! └── export/             ← Data export
//!     └── csv.rs
//! ```
//!
//! Nothing in this module feeds back into the numerics: every function
//! consumes finished states.

pub mod export;
pub mod report;
pub mod visualization;

// Re-export commonly used items for convenience
pub use report::ProfileComparison;

pub use visualization::{default_plot_filename, plot_comparison, plot_profile_evolution, PlotConfig};

pub use export::{export_profiles_csv, CsvConfig, CsvExporter, Exporter};

//! Export module for simulation results.
//!
//! # Architecture
//!
//! This module defines the [`Exporter`] trait that abstracts the export format.
//! Each format is an independent implementation in its own sub-module, so a
//! new format means a new file and no change to existing code.
//!
//! # Available formats
//!
//! | Format  | Module          |
//! |---------|-----------------|
//! | CSV     | [`csv`]         |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use advect_rs::output::export::{CsvExporter, Exporter};
//!
//! let exporter = CsvExporter::default();
//!
//! // index,initial,final
//! exporter.export_comparison(&result, "run.csv")?;
//!
//! // index,step_0,step_k,...
//! exporter.export_snapshots(&result, "snapshots.csv")?;
//! ```

pub mod csv;

pub use csv::{export_columns_csv, export_profiles_csv, CsvConfig, CsvError, CsvExporter, CsvMetadata};

use crate::solver::SimulationResult;

/// Abstraction trait for all export formats.
///
/// # Associated type `Error`
///
/// Each format manages its own errors via the associated type, so the
/// caller can react to the exact failure without downcasting.
pub trait Exporter {
    /// Error type specific to this export format.
    type Error: std::error::Error;

    /// Export the initial and final profiles of a run.
    fn export_comparison(&self, result: &SimulationResult, path: &str) -> Result<(), Self::Error>;

    /// Export every snapshot of a run, one column per snapshot.
    ///
    /// # Errors
    ///
    /// Fails when the run kept no snapshots.
    fn export_snapshots(&self, result: &SimulationResult, path: &str) -> Result<(), Self::Error>;
}

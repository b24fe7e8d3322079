//! CSV export of advection results
//!
//! Writes the periodic cells `1..=N` of one or more profiles, one row per
//! grid index. The files load directly into pandas, Excel or gnuplot.
//!
//! # Quick Examples
//!
//! ## Initial vs final profile
//!
//! ```rust,ignore
//! use advect_rs::output::export::export_profiles_csv;
//!
//! export_profiles_csv(&result.initial_state, &result.final_state, "run.csv", None)?;
//! ```
//!
//! **Output** (`run.csv`):
//! ```csv
//! index,initial,final
//! 1,1.000000,0.982113
//! 2,1.000000,0.999841
//! ...
//! ```
//!
//! ## With Metadata
//!
//! ```rust,ignore
//! use advect_rs::output::export::{CsvConfig, CsvMetadata};
//!
//! let config = CsvConfig::default().with_metadata(CsvMetadata::from_result(&result));
//! export_profiles_csv(&result.initial_state, &result.final_state, "run.csv", Some(&config))?;
//! ```
//!
//! **Output** (`run.csv`):
//! ```csv
//! # Advection Simulation Data
//! # Generated: 2026-10-18T09:12:44+00:00
//! # Solver: Upwind
//! # Time Steps: 800
//! # Velocity: 0.25
//! #
//! index,initial,final
//! ...
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};

use thiserror::Error;

use super::Exporter;
use crate::physics::PeriodicState;
use crate::solver::SimulationResult;

// =============================================================================
// Errors
// =============================================================================

/// Failure while writing a CSV file
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("empty data: nothing to export")]
    EmptyData,

    #[error("column length mismatch: `{column}` has {found} values, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("invalid data: NaN or Inf in column `{column}` at index {index}")]
    NonFinite { column: String, index: usize },
}

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust
/// use advect_rs::output::export::CsvConfig;
///
/// let config = CsvConfig {
///     delimiter: ';',
///     precision: 10,
///     ..Default::default()
/// };
/// assert_eq!(config.index_header, "index");
/// ```
#[derive(Clone, Debug)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,

    /// Header of the grid index column (default: "index")
    pub index_header: String,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
            index_header: "index".to_string(),
        }
    }
}

impl CsvConfig {
    /// European CSV format (semicolon, comma for decimal)
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// Only non-None fields are written.
#[derive(Clone, Debug, Default)]
pub struct CsvMetadata {
    /// Model name (e.g., "Linear Advection")
    pub model_name: Option<String>,

    /// Scheme label (e.g., "Runge-Kutta 4")
    pub solver_name: Option<String>,

    /// Initial shape name (e.g., "step")
    pub shape: Option<String>,

    pub grid_cells: Option<usize>,

    pub time_steps: Option<usize>,

    /// Velocity u (cells per step)
    pub velocity: Option<f64>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Collect what a result knows about its own run
    pub fn from_result(result: &SimulationResult) -> Self {
        Self {
            solver_name: Some(result.scheme.label().to_string()),
            grid_cells: Some(result.final_state.grid_cells()),
            time_steps: Some(result.steps),
            velocity: result.metadata.get("velocity").and_then(|v| v.parse().ok()),
            ..Default::default()
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments
fn write_metadata_header<W: Write>(out: &mut W, metadata: &CsvMetadata) -> Result<(), CsvError> {
    writeln!(out, "# Advection Simulation Data")?;

    let now = chrono::Utc::now();
    writeln!(out, "# Generated: {}", now.to_rfc3339())?;

    if let Some(model) = &metadata.model_name {
        writeln!(out, "# Model: {}", model)?;
    }
    if let Some(solver) = &metadata.solver_name {
        writeln!(out, "# Solver: {}", solver)?;
    }
    if let Some(shape) = &metadata.shape {
        writeln!(out, "# Shape: {}", shape)?;
    }
    if let Some(cells) = metadata.grid_cells {
        writeln!(out, "# Grid Cells: {}", cells)?;
    }
    if let Some(steps) = metadata.time_steps {
        writeln!(out, "# Time Steps: {}", steps)?;
    }
    if let Some(u) = metadata.velocity {
        writeln!(out, "# Velocity: {}", u)?;
    }

    for (key, value) in &metadata.custom {
        writeln!(out, "# {}: {}", key, value)?;
    }

    writeln!(out, "#")?;

    Ok(())
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export named columns over the grid index `1..=N`
///
/// # Errors
///
/// - [`CsvError::EmptyData`] for no columns or empty columns
/// - [`CsvError::LengthMismatch`] when columns differ in length
/// - [`CsvError::NonFinite`] for NaN or Inf values
/// - [`CsvError::Io`] when the file cannot be written
pub fn export_columns_csv(
    columns: &[(&str, &[f64])],
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), CsvError> {
    // ============================= Validation =============================

    let Some((_, first)) = columns.first() else {
        return Err(CsvError::EmptyData);
    };
    let rows = first.len();
    if rows == 0 {
        return Err(CsvError::EmptyData);
    }

    for (name, values) in columns {
        if values.len() != rows {
            return Err(CsvError::LengthMismatch {
                column: name.to_string(),
                expected: rows,
                found: values.len(),
            });
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(CsvError::NonFinite {
                column: name.to_string(),
                index: index + 1,
            });
        }
    }

    // ============================= Configuration ==========================

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    let mut out = BufWriter::new(File::create(output_path)?);

    // ============================= Write Metadata =========================

    if configuration.include_metadata {
        if let Some(metadata) = &configuration.metadata {
            write_metadata_header(&mut out, metadata)?;
        }
    }

    // ============================= Write Header ===========================

    write!(out, "{}", configuration.index_header)?;
    for (name, _) in columns {
        write!(out, "{}{}", configuration.delimiter, name)?;
    }
    writeln!(out)?;

    // ============================= Write Data =============================

    for row in 0..rows {
        write!(out, "{}", row + 1)?;
        for (_, values) in columns {
            write!(
                out,
                "{}{}",
                configuration.delimiter,
                format_number(values[row], configuration)
            )?;
        }
        writeln!(out)?;
    }

    out.flush()?;
    Ok(())
}

/// Export the initial and final profiles as `index,initial,final`
pub fn export_profiles_csv(
    initial: &PeriodicState,
    final_state: &PeriodicState,
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), CsvError> {
    export_columns_csv(
        &[("initial", initial.interior()), ("final", final_state.interior())],
        output_path,
        configuration,
    )
}

// =============================================================================
// Exporter
// =============================================================================

/// CSV implementation of [`Exporter`]
#[derive(Clone, Debug, Default)]
pub struct CsvExporter {
    pub config: CsvConfig,
}

impl CsvExporter {
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }
}

impl Exporter for CsvExporter {
    type Error = CsvError;

    fn export_comparison(&self, result: &SimulationResult, path: &str) -> Result<(), CsvError> {
        export_profiles_csv(&result.initial_state, &result.final_state, path, Some(&self.config))
    }

    fn export_snapshots(&self, result: &SimulationResult, path: &str) -> Result<(), CsvError> {
        let names: Vec<String> = result
            .snapshots
            .iter()
            .map(|(step, _)| format!("step_{step}"))
            .collect();

        let columns: Vec<(&str, &[f64])> = names
            .iter()
            .zip(&result.snapshots)
            .map(|(name, (_, state))| (name.as_str(), state.interior()))
            .collect();

        export_columns_csv(&columns, path, Some(&self.config))
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Scheme;
    use std::fs;
    use tempfile::NamedTempFile;

    fn profiles() -> (PeriodicState, PeriodicState) {
        (
            PeriodicState::closed(vec![0.0, 1.0, 0.0, 0.0]).unwrap(),
            PeriodicState::closed(vec![0.0, 0.5, 0.5, 0.0]).unwrap(),
        )
    }

    #[test]
    fn test_export_profiles_basic() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        let (initial, final_state) = profiles();

        export_profiles_csv(&initial, &final_state, path, None).unwrap();

        let content = fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "index,initial,final");
        assert_eq!(lines[1], "1,1.000000,0.500000");
        assert_eq!(lines[2], "2,0.000000,0.500000");
        assert_eq!(lines[3], "3,0.000000,0.000000");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_export_european_format() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        let (initial, final_state) = profiles();

        export_profiles_csv(&initial, &final_state, path, Some(&CsvConfig::european().precision(2)))
            .unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.starts_with("index;initial;final\n"));
        assert!(content.contains("1;1,00;0,50"));
    }

    #[test]
    fn test_export_with_metadata() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        let (initial, final_state) = profiles();

        let mut metadata = CsvMetadata {
            solver_name: Some("Upwind".to_string()),
            velocity: Some(0.5),
            ..Default::default()
        };
        metadata.add_custom("Shape".to_string(), "step".to_string());
        let config = CsvConfig::default().with_metadata(metadata);

        export_profiles_csv(&initial, &final_state, path, Some(&config)).unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.starts_with("# Advection Simulation Data"));
        assert!(content.contains("# Generated: "));
        assert!(content.contains("# Solver: Upwind"));
        assert!(content.contains("# Velocity: 0.5"));
        assert!(content.contains("# Shape: step"));
        assert!(content.contains("#\nindex,initial,final"));
    }

    #[test]
    fn test_empty_columns_rejected() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();

        let empty: &[f64] = &[];
        assert!(matches!(export_columns_csv(&[], path, None), Err(CsvError::EmptyData)));
        assert!(matches!(
            export_columns_csv(&[("a", empty)], path, None),
            Err(CsvError::EmptyData)
        ));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();

        let result = export_columns_csv(&[("a", &[1.0, 2.0][..]), ("b", &[1.0][..])], path, None);
        assert!(matches!(
            result,
            Err(CsvError::LengthMismatch { expected: 2, found: 1, .. })
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();

        let result = export_columns_csv(&[("a", &[1.0, f64::NAN][..])], path, None);
        match result {
            Err(CsvError::NonFinite { column, index }) => {
                assert_eq!(column, "a");
                assert_eq!(index, 2);
            }
            other => panic!("expected NonFinite, got {other:?}"),
        }
    }

    #[test]
    fn test_exporter_writes_comparison() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        let (initial, final_state) = profiles();

        let result = SimulationResult::new(Scheme::RungeKutta4, initial, final_state, 3);
        let exporter = CsvExporter::new(CsvConfig::default().delimiter('\t').precision(1));

        exporter.export_comparison(&result, path).unwrap();

        let content = fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines, vec!["index\tinitial\tfinal", "1\t1.0\t0.5", "2\t0.0\t0.5", "3\t0.0\t0.0"]);
    }

    #[test]
    fn test_exporter_writes_snapshots() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        let (initial, final_state) = profiles();

        let mut result = SimulationResult::new(Scheme::Upwind, initial.clone(), final_state.clone(), 2);
        result.snapshots = vec![(0, initial), (2, final_state)];

        CsvExporter::default().export_snapshots(&result, path).unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.starts_with("index,step_0,step_2\n"));
        assert!(content.contains("2,0.000000,0.500000"));
    }
}

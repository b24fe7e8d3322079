//! Command-line front end of the `advect` binary
//!
//! Parses the argument list into [`CliOptions`], builds the scenario and
//! configuration, runs the simulation and writes the requested outputs.
//! Nothing here affects the numerics.
//!
//! # Flags
//!
//! ```text
//! -a <scheme>      upwind | rungakutta | adamsbashforth   (default upwind)
//! -f <shape>       step | sine                             (default step)
//! -n <cells>       grid cells N                            (default 100)
//! -t <steps>       time steps                              (default 800)
//! -c <cycles>      trips around the domain, overrides -t with ⌊N/u·c⌋
//! -u <velocity>    cells per step                          (default 0.25)
//! --plot           write the initial-vs-final plot
//! --snapshots <k>  keep every k-th state, plotted with --plot
//! --csv <path>     write index,initial,final to a CSV file
//! --out-dir <dir>  directory for plots                     (default .)
//! --verbose        debug-level logging
//! -v, --version    print the version and exit
//! -h, --help       print this help and exit
//! ```

use std::path::PathBuf;

use log::{debug, info};
use thiserror::Error;

use crate::error::{AdvectError, ConfigurationError};
use crate::models::{initialize, InitialShape};
use crate::output::export::{CsvConfig, CsvError, CsvMetadata};
use crate::output::visualization::{default_plot_filename, plot_comparison, plot_profile_evolution, PlotConfig};
use crate::output::export_profiles_csv;
use crate::physics::LinearAdvection;
use crate::solver::{Scenario, Scheme, Simulation, SimulationResult, SolverConfiguration};

/// Usage text printed by `--help`
pub const USAGE: &str = "\
Run an advection scheme on a periodic 1-D grid and compare the result with the initial profile.

Usage: advect [OPTIONS]

Options:
  -a <scheme>      advection scheme [upwind, rungakutta, adamsbashforth] (default: upwind)
  -f <shape>       initial shape [step, sine] (default: step)
  -n <cells>       number of grid cells (default: 100)
  -t <steps>       number of time steps (default: 800)
  -c <cycles>      number of trips through the domain; overrides -t
  -u <velocity>    wind speed in grid cells per time step (default: 0.25)
      --plot           plot initial and final profiles
      --snapshots <k>  keep every k-th state and plot them with --plot
      --csv <path>     export initial and final profiles as CSV
      --out-dir <dir>  directory for plot files (default: .)
      --verbose        verbose output
  -v, --version    print version
  -h, --help       print help";

// =================================================================================================
// Errors
// =================================================================================================

/// Failure while reading the command line
#[derive(Debug, Error)]
pub enum CliError {
    #[error("missing value for `{0}`")]
    MissingValue(String),

    #[error("invalid value `{value}` for `{flag}`: {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },

    #[error("unknown argument `{0}` (see --help)")]
    UnknownArgument(String),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// Failure of a CLI run after parsing
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Simulation(#[from] AdvectError),

    #[error("CSV export failed: {0}")]
    Csv(#[from] CsvError),

    #[error("plotting failed: {0}")]
    Plot(String),
}

// =================================================================================================
// Options
// =================================================================================================

/// Everything one invocation asks for
#[derive(Debug, Clone, PartialEq)]
pub struct CliOptions {
    pub scheme: Scheme,
    pub shape: InitialShape,
    pub grid_cells: usize,
    pub time_steps: usize,
    /// Overrides `time_steps` when set
    pub cycles: Option<usize>,
    pub velocity: f64,
    pub plot: bool,
    pub snapshot_interval: Option<usize>,
    pub csv: Option<PathBuf>,
    pub out_dir: PathBuf,
    pub verbose: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            scheme: Scheme::Upwind,
            shape: InitialShape::Step,
            grid_cells: 100,
            time_steps: 800,
            cycles: None,
            velocity: 0.25,
            plot: false,
            snapshot_interval: None,
            csv: None,
            out_dir: PathBuf::from("."),
            verbose: false,
        }
    }
}

/// What the command line asks the binary to do
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    Run(CliOptions),
    Help,
    Version,
}

impl CliOptions {
    /// Parse arguments (without the program name)
    ///
    /// # Example
    ///
    /// ```rust
    /// use advect_rs::cli::{CliCommand, CliOptions};
    /// use advect_rs::solver::Scheme;
    ///
    /// let args = ["-a", "rungakutta", "-n", "50", "-c", "2"].map(String::from);
    /// let CliCommand::Run(options) = CliOptions::parse(args).unwrap() else {
    ///     panic!("expected a run");
    /// };
    ///
    /// assert_eq!(options.scheme, Scheme::RungeKutta4);
    /// assert_eq!(options.solver_configuration().unwrap().time_steps, 400);
    /// ```
    pub fn parse<I>(args: I) -> Result<CliCommand, CliError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = CliOptions::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(CliCommand::Help),
                "-v" | "--version" => return Ok(CliCommand::Version),
                "--plot" => options.plot = true,
                "--verbose" => options.verbose = true,
                "-a" => options.scheme = value(&arg, args.next())?.parse()?,
                "-f" => options.shape = value(&arg, args.next())?.parse()?,
                "-n" => options.grid_cells = number(&arg, args.next())?,
                "-t" => options.time_steps = number(&arg, args.next())?,
                "-c" => options.cycles = Some(number(&arg, args.next())?),
                "-u" => options.velocity = number(&arg, args.next())?,
                "--snapshots" => options.snapshot_interval = Some(number(&arg, args.next())?),
                "--csv" => options.csv = Some(PathBuf::from(value(&arg, args.next())?)),
                "--out-dir" => options.out_dir = PathBuf::from(value(&arg, args.next())?),
                _ => return Err(CliError::UnknownArgument(arg)),
            }
        }

        Ok(CliCommand::Run(options))
    }

    /// Solver configuration, with cycles converted to steps
    pub fn solver_configuration(&self) -> Result<SolverConfiguration, ConfigurationError> {
        let mut config = match self.cycles {
            Some(cycles) => {
                let config = SolverConfiguration::from_cycles(self.scheme, self.grid_cells, self.velocity, cycles)?;
                debug!("{} cycles at u = {} -> {} time steps", cycles, self.velocity, config.time_steps);
                config
            }
            None => SolverConfiguration::new(self.scheme, self.time_steps),
        };

        if let Some(interval) = self.snapshot_interval {
            config = config.with_snapshot_interval(interval);
        }
        Ok(config)
    }

    /// Scenario described by the shape, grid and velocity options
    pub fn scenario(&self) -> Result<Scenario, ConfigurationError> {
        let initial = initialize(self.shape, self.grid_cells)?;
        Scenario::new(Box::new(LinearAdvection::new(self.velocity)), initial)
    }
}

fn value(flag: &str, next: Option<String>) -> Result<String, CliError> {
    next.ok_or_else(|| CliError::MissingValue(flag.to_string()))
}

fn number<T>(flag: &str, next: Option<String>) -> Result<T, CliError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = value(flag, next)?;
    raw.parse().map_err(|e: T::Err| CliError::InvalidValue {
        flag: flag.to_string(),
        value: raw.clone(),
        reason: e.to_string(),
    })
}

// =================================================================================================
// Run
// =================================================================================================

/// Files written by a run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOutputs {
    pub plot: Option<PathBuf>,
    pub evolution_plot: Option<PathBuf>,
    pub csv: Option<PathBuf>,
}

/// Run the simulation an invocation describes and write its outputs
pub fn run(options: &CliOptions) -> Result<(SimulationResult, RunOutputs), RunError> {
    let config = options.solver_configuration().map_err(AdvectError::from)?;
    let scenario = options.scenario().map_err(AdvectError::from)?;

    info!(
        "Running {} on a {} profile: N = {}, u = {}, {} steps",
        config.scheme.label(),
        options.shape,
        options.grid_cells,
        options.velocity,
        config.time_steps
    );

    let result = Simulation::solve(&scenario, &config)?;
    info!("Initial vs final profile:\n{}", result.comparison());

    let mut outputs = RunOutputs::default();

    if options.plot {
        let name = default_plot_filename(
            config.scheme.cli_name(),
            options.shape.name(),
            options.grid_cells,
            result.steps,
            options.velocity,
        );
        let path = options.out_dir.join(&name);
        let title = format!("nt={}, u={}", result.steps, options.velocity);

        debug!("Plotting to {}", path.display());
        plot_comparison(
            &result.initial_state,
            &result.final_state,
            &path.to_string_lossy(),
            Some(&PlotConfig::comparison(title.clone())),
        )
        .map_err(|e| RunError::Plot(e.to_string()))?;
        outputs.plot = Some(path.clone());

        if result.snapshots.len() > 1 {
            let evolution = path.with_file_name(format!("evolution_{name}"));
            plot_profile_evolution(
                &result.snapshots,
                &evolution.to_string_lossy(),
                Some(&PlotConfig::evolution(title)),
            )
            .map_err(|e| RunError::Plot(e.to_string()))?;
            outputs.evolution_plot = Some(evolution);
        }
    }

    if let Some(path) = &options.csv {
        let mut metadata = CsvMetadata::from_result(&result);
        metadata.shape = Some(options.shape.name().to_string());
        metadata.model_name = Some(scenario.model_name().to_string());
        let csv_config = CsvConfig::default().with_metadata(metadata);

        debug!("Exporting CSV to {}", path.display());
        export_profiles_csv(&result.initial_state, &result.final_state, &path.to_string_lossy(), Some(&csv_config))?;
        outputs.csv = Some(path.clone());
    }

    Ok((result, outputs))
}

// =================================================================================================
// Tests
// =================================================================================================

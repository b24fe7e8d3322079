//! Spatial profile plotting
//!
//! Profiles are drawn over the periodic cells `1..=N`; point 0 is the ghost
//! copy of point N and is left out.
//!
//! # Usage
//!
//! ```rust,ignore
//! use advect_rs::output::visualization::{plot_comparison, PlotConfig};
//!
//! let result = Simulation::solve(&scenario, &config)?;
//! plot_comparison(&result.initial_state, &result.final_state, "upwind.png", None)?;
//! ```

use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

use super::config::PlotConfig;
use crate::physics::PeriodicState;

// =================================================================================================
// File naming
// =================================================================================================

/// Default image name for a run: `{scheme}_{shape}_{cells}_{steps}_{velocity}.png`
///
/// # Example
///
/// ```rust
/// use advect_rs::output::visualization::default_plot_filename;
///
/// assert_eq!(
///     default_plot_filename("upwind", "step", 100, 800, 0.25),
///     "upwind_step_100_800_0.25.png"
/// );
/// ```
pub fn default_plot_filename(
    scheme: &str,
    shape: &str,
    grid_cells: usize,
    time_steps: usize,
    velocity: f64,
) -> String {
    format!("{scheme}_{shape}_{grid_cells}_{time_steps}_{velocity}.png")
}

// =================================================================================================
// Core Plotting Functions
// =================================================================================================

/// Plot the initial and final profiles on the same axes
///
/// Draws both profiles over the grid index, and with `show_means` a
/// horizontal line at each profile's mean.
///
/// # Arguments
///
/// * `initial` - State before the first step
/// * `final_state` - State after the last step
/// * `output_path` - Path to save the plot (`.svg` for SVG, PNG otherwise)
/// * `config` - Optional plot configuration
pub fn plot_comparison(
    initial: &PeriodicState,
    final_state: &PeriodicState,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if initial.len() != final_state.len() {
        return Err(format!(
            "Grid mismatch: {} initial points versus {} final points",
            initial.len(),
            final_state.len()
        )
        .into());
    }

    let default_config = PlotConfig::comparison("Initial vs final profile");
    let config = config.unwrap_or(&default_config);

    let series = vec![
        ("initial".to_string(), initial.interior().to_vec(), config.initial_color),
        ("final".to_string(), final_state.interior().to_vec(), config.final_color),
    ];

    let means = if config.show_means {
        vec![
            (initial.mean(), config.initial_color),
            (final_state.mean(), config.final_color),
        ]
    } else {
        Vec::new()
    };

    draw_to_path(output_path, config, &series, &means)
}

/// Plot every snapshot of a run on the same axes
///
/// # Arguments
///
/// * `snapshots` - `(step, state)` pairs, as collected by the driver
/// * `output_path` - Path to save the plot
/// * `config` - Optional plot configuration
pub fn plot_profile_evolution(
    snapshots: &[(usize, PeriodicState)],
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let Some((_, first)) = snapshots.first() else {
        return Err("No snapshots provided".into());
    };

    if snapshots.iter().any(|(_, state)| state.len() != first.len()) {
        return Err("Snapshots must share one grid".into());
    }

    let default_config = PlotConfig::evolution("Profile evolution");
    let config = config.unwrap_or(&default_config);

    let series: Vec<(String, Vec<f64>, RGBColor)> = snapshots
        .iter()
        .enumerate()
        .map(|(i, (step, state))| {
            (format!("step {step}"), state.interior().to_vec(), config.series_color(i))
        })
        .collect();

    draw_to_path(output_path, config, &series, &[])
}

// =================================================================================================
// Drawing
// =================================================================================================

type Series = (String, Vec<f64>, RGBColor);

/// Pick the backend from the file extension and draw
fn draw_to_path(
    output_path: &str,
    config: &PlotConfig,
    series: &[Series],
    means: &[(f64, RGBColor)],
) -> Result<(), Box<dyn Error>> {
    let ext = Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            draw_profiles(backend, config, series, means)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            draw_profiles(backend, config, series, means)
        }
    }
}

/// Value range covering every series, padded by 10 %
fn value_range(series: &[Series]) -> (f64, f64) {
    let (min, max) = series
        .iter()
        .flat_map(|(_, values, _)| values.iter().copied())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

    let span = max - min;
    let pad = if span > 1e-12 { 0.1 * span } else { 0.1 * max.abs().max(1.0) };
    (min - pad, max + pad)
}

/// Implementation for profile plotting with concrete backend
fn draw_profiles<DB: DrawingBackend>(
    backend: DB,
    config: &PlotConfig,
    series: &[Series],
    means: &[(f64, RGBColor)],
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let points = series.iter().map(|(_, values, _)| values.len()).max().unwrap_or(0);
    if points == 0 {
        return Err("Nothing to plot".into());
    }

    let (y_min, y_max) = value_range(series);
    let x_max = (points as f64).max(2.0);

    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 32).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(1.0..x_max, y_min..y_max)?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .y_label_formatter(&|y| format!("{:.2}", y))
            .draw()?;
    }

    for (label, values, color) in series {
        let color = *color;
        chart
            .draw_series(LineSeries::new(
                values.iter().enumerate().map(|(k, v)| ((k + 1) as f64, *v)),
                ShapeStyle::from(&color).stroke_width(config.line_width),
            ))?
            .label(label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    for (mean, color) in means {
        chart.draw_series(LineSeries::new(
            vec![(1.0, *mean), (x_max, *mean)],
            ShapeStyle::from(&color.mix(0.6)).stroke_width(1),
        ))?;
    }

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn step_profile() -> PeriodicState {
        PeriodicState::closed(vec![0.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0]).unwrap()
    }

    #[test]
    fn test_default_filename() {
        assert_eq!(
            default_plot_filename("rungakutta", "sine", 64, 320, 0.2),
            "rungakutta_sine_64_320_0.2.png"
        );
    }

    #[test]
    fn test_value_range_pads_flat_profiles() {
        let series = vec![("flat".to_string(), vec![2.0; 5], BLACK)];
        let (lo, hi) = value_range(&series);
        assert!(lo < 2.0 && hi > 2.0);
    }

    #[test]
    fn test_plot_comparison_writes_svg() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("comparison.svg");
        let path = path.to_str().unwrap();

        let initial = step_profile();
        let shifted = PeriodicState::closed(vec![0.0, 0.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0]).unwrap();

        plot_comparison(&initial, &shifted, path, None).unwrap();
        assert!(std::fs::metadata(path).unwrap().len() > 0);
    }

    #[test]
    fn test_plot_comparison_rejects_grid_mismatch() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mismatch.svg");

        let result = plot_comparison(
            &step_profile(),
            &PeriodicState::uniform(3, 0.0),
            path.to_str().unwrap(),
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_plot_evolution_requires_snapshots() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.svg");

        assert!(plot_profile_evolution(&[], path.to_str().unwrap(), None).is_err());
    }

    #[test]
    fn test_plot_comparison_writes_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("comparison.png");
        let path = path.to_str().unwrap();

        plot_comparison(&step_profile(), &step_profile(), path, None).unwrap();
        assert!(std::fs::metadata(path).unwrap().len() > 0);
    }

    /// Render onto an in-memory bitmap, the backend behind PNG output
    fn render_bitmap(config: &PlotConfig) -> Vec<u8> {
        let mut buffer = vec![0u8; (config.width * config.height * 3) as usize];
        {
            let backend = BitMapBackend::with_buffer(&mut buffer, (config.width, config.height));
            let series = vec![("initial".to_string(), step_profile().interior().to_vec(), config.initial_color)];
            draw_profiles(backend, config, &series, &[]).unwrap();
        }
        buffer
    }

    fn dark_pixels_in_rows(buffer: &[u8], width: u32, rows: std::ops::Range<u32>) -> usize {
        rows.flat_map(|y| (0..width).map(move |x| ((y * width + x) * 3) as usize))
            .filter(|&i| buffer[i] < 100 && buffer[i + 1] < 100 && buffer[i + 2] < 100)
            .count()
    }

    #[test]
    fn test_bitmap_plot_draws_caption() {
        let mut config = PlotConfig::comparison("nt=800, u=0.25");
        config.width = 400;
        config.height = 300;
        config.show_grid = false;

        // Only the caption is drawn in black above the chart area
        let buffer = render_bitmap(&config);
        assert!(dark_pixels_in_rows(&buffer, config.width, 15..45) > 0);
    }

    #[test]
    fn test_bitmap_plot_draws_axis_labels() {
        let mut config = PlotConfig::comparison("");
        config.width = 400;
        config.height = 300;

        // x description and tick labels sit in the bottom label area
        let buffer = render_bitmap(&config);
        assert!(dark_pixels_in_rows(&buffer, config.width, 255..285) > 0);
    }

    #[test]
    fn test_plot_evolution_writes_svg() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("evolution.svg");
        let path = path.to_str().unwrap();

        let snapshots = vec![(0, step_profile()), (4, PeriodicState::uniform(7, 0.5))];
        plot_profile_evolution(&snapshots, path, None).unwrap();
        assert!(std::fs::metadata(path).unwrap().len() > 0);
    }
}

//! All three schemes on both shapes after one trip around the domain
//!
//! q(x, t) = q(x - u·t) on a periodic grid, so after N/u steps the exact
//! solution is the initial profile again and every difference is
//! numerical error: upwind smears the step, the centered schemes ring.
//!
//! Writes one SVG comparison plot per run into `target/compare_schemes/`.

use advect_rs::{
    models::{initialize, InitialShape},
    output::visualization::{default_plot_filename, plot_comparison, PlotConfig},
    physics::LinearAdvection,
    solver::{Scenario, Scheme, Simulation, SolverConfiguration},
};
use std::error::Error;
use std::path::Path;

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== Periodic Linear Advection: Scheme Comparison ===\n");

    let grid_cells = 100;
    let velocity = 0.25;
    let cycles = 1;

    println!("  Grid cells: {}", grid_cells);
    println!("  Velocity u: {} cells/step", velocity);
    println!("  Cycles: {}\n", cycles);

    let out_dir = Path::new("target/compare_schemes");
    std::fs::create_dir_all(out_dir)?;

    for shape in InitialShape::ALL {
        println!("--- {} profile ---\n", shape);

        for scheme in Scheme::ALL {
            let initial = initialize(shape, grid_cells)?;
            let scenario = Scenario::new(Box::new(LinearAdvection::new(velocity)), initial)?;
            let config = SolverConfiguration::from_cycles(scheme, grid_cells, velocity, cycles)?;

            let start = std::time::Instant::now();
            let result = Simulation::solve(&scenario, &config)?;
            let elapsed = start.elapsed();

            let comparison = result.comparison();
            println!("{} ({} steps, {:.3} ms)", scheme, result.steps, elapsed.as_secs_f64() * 1e3);
            println!("{}", comparison);
            println!("overshoot {:.4}, undershoot {:.4}\n", comparison.overshoot(), comparison.undershoot());

            let name = default_plot_filename(scheme.cli_name(), shape.name(), grid_cells, result.steps, velocity)
                .replace(".png", ".svg");
            let path = out_dir.join(name);
            let plot_config = PlotConfig::comparison(format!("{}: nt={}, u={}", scheme, result.steps, velocity));
            plot_comparison(&result.initial_state, &result.final_state, &path.to_string_lossy(), Some(&plot_config))?;
        }
    }

    println!("Plots written to {}", out_dir.display());

    Ok(())
}

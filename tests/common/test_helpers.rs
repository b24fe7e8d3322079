//! Helper functions for integration tests

use advect_rs::models::{initialize, InitialShape};
use advect_rs::physics::{LinearAdvection, PeriodicState};
use advect_rs::solver::{Scenario, Scheme, Simulation, SimulationResult, SolverConfiguration};
use advect_rs::AdvectError;

/// Assert that two states are close (within tolerance) point by point
pub fn assert_states_close(
    state1: &PeriodicState,
    state2: &PeriodicState,
    tolerance: f64,
    message: &str,
) {
    assert_eq!(state1.len(), state2.len(), "{}: Dimension mismatch", message);

    for (i, (v1, v2)) in state1.as_slice().iter().zip(state2.as_slice()).enumerate() {
        let diff = (v1 - v2).abs();
        assert!(
            diff < tolerance,
            "{}: Element {} differs by {} (tolerance {})",
            message, i, diff, tolerance
        );
    }
}

/// Relative error |a - b| / |b| (absolute when b is zero)
pub fn relative_error(value: f64, reference: f64) -> f64 {
    if reference == 0.0 {
        value.abs()
    } else {
        ((value - reference) / reference).abs()
    }
}

/// Scenario with a named shape and plain linear advection
pub fn scenario_for(shape: InitialShape, grid_cells: usize, velocity: f64) -> Scenario {
    let initial = initialize(shape, grid_cells).unwrap();
    Scenario::new(Box::new(LinearAdvection::new(velocity)), initial).unwrap()
}

/// Run `steps` steps of `scheme` on a scenario
pub fn run_scheme(scenario: &Scenario, scheme: Scheme, steps: usize) -> Result<SimulationResult, AdvectError> {
    Simulation::solve(scenario, &SolverConfiguration::new(scheme, steps))
}

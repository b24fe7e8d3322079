//! Common utilities for integration tests
#![allow(dead_code)]

pub mod mock_models;
pub mod test_helpers;

// Re-export commonly used items
pub use mock_models::{CountingModel, EvaluationCounter, PoisonedModel};
pub use test_helpers::{assert_states_close, relative_error, run_scheme, scenario_for};

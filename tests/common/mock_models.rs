//! Mock physical models for testing
//!
//! Both wrap the real advection stencils so results stay meaningful, and add
//! something the solver tests need to observe or provoke.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use advect_rs::physics::{LinearAdvection, PeriodicState, PhysicalModel};

// =================================================================================================
// Counting model
// =================================================================================================

/// Shared view of a [`CountingModel`]'s counters, usable after the model
/// has been boxed into a scenario
#[derive(Clone, Default)]
pub struct EvaluationCounter {
    tendencies: Arc<AtomicUsize>,
    upwind_updates: Arc<AtomicUsize>,
}

impl EvaluationCounter {
    /// Number of centered tendency evaluations so far
    pub fn tendency_calls(&self) -> usize {
        self.tendencies.load(Ordering::SeqCst)
    }

    /// Number of upwind updates so far
    pub fn upwind_calls(&self) -> usize {
        self.upwind_updates.load(Ordering::SeqCst)
    }
}

/// Linear advection that counts its stencil evaluations
pub struct CountingModel {
    inner: LinearAdvection,
    counter: EvaluationCounter,
}

impl CountingModel {
    pub fn new(velocity: f64) -> Self {
        Self {
            inner: LinearAdvection::new(velocity),
            counter: EvaluationCounter::default(),
        }
    }

    pub fn counter(&self) -> EvaluationCounter {
        self.counter.clone()
    }
}

impl PhysicalModel for CountingModel {
    fn velocity(&self) -> f64 {
        self.inner.velocity()
    }

    fn upwind_update(&self, state: &PeriodicState) -> PeriodicState {
        self.counter.upwind_updates.fetch_add(1, Ordering::SeqCst);
        self.inner.upwind_update(state)
    }

    fn compute_tendency(&self, state: &PeriodicState) -> PeriodicState {
        self.counter.tendencies.fetch_add(1, Ordering::SeqCst);
        self.inner.compute_tendency(state)
    }

    fn name(&self) -> &str {
        "Counting Advection"
    }
}

// =================================================================================================
// Poisoned model
// =================================================================================================

/// Advection whose stencils start returning NaN at one grid point after a
/// given number of evaluations
pub struct PoisonedModel {
    inner: LinearAdvection,
    healthy_calls: usize,
    poisoned_index: usize,
    calls: AtomicUsize,
}

impl PoisonedModel {
    pub fn new(velocity: f64, healthy_calls: usize, poisoned_index: usize) -> Self {
        Self {
            inner: LinearAdvection::new(velocity),
            healthy_calls,
            poisoned_index,
            calls: AtomicUsize::new(0),
        }
    }

    fn poison(&self, clean: PeriodicState) -> PeriodicState {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.healthy_calls {
            return clean;
        }

        let mut values = clean.as_slice().to_vec();
        values[self.poisoned_index] = f64::NAN;
        PeriodicState::closed(values).unwrap()
    }
}

impl PhysicalModel for PoisonedModel {
    fn velocity(&self) -> f64 {
        self.inner.velocity()
    }

    fn upwind_update(&self, state: &PeriodicState) -> PeriodicState {
        self.poison(self.inner.upwind_update(state))
    }

    fn compute_tendency(&self, state: &PeriodicState) -> PeriodicState {
        self.poison(self.inner.compute_tendency(state))
    }

    fn name(&self) -> &str {
        "Poisoned Advection"
    }
}

//! Prior states for multi-step schemes
//!
//! Adams-Bashforth 3 combines the tendency of the current state with the
//! tendencies of the two states before it. [`History`] keeps those states,
//! most recent first, together with their tendencies once computed, so each
//! step costs a single new stencil evaluation.
//!
//! # Rotation
//!
//! ```text
//! before step n:   [ q(n-1), q(n-2) ]
//! after step n:    [ q(n),   q(n-1) ]     q(n-2) dropped
//! ```
//!
//! At the start of a run every slot holds the initial state, so the first
//! two AB3 steps fall back to the initial tendency where a true prior state
//! does not exist yet.

use std::collections::VecDeque;

use crate::physics::{PeriodicState, PhysicalModel};

#[derive(Debug, Clone, PartialEq)]
struct HistorySlot {
    state: PeriodicState,
    tendency: Option<PeriodicState>,
}

/// Fixed-depth ring of prior states, most recent first
///
/// # Example
///
/// ```rust
/// use advect_rs::physics::PeriodicState;
/// use advect_rs::solver::History;
///
/// let initial = PeriodicState::uniform(4, 1.0);
/// let mut history = History::seeded(&initial, 2);
/// assert_eq!(history.len(), 2);
///
/// history.rotate(PeriodicState::uniform(4, 2.0));
/// assert_eq!(history.state(0), Some(&PeriodicState::uniform(4, 2.0)));
/// assert_eq!(history.state(1), Some(&initial));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    depth: usize,
    slots: VecDeque<HistorySlot>,
    pending: Option<PeriodicState>,
}

impl History {
    /// History of depth zero, for single-step schemes
    pub fn empty() -> Self {
        Self::default()
    }

    /// Fill every one of `depth` slots with `initial`
    pub fn seeded(initial: &PeriodicState, depth: usize) -> Self {
        let slots = (0..depth)
            .map(|_| HistorySlot {
                state: initial.clone(),
                tendency: None,
            })
            .collect();

        Self {
            depth,
            slots,
            pending: None,
        }
    }

    /// Number of slots kept after each rotation
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of slots currently held
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// State `age + 1` steps back (`age == 0` is the previous step)
    pub fn state(&self, age: usize) -> Option<&PeriodicState> {
        self.slots.get(age).map(|slot| &slot.state)
    }

    /// Tendency of the state `age + 1` steps back, if already known
    pub fn cached_tendency(&self, age: usize) -> Option<&PeriodicState> {
        self.slots.get(age).and_then(|slot| slot.tendency.as_ref())
    }

    /// Make sure the tendency of slot `age` is cached
    ///
    /// A slot holding the same values as `current` reuses `current_tendency`
    /// instead of evaluating the stencil again. Returns false when the slot
    /// does not exist.
    pub fn ensure_tendency(
        &mut self,
        age: usize,
        model: &dyn PhysicalModel,
        current: &PeriodicState,
        current_tendency: &PeriodicState,
    ) -> bool {
        let Some(slot) = self.slots.get_mut(age) else {
            return false;
        };

        if slot.tendency.is_none() {
            let tendency = if slot.state == *current {
                current_tendency.clone()
            } else {
                model.compute_tendency(&slot.state)
            };
            slot.tendency = Some(tendency);
        }
        true
    }

    /// Remember the tendency of the state being stepped, to be stored with
    /// it on the next rotation
    pub fn record_tendency(&mut self, tendency: PeriodicState) {
        self.pending = Some(tendency);
    }

    /// Push the state just stepped from, dropping the oldest slot
    ///
    /// A depth-zero history discards `previous` immediately.
    pub fn rotate(&mut self, previous: PeriodicState) {
        let tendency = self.pending.take();
        if self.depth == 0 {
            return;
        }

        self.slots.push_front(HistorySlot {
            state: previous,
            tendency,
        });
        self.slots.truncate(self.depth);
    }
}

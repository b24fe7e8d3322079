//! Periodic grid state
//!
//! A [`PeriodicState`] holds the `N + 1` grid values of a 1-D periodic
//! domain. Index `0` and index `N` are the same physical point, so the ring
//! has `N` distinct cells and `q[0] == q[N]` at every step boundary.
//!
//! The same type carries tendencies (`dq/dt` per step) returned by the
//! centered stencil; the arithmetic operators let schemes combine states and
//! tendencies the way the formulas read.

use nalgebra::DVector;
use std::ops::{Add, Div, Mul, Sub};

use crate::error::{ConfigurationError, NonFinite};

/// Values of a periodic 1-D grid, indices `0..=N`
///
/// # Invariant
///
/// Construction through [`PeriodicState::new`] guarantees at least two
/// points and `q[0] == q[N]`. The stencils and the schemes built on them
/// re-establish the equality at the end of every step.
///
/// # Example
///
/// ```rust
/// use advect_rs::physics::PeriodicState;
///
/// let state = PeriodicState::closed(vec![9.0, 1.0, 2.0, 3.0]).unwrap();
///
/// assert_eq!(state.grid_cells(), 3);
/// assert_eq!(state.as_slice(), &[3.0, 1.0, 2.0, 3.0]);
/// assert_eq!(state.total_mass(), 6.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodicState {
    values: DVector<f64>,
}

impl PeriodicState {
    /// Create a state from values that already satisfy `q[0] == q[N]`
    pub fn new(values: DVector<f64>) -> Result<Self, ConfigurationError> {
        if values.len() < 2 {
            return Err(ConfigurationError::StateTooShort(values.len()));
        }

        let state = Self { values };
        if !state.is_periodic() {
            return Err(ConfigurationError::NotPeriodic {
                first: state.values[0],
                last: state.values[state.grid_cells()],
            });
        }

        Ok(state)
    }

    /// Create a state from raw values, closing the ring by copying `q[N]`
    /// into `q[0]`
    pub fn closed(values: Vec<f64>) -> Result<Self, ConfigurationError> {
        if values.len() < 2 {
            return Err(ConfigurationError::StateTooShort(values.len()));
        }

        let mut state = Self::from_vector(DVector::from_vec(values));
        state.enforce_periodicity();
        Ok(state)
    }

    /// Uniform state over `grid_cells + 1` points
    pub fn uniform(grid_cells: usize, value: f64) -> Self {
        Self::from_vector(DVector::from_element(grid_cells.max(1) + 1, value))
    }

    /// Wrap stencil output without checking the invariant
    pub(crate) fn from_vector(values: DVector<f64>) -> Self {
        Self { values }
    }

    // ========================================== Queries ==========================================

    /// Number of stored points (`N + 1`)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Never true for a constructed state
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of distinct periodic cells (`N`)
    pub fn grid_cells(&self) -> usize {
        self.values.len() - 1
    }

    pub fn values(&self) -> &DVector<f64> {
        &self.values
    }

    pub fn as_slice(&self) -> &[f64] {
        self.values.as_slice()
    }

    /// Values at indices `1..=N`, each periodic cell exactly once
    pub fn interior(&self) -> &[f64] {
        &self.values.as_slice()[1..]
    }

    pub fn into_inner(self) -> DVector<f64> {
        self.values
    }

    /// `q[0] == q[N]` (false when either end is NaN)
    pub fn is_periodic(&self) -> bool {
        self.values[0] == self.values[self.grid_cells()]
    }

    /// Copy `q[N]` into `q[0]`
    pub fn enforce_periodicity(&mut self) {
        let last = self.grid_cells();
        self.values[0] = self.values[last];
    }

    /// Sum over the interior cells
    pub fn total_mass(&self) -> f64 {
        self.interior().iter().sum()
    }

    /// Mean over the interior cells
    pub fn mean(&self) -> f64 {
        self.total_mass() / self.grid_cells() as f64
    }

    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Largest absolute value
    pub fn amplitude(&self) -> f64 {
        self.values.amax()
    }

    /// Largest pointwise difference to another state of the same length
    pub fn max_abs_difference(&self, other: &PeriodicState) -> f64 {
        (&self.values - &other.values).amax()
    }

    /// Root-mean-square difference over the interior cells
    pub fn l2_difference(&self, other: &PeriodicState) -> f64 {
        let sum_squared: f64 = self
            .interior()
            .iter()
            .zip(other.interior())
            .map(|(a, b)| (a - b).powi(2))
            .sum();
        (sum_squared / self.grid_cells() as f64).sqrt()
    }

    /// First NaN or infinite value, with its index
    pub fn first_non_finite(&self) -> Option<(usize, NonFinite)> {
        self.values.iter().enumerate().find_map(|(index, value)| {
            if value.is_nan() {
                Some((index, NonFinite::NaN))
            } else if value.is_infinite() {
                Some((index, NonFinite::Infinity))
            } else {
                None
            }
        })
    }
}

// Operator overloading for numerical operations

impl Add for PeriodicState {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_vector(self.values + rhs.values)
    }
}

impl<'a> Add<&'a PeriodicState> for &'a PeriodicState {
    type Output = PeriodicState;

    fn add(self, rhs: &'a PeriodicState) -> Self::Output {
        PeriodicState::from_vector(&self.values + &rhs.values)
    }
}

impl Sub for PeriodicState {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_vector(self.values - rhs.values)
    }
}

impl Mul<f64> for PeriodicState {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self::Output {
        Self::from_vector(self.values * scalar)
    }
}

impl Mul<f64> for &PeriodicState {
    type Output = PeriodicState;

    fn mul(self, scalar: f64) -> Self::Output {
        PeriodicState::from_vector(&self.values * scalar)
    }
}

impl Div<f64> for PeriodicState {
    type Output = Self;

    fn div(self, scalar: f64) -> Self::Output {
        Self::from_vector(self.values / scalar)
    }
}

impl Div<f64> for &PeriodicState {
    type Output = PeriodicState;

    fn div(self, scalar: f64) -> Self::Output {
        PeriodicState::from_vector(&self.values / scalar)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_short_state() {
        let result = PeriodicState::new(DVector::from_vec(vec![1.0]));
        assert_eq!(result, Err(ConfigurationError::StateTooShort(1)));
    }

    #[test]
    fn test_new_rejects_open_ring() {
        let result = PeriodicState::new(DVector::from_vec(vec![0.0, 1.0, 2.0]));
        assert!(matches!(result, Err(ConfigurationError::NotPeriodic { .. })));
    }

    #[test]
    fn test_closed_copies_last_point() {
        let state = PeriodicState::closed(vec![5.0, 1.0, 2.0]).unwrap();

        assert!(state.is_periodic());
        assert_eq!(state.as_slice(), &[2.0, 1.0, 2.0]);
        assert_eq!(state.grid_cells(), 2);
    }

    #[test]
    fn test_interior_statistics() {
        let state = PeriodicState::closed(vec![0.0, 1.0, 2.0, 3.0, 4.0]).unwrap();

        assert_eq!(state.interior(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(state.total_mass(), 10.0);
        assert_eq!(state.mean(), 2.5);
        assert_eq!(state.min(), 1.0);
        assert_eq!(state.max(), 4.0);
    }

    #[test]
    fn test_amplitude_uses_absolute_value() {
        let state = PeriodicState::closed(vec![0.0, -3.0, 2.0, 1.0]).unwrap();
        assert_eq!(state.amplitude(), 3.0);
    }

    #[test]
    fn test_arithmetic_matches_elementwise() {
        let a = PeriodicState::closed(vec![0.0, 1.0, 2.0]).unwrap();
        let b = PeriodicState::closed(vec![0.0, 4.0, 6.0]).unwrap();

        assert_eq!((&a + &b).as_slice(), &[8.0, 5.0, 8.0]);
        assert_eq!((b.clone() - a.clone()).as_slice(), &[4.0, 3.0, 4.0]);
        assert_eq!((&a * 3.0).as_slice(), &[6.0, 3.0, 6.0]);
        assert_eq!((b / 2.0).as_slice(), &[3.0, 2.0, 3.0]);
    }

    #[test]
    fn test_first_non_finite() {
        let mut values = DVector::from_element(5, 1.0);
        values[3] = f64::INFINITY;
        let state = PeriodicState::from_vector(values.clone());
        assert_eq!(state.first_non_finite(), Some((3, NonFinite::Infinity)));

        values[1] = f64::NAN;
        let state = PeriodicState::from_vector(values);
        assert_eq!(state.first_non_finite(), Some((1, NonFinite::NaN)));

        assert_eq!(PeriodicState::uniform(4, 0.5).first_non_finite(), None);
    }

    #[test]
    fn test_differences() {
        let a = PeriodicState::uniform(4, 1.0);
        let b = PeriodicState::closed(vec![0.0, 1.0, 3.0, 1.0, 1.0]).unwrap();

        assert_eq!(a.max_abs_difference(&b), 2.0);
        assert_eq!(a.l2_difference(&b), 1.0);
    }
}

//! Periodic flux stencils
//!
//! # Upwind flux difference
//!
//! ```text
//! flux_in(i)  = q[i-1] · u
//! flux_out(i) = q[i]   · u
//! q'[i]       = q[i] + flux_in(i) − flux_out(i)      i = 1..=N
//! q'[0]       = q'[N]
//! ```
//!
//! Point 0 is refreshed from the freshly updated point N, so it is the
//! ghost copy of N rather than an independently updated cell.
//!
//! # Centered tendency (FTCS)
//!
//! ```text
//! qedge[i] = (q[i] + q[i+1]) / 2                     i = 0..N-1
//! qedge[N] = qedge[0]
//! dqdt[i]  = (qedge[i-1] − qedge[i]) · u             i = 1..=N
//! dqdt[0]  = dqdt[N]
//! ```
//!
//! Both stencils telescope over the ring: the interior sum of `q'` equals
//! the interior sum of `q`, and the interior sum of `dqdt` is zero.
//!
//! With the `parallel` feature, grids above [`parallel_threshold`] points
//! are filled with rayon. Every point is computed by the same expression
//! either way, so results are bit-identical.
//!
//! [`parallel_threshold`]: crate::solver::parallel_threshold

use nalgebra::DVector;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::physics::PeriodicState;

/// Upwind update of a periodic state
///
/// # Example
///
/// ```rust
/// use advect_rs::physics::{stencil, PeriodicState};
///
/// let q = PeriodicState::closed(vec![0.0, 1.0, 0.0, 0.0, 0.0]).unwrap();
/// let next = stencil::upwind(&q, 0.5);
///
/// assert_eq!(next.as_slice(), &[0.0, 0.5, 0.5, 0.0, 0.0]);
/// ```
pub fn upwind(state: &PeriodicState, velocity: f64) -> PeriodicState {
    let q = state.as_slice();
    let last = q.len() - 1;

    let mut next = vec![0.0; q.len()];
    fill_points(&mut next[1..], |k| {
        let i = k + 1;
        let flux_in = q[i - 1] * velocity;
        let flux_out = q[i] * velocity;
        q[i] + flux_in - flux_out
    });

    next[0] = next[last];

    PeriodicState::from_vector(DVector::from_vec(next))
}

/// Centered-in-space tendency of a periodic state
///
/// # Example
///
/// ```rust
/// use advect_rs::physics::{stencil, PeriodicState};
///
/// let q = PeriodicState::uniform(8, 3.0);
/// let dqdt = stencil::centered_tendency(&q, 0.25);
///
/// assert!(dqdt.as_slice().iter().all(|v| *v == 0.0));
/// ```
pub fn centered_tendency(state: &PeriodicState, velocity: f64) -> PeriodicState {
    let q = state.as_slice();
    let last = q.len() - 1;

    let mut edge = vec![0.0; q.len()];
    fill_points(&mut edge[..last], |i| (q[i] + q[i + 1]) / 2.0);
    edge[last] = edge[0];

    let mut dqdt = vec![0.0; q.len()];
    fill_points(&mut dqdt[1..], |k| (edge[k] - edge[k + 1]) * velocity);
    dqdt[0] = dqdt[last];

    PeriodicState::from_vector(DVector::from_vec(dqdt))
}

/// Write `point(k)` into `out[k]` for every k
fn fill_points<F>(out: &mut [f64], point: F)
where
    F: Fn(usize) -> f64 + Send + Sync,
{
    #[cfg(feature = "parallel")]
    {
        if out.len() > crate::solver::parallel_threshold() {
            out.par_iter_mut()
                .enumerate()
                .for_each(|(k, value)| *value = point(k));
            return;
        }
    }

    for (k, value) in out.iter_mut().enumerate() {
        *value = point(k);
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ramp(cells: usize) -> PeriodicState {
        PeriodicState::closed((0..=cells).map(|i| (i * i) as f64 * 0.1).collect()).unwrap()
    }

    #[test]
    fn test_upwind_moves_mass_downstream() {
        let q = PeriodicState::closed(vec![0.0, 0.0, 1.0, 0.0, 0.0]).unwrap();
        let next = upwind(&q, 1.0);

        // Courant number 1 shifts the profile by exactly one cell
        assert_eq!(next.as_slice(), &[0.0, 0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_upwind_wraps_through_point_zero() {
        // Mass at N flows into cell 1 via the ghost point 0
        let q = PeriodicState::closed(vec![0.0, 0.0, 0.0, 2.0]).unwrap();
        let next = upwind(&q, 0.5);

        assert_eq!(next.as_slice(), &[1.0, 1.0, 0.0, 1.0]);
        assert!(next.is_periodic());
    }

    #[test]
    fn test_upwind_matches_formula_pointwise() {
        let q = ramp(9);
        let u = 0.3;
        let next = upwind(&q, u);
        let values = q.as_slice();

        for i in 1..values.len() {
            let expected = values[i] + values[i - 1] * u - values[i] * u;
            assert_eq!(next.as_slice()[i], expected);
        }
        assert_eq!(next.as_slice()[0], next.as_slice()[9]);
    }

    #[test]
    fn test_upwind_does_not_mutate_input() {
        let q = ramp(6);
        let before = q.clone();
        let _ = upwind(&q, 0.7);
        assert_eq!(q, before);
    }

    #[test]
    fn test_upwind_conserves_interior_sum() {
        let q = ramp(20);
        let next = upwind(&q, 0.4);
        assert_relative_eq!(next.total_mass(), q.total_mass(), max_relative = 1e-14);
    }

    #[test]
    fn test_centered_tendency_matches_formula() {
        let q = ramp(7);
        let u = 0.2;
        let dqdt = centered_tendency(&q, u);
        let values = q.as_slice();
        let n = values.len() - 1;

        let edge = |i: usize| {
            if i == n { (values[0] + values[1]) / 2.0 } else { (values[i] + values[i + 1]) / 2.0 }
        };

        for i in 1..=n {
            assert_eq!(dqdt.as_slice()[i], (edge(i - 1) - edge(i)) * u);
        }
        assert_eq!(dqdt.as_slice()[0], dqdt.as_slice()[n]);
        assert_eq!(dqdt.len(), q.len());
    }

    #[test]
    fn test_centered_tendency_sums_to_zero() {
        let q = ramp(16);
        let dqdt = centered_tendency(&q, 0.6);
        let sum: f64 = dqdt.interior().iter().sum();
        assert!(sum.abs() < 1e-12, "interior tendency sum {}", sum);
    }

    #[test]
    fn test_zero_velocity_gives_zero_tendency() {
        let dqdt = centered_tendency(&ramp(5), 0.0);
        assert!(dqdt.as_slice().iter().all(|v| *v == 0.0));

        let q = ramp(5);
        assert_eq!(upwind(&q, 0.0), q);
    }

    #[test]
    fn test_minimal_grid() {
        let q = PeriodicState::closed(vec![0.0, 4.0]).unwrap();

        assert_eq!(upwind(&q, 0.5).as_slice(), &[4.0, 4.0]);
        assert_eq!(centered_tendency(&q, 0.5).as_slice(), &[0.0, 0.0]);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_path_is_bit_identical() {
        let q = ramp(64);
        let sequential = (upwind(&q, 0.3), centered_tendency(&q, 0.3));

        let _guard = crate::solver::ThresholdGuard::save(8);
        let parallel = (upwind(&q, 0.3), centered_tendency(&q, 0.3));

        assert_eq!(sequential, parallel);
    }
}

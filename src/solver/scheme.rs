//! Runtime selection of the time-stepping scheme

use std::fmt;
use std::str::FromStr;

use crate::error::{AdvectError, ConfigurationError};
use crate::physics::{PeriodicState, PhysicalModel};
use crate::solver::{AdamsBashforth3Stepper, History, RK4Stepper, TimeStepper, UpwindStepper};

/// Time-stepping scheme, selected once per run
///
/// Names are matched case-insensitively. Each scheme accepts its canonical
/// name plus the spellings in common use:
///
/// | Scheme            | Accepted names                                          |
/// |-------------------|---------------------------------------------------------|
/// | `Upwind`          | `upwind`                                                |
/// | `AdamsBashforth3` | `adamsbashforth`, `adamsbashforth3`, `ab3`              |
/// | `RungeKutta4`     | `rungakutta`, `rungakutta4`, `rungekutta`, `rungekutta4`, `rk4` |
///
/// # Example
///
/// ```rust
/// use advect_rs::solver::Scheme;
///
/// let scheme: Scheme = "RK4".parse().unwrap();
/// assert_eq!(scheme, Scheme::RungeKutta4);
/// assert_eq!(scheme.cli_name(), "rungakutta");
///
/// assert!("leapfrog".parse::<Scheme>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// First-order donor cell, see [`UpwindStepper`]
    Upwind,
    /// Third-order Adams-Bashforth, see [`AdamsBashforth3Stepper`]
    AdamsBashforth3,
    /// Classical Runge-Kutta, see [`RK4Stepper`]
    RungeKutta4,
}

impl Scheme {
    pub const ALL: [Scheme; 3] = [Scheme::Upwind, Scheme::AdamsBashforth3, Scheme::RungeKutta4];

    /// Name used on the command line and in file names
    pub fn cli_name(&self) -> &'static str {
        match self {
            Scheme::Upwind => "upwind",
            Scheme::AdamsBashforth3 => "adamsbashforth",
            Scheme::RungeKutta4 => "rungakutta",
        }
    }

    /// Human-readable label for logs and plot legends
    pub fn label(&self) -> &'static str {
        self.stepper().name()
    }

    /// Largest `|u|` for which the scheme is linearly stable
    pub fn stability_limit(&self) -> f64 {
        match self {
            Scheme::Upwind => 1.0,
            Scheme::AdamsBashforth3 => 0.72,
            Scheme::RungeKutta4 => 2.0 * std::f64::consts::SQRT_2,
        }
    }

    /// Whether the scheme can advect at `velocity` at all
    pub fn accepts_velocity(&self, velocity: f64) -> Result<(), ConfigurationError> {
        if !velocity.is_finite() {
            return Err(ConfigurationError::NonFiniteVelocity(velocity));
        }
        if *self == Scheme::Upwind && velocity < 0.0 {
            return Err(ConfigurationError::NegativeUpwindVelocity(velocity));
        }
        Ok(())
    }

    fn stepper(&self) -> &'static dyn TimeStepper {
        match self {
            Scheme::Upwind => &UpwindStepper,
            Scheme::AdamsBashforth3 => &AdamsBashforth3Stepper,
            Scheme::RungeKutta4 => &RK4Stepper,
        }
    }
}

impl TimeStepper for Scheme {
    fn step(
        &self,
        model: &dyn PhysicalModel,
        state: &PeriodicState,
        history: &mut History,
    ) -> Result<PeriodicState, AdvectError> {
        self.stepper().step(model, state, history)
    }

    fn history_depth(&self) -> usize {
        self.stepper().history_depth()
    }

    fn evaluations_per_step(&self) -> usize {
        self.stepper().evaluations_per_step()
    }

    fn name(&self) -> &'static str {
        self.stepper().name()
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Scheme {
    type Err = ConfigurationError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "upwind" => Ok(Scheme::Upwind),
            "adamsbashforth" | "adamsbashforth3" | "ab3" => Ok(Scheme::AdamsBashforth3),
            "rungakutta" | "rungakutta4" | "rungekutta" | "rungekutta4" | "rk4" => {
                Ok(Scheme::RungeKutta4)
            }
            _ => Err(ConfigurationError::UnknownScheme(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("upwind".parse::<Scheme>(), Ok(Scheme::Upwind));
        assert_eq!("AdamsBashforth".parse::<Scheme>(), Ok(Scheme::AdamsBashforth3));
        assert_eq!("ab3".parse::<Scheme>(), Ok(Scheme::AdamsBashforth3));
        assert_eq!("rungakutta".parse::<Scheme>(), Ok(Scheme::RungeKutta4));
        assert_eq!("RungeKutta4".parse::<Scheme>(), Ok(Scheme::RungeKutta4));
    }

    #[test]
    fn test_unknown_scheme() {
        assert_eq!(
            "euler".parse::<Scheme>(),
            Err(ConfigurationError::UnknownScheme("euler".to_string()))
        );
    }

    #[test]
    fn test_names_round_trip() {
        for scheme in Scheme::ALL {
            assert_eq!(scheme.cli_name().parse::<Scheme>(), Ok(scheme));
        }
    }

    #[test]
    fn test_cli_name_differs_from_label() {
        assert_eq!(Scheme::RungeKutta4.cli_name(), "rungakutta");
        assert_eq!(Scheme::RungeKutta4.name(), "Runge-Kutta 4");
        assert_eq!(Scheme::AdamsBashforth3.cli_name(), "adamsbashforth");
        assert_eq!(Scheme::AdamsBashforth3.name(), Scheme::AdamsBashforth3.label());
    }

    #[test]
    fn test_dispatch_properties() {
        assert_eq!(Scheme::Upwind.history_depth(), 0);
        assert_eq!(Scheme::AdamsBashforth3.history_depth(), 2);
        assert_eq!(Scheme::RungeKutta4.history_depth(), 0);

        assert_eq!(Scheme::Upwind.evaluations_per_step(), 1);
        assert_eq!(Scheme::AdamsBashforth3.evaluations_per_step(), 1);
        assert_eq!(Scheme::RungeKutta4.evaluations_per_step(), 4);

        assert_eq!(Scheme::RungeKutta4.to_string(), "Runge-Kutta 4");
    }

    #[test]
    fn test_velocity_acceptance() {
        assert!(Scheme::Upwind.accepts_velocity(0.0).is_ok());
        assert_eq!(
            Scheme::Upwind.accepts_velocity(-0.1),
            Err(ConfigurationError::NegativeUpwindVelocity(-0.1))
        );
        assert!(Scheme::RungeKutta4.accepts_velocity(-0.1).is_ok());
        assert!(Scheme::AdamsBashforth3.accepts_velocity(f64::INFINITY).is_err());
    }
}

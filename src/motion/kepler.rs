//! Keplerian elliptical motion solved through mean and eccentric anomaly.

use std::f64::consts::TAU;

use crate::config::ParameterError;
use crate::types::{RAD_TO_DEG, round_angle};

/// Default number of fixed-point passes when solving Kepler's equation.
///
/// The solver runs a fixed, non-adaptive iteration count so every query
/// costs the same and numeric output is reproducible run to run. Ten
/// passes reach the rounding precision of [`round_angle`] for the
/// eccentricity range this visualizer works in.
pub const DEFAULT_SOLVER_ITERATIONS: u32 = 10;

/// True Keplerian motion of a body orbiting a focus on an ellipse.
///
/// Construction derives the mean motion `n = 2π/period` and the reference
/// epoch `τ` (the time of perihelion passage) from the true anomaly the
/// caller supplies for `time = 0`. Queries then map time through mean,
/// eccentric, and true anomaly to an angle and a radial distance.
#[derive(Clone, Debug)]
pub struct EllipticalKeplersMotion {
    period: f64,
    s_major_axis: f64,
    eccentricity: f64,
    mean_motion: f64,
    reference_epoch: f64,
    iterations: u32,
}

impl EllipticalKeplersMotion {
    /// Create a Kepler motion law.
    ///
    /// `start_rotation` is the true anomaly at `time = 0` in radians,
    /// inverted into a perihelion-passage time internally.
    ///
    /// Rejects eccentricity outside `[0, 1)` (parabolic and hyperbolic
    /// orbits are out of scope, and the anomaly conversions lose their
    /// domain at `e = 1`), and non-positive period or semi-major axis.
    pub fn new(
        period: f64,
        s_major_axis: f64,
        eccentricity: f64,
        start_rotation: f64,
    ) -> Result<Self, ParameterError> {
        if !(0.0..1.0).contains(&eccentricity) {
            return Err(ParameterError::Eccentricity(eccentricity));
        }
        if period <= 0.0 || !period.is_finite() {
            return Err(ParameterError::NonPositivePeriod(period));
        }
        if s_major_axis <= 0.0 || !s_major_axis.is_finite() {
            return Err(ParameterError::NonPositiveSemiMajorAxis(s_major_axis));
        }

        let mut law = Self {
            period,
            s_major_axis,
            eccentricity,
            mean_motion: TAU / period,
            reference_epoch: 0.0,
            iterations: DEFAULT_SOLVER_ITERATIONS,
        };
        law.reference_epoch = law.compute_reference_epoch(start_rotation);
        Ok(law)
    }

    /// Override the fixed iteration count of the Kepler solver.
    ///
    /// The default reproduces the historical numeric behavior; raising it
    /// tightens convergence at the cost of proportionally more work per
    /// query.
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Time at which the true anomaly is zero (perihelion passage).
    ///
    /// Inverts the epoch true anomaly: eccentric anomaly from true
    /// anomaly, mean anomaly through Kepler's equation, then `τ = −M₀/n`.
    fn compute_reference_epoch(&self, start_rotation: f64) -> f64 {
        let e = self.eccentricity;
        let ratio = ((1.0 + e) / (1.0 - e)).sqrt();
        let e0 = 2.0 * ((start_rotation / 2.0).tan() / ratio).atan();
        let m0 = e0 - e * e0.sin();
        -m0 / self.mean_motion
    }

    /// Mean anomaly `M(t) = n·(t − τ)`, radians, unbounded.
    pub fn mean_anomaly(&self, time: f64) -> f64 {
        self.mean_motion * (time - self.reference_epoch)
    }

    /// Solve Kepler's equation `E = M + e·sin(E)` for eccentric anomaly.
    ///
    /// Fixed-point iteration seeded at `E = M`, a fixed number of passes,
    /// no convergence check (see [`DEFAULT_SOLVER_ITERATIONS`]).
    pub fn eccentric_anomaly(&self, mean_anomaly: f64) -> f64 {
        let mut e_anomaly = mean_anomaly;
        for _ in 0..self.iterations {
            e_anomaly = mean_anomaly + self.eccentricity * e_anomaly.sin();
        }
        e_anomaly
    }

    /// True anomaly from eccentric anomaly:
    /// `f = 2·atan(√((1+e)/(1−e)) · tan(E/2))`, bounded to `[−π, π]`.
    pub fn true_anomaly(&self, eccentric_anomaly: f64) -> f64 {
        let e = self.eccentricity;
        let ratio = ((1.0 + e) / (1.0 - e)).sqrt();
        2.0 * (ratio * (eccentric_anomaly / 2.0).tan()).atan()
    }

    /// Distance from the focus at `time`: `r = a·(1 − e·cos E)`.
    pub fn distance(&self, time: f64) -> f64 {
        let e_anomaly = self.eccentric_anomaly(self.mean_anomaly(time));
        self.s_major_axis * (1.0 - self.eccentricity * e_anomaly.cos())
    }

    /// Instantaneous true anomaly at `time`, radians in `[−π, π]`, rounded
    /// to the shared angular precision.
    pub fn rotation(&self, time: f64) -> f64 {
        let e_anomaly = self.eccentric_anomaly(self.mean_anomaly(time));
        round_angle(self.true_anomaly(e_anomaly))
    }

    /// Cumulative rotation at `time` in degrees, unbounded.
    ///
    /// Unwraps the bounded true anomaly: negative angles are normalized
    /// into `[0°, 360°)`, then the completed revolution count is added.
    /// Use this when composing with a separately rotating reference frame;
    /// use [`EllipticalKeplersMotion::rotation`] for the instantaneous
    /// anomaly.
    pub fn full_rotation(&self, time: f64) -> f64 {
        let mut rotation = self.rotation(time) * RAD_TO_DEG;
        if rotation < 0.0 {
            rotation += 360.0;
        }
        rotation + ((time - self.reference_epoch) / self.period).floor() * 360.0
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    pub fn s_major_axis(&self) -> f64 {
        self.s_major_axis
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// The derived perihelion-passage time `τ`.
    pub fn reference_epoch(&self) -> f64 {
        self.reference_epoch
    }
}

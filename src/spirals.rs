//! Rotating spiral-arm families.
//!
//! Arms are rigid curves driven by circular motion. The closed-form
//! radius-at-angle is what the crossing detector consumes; the sampled
//! polylines exist solely so the host can draw the arms.

use glam::DVec2;
use tracing::warn;

use crate::config::{ArchimedeanParameters, LogarithmicParameters, ParameterError};
use crate::controllers::{CircularMotionController, MotionController};
use crate::types::Pose;

/// Angular step between consecutive polyline samples, radians.
const SAMPLE_STEP: f64 = 0.05;

/// Cap on samples per polyline. A curve that never grows (alpha near
/// zero) would otherwise never leave the window.
const MAX_SAMPLES: usize = 100_000;

/// Number of arms in an Archimedean pair and their angular spacing.
const ARCHIMEDEAN_ARMS: usize = 2;

/// Number of arms in a logarithmic set and their angular spacing.
const LOGARITHMIC_ARMS: usize = 4;

/// Sampling window for polyline generation, centered on the family origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::square(800.0)
    }
}

impl Bounds {
    pub fn square(side: f64) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    fn contains(&self, point: DVec2) -> bool {
        point.x.abs() <= self.width / 2.0 && point.y.abs() <= self.height / 2.0
    }
}

/// Sample a polar curve from `phi = 0` outward until it leaves `bounds`.
fn sample_curve(origin: DVec2, bounds: Bounds, radius_at: impl Fn(f64) -> f64) -> Vec<DVec2> {
    let mut points = Vec::new();
    let mut phi = 0.0;
    loop {
        let r = radius_at(phi);
        let point = origin + DVec2::new(r * phi.cos(), r * phi.sin());
        if !bounds.contains(point) {
            break;
        }
        points.push(point);
        phi += SAMPLE_STEP;

        if points.len() >= MAX_SAMPLES {
            warn!("spiral sampling hit the sample cap before leaving the window");
            break;
        }
    }
    points
}

/// Single Archimedean arm, `r(φ) = ro·φ`.
#[derive(Clone, Debug)]
pub struct ArchimedeanSpiral {
    ro: f64,
    base_radius: f64,
}

impl ArchimedeanSpiral {
    /// `base_radius` shifts the sampling origin off the family center,
    /// as the drawn item places it.
    pub fn new(ro: f64, base_radius: f64) -> Self {
        Self { ro, base_radius }
    }

    /// Arm radius at polar angle `φ` in the arm's own rotating frame.
    pub fn radius_at(&self, phi: f64) -> f64 {
        self.ro * phi
    }

    /// Polyline for drawing, sampled until the curve leaves `bounds`.
    pub fn polyline(&self, bounds: Bounds) -> Vec<DVec2> {
        let origin = DVec2::new(0.0, -self.base_radius);
        sample_curve(origin, bounds, |phi| self.radius_at(phi))
    }

    pub fn ro(&self) -> f64 {
        self.ro
    }
}

/// Single logarithmic arm, `r(φ) = r0·e^(α·φ)`, drawn as a band of
/// finite width.
#[derive(Clone, Debug)]
pub struct LogarithmicSpiral {
    alpha: f64,
    r0: f64,
    width: f64,
}

impl LogarithmicSpiral {
    pub fn new(alpha: f64, r0: f64, width: f64) -> Self {
        Self { alpha, r0, width }
    }

    /// Arm center-line radius at polar angle `φ` in the arm's own frame.
    pub fn radius_at(&self, phi: f64) -> f64 {
        self.r0 * (self.alpha * phi).exp()
    }

    /// The three polylines of the banded arm: outer edge, center line,
    /// inner edge, offset by `δ ∈ {+width/2, 0, −width/2}`.
    pub fn band(&self, bounds: Bounds) -> [Vec<DVec2>; 3] {
        [
            self.offset_polyline(bounds, self.width / 2.0),
            self.offset_polyline(bounds, 0.0),
            self.offset_polyline(bounds, -self.width / 2.0),
        ]
    }

    fn offset_polyline(&self, bounds: Bounds, delta: f64) -> Vec<DVec2> {
        sample_curve(DVec2::ZERO, bounds, |phi| self.radius_at(phi) + delta)
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn r0(&self) -> f64 {
        self.r0
    }
}

/// Two Archimedean arms 180° apart, rotating rigidly with a shared period.
///
/// Each arm has its own circular motion offset by the arm index; length
/// parameters are scaled into scene units at construction.
pub struct ArchimedeanArms {
    arms: Vec<(ArchimedeanSpiral, CircularMotionController)>,
}

impl ArchimedeanArms {
    pub fn new(params: &ArchimedeanParameters, scale: f64) -> Result<Self, ParameterError> {
        params.validate()?;

        let step = 360.0 / ARCHIMEDEAN_ARMS as f64;
        let mut arms = Vec::with_capacity(ARCHIMEDEAN_ARMS);
        for i in 0..ARCHIMEDEAN_ARMS {
            let spiral = ArchimedeanSpiral::new(params.ro * scale, 0.0);
            let controller =
                CircularMotionController::new(params.period, params.rotation + step * i as f64)?;
            arms.push((spiral, controller));
        }
        Ok(Self { arms })
    }

    /// Current pose of every arm, in arm-index order.
    pub fn motion(&self, time: f64) -> Vec<Pose> {
        self.arms
            .iter()
            .map(|(_, controller)| controller.motion(time))
            .collect()
    }

    pub fn restart(&self) -> Vec<Pose> {
        self.motion(0.0)
    }

    pub fn spirals(&self) -> impl Iterator<Item = &ArchimedeanSpiral> {
        self.arms.iter().map(|(spiral, _)| spiral)
    }

    pub fn arm_count(&self) -> usize {
        self.arms.len()
    }
}

/// Four logarithmic arms 90° apart, rotating rigidly with a shared period.
pub struct LogarithmicArms {
    arms: Vec<(LogarithmicSpiral, CircularMotionController)>,
}

impl LogarithmicArms {
    pub fn new(params: &LogarithmicParameters, scale: f64) -> Result<Self, ParameterError> {
        params.validate()?;

        let step = 360.0 / LOGARITHMIC_ARMS as f64;
        let mut arms = Vec::with_capacity(LOGARITHMIC_ARMS);
        for i in 0..LOGARITHMIC_ARMS {
            let spiral =
                LogarithmicSpiral::new(params.alpha, params.r0 * scale, params.width * scale);
            let controller =
                CircularMotionController::new(params.period, params.rotation + step * i as f64)?;
            arms.push((spiral, controller));
        }
        Ok(Self { arms })
    }

    /// Current pose of every arm, in arm-index order.
    pub fn motion(&self, time: f64) -> Vec<Pose> {
        self.arms
            .iter()
            .map(|(_, controller)| controller.motion(time))
            .collect()
    }

    pub fn restart(&self) -> Vec<Pose> {
        self.motion(0.0)
    }

    pub fn spirals(&self) -> impl Iterator<Item = &LogarithmicSpiral> {
        self.arms.iter().map(|(spiral, _)| spiral)
    }

    pub fn arm_count(&self) -> usize {
        self.arms.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_archimedean_radius_grows_linearly() {
        let spiral = ArchimedeanSpiral::new(2.48, 0.0);
        assert_abs_diff_eq!(spiral.radius_at(0.0), 0.0);
        assert_abs_diff_eq!(spiral.radius_at(2.0), 4.96);
    }

    #[test]
    fn test_logarithmic_radius_is_exponential() {
        let spiral = LogarithmicSpiral::new(0.218, 3.0, 0.7);
        assert_abs_diff_eq!(spiral.radius_at(0.0), 3.0);
        assert_abs_diff_eq!(spiral.radius_at(1.0), 3.0 * 0.218f64.exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_polyline_stays_inside_bounds() {
        let spiral = ArchimedeanSpiral::new(20.0, 0.0);
        let bounds = Bounds::square(400.0);
        let points = spiral.polyline(bounds);

        assert!(!points.is_empty());
        for point in &points {
            assert!(point.x.abs() <= 200.0 && point.y.abs() <= 200.0);
        }
    }

    #[test]
    fn test_band_edges_straddle_center_line() {
        let spiral = LogarithmicSpiral::new(0.218, 40.0, 10.0);
        let bounds = Bounds::square(800.0);
        let [outer, center, inner] = spiral.band(bounds);

        assert!(!center.is_empty());
        // At phi = 0 the three lines sit at r0 + delta on the x axis.
        assert_abs_diff_eq!(outer[0].x, 45.0, epsilon = 1e-12);
        assert_abs_diff_eq!(center[0].x, 40.0, epsilon = 1e-12);
        assert_abs_diff_eq!(inner[0].x, 35.0, epsilon = 1e-12);
    }

    #[test]
    fn test_archimedean_pair_offset_by_half_turn() {
        let arms = ArchimedeanArms::new(&ArchimedeanParameters::default(), 25.0).unwrap();
        assert_eq!(arms.arm_count(), 2);

        let poses = arms.motion(0.0);
        assert_abs_diff_eq!(poses[1].rotation - poses[0].rotation, PI, epsilon = 1e-4);
    }

    #[test]
    fn test_logarithmic_set_offset_by_quarter_turn() {
        let arms = LogarithmicArms::new(&LogarithmicParameters::default(), 25.0).unwrap();
        assert_eq!(arms.arm_count(), 4);

        let poses = arms.motion(0.0);
        for i in 1..4 {
            assert_abs_diff_eq!(
                poses[i].rotation - poses[i - 1].rotation,
                PI / 2.0,
                epsilon = 1e-4
            );
        }
    }

    #[test]
    fn test_family_rotates_rigidly() {
        let arms = LogarithmicArms::new(&LogarithmicParameters::default(), 25.0).unwrap();

        let before = arms.motion(0.0);
        let after = arms.motion(50.0);
        // A quarter of the 200-period: every arm advanced by the same
        // quarter turn.
        for (b, a) in before.iter().zip(&after) {
            assert_abs_diff_eq!(a.rotation - b.rotation, PI / 2.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_restart_matches_time_zero() {
        let arms = ArchimedeanArms::new(&ArchimedeanParameters::default(), 25.0).unwrap();
        assert_eq!(arms.restart(), arms.motion(0.0));
    }

    #[test]
    fn test_scale_applies_to_lengths() {
        let params = LogarithmicParameters::default();
        let arms = LogarithmicArms::new(&params, 25.0).unwrap();
        let spiral = arms.spirals().next().unwrap();
        assert_abs_diff_eq!(spiral.r0(), params.r0 * 25.0);
        // Winding tightness is dimensionless and stays unscaled.
        assert_abs_diff_eq!(spiral.alpha(), params.alpha);
    }
}

//! Motion controllers binding a motion law to a pose.
//!
//! Controllers are the layer the simulation driver queries each step.
//! They hold no time-dependent state: `motion(t)` is idempotent, calling
//! it twice with the same time yields the same pose, and querying an
//! earlier time after a later one rewinds correctly.

use glam::DVec2;

use crate::config::ParameterError;
use crate::motion::{CircularMotion, EllipticalKeplersMotion};
use crate::types::{DEG_TO_RAD, Pose};

/// One kinematic model advanced by the driver.
pub trait MotionController {
    /// Pose at `time`. Pure with respect to prior calls.
    fn motion(&self, time: f64) -> Pose;

    /// Deterministic initial pose, `motion(0)`.
    fn restart(&self) -> Pose {
        self.motion(0.0)
    }
}

/// Rotates a target rigidly at constant angular velocity.
///
/// Used for the apsidal rotation of the orbit ellipse and for every
/// spiral arm. The start rotation is taken in degrees, matching the
/// parameter bag, and converted once at construction.
#[derive(Clone, Debug)]
pub struct CircularMotionController {
    law: CircularMotion,
    position: DVec2,
}

impl CircularMotionController {
    pub fn new(period: f64, start_rotation_deg: f64) -> Result<Self, ParameterError> {
        Ok(Self {
            law: CircularMotion::new(period, start_rotation_deg * DEG_TO_RAD)?,
            position: DVec2::ZERO,
        })
    }

    /// Pin the controlled item's position; rotation-only controllers
    /// leave it unchanged across time.
    pub fn at_position(mut self, position: DVec2) -> Self {
        self.position = position;
        self
    }

    pub fn law(&self) -> &CircularMotion {
        &self.law
    }
}

impl MotionController for CircularMotionController {
    fn motion(&self, time: f64) -> Pose {
        Pose::new(self.position, self.law.rotation(time))
    }
}

/// Moves the orbiting body along its Keplerian ellipse around a focus.
///
/// The pose position is `focus + (r·cos f, r·sin f)`; the pose rotation
/// carries the instantaneous true anomaly.
#[derive(Clone, Debug)]
pub struct KeplersMotionController {
    law: EllipticalKeplersMotion,
    focus: DVec2,
}

impl KeplersMotionController {
    pub fn new(
        focus: DVec2,
        period: f64,
        s_major_axis: f64,
        eccentricity: f64,
        start_rotation_deg: f64,
    ) -> Result<Self, ParameterError> {
        Ok(Self {
            law: EllipticalKeplersMotion::new(
                period,
                s_major_axis,
                eccentricity,
                start_rotation_deg * DEG_TO_RAD,
            )?,
            focus,
        })
    }

    /// Distance from the focus at `time`.
    pub fn distance(&self, time: f64) -> f64 {
        self.law.distance(time)
    }

    /// True anomaly at `time`, radians in `[−π, π]`.
    pub fn rotation(&self, time: f64) -> f64 {
        self.law.rotation(time)
    }

    /// Cumulative rotation at `time` in degrees
    /// (see [`EllipticalKeplersMotion::full_rotation`]).
    pub fn full_rotation(&self, time: f64) -> f64 {
        self.law.full_rotation(time)
    }

    pub fn focus(&self) -> DVec2 {
        self.focus
    }

    pub fn law(&self) -> &EllipticalKeplersMotion {
        &self.law
    }
}

impl MotionController for KeplersMotionController {
    fn motion(&self, time: f64) -> Pose {
        let r = self.law.distance(time);
        let f = self.law.rotation(time);
        Pose::new(self.focus + DVec2::new(r * f.cos(), r * f.sin()), f)
    }
}

//! Uniform circular rotation.

use std::f64::consts::TAU;

use crate::config::ParameterError;
use crate::types::round_angle;

/// Constant angular velocity rotation law.
///
/// `rotation(time) = 2π/period · time + start_rotation`, in radians.
#[derive(Clone, Debug)]
pub struct CircularMotion {
    period: f64,
    start_rotation: f64,
    rotational_speed: f64,
}

impl CircularMotion {
    /// Create a rotation law with `start_rotation` in radians.
    ///
    /// Rejects a non-positive or non-finite period at construction; the
    /// query below never fails.
    pub fn new(period: f64, start_rotation: f64) -> Result<Self, ParameterError> {
        if period <= 0.0 || !period.is_finite() {
            return Err(ParameterError::NonPositivePeriod(period));
        }
        Ok(Self {
            period,
            start_rotation,
            rotational_speed: TAU / period,
        })
    }

    /// Angle at `time` in radians, rounded to the shared angular precision.
    ///
    /// Grows without wraparound as time increases; the host converts to a
    /// bounded display angle when needed.
    pub fn rotation(&self, time: f64) -> f64 {
        round_angle(self.rotational_speed * time + self.start_rotation)
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    pub fn start_rotation(&self) -> f64 {
        self.start_rotation
    }
}

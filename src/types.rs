//! Core value types and constants for the kinematics engine.

use glam::DVec2;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Radians to degrees conversion factor
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Decimal digits kept when rounding computed angles.
///
/// Motion laws round their angular output to this precision so that
/// downstream comparisons stay stable against accumulated floating error.
pub const ANGLE_PRECISION_DIGITS: i32 = 5;

/// Round `x` to [`ANGLE_PRECISION_DIGITS`] decimal digits.
pub fn round_angle(x: f64) -> f64 {
    let factor = 10f64.powi(ANGLE_PRECISION_DIGITS);
    (x * factor).round() / factor
}

/// Position and rotation computed by a motion controller for one time value.
///
/// Controllers return plain poses; whatever rendering object the host uses
/// is updated by an adapter on the host side, outside this crate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    /// Position in scene units
    pub position: DVec2,
    /// Rotation in radians, unbounded (accumulates across revolutions)
    pub rotation: f64,
}

impl Pose {
    pub fn new(position: DVec2, rotation: f64) -> Self {
        Self { position, rotation }
    }

    /// Rotation in degrees, for display-side consumers.
    pub fn rotation_degrees(&self) -> f64 {
        self.rotation * RAD_TO_DEG
    }
}

/// Cooperative stepping clock for the simulation driver.
///
/// The host's frame timer calls the driver at a fixed cadence; the clock
/// only moves while running, in fixed increments of `step`. Exactly one
/// driver thread owns it and calls in sequentially.
#[derive(Clone, Debug)]
pub struct SimulationClock {
    /// Current simulation time
    pub time: f64,
    /// Time advanced per step
    pub step: f64,
    /// Whether the clock moves on [`SimulationClock::advance`]
    pub running: bool,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self {
            time: 0.0,
            step: 0.5,
            running: false,
        }
    }
}

impl SimulationClock {
    /// Clock with a custom step size, starting stopped at `time = 0`.
    pub fn with_step(step: f64) -> Self {
        Self {
            step,
            ..Self::default()
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Reset to `time = 0`, stopped.
    pub fn restart(&mut self) {
        self.time = 0.0;
        self.running = false;
    }

    /// Yield the current time and move the clock one step forward.
    ///
    /// Returns `None` while stopped, leaving the time untouched.
    pub fn advance(&mut self) -> Option<f64> {
        if !self.running {
            return None;
        }
        let time = self.time;
        self.time += self.step;
        Some(time)
    }
}

//! The simulation driver behind the visualizer window.
//!
//! Owns every kinematic object built from one validated parameter set
//! and exposes the query surface the GUI shell reads: poses for drawing,
//! the body's polar coordinates, and the accumulated crossing series for
//! plotting. The shell supplies time and parameter edits; it owns no
//! simulation state of its own.
//!
//! Motion laws are constructed in scene units (lengths multiplied by
//! `scale`), while the crossing recorder works in physical units; the
//! driver divides the scaled distance back out before each detector
//! step.

use glam::DVec2;
use tracing::info;

use crate::config::{ParameterError, SimulationParameters};
use crate::controllers::{
    CircularMotionController, KeplersMotionController, MotionController,
};
use crate::intersections::IntersectionRecorder;
use crate::orbit::EllipseFrame;
use crate::spirals::{ArchimedeanArms, LogarithmicArms};
use crate::types::{Pose, SimulationClock};

/// Poses computed for one time value, ready for the host to draw.
#[derive(Clone, Debug)]
pub struct ExplorerFrame {
    pub time: f64,
    /// The orbit ellipse (apsidal frame), rotating about its focus
    pub orbit: Pose,
    /// The orbiting body
    pub sun: Pose,
    /// Archimedean arms, in arm-index order
    pub archimedean_arms: Vec<Pose>,
    /// Logarithmic arms, in arm-index order
    pub logarithmic_arms: Vec<Pose>,
}

/// The simulation driver: one validated configuration, one clock, one
/// set of controllers, one crossing recorder.
pub struct Explorer {
    parameters: SimulationParameters,
    scale: f64,
    clock: SimulationClock,
    frame: EllipseFrame,
    orbit_controller: CircularMotionController,
    sun_controller: KeplersMotionController,
    arch_arms: ArchimedeanArms,
    log_arms: LogarithmicArms,
    recorder: IntersectionRecorder,
}

impl Explorer {
    /// Build the whole scene from one parameter set.
    ///
    /// `scale` converts physical lengths to scene units (pixels per
    /// kiloparsec in the shipped host) and is applied to every
    /// length-valued parameter before the motion laws are constructed.
    /// The orbit focus sits at the scene origin.
    pub fn new(parameters: SimulationParameters, scale: f64) -> Result<Self, ParameterError> {
        parameters.validate()?;
        if scale <= 0.0 || !scale.is_finite() {
            return Err(ParameterError::NonPositive {
                name: "scale",
                value: scale,
            });
        }

        let orbit = &parameters.orbit;
        let frame = EllipseFrame::new(orbit.eccentricity, orbit.s_major_axis * scale);
        let orbit_controller =
            CircularMotionController::new(orbit.orbit_period, orbit.orbit_rotation)?;
        let sun_controller = KeplersMotionController::new(
            DVec2::ZERO,
            orbit.sun_period,
            orbit.s_major_axis * scale,
            orbit.eccentricity,
            orbit.sun_rotation,
        )?;
        let arch_arms = ArchimedeanArms::new(&parameters.arch_spirals, scale)?;
        let log_arms = LogarithmicArms::new(&parameters.log_spirals, scale)?;
        let recorder = IntersectionRecorder::new(
            parameters.arch_spirals.clone(),
            parameters.log_spirals.clone(),
        )?;

        Ok(Self {
            parameters,
            scale,
            clock: SimulationClock::default(),
            frame,
            orbit_controller,
            sun_controller,
            arch_arms,
            log_arms,
            recorder,
        })
    }

    /// Poses for every drawable at `time`.
    ///
    /// Pure: does not move the clock and does not touch detector state,
    /// so it is safe to call repeatedly (e.g. on window repaints).
    pub fn motion(&self, time: f64) -> ExplorerFrame {
        ExplorerFrame {
            time,
            orbit: self.orbit_controller.motion(time),
            sun: self.sun_controller.motion(time),
            archimedean_arms: self.arch_arms.motion(time),
            logarithmic_arms: self.log_arms.motion(time),
        }
    }

    /// Advance one step: poses at the clock's current time, plus exactly
    /// one crossing-recorder update.
    ///
    /// Returns `None` while the clock is stopped. The recorder's
    /// once-per-step precondition is upheld here; hosts that need poses
    /// without stepping use [`Explorer::motion`].
    pub fn advance(&mut self) -> Option<ExplorerFrame> {
        let time = self.clock.advance()?;
        let frame = self.motion(time);

        let distance = self.sun_controller.distance(time) / self.scale;
        let rotation_deg = self.sun_controller.full_rotation(time);
        self.recorder.update(time, distance, rotation_deg);

        Some(frame)
    }

    pub fn start(&mut self) {
        self.clock.start();
    }

    pub fn stop(&mut self) {
        self.clock.stop();
    }

    /// Reset to `time = 0`: clock stopped, every accumulated series
    /// cleared, controllers back at their deterministic initial pose.
    pub fn restart(&mut self) -> ExplorerFrame {
        self.clock.restart();
        self.recorder.restart();
        self.motion(0.0)
    }

    /// Replace the configuration wholesale.
    ///
    /// Controllers, spiral families, and the recorder are all rebuilt
    /// from scratch; accumulated state is discarded and the clock starts
    /// over. On error nothing changes and the previous configuration
    /// stays live.
    pub fn update_parameters(
        &mut self,
        parameters: SimulationParameters,
    ) -> Result<(), ParameterError> {
        let rebuilt = Explorer::new(parameters, self.scale)?;
        *self = rebuilt;
        info!("simulation parameters replaced, scene rebuilt");
        Ok(())
    }

    /// Current distance of the body from the center, in physical units.
    pub fn sun_distance(&self, time: f64) -> f64 {
        self.sun_controller.distance(time) / self.scale
    }

    /// True anomaly of the body, radians in `[−π, π]`.
    pub fn sun_rotation(&self, time: f64) -> f64 {
        self.sun_controller.rotation(time)
    }

    /// Cumulative rotation of the body in degrees.
    pub fn sun_rotation_degrees(&self, time: f64) -> f64 {
        self.sun_controller.full_rotation(time)
    }

    /// Focus position of the orbit in the scene frame.
    pub fn center_position(&self) -> DVec2 {
        self.sun_controller.focus()
    }

    /// Ellipse placement for the renderer, in scene units.
    pub fn ellipse_frame(&self) -> EllipseFrame {
        self.frame
    }

    /// The accumulated plot series, read-only.
    pub fn recorder(&self) -> &IntersectionRecorder {
        &self.recorder
    }

    pub fn parameters(&self) -> &SimulationParameters {
        &self.parameters
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    /// Change the time advanced per step.
    pub fn set_time_step(&mut self, step: f64) {
        self.clock.step = step;
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn archimedean_arms(&self) -> &ArchimedeanArms {
        &self.arch_arms
    }

    pub fn logarithmic_arms(&self) -> &LogarithmicArms {
        &self.log_arms
    }
}

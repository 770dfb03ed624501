//! Spiral-arm crossing detection and the accumulated plot series.
//!
//! Works in unscaled (physical) units: the driver hands in the body's
//! distance and cumulative rotation, and this module compares them
//! against the closed-form arm radii. The Archimedean test is a
//! threshold edge detector whose only state is the count of crossings
//! already recorded; the logarithmic test records each arm's implied
//! radius every step so the host can plot proximity curves.

use tracing::debug;

use crate::config::{ArchimedeanParameters, LogarithmicParameters, ParameterError};
use crate::types::DEG_TO_RAD;

/// Epoch offset of the innermost Archimedean arm front, in time units.
const ARM_FRONT_EPOCH: f64 = 28.0;

/// Default near-equality tolerance for the logarithmic crossing flag.
pub const NEAR_CROSSING_EPSILON: f64 = 0.1;

/// Angular offsets of the four logarithmic arms, degrees, in the order
/// the recorded series are numbered.
const LOG_ARM_OFFSETS_DEG: [f64; 4] = [-90.0, -180.0, 0.0, 90.0];

/// State of the Archimedean edge detector.
///
/// Each recorded crossing shifts the next threshold outward by half a
/// rotation period, modeling successive passages of a uniformly
/// precessing arm pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArmCrossingState {
    pub crossings: u32,
}

/// A recorded arm crossing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CrossingEvent {
    pub time: f64,
    pub distance: f64,
}

/// Effective Archimedean arm radius at `time` for the given state:
/// `r_arm = V0·(28 + (period/2)·k − time)`.
pub fn archimedean_arm_radius(
    params: &ArchimedeanParameters,
    state: ArmCrossingState,
    time: f64,
) -> f64 {
    params.v0 * (ARM_FRONT_EPOCH + params.period / 2.0 * state.crossings as f64 - time)
}

/// One step of the Archimedean edge detector, as a pure state transform.
///
/// Feed each advancing time step exactly once and thread the returned
/// state into the next call; running the same step against the same
/// state twice double-counts by construction.
pub fn archimedean_step(
    params: &ArchimedeanParameters,
    state: ArmCrossingState,
    time: f64,
    distance: f64,
) -> (ArmCrossingState, Option<CrossingEvent>) {
    let r_arm = archimedean_arm_radius(params, state, time);
    if distance > r_arm {
        let next = ArmCrossingState {
            crossings: state.crossings + 1,
        };
        (next, Some(CrossingEvent { time, distance }))
    } else {
        (state, None)
    }
}

/// Implied radius of each logarithmic arm at the body's angular position.
///
/// `rotation_deg` is the body's cumulative rotation in degrees (the
/// full-rotation variant of the Kepler law), so the body's frame, the
/// family's own rotation `(360/period)·time`, and the per-arm offsets
/// compose in one angle.
pub fn logarithmic_radii(
    params: &LogarithmicParameters,
    time: f64,
    rotation_deg: f64,
) -> [f64; 4] {
    let omega = 360.0 / params.period;
    LOG_ARM_OFFSETS_DEG.map(|offset| {
        let phi =
            (rotation_deg - omega * time + params.rotation + offset + 360.0) * DEG_TO_RAD;
        params.r0 * (params.alpha * phi).exp()
    })
}

/// Near-equality crossing flags for the four logarithmic arms.
///
/// Computed and surfaced every step; no discrete event is derived from
/// them.
pub fn near_crossings(distance: f64, radii: &[f64; 4], epsilon: f64) -> [bool; 4] {
    radii.map(|r| (distance - r).abs() < epsilon)
}

/// An `(x, y)` pair of columns grown append-only as the simulation
/// advances, in the shape the host's plot widget consumes.
#[derive(Clone, Debug, Default)]
pub struct Series {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Series {
    fn push(&mut self, x: f64, y: f64) {
        self.x.push(x);
        self.y.push(y);
    }

    fn clear(&mut self) {
        self.x.clear();
        self.y.clear();
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// What one recorder step observed.
#[derive(Clone, Copy, Debug)]
pub struct StepOutcome {
    /// Archimedean crossing recorded this step, if any
    pub archimedean: Option<CrossingEvent>,
    /// Implied logarithmic arm radii at the body's angle
    pub log_radii: [f64; 4],
    /// Near-equality flags against the body's distance
    pub near_log_crossings: [bool; 4],
}

/// Accumulates the plot series: body trajectory, Archimedean crossing
/// markers, and the four logarithmic proximity curves.
pub struct IntersectionRecorder {
    arch_params: ArchimedeanParameters,
    log_params: LogarithmicParameters,
    state: ArmCrossingState,
    epsilon: f64,
    body: Series,
    arch_crossings: Series,
    log_arms: [Series; 4],
}

impl IntersectionRecorder {
    pub fn new(
        arch_params: ArchimedeanParameters,
        log_params: LogarithmicParameters,
    ) -> Result<Self, ParameterError> {
        arch_params.validate()?;
        log_params.validate()?;
        Ok(Self {
            arch_params,
            log_params,
            state: ArmCrossingState::default(),
            epsilon: NEAR_CROSSING_EPSILON,
            body: Series::default(),
            arch_crossings: Series::default(),
            log_arms: Default::default(),
        })
    }

    /// Override the near-equality tolerance of the logarithmic flag.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Record one simulation step.
    ///
    /// `distance` and `rotation_deg` are the body's unscaled polar
    /// coordinates, the rotation cumulative and in degrees.
    ///
    /// Precondition: call exactly once per advancing time step. The
    /// Archimedean edge detector is not idempotent and double-counts on
    /// repeated calls at the same time.
    pub fn update(&mut self, time: f64, distance: f64, rotation_deg: f64) -> StepOutcome {
        self.body.push(time, distance);

        let (state, event) = archimedean_step(&self.arch_params, self.state, time, distance);
        self.state = state;
        if let Some(event) = event {
            debug!(
                "archimedean arm crossing #{} at t={}, r={}",
                state.crossings, event.time, event.distance
            );
            self.arch_crossings.push(event.time, event.distance);
        }

        let radii = logarithmic_radii(&self.log_params, time, rotation_deg);
        for (series, r) in self.log_arms.iter_mut().zip(radii) {
            series.push(time, r);
        }

        StepOutcome {
            archimedean: event,
            log_radii: radii,
            near_log_crossings: near_crossings(distance, &radii, self.epsilon),
        }
    }

    /// Body trajectory `(time, distance)`, read-only for plotting.
    pub fn body_trajectory(&self) -> &Series {
        &self.body
    }

    /// Archimedean crossing markers `(time, distance)`.
    pub fn archimedean_crossings(&self) -> &Series {
        &self.arch_crossings
    }

    /// The four logarithmic proximity curves `(time, radius)`.
    pub fn logarithmic_arms(&self) -> &[Series; 4] {
        &self.log_arms
    }

    /// Count of Archimedean crossings recorded so far.
    pub fn crossing_count(&self) -> u32 {
        self.state.crossings
    }

    /// Clear every series and reset the edge-detector state.
    pub fn restart(&mut self) {
        self.state = ArmCrossingState::default();
        self.body.clear();
        self.arch_crossings.clear();
        for series in &mut self.log_arms {
            series.clear();
        }
    }
}

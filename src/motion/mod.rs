//! Motion laws: pure functions of time to angle and radius.
//!
//! Two kinematic models drive everything in the scene:
//! - [`CircularMotion`]: constant angular velocity, used for the apsidal
//!   rotation of the orbit ellipse and for every spiral arm.
//! - [`EllipticalKeplersMotion`]: true Keplerian motion solved through
//!   mean and eccentric anomaly, used for the orbiting body itself.
//!
//! Both laws are total functions of `time` once constructed: no internal
//! state, no side effects, safe to query at any time in any order.

mod circular;
mod kepler;

pub use circular::CircularMotion;
pub use kepler::{DEFAULT_SOLVER_ITERATIONS, EllipticalKeplersMotion};

#[cfg(test)]
mod proptest_motion;

//! Shared fixtures for unit tests.

pub mod fixtures {
    use crate::config::SimulationParameters;
    use crate::motion::EllipticalKeplersMotion;
    use crate::types::DEG_TO_RAD;

    /// The parameter set the visualizer ships with.
    pub fn default_parameters() -> SimulationParameters {
        SimulationParameters::default()
    }

    /// The Sun's galactic orbit: period 250, a = 8.45 kpc, e = 0.36,
    /// true anomaly 100° at epoch.
    pub fn sun_motion() -> EllipticalKeplersMotion {
        EllipticalKeplersMotion::new(250.0, 8.45, 0.36, 100.0 * DEG_TO_RAD)
            .expect("fixture parameters are valid")
    }
}

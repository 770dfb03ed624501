//! Typed simulation parameters and their validation.
//!
//! The host edits parameters interactively and persists them as one JSON
//! document; this module gives that document an explicit schema. Field
//! names match the persisted keys (`s_major_axis`, `V0`, ...), and each
//! numeric value may arrive either bare or wrapped as a `{value, measure}`
//! pair written by the edit dialog; the unit label is display metadata and
//! is dropped on the way in.
//!
//! Validation happens once, when a consumer is constructed from a
//! parameter group. Queries never re-check, and nothing is clamped: an
//! invalid edit is rejected wholesale and the previous configuration
//! stays live on the host side.

use serde::{Deserialize, Serialize};

/// Errors raised when a parameter set fails validation.
///
/// All of these are configuration errors surfaced at construction time;
/// motion-law queries are total once a law exists.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("eccentricity {0} outside [0, 1)")]
    Eccentricity(f64),

    #[error("period must be positive, got {0}")]
    NonPositivePeriod(f64),

    #[error("semi-major axis must be positive, got {0}")]
    NonPositiveSemiMajorAxis(f64),

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("spiral width must be non-negative, got {0}")]
    NegativeWidth(f64),
}

/// Accept either a bare number or the `{value, measure}` pair the edit
/// dialog writes.
fn measured<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Bare(f64),
        Wrapped { value: f64 },
    }

    Ok(match Repr::deserialize(deserializer)? {
        Repr::Bare(value) => value,
        Repr::Wrapped { value } => value,
    })
}

/// Orbit parameter group (`orbit` in the persisted document).
///
/// Rotations are in degrees, lengths in kiloparsecs, periods in the
/// simulation's time unit (millions of years in the shipped defaults).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrbitParameters {
    /// Orbital eccentricity, `0 <= e < 1`
    #[serde(deserialize_with = "measured")]
    pub eccentricity: f64,
    /// Semi-major axis of the orbit
    #[serde(deserialize_with = "measured")]
    pub s_major_axis: f64,
    /// Rotation period of the apsidal frame (the drawn ellipse itself turns)
    #[serde(deserialize_with = "measured")]
    pub orbit_period: f64,
    /// Period of the body's Keplerian revolution
    #[serde(deserialize_with = "measured")]
    pub sun_period: f64,
    /// Initial rotation of the apsidal frame, degrees
    #[serde(deserialize_with = "measured")]
    pub orbit_rotation: f64,
    /// True anomaly of the body at `time = 0`, degrees
    #[serde(deserialize_with = "measured")]
    pub sun_rotation: f64,
}

impl Default for OrbitParameters {
    fn default() -> Self {
        Self {
            eccentricity: 0.36,
            s_major_axis: 8.45,
            orbit_period: 2000.0,
            sun_period: 250.0,
            orbit_rotation: -10.0,
            sun_rotation: 100.0,
        }
    }
}

impl OrbitParameters {
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(ParameterError::Eccentricity(self.eccentricity));
        }
        if self.s_major_axis <= 0.0 || !self.s_major_axis.is_finite() {
            return Err(ParameterError::NonPositiveSemiMajorAxis(self.s_major_axis));
        }
        for period in [self.orbit_period, self.sun_period] {
            if period <= 0.0 || !period.is_finite() {
                return Err(ParameterError::NonPositivePeriod(period));
            }
        }
        Ok(())
    }
}

/// Archimedean spiral-arm family (`arch_spirals` in the persisted document).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArchimedeanParameters {
    /// Spiral pitch: arm radius grows by `ro` per radian
    #[serde(deserialize_with = "measured")]
    pub ro: f64,
    /// Radial velocity of the precessing arm front, length per time unit
    #[serde(rename = "V0", deserialize_with = "measured")]
    pub v0: f64,
    /// Rotation period of the whole family
    #[serde(deserialize_with = "measured")]
    pub period: f64,
    /// Initial rotation of the family, degrees
    #[serde(deserialize_with = "measured")]
    pub rotation: f64,
}

impl Default for ArchimedeanParameters {
    fn default() -> Self {
        Self {
            ro: 2.48,
            v0: 0.31164,
            period: 50.0,
            rotation: 80.0,
        }
    }
}

impl ArchimedeanParameters {
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.ro <= 0.0 || !self.ro.is_finite() {
            return Err(ParameterError::NonPositive {
                name: "ro",
                value: self.ro,
            });
        }
        if self.v0 <= 0.0 || !self.v0.is_finite() {
            return Err(ParameterError::NonPositive {
                name: "V0",
                value: self.v0,
            });
        }
        if self.period <= 0.0 || !self.period.is_finite() {
            return Err(ParameterError::NonPositivePeriod(self.period));
        }
        Ok(())
    }
}

/// Logarithmic spiral-arm family (`log_spirals` in the persisted document).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogarithmicParameters {
    /// Winding tightness: arm radius is `r0·e^(alpha·phi)`
    #[serde(deserialize_with = "measured")]
    pub alpha: f64,
    /// Arm radius at `phi = 0`
    #[serde(deserialize_with = "measured")]
    pub r0: f64,
    /// Rotation period of the whole family
    #[serde(deserialize_with = "measured")]
    pub period: f64,
    /// Initial rotation of the family, degrees
    #[serde(deserialize_with = "measured")]
    pub rotation: f64,
    /// Full width of the drawn arm band
    #[serde(deserialize_with = "measured")]
    pub width: f64,
}

impl Default for LogarithmicParameters {
    fn default() -> Self {
        Self {
            alpha: 0.218,
            r0: 3.0,
            period: 200.0,
            rotation: 45.0,
            width: 0.7,
        }
    }
}

impl LogarithmicParameters {
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !self.alpha.is_finite() {
            return Err(ParameterError::NonPositive {
                name: "alpha",
                value: self.alpha,
            });
        }
        if self.r0 <= 0.0 || !self.r0.is_finite() {
            return Err(ParameterError::NonPositive {
                name: "r0",
                value: self.r0,
            });
        }
        if self.period <= 0.0 || !self.period.is_finite() {
            return Err(ParameterError::NonPositivePeriod(self.period));
        }
        if self.width < 0.0 || !self.width.is_finite() {
            return Err(ParameterError::NegativeWidth(self.width));
        }
        Ok(())
    }
}

/// The whole parameter bag, one simulation configuration.
///
/// Replaced wholesale when the user edits parameters; the engine never
/// mutates it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    pub orbit: OrbitParameters,
    pub arch_spirals: ArchimedeanParameters,
    pub log_spirals: LogarithmicParameters,
}

impl SimulationParameters {
    pub fn validate(&self) -> Result<(), ParameterError> {
        self.orbit.validate()?;
        self.arch_spirals.validate()?;
        self.log_spirals.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        SimulationParameters::default().validate().unwrap();
    }

    #[test]
    fn test_eccentricity_rejected_outside_unit_interval() {
        let mut params = OrbitParameters::default();
        params.eccentricity = 1.0;
        assert_eq!(
            params.validate(),
            Err(ParameterError::Eccentricity(1.0))
        );

        params.eccentricity = -0.1;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_non_positive_periods_rejected() {
        let mut params = OrbitParameters::default();
        params.sun_period = 0.0;
        assert_eq!(params.validate(), Err(ParameterError::NonPositivePeriod(0.0)));

        let mut arch = ArchimedeanParameters::default();
        arch.period = -50.0;
        assert!(arch.validate().is_err());
    }

    #[test]
    fn test_negative_width_rejected() {
        let mut log = LogarithmicParameters::default();
        log.width = -0.1;
        assert_eq!(log.validate(), Err(ParameterError::NegativeWidth(-0.1)));
    }

    #[test]
    fn test_json_round_trip() {
        let params = SimulationParameters::default();
        let json = serde_json::to_string(&params).unwrap();
        let back: SimulationParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(params, back);
    }

    #[test]
    fn test_wrapped_values_accepted() {
        let json = r#"{
            "orbit": {
                "eccentricity": {"value": 0.36, "measure": ""},
                "s_major_axis": {"value": 8.45, "measure": "kpc"},
                "orbit_period": 2000,
                "sun_period": {"value": 250, "measure": "Myr"},
                "orbit_rotation": -10,
                "sun_rotation": 100
            },
            "arch_spirals": {"ro": 2.48, "V0": 0.31164, "period": 50, "rotation": 80},
            "log_spirals": {"alpha": 0.218, "r0": 3, "period": 200, "rotation": 45, "width": 0.7}
        }"#;

        let params: SimulationParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params, SimulationParameters::default());
    }

    #[test]
    fn test_v0_serializes_under_uppercase_key() {
        let json = serde_json::to_value(ArchimedeanParameters::default()).unwrap();
        assert!(json.get("V0").is_some());
    }
}

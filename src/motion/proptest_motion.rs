//! Property-based tests for the motion laws using proptest.
//!
//! These verify that the fixed-iteration Kepler solver keeps its
//! contracts across wide input ranges, not just the shipped defaults.

use proptest::prelude::*;
use std::f64::consts::TAU;

use super::{CircularMotion, EllipticalKeplersMotion};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Ten fixed-point passes satisfy Kepler's equation to well under the
    /// rounding precision across the moderate-eccentricity range the
    /// visualizer works in.
    #[test]
    fn prop_solver_residual_within_rounding(
        mean_anomaly_normalized in 0.0f64..1.0,
        eccentricity in 0.0f64..0.36,
    ) {
        let mean_anomaly = mean_anomaly_normalized * TAU;
        let law = EllipticalKeplersMotion::new(250.0, 8.45, eccentricity, 0.0).unwrap();

        let e_anom = law.eccentric_anomaly(mean_anomaly);
        let residual = (e_anom - eccentricity * e_anom.sin() - mean_anomaly).abs();

        prop_assert!(
            residual < 1e-4,
            "M={}, e={}, E={}, residual={}",
            mean_anomaly, eccentricity, e_anom, residual
        );
    }

    /// Radial distance stays finite and inside the geometric bounds
    /// `[a(1−e), a(1+e)]` for every eccentricity the constructor accepts,
    /// converged or not.
    #[test]
    fn prop_distance_within_orbit_bounds(
        time in 0.0f64..1000.0,
        eccentricity in 0.0f64..0.95,
        s_major_axis in 0.1f64..50.0,
    ) {
        let law = EllipticalKeplersMotion::new(250.0, s_major_axis, eccentricity, 0.0).unwrap();
        let r = law.distance(time);

        prop_assert!(r.is_finite());
        prop_assert!(r >= s_major_axis * (1.0 - eccentricity) - 1e-9);
        prop_assert!(r <= s_major_axis * (1.0 + eccentricity) + 1e-9);
    }

    /// Distance repeats after one full period.
    #[test]
    fn prop_distance_periodic(
        time in 0.0f64..500.0,
        eccentricity in 0.0f64..0.9,
    ) {
        let law = EllipticalKeplersMotion::new(250.0, 8.45, eccentricity, 0.5).unwrap();
        let diff = (law.distance(time + 250.0) - law.distance(time)).abs();
        prop_assert!(diff < 1e-6, "e={}, t={}, diff={}", eccentricity, time, diff);
    }

    /// The instantaneous true anomaly stays in `[−π, π]` (modulo the
    /// shared rounding).
    #[test]
    fn prop_rotation_stays_bounded(
        time in 0.0f64..1000.0,
        eccentricity in 0.0f64..0.95,
    ) {
        let law = EllipticalKeplersMotion::new(250.0, 8.45, eccentricity, 0.0).unwrap();
        let f = law.rotation(time);
        prop_assert!(f.abs() <= std::f64::consts::PI + 1e-5);
    }

    /// Circular rotation is linear in time.
    #[test]
    fn prop_circular_rotation_linear(
        period in 1.0f64..500.0,
        time in 0.0f64..1000.0,
        start in -3.0f64..3.0,
    ) {
        let law = CircularMotion::new(period, start).unwrap();
        let expected = TAU / period * time + start;
        prop_assert!((law.rotation(time) - expected).abs() < 2e-5);
    }

    /// At zero eccentricity the Kepler law collapses onto circular
    /// motion with the same period and phase.
    #[test]
    fn prop_zero_eccentricity_is_circular(
        time in 0.0f64..1000.0,
        start in -1.5f64..1.5,
    ) {
        let kepler = EllipticalKeplersMotion::new(250.0, 8.45, 0.0, start).unwrap();
        let circular = CircularMotion::new(250.0, start).unwrap();

        let d = (kepler.rotation(time) - circular.rotation(time)).rem_euclid(TAU);
        let wrapped = d.min(TAU - d);
        prop_assert!(wrapped < 1e-4, "t={}, wrapped diff={}", time, wrapped);
    }
}

//! Ellipse shape derivations for the drawn orbit.
//!
//! Pure functions of eccentricity and semi-major axis, consumed by the
//! Kepler controller (focus placement) and by the host's renderer
//! (sizing the drawn ellipse). Both read the same numbers, which keeps
//! the orbiting body aligned with the visual orbit.

use glam::DVec2;

/// Semi-minor axis `b = a·√(1 − e²)`.
pub fn semi_minor_axis(eccentricity: f64, s_major_axis: f64) -> f64 {
    s_major_axis * (1.0 - eccentricity * eccentricity).sqrt()
}

/// Linear eccentricity `c = e·a`, the center-to-focus distance.
pub fn linear_eccentricity(eccentricity: f64, s_major_axis: f64) -> f64 {
    eccentricity * s_major_axis
}

/// Placement of an orbit ellipse inside its bounding box.
///
/// Convention shared with the renderer: with the frame's origin at the
/// top-left corner of the ellipse's bounding box, the focus (the center
/// of attraction) sits at `(a + c, b)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EllipseFrame {
    pub eccentricity: f64,
    pub s_major_axis: f64,
    pub s_minor_axis: f64,
    pub linear_eccentricity: f64,
}

impl EllipseFrame {
    pub fn new(eccentricity: f64, s_major_axis: f64) -> Self {
        Self {
            eccentricity,
            s_major_axis,
            s_minor_axis: semi_minor_axis(eccentricity, s_major_axis),
            linear_eccentricity: linear_eccentricity(eccentricity, s_major_axis),
        }
    }

    /// Offset from the bounding-box origin to the focus.
    pub fn focus_offset(&self) -> DVec2 {
        DVec2::new(
            self.s_major_axis + self.linear_eccentricity,
            self.s_minor_axis,
        )
    }

    /// Bounding-box top-left corner placing the focus at `focus`.
    pub fn top_left_for(&self, focus: DVec2) -> DVec2 {
        focus - self.focus_offset()
    }

    /// Focus position of an ellipse whose bounding box starts at `top_left`.
    pub fn focus_from_top_left(&self, top_left: DVec2) -> DVec2 {
        top_left + self.focus_offset()
    }

    /// Bounding box size, `(2a, 2b)`.
    pub fn size(&self) -> DVec2 {
        DVec2::new(2.0 * self.s_major_axis, 2.0 * self.s_minor_axis)
    }
}

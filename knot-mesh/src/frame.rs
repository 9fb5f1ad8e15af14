//! Per-sample orthonormal frames for the tube sweep
//!
//! The frame is local and cheap: it derives from the tangent and a fixed
//! reference up vector, not from a twist-minimizing transport along the
//! curve. Where the path parameter wraps from `2*PI` back to `0` the frame
//! may not return to its starting orientation exactly, which can show up
//! as a seam twist for some (p,q) pairs. Known limitation of the
//! calibration model, kept as documented behavior.

use glam::DVec3;

/// Orthonormal triple orienting the cross-section at one path sample
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    /// Unit tangent along the path
    pub tangent: DVec3,
    /// First cross-section axis, perpendicular to the tangent
    pub normal1: DVec3,
    /// Second cross-section axis, perpendicular to both
    pub normal2: DVec3,
}

impl Frame {
    /// Build a frame from a unit tangent.
    ///
    /// The reference up vector switches from `+Z` to `+Y` once the tangent
    /// leans within ~26 degrees of the Z axis, so the cross product below
    /// never degenerates.
    pub fn from_tangent(tangent: DVec3) -> Self {
        let up = if tangent.z.abs() < 0.9 { DVec3::Z } else { DVec3::Y };

        let normal1 = tangent.cross(up).normalize();
        let normal2 = tangent.cross(normal1).normalize();

        Self {
            tangent,
            normal1,
            normal2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_orthonormal(frame: &Frame) {
        assert!((frame.normal1.length() - 1.0).abs() < 1e-6);
        assert!((frame.normal2.length() - 1.0).abs() < 1e-6);
        assert!(frame.tangent.dot(frame.normal1).abs() < 1e-6);
        assert!(frame.tangent.dot(frame.normal2).abs() < 1e-6);
        assert!(frame.normal1.dot(frame.normal2).abs() < 1e-6);
    }

    #[test]
    fn frame_from_x_tangent() {
        assert_orthonormal(&Frame::from_tangent(DVec3::X));
    }

    #[test]
    fn frame_from_oblique_tangent() {
        let tangent = DVec3::new(1.0, 2.0, 0.5).normalize();
        assert_orthonormal(&Frame::from_tangent(tangent));
    }

    #[test]
    fn up_reference_switches_near_z() {
        // A tangent nearly parallel to +Z must use the +Y reference.
        let tangent = DVec3::new(0.05, 0.0, 1.0).normalize();
        assert!(tangent.z.abs() >= 0.9);
        assert_orthonormal(&Frame::from_tangent(tangent));
    }

    #[test]
    fn frame_from_fallback_tangent_is_finite() {
        let frame = Frame::from_tangent(DVec3::X);
        assert!(frame.normal1.is_finite());
        assert!(frame.normal2.is_finite());
    }

    #[test]
    fn frames_are_orthonormal_along_the_knot() {
        use crate::config::KnotConfig;
        use crate::curve;
        use std::f64::consts::PI;

        let config = KnotConfig::default();
        for i in 0..=config.path_segments {
            let t = (i as f64 / config.path_segments as f64) * 2.0 * PI;
            let frame = Frame::from_tangent(curve::tangent(&config, t));
            assert_orthonormal(&frame);
        }
    }
}

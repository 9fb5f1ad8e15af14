//! Circular cross-section sweep around path frames

use glam::DVec3;
use std::f64::consts::PI;

use crate::frame::Frame;

/// Sweep the circular profile around one frame.
///
/// Returns `tube_segments + 1` (position, outward normal) pairs. The last
/// profile point duplicates the first so closed-loop consumers can index
/// the seam without wraparound arithmetic.
pub fn sweep_ring(
    center: DVec3,
    frame: &Frame,
    tube_radius: f64,
    tube_segments: u32,
) -> Vec<(DVec3, DVec3)> {
    let mut ring = Vec::with_capacity(tube_segments as usize + 1);

    for j in 0..=tube_segments {
        let v = (j as f64 / tube_segments as f64) * 2.0 * PI;

        // normal1/normal2 are orthonormal, so this is already unit length
        let normal = frame.normal1 * v.cos() + frame.normal2 * v.sin();
        ring.push((center + tube_radius * normal, normal));
    }

    ring
}

//! Tube mesh assembly
//!
//! Pure transformation from configuration to an immutable mesh value. Each
//! ring reads only the configuration, never other rings' results, and face
//! topology is index arithmetic over the grid, so the stages are
//! independent; generation runs them in one sequential pass.

use glam::DVec3;
use std::f64::consts::PI;

use crate::config::{ConfigError, KnotConfig};
use crate::curve::CurveSample;
use crate::frame::Frame;
use crate::sweep::sweep_ring;
use crate::topology::quad_faces;

/// Indexed quad mesh with per-vertex outward normals
///
/// `positions` and `normals` are index-aligned; every vertex owns exactly
/// one normal, never shared or smoothed across rings. Built once, never
/// mutated after construction.
pub struct TubeMesh {
    /// Vertex positions, ring-major
    pub positions: Vec<DVec3>,
    /// Outward unit normals, index-aligned with `positions`
    pub normals: Vec<DVec3>,
    /// Quad faces as zero-based vertex indices
    pub faces: Vec<[u32; 4]>,
}

impl TubeMesh {
    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of quad faces
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}

/// Generate the tube mesh for a torus-knot configuration.
///
/// Produces `(path_segments + 1) * (tube_segments + 1)` vertices and
/// `path_segments * tube_segments` quads. Ring 0 coincides with ring
/// `path_segments` and each ring duplicates its seam vertex, closing the
/// tube along both directions.
///
/// # Errors
///
/// Returns [`ConfigError`] before any computation when the configuration
/// is invalid.
pub fn generate(config: &KnotConfig) -> Result<TubeMesh, ConfigError> {
    config.validate()?;

    let rings = config.path_segments + 1;
    let ring_stride = config.tube_segments + 1;
    let vertex_count = (rings * ring_stride) as usize;

    let mut positions: Vec<DVec3> = Vec::with_capacity(vertex_count);
    let mut normals: Vec<DVec3> = Vec::with_capacity(vertex_count);

    for i in 0..rings {
        let t = (i as f64 / config.path_segments as f64) * 2.0 * PI;
        let sample = CurveSample::at(config, t);
        let frame = Frame::from_tangent(sample.tangent);

        for (position, normal) in sweep_ring(
            sample.position,
            &frame,
            config.tube_radius,
            config.tube_segments,
        ) {
            positions.push(position);
            normals.push(normal);
        }
    }

    let faces = quad_faces(config.path_segments, config.tube_segments);

    Ok(TubeMesh {
        positions,
        normals,
        faces,
    })
}

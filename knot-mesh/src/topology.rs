//! Quad topology over the ring/profile vertex grid

/// Connect adjacent rings into quad faces, zero-based.
///
/// Vertices are laid out ring-major: `ring * (tube_segments + 1) + profile`.
/// Each quad is wound `(v1, v2, v4, v3)` so the implied face normal matches
/// the stored outward vertex normals. Pure index arithmetic; no dependency
/// on vertex values.
pub fn quad_faces(path_segments: u32, tube_segments: u32) -> Vec<[u32; 4]> {
    let ring_stride = tube_segments + 1;
    let mut faces = Vec::with_capacity((path_segments * tube_segments) as usize);

    for i in 0..path_segments {
        for j in 0..tube_segments {
            let v1 = i * ring_stride + j;
            let v2 = v1 + 1;
            let v3 = v1 + ring_stride;
            let v4 = v3 + 1;

            faces.push([v1, v2, v4, v3]);
        }
    }

    faces
}

//! OBJ serialization for tube meshes
//!
//! Plain-text mesh interchange, one write pass after the full mesh exists
//! in memory:
//!
//! ```text
//! # <comments: knot parameters, vertex/face counts>
//! v <x> <y> <z>           one per vertex, 6 decimals
//! vn <nx> <ny> <nz>       one per normal, index-aligned with vertices
//! f <a>//<a> <b>//<b> <c>//<c> <d>//<d>    quads, one-based
//! ```
//!
//! No binary variant and no texture-coordinate channel. The document is
//! rendered into a buffer and committed with a temp-file rename, so the
//! destination never holds a partial mesh.

use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::config::KnotConfig;
use crate::mesh::TubeMesh;

/// Write the mesh to `path` as OBJ text.
///
/// # Errors
///
/// Failure to create or write the destination is fatal and returned as is;
/// no partial file is left committed at `path`. Retrying without changing
/// configuration or environment is never appropriate: generation is
/// deterministic, so failures are not transient.
pub fn write_obj(mesh: &TubeMesh, path: &Path, config: &KnotConfig) -> io::Result<()> {
    let mut out: Vec<u8> = Vec::new();

    writeln!(out, "# Torus Knot ({},{})", config.p, config.q)?;
    writeln!(
        out,
        "# path_segments={} tube_segments={} torus_radius={} tube_radius={}",
        config.path_segments, config.tube_segments, config.torus_radius, config.tube_radius
    )?;
    writeln!(
        out,
        "# Vertices: {}, Faces: {}",
        mesh.vertex_count(),
        mesh.face_count()
    )?;
    writeln!(out)?;

    for v in &mesh.positions {
        writeln!(out, "v {:.6} {:.6} {:.6}", v.x, v.y, v.z)?;
    }
    writeln!(out)?;

    for n in &mesh.normals {
        writeln!(out, "vn {:.6} {:.6} {:.6}", n.x, n.y, n.z)?;
    }
    writeln!(out)?;

    for face in &mesh.faces {
        // OBJ indices are 1-based; vertex and normal share the index
        let [a, b, c, d] = face.map(|i| i + 1);
        writeln!(out, "f {0}//{0} {1}//{1} {2}//{2} {3}//{3}", a, b, c, d)?;
    }

    commit(&out, path)
}

/// Stage the rendered document next to `path` and rename it into place.
fn commit(out: &[u8], path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_path = match path.file_name() {
        Some(name) => {
            let mut tmp_name = OsString::from(name);
            tmp_name.push(".tmp");
            path.with_file_name(tmp_name)
        }
        None => {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "output path has no file name",
            ))
        }
    };

    {
        let mut f = fs::File::create(&tmp_path)?;
        f.write_all(out)?;
        f.sync_all()?;
    }

    #[cfg(windows)]
    {
        if path.exists() {
            // Windows rename fails if destination exists.
            fs::remove_file(path)?;
        }
    }

    fs::rename(&tmp_path, path)
}

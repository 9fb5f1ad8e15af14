//! Parametric tube-mesh generation for torus-knot calibration models
//!
//! Sweeps a circular cross-section along a discretized (p,q) torus-knot
//! curve and emits an indexed quad mesh with per-vertex outward normals,
//! serialized as plain-text OBJ.
//!
//! The pipeline is a pure function of configuration: curve samples feed
//! per-sample frames, frames feed swept rings, and face topology is index
//! arithmetic over the ring grid. Nothing is mutated after assembly; the
//! mesh is built once, written once, and discarded.

mod config;
mod curve;
mod export;
mod frame;
mod mesh;
mod sweep;
mod topology;

pub use config::{ConfigError, KnotConfig};
pub use curve::CurveSample;
pub use export::write_obj;
pub use frame::Frame;
pub use mesh::{generate, TubeMesh};
pub use sweep::sweep_ring;
pub use topology::quad_faces;

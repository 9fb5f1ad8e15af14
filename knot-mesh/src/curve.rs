//! Curve sampling for the (p,q) torus-knot path
//!
//! Position on the path:
//!
//! ```text
//! x = cos(p*t) * (R + r*cos(q*t))
//! y = sin(p*t) * (R + r*cos(q*t))
//! z = r * sin(q*t)
//! ```
//!
//! where `R` is the torus radius and `r` the path offset
//! ([`KnotConfig::path_offset`]). Tangents come from the analytic
//! derivative, normalized.

use glam::DVec3;
use tracing::warn;

use crate::config::KnotConfig;

/// One discrete sample of the knot path
#[derive(Debug, Clone, Copy)]
pub struct CurveSample {
    /// Path parameter in `[0, 2*PI]`
    pub t: f64,
    /// Position on the path curve
    pub position: DVec3,
    /// Unit tangent, or `(1,0,0)` when the derivative vanishes
    pub tangent: DVec3,
}

impl CurveSample {
    /// Evaluate the path and its tangent at parameter `t`
    pub fn at(config: &KnotConfig, t: f64) -> Self {
        Self {
            t,
            position: position(config, t),
            tangent: tangent(config, t),
        }
    }
}

/// Position on the path curve at parameter `t`
pub fn position(config: &KnotConfig, t: f64) -> DVec3 {
    let pt = config.p as f64 * t;
    let qt = config.q as f64 * t;
    let ring = config.torus_radius + config.path_offset() * qt.cos();

    DVec3::new(
        pt.cos() * ring,
        pt.sin() * ring,
        config.path_offset() * qt.sin(),
    )
}

/// Unit tangent of the path curve at parameter `t`.
///
/// Falls back to `(1,0,0)` when the derivative magnitude is numerically
/// zero instead of propagating a division error. Cannot trigger for
/// `p, q >= 1` with nonzero radii, but the guard is mandatory.
pub fn tangent(config: &KnotConfig, t: f64) -> DVec3 {
    let p = config.p as f64;
    let q = config.q as f64;
    let pt = p * t;
    let qt = q * t;
    let r = config.path_offset();
    let ring = config.torus_radius + r * qt.cos();

    let dx = -p * pt.sin() * ring - q * r * pt.cos() * qt.sin();
    let dy = p * pt.cos() * ring - q * r * pt.sin() * qt.sin();
    let dz = q * r * qt.cos();

    match DVec3::new(dx, dy, dz).try_normalize() {
        Some(dir) => dir,
        None => {
            warn!("tangent derivative vanished at t={}, falling back to +X", t);
            DVec3::X
        }
    }
}

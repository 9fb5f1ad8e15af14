//! Knot configuration and validation

use thiserror::Error;

/// Invalid configuration detected before generation starts
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Winding numbers below 1 collapse the knot to a degenerate curve
    #[error("winding number {0} must be >= 1 (got {1})")]
    InvalidWinding(&'static str, u32),

    /// Fewer than 3 segments cannot form a closed loop
    #[error("{0} must be >= 3 (got {1})")]
    TooFewSegments(&'static str, u32),
}

/// Parameters for a (p,q) torus-knot tube mesh
///
/// Immutable once generation starts. [`generate`](crate::generate) validates
/// before any computation runs, so an invalid configuration never produces
/// partial output.
#[derive(Debug, Clone)]
pub struct KnotConfig {
    /// Windings around the torus axis of symmetry (>= 1)
    pub p: u32,
    /// Windings around the torus tube (>= 1)
    pub q: u32,
    /// Distance from the torus center to the path circle
    pub torus_radius: f64,
    /// Radius of the swept circular cross-section
    pub tube_radius: f64,
    /// Segments along the knot path (>= 3)
    pub path_segments: u32,
    /// Segments around the tube cross-section (>= 3)
    pub tube_segments: u32,
}

impl Default for KnotConfig {
    fn default() -> Self {
        Self {
            p: 3,
            q: 2,
            torus_radius: 1.0,
            tube_radius: 0.3,
            path_segments: 128,
            tube_segments: 32,
        }
    }
}

impl KnotConfig {
    /// Validate winding numbers and segment counts.
    ///
    /// Radii are intentionally unconstrained; degenerate radii recover
    /// through the tangent fallback in the curve sampler.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.p < 1 {
            return Err(ConfigError::InvalidWinding("p", self.p));
        }
        if self.q < 1 {
            return Err(ConfigError::InvalidWinding("q", self.q));
        }
        if self.path_segments < 3 {
            return Err(ConfigError::TooFewSegments(
                "path_segments",
                self.path_segments,
            ));
        }
        if self.tube_segments < 3 {
            return Err(ConfigError::TooFewSegments(
                "tube_segments",
                self.tube_segments,
            ));
        }
        Ok(())
    }

    /// Offset of the path curve from the torus circle.
    ///
    /// This reuses the configured tube radius, doubled. The cross-section
    /// sweep uses `tube_radius` directly, so the two are coupled; downstream
    /// calibration assets depend on the resulting proportions.
    pub fn path_offset(&self) -> f64 {
        2.0 * self.tube_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(KnotConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_p() {
        let config = KnotConfig {
            p: 0,
            ..KnotConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWinding("p", 0))
        ));
    }

    #[test]
    fn rejects_zero_q() {
        let config = KnotConfig {
            q: 0,
            ..KnotConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWinding("q", 0))
        ));
    }

    #[test]
    fn rejects_too_few_path_segments() {
        let config = KnotConfig {
            path_segments: 2,
            ..KnotConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooFewSegments("path_segments", 2))
        ));
    }

    #[test]
    fn rejects_too_few_tube_segments() {
        let config = KnotConfig {
            tube_segments: 2,
            ..KnotConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooFewSegments("tube_segments", 2))
        ));
    }

    #[test]
    fn zero_radii_are_accepted() {
        let config = KnotConfig {
            torus_radius: 0.0,
            tube_radius: 0.0,
            ..KnotConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn path_offset_doubles_tube_radius() {
        let config = KnotConfig::default();
        assert!((config.path_offset() - 0.6).abs() < 1e-12);
    }
}

#![warn(missing_docs)]

//! Math types for finray.
//!
//! Thin wrappers around nalgebra providing the vector and point types
//! used by the ray queries, length/normalization helpers that never
//! produce NaN for a zero vector, the [`Tolerance`] configuration shared
//! by every intersection test, and the bounding shapes rays are tested
//! against.

mod shapes;

pub use shapes::{Aabb, BoundingSphere, PlaneEq, Triangle};

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// Length of `v`, returning `0.0` for the zero vector.
#[inline]
pub fn safe_length(v: &Vec3) -> f64 {
    let sq = v.norm_squared();
    if sq <= 0.0 {
        0.0
    } else {
        sq.sqrt()
    }
}

/// Normalize `v`, or return the zero vector if its length is at most `min_norm`.
#[inline]
pub fn safe_normalize(v: &Vec3, min_norm: f64) -> Vec3 {
    v.try_normalize(min_norm).unwrap_or_else(Vec3::zeros)
}

/// Errors produced while loading or validating a [`Tolerance`].
#[derive(Error, Debug)]
pub enum ToleranceError {
    /// A threshold was zero, negative, NaN or infinite.
    #[error("tolerance `{name}` must be finite and positive, got {value}")]
    Invalid {
        /// Field name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// The TOML source could not be parsed.
    #[error("failed to parse tolerance config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Near-zero thresholds used by the intersection tests.
///
/// All four tests read their epsilons from here so that degenerate
/// inputs are classified the same way everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerance {
    /// Below this magnitude a denominator is treated as zero: ray/plane
    /// parallelism, AABB slab parallelism and zero-length rays.
    pub parallel: f64,
    /// Below this magnitude a ray/triangle determinant is treated as zero
    /// (ray parallel to the triangle, or zero-area triangle).
    pub degenerate: f64,
    /// Largest component-wise deviation accepted between a caller-supplied
    /// ray direction and the one derived from the ray's endpoints.
    pub direction: f64,
}

impl Tolerance {
    /// Default thresholds: 1e-12 for parallel and degenerate tests,
    /// 1e-9 for direction consistency.
    pub const DEFAULT: Self = Self {
        parallel: 1e-12,
        degenerate: 1e-12,
        direction: 1e-9,
    };

    /// Check if a denominator counts as zero for parallelism tests.
    #[inline]
    pub fn is_parallel(&self, denom: f64) -> bool {
        denom.abs() <= self.parallel
    }

    /// Check if a triangle determinant counts as zero.
    #[inline]
    pub fn is_degenerate(&self, det: f64) -> bool {
        det.abs() <= self.degenerate
    }

    /// Validate that every threshold is finite and positive.
    pub fn validate(&self) -> Result<(), ToleranceError> {
        let fields = [
            ("parallel", self.parallel),
            ("degenerate", self.degenerate),
            ("direction", self.direction),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ToleranceError::Invalid { name, value });
            }
        }
        Ok(())
    }

    /// Parse a tolerance from TOML. Missing keys keep their defaults.
    ///
    /// ```
    /// use finray_math::Tolerance;
    ///
    /// let tol = Tolerance::from_toml_str("degenerate = 1e-9").unwrap();
    /// assert_eq!(tol.degenerate, 1e-9);
    /// assert_eq!(tol.parallel, Tolerance::DEFAULT.parallel);
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, ToleranceError> {
        let tol: Tolerance = toml::from_str(source)?;
        tol.validate()?;
        log::debug!(
            "loaded tolerance: parallel={}, degenerate={}, direction={}",
            tol.parallel,
            tol.degenerate,
            tol.direction
        );
        Ok(tol)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

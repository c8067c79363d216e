//! Barycentric weights and attribute interpolation.

use std::ops::{Add, Mul};

use finray_math::Point3;

/// Interpolate a per-vertex attribute: `(1 - u - v) * a + u * b + v * c`.
///
/// `a`, `b` and `c` belong to the triangle's first, second and third
/// corner respectively, matching the `(u, v)` reported by a triangle hit.
///
/// ```
/// use finray::barycentric_interpolate;
///
/// let value = barycentric_interpolate(0.25, 0.5, 0.0, 4.0, 8.0);
/// assert_eq!(value, 5.0);
/// ```
#[inline]
pub fn barycentric_interpolate<T>(u: f64, v: f64, a: T, b: T, c: T) -> T
where
    T: Add<Output = T> + Mul<f64, Output = T>,
{
    a * (1.0 - u - v) + b * u + c * v
}

/// Barycentric coordinates of a point on a triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Barycentric {
    /// Weight of the second corner.
    pub u: f64,
    /// Weight of the third corner.
    pub v: f64,
}

impl Barycentric {
    /// Create barycentric coordinates.
    pub fn new(u: f64, v: f64) -> Self {
        Self { u, v }
    }

    /// Weight of the first corner, `1 - u - v`.
    #[inline]
    pub fn w(&self) -> f64 {
        1.0 - self.u - self.v
    }

    /// Interpolate per-vertex attributes at these coordinates.
    #[inline]
    pub fn interpolate<T>(&self, a: T, b: T, c: T) -> T
    where
        T: Add<Output = T> + Mul<f64, Output = T>,
    {
        barycentric_interpolate(self.u, self.v, a, b, c)
    }

    /// The point these coordinates describe on triangle `(p1, p2, p3)`.
    pub fn point_on(&self, p1: &Point3, p2: &Point3, p3: &Point3) -> Point3 {
        Point3::from(self.interpolate(p1.coords, p2.coords, p3.coords))
    }
}

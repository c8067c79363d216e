//! Ray-shape intersection algorithms.
//!
//! Every test treats the ray as the finite segment `[0, length]`: a
//! crossing before the origin or past the destination is a miss. A miss
//! is always `None`; degenerate input (zero-length ray, parallel ray,
//! zero-area triangle) is reported as a miss too.

mod aabb;
mod plane;
mod sphere;
mod triangle;

pub use aabb::{intersect_aabb, SpanHit};
pub use plane::intersect_plane;
pub use sphere::{intersect_sphere, SphereHit};
pub use triangle::{intersect_triangle, TriangleHit};

use finray_math::{Aabb, BoundingSphere, PlaneEq, Tolerance, Triangle};

use crate::{Ray, RayHit};

/// A shape that can be intersected with a finite [`Ray`].
pub trait Intersect {
    /// Information returned for a hit.
    type Hit;

    /// Intersect `ray` with this shape.
    fn intersect_ray(&self, ray: &Ray, tol: &Tolerance) -> Option<Self::Hit>;
}

impl Intersect for BoundingSphere {
    type Hit = SphereHit;

    fn intersect_ray(&self, ray: &Ray, _tol: &Tolerance) -> Option<SphereHit> {
        intersect_sphere(ray, self)
    }
}

impl Intersect for PlaneEq {
    type Hit = RayHit;

    fn intersect_ray(&self, ray: &Ray, tol: &Tolerance) -> Option<RayHit> {
        intersect_plane(ray, self, tol)
    }
}

impl Intersect for Triangle {
    type Hit = TriangleHit;

    fn intersect_ray(&self, ray: &Ray, tol: &Tolerance) -> Option<TriangleHit> {
        intersect_triangle(ray, &self.a, &self.b, &self.c, tol)
    }
}

impl Intersect for Aabb {
    type Hit = SpanHit;

    fn intersect_ray(&self, ray: &Ray, tol: &Tolerance) -> Option<SpanHit> {
        intersect_aabb(ray, self, tol)
    }
}

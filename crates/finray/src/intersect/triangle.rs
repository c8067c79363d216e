//! Ray-triangle intersection (Möller-Trumbore).

use finray_math::{Point3, Tolerance};

use crate::{Barycentric, Ray, RayHit};

/// Result of a ray-triangle intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleHit {
    /// Distance and point of the hit.
    pub hit: RayHit,
    /// Barycentric coordinates; `u` weights `p2`, `v` weights `p3`.
    pub bary: Barycentric,
}

/// Intersect a finite ray with triangle `(p1, p2, p3)`.
///
/// Both windings are accepted. Returns `None` if the ray is parallel to
/// the triangle's plane, the triangle has zero area, the crossing lies
/// outside the triangle, or it is off the segment `[0, length]`.
///
/// Attributes at the hit interpolate as `(1 - u - v) * A + u * B + v * C`
/// for values `A`, `B`, `C` at `p1`, `p2`, `p3`; see
/// [`barycentric_interpolate`](crate::barycentric_interpolate).
pub fn intersect_triangle(
    ray: &Ray,
    p1: &Point3,
    p2: &Point3,
    p3: &Point3,
    tol: &Tolerance,
) -> Option<TriangleHit> {
    let dir = ray.direction();
    let edge1 = p2 - p1;
    let edge2 = p3 - p1;

    let pvec = dir.cross(&edge2);
    let det = edge1.dot(&pvec);

    if tol.is_degenerate(det) {
        log::trace!("triangle test rejected: parallel or degenerate (det = {det})");
        return None;
    }

    let inv_det = 1.0 / det;
    let tvec = ray.origin() - p1;

    let u = tvec.dot(&pvec) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let qvec = tvec.cross(&edge1);
    let v = dir.dot(&qvec) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = edge2.dot(&qvec) * inv_det;
    if t < 0.0 || t > ray.length() {
        return None;
    }

    Some(TriangleHit {
        hit: RayHit::new(t, ray.point_at(t)),
        bary: Barycentric::new(u, v),
    })
}

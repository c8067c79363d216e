//! Ray-AABB intersection (slab method).

use finray_math::{Aabb, Tolerance};

use crate::{Ray, RayHit};

/// Entry and exit points of a ray through a box, clipped to the segment.
///
/// If the origin is inside the box, `near` is the origin itself; if the
/// destination is inside, `far` is the destination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpanHit {
    /// Entry point.
    pub near: RayHit,
    /// Exit point.
    pub far: RayHit,
}

/// Intersect a finite ray with an axis-aligned box.
///
/// Each axis contributes the interval between its two bounding planes; a
/// ray parallel to an axis misses unless its origin lies within that
/// axis' slab. The overlap of all three intervals is then clipped to
/// `[0, length]`.
pub fn intersect_aabb(ray: &Ray, aabb: &Aabb, tol: &Tolerance) -> Option<SpanHit> {
    if ray.is_degenerate() {
        log::trace!("aabb test skipped: zero-length ray");
        return None;
    }

    let origin = ray.origin();
    let dir = ray.direction();

    let mut t_min = f64::NEG_INFINITY;
    let mut t_max = f64::INFINITY;

    for axis in 0..3 {
        let (lo, hi) = (aabb.min[axis], aabb.max[axis]);

        if tol.is_parallel(dir[axis]) {
            if origin[axis] < lo || origin[axis] > hi {
                return None;
            }
            continue;
        }

        let inv = 1.0 / dir[axis];
        let t1 = (lo - origin[axis]) * inv;
        let t2 = (hi - origin[axis]) * inv;
        let (enter, exit) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };

        t_min = t_min.max(enter);
        t_max = t_max.min(exit);
        if t_min > t_max {
            return None;
        }
    }

    let t_near = t_min.max(0.0);
    let t_far = t_max.min(ray.length());
    if t_near > t_far {
        return None;
    }

    Some(SpanHit {
        near: RayHit::new(t_near, ray.point_at(t_near)),
        far: RayHit::new(t_far, ray.point_at(t_far)),
    })
}

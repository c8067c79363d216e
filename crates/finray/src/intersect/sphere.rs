//! Ray-sphere intersection (geometric quadratic solve).

use finray_math::BoundingSphere;

use crate::{Ray, RayHit};

/// Result of a ray-sphere intersection.
///
/// `near` is the entry root and `far` the exit root of the infinite line;
/// each is present only if it lies on the finite ray. At least one is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereHit {
    /// Entry point, if on the segment.
    pub near: Option<RayHit>,
    /// Exit point, if on the segment.
    pub far: Option<RayHit>,
}

impl SphereHit {
    /// The first crossing along the ray.
    pub fn first(&self) -> Option<RayHit> {
        self.near.or(self.far)
    }
}

/// Intersect a finite ray with a sphere.
///
/// Returns `None` if the line misses the sphere, if the ray points away
/// from a sphere that does not contain its origin, or if neither root
/// lies within `[0, length]`.
pub fn intersect_sphere(ray: &Ray, sphere: &BoundingSphere) -> Option<SphereHit> {
    if ray.is_degenerate() {
        log::trace!("sphere test skipped: zero-length ray");
        return None;
    }

    let to_center = sphere.center - ray.origin();
    let tca = to_center.dot(ray.direction());
    let dist_sq = to_center.norm_squared();
    let radius_sq = sphere.radius_sq();

    if tca < 0.0 && dist_sq > radius_sq {
        return None;
    }

    // Squared distance from the center to the closest point on the line
    let d2 = dist_sq - tca * tca;
    if d2 > radius_sq {
        return None;
    }

    let thc = (radius_sq - d2).max(0.0).sqrt();
    let length = ray.length();
    let on_segment = |t: f64| (0.0..=length).contains(&t).then(|| RayHit::new(t, ray.point_at(t)));

    let near = on_segment(tca - thc);
    let far = on_segment(tca + thc);
    if near.is_none() && far.is_none() {
        return None;
    }

    Some(SphereHit { near, far })
}

//! Ray-plane intersection (closed-form).

use finray_math::{PlaneEq, Tolerance};

use crate::{Ray, RayHit};

/// Intersect a finite ray with a plane.
///
/// Returns `None` if the ray is parallel to the plane (including a ray
/// lying in it), or if the crossing is behind the origin or past the
/// destination.
pub fn intersect_plane(ray: &Ray, plane: &PlaneEq, tol: &Tolerance) -> Option<RayHit> {
    let denom = plane.normal.dot(ray.direction());

    if tol.is_parallel(denom) {
        log::trace!("plane test rejected: ray parallel to plane (denom = {denom})");
        return None;
    }

    let t = -plane.signed_distance(ray.origin()) / denom;
    if t < 0.0 || t > ray.length() {
        return None;
    }

    Some(RayHit::new(t, ray.point_at(t)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use finray_math::{Point3, Vec3};

    fn xy_plane() -> PlaneEq {
        PlaneEq::new(Vec3::z(), 0.0)
    }

    fn hit(ray: &Ray, plane: &PlaneEq) -> Option<RayHit> {
        intersect_plane(ray, plane, &Tolerance::DEFAULT)
    }

    #[test]
    fn test_ray_plane_perpendicular() {
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Point3::new(0.0, 0.0, -5.0));
        let hit = hit(&ray, &xy_plane()).unwrap();
        assert_relative_eq!(hit.t, 5.0, epsilon = 1e-10);
        assert_relative_eq!(hit.t, ray.length() / 2.0, epsilon = 1e-10);
        assert_relative_eq!(hit.point, Point3::origin(), epsilon = 1e-10);
    }

    #[test]
    fn test_ray_plane_offset() {
        // z = 2 plane: dot((0,0,1), p) - 2 == 0
        let plane = PlaneEq::new(Vec3::z(), -2.0);
        let ray = Ray::new(Point3::new(3.0, 4.0, 10.0), Point3::new(3.0, 4.0, 0.0));
        let hit = hit(&ray, &plane).unwrap();
        assert_relative_eq!(hit.t, 8.0, epsilon = 1e-10);
        assert_relative_eq!(hit.point, Point3::new(3.0, 4.0, 2.0), epsilon = 1e-10);
    }

    #[test]
    fn test_ray_plane_from_back_side() {
        let ray = Ray::new(Point3::new(1.0, 1.0, -3.0), Point3::new(1.0, 1.0, 1.0));
        let hit = hit(&ray, &xy_plane()).unwrap();
        assert_relative_eq!(hit.t, 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_ray_plane_parallel() {
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Point3::new(10.0, 0.0, 5.0));
        assert!(hit(&ray, &xy_plane()).is_none());
    }

    #[test]
    fn test_ray_plane_coincident() {
        let ray = Ray::new(Point3::new(-1.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0));
        assert!(hit(&ray, &xy_plane()).is_none());
    }

    #[test]
    fn test_ray_plane_behind() {
        let ray = Ray::new(Point3::new(0.0, 0.0, -5.0), Point3::new(0.0, 0.0, -10.0));
        assert!(hit(&ray, &xy_plane()).is_none());
    }

    #[test]
    fn test_ray_plane_short_segment() {
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Point3::new(0.0, 0.0, 1.0));
        assert!(hit(&ray, &xy_plane()).is_none());
    }

    #[test]
    fn test_ray_plane_angled() {
        let ray = Ray::new(Point3::new(0.0, 0.0, 10.0), Point3::new(20.0, 0.0, -10.0));
        let hit = hit(&ray, &xy_plane()).unwrap();
        let expected_t = 10.0 * 2.0_f64.sqrt();
        assert_relative_eq!(hit.t, expected_t, epsilon = 1e-10);
        assert_relative_eq!(hit.point, Point3::new(10.0, 0.0, 0.0), epsilon = 1e-10);
    }

    #[test]
    fn test_ray_plane_zero_length() {
        let p = Point3::origin();
        assert!(hit(&Ray::new(p, p), &xy_plane()).is_none());
    }
}

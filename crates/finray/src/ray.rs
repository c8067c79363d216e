//! Finite ray representation.

use finray_math::{safe_length, safe_normalize, Point3, Tolerance, Vec3};

use crate::error::{RayError, Result};
use crate::intersect::{intersect_triangle, Intersect, TriangleHit};

/// A finite ray: the segment from `origin` to `destination`.
///
/// The unit `direction` is derived eagerly from the endpoints whenever
/// either of them changes. A zero-length ray has a zero direction and
/// never intersects anything.
///
/// There is no default ray; use [`PartialRay`] when the endpoints become
/// known at different times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    origin: Point3,
    destination: Point3,
    direction: Vec3,
}

impl Ray {
    /// Create a ray from `origin` to `destination`.
    pub fn new(origin: Point3, destination: Point3) -> Self {
        Self {
            origin,
            destination,
            direction: direction_between(&origin, &destination),
        }
    }

    /// Create a ray with a precomputed direction.
    ///
    /// `direction` is trusted to equal the normalized `destination - origin`;
    /// use [`Ray::try_from_parts`] to check it.
    #[inline]
    pub fn from_parts(origin: Point3, destination: Point3, direction: Vec3) -> Self {
        Self {
            origin,
            destination,
            direction,
        }
    }

    /// Create a ray with a precomputed direction, rejecting one that does not
    /// match the endpoints within `tol.direction`. Non-finite components
    /// never match.
    pub fn try_from_parts(
        origin: Point3,
        destination: Point3,
        direction: Vec3,
        tol: &Tolerance,
    ) -> Result<Self> {
        let expected = direction_between(&origin, &destination);
        let finite = direction.iter().chain(expected.iter()).all(|c| c.is_finite());
        if !finite || (expected - direction).amax() > tol.direction {
            return Err(RayError::DirectionMismatch {
                given: direction,
                expected,
            });
        }
        Ok(Self::from_parts(origin, destination, direction))
    }

    /// Set both endpoints.
    pub fn set(&mut self, origin: Point3, destination: Point3) {
        self.origin = origin;
        self.destination = destination;
        self.direction = direction_between(&self.origin, &self.destination);
    }

    /// Move the start point, keeping the destination.
    pub fn set_origin(&mut self, origin: Point3) {
        self.origin = origin;
        self.direction = direction_between(&self.origin, &self.destination);
    }

    /// Move the end point, keeping the origin.
    pub fn set_dest(&mut self, destination: Point3) {
        self.destination = destination;
        self.direction = direction_between(&self.origin, &self.destination);
    }

    /// Start point.
    #[inline]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    /// End point.
    #[inline]
    pub fn dest(&self) -> &Point3 {
        &self.destination
    }

    /// Unit direction, or zero for a zero-length ray.
    #[inline]
    pub fn direction(&self) -> &Vec3 {
        &self.direction
    }

    /// Distance from origin to destination.
    #[inline]
    pub fn length(&self) -> f64 {
        safe_length(&(self.destination - self.origin))
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn point_at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction
    }

    /// Whether the ray has no usable direction.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.direction == Vec3::zeros()
    }

    /// Intersect with a shape using [`Tolerance::DEFAULT`].
    ///
    /// ```
    /// use finray::{BoundingSphere, Point3, Ray};
    ///
    /// let ray = Ray::new(Point3::new(-10.0, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0));
    /// let sphere = BoundingSphere::new(Point3::origin(), 2.0);
    /// let hit = ray.intersects(&sphere).unwrap();
    /// assert_eq!(hit.near.unwrap().t, 8.0);
    /// assert_eq!(hit.far.unwrap().t, 12.0);
    /// ```
    #[inline]
    pub fn intersects<S: Intersect>(&self, shape: &S) -> Option<S::Hit> {
        shape.intersect_ray(self, &Tolerance::DEFAULT)
    }

    /// Intersect with a shape using the given tolerance.
    #[inline]
    pub fn intersects_with<S: Intersect>(&self, shape: &S, tol: &Tolerance) -> Option<S::Hit> {
        shape.intersect_ray(self, tol)
    }

    /// Intersect with triangle `(p1, p2, p3)` using [`Tolerance::DEFAULT`].
    #[inline]
    pub fn intersects_triangle(&self, p1: &Point3, p2: &Point3, p3: &Point3) -> Option<TriangleHit> {
        intersect_triangle(self, p1, p2, p3, &Tolerance::DEFAULT)
    }

    /// Whether the ray hits the shape at all.
    #[inline]
    pub fn hits<S: Intersect>(&self, shape: &S) -> bool {
        self.intersects(shape).is_some()
    }
}

fn direction_between(origin: &Point3, destination: &Point3) -> Vec3 {
    safe_normalize(&(destination - origin), Tolerance::DEFAULT.parallel)
}

/// A ray whose endpoints may not be known yet.
///
/// This is the uninitialized state of a [`Ray`]: converting it fails with
/// [`RayError::MissingOrigin`] or [`RayError::MissingDestination`] until
/// both endpoints have been set.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PartialRay {
    origin: Option<Point3>,
    destination: Option<Point3>,
}

impl PartialRay {
    /// An empty ray with neither endpoint set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both endpoints.
    pub fn set(&mut self, origin: Point3, destination: Point3) {
        self.origin = Some(origin);
        self.destination = Some(destination);
    }

    /// Set the start point.
    pub fn set_origin(&mut self, origin: Point3) {
        self.origin = Some(origin);
    }

    /// Set the end point.
    pub fn set_dest(&mut self, destination: Point3) {
        self.destination = Some(destination);
    }

    /// Start point, if set.
    pub fn origin(&self) -> Option<&Point3> {
        self.origin.as_ref()
    }

    /// End point, if set.
    pub fn dest(&self) -> Option<&Point3> {
        self.destination.as_ref()
    }

    /// Whether both endpoints are set.
    pub fn is_complete(&self) -> bool {
        self.origin.is_some() && self.destination.is_some()
    }

    /// Build the ray, failing if an endpoint is missing.
    pub fn build(&self) -> Result<Ray> {
        let origin = self.origin.ok_or(RayError::MissingOrigin)?;
        let destination = self.destination.ok_or(RayError::MissingDestination)?;
        Ok(Ray::new(origin, destination))
    }
}

impl TryFrom<PartialRay> for Ray {
    type Error = RayError;

    fn try_from(partial: PartialRay) -> Result<Self> {
        partial.build()
    }
}

impl From<Ray> for PartialRay {
    fn from(ray: Ray) -> Self {
        Self {
            origin: Some(ray.origin),
            destination: Some(ray.destination),
        }
    }
}

/// A point where a ray meets a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance along the ray, in `[0, length]`.
    pub t: f64,
    /// Intersection point.
    pub point: Point3,
}

impl RayHit {
    /// Create a ray hit.
    pub fn new(t: f64, point: Point3) -> Self {
        Self { t, point }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_direction_invariant(ray: &Ray) {
        let expected = (ray.dest() - ray.origin()).normalize();
        assert_relative_eq!(*ray.direction(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_ray_new() {
        let ray = Ray::new(Point3::new(1.0, 2.0, 3.0), Point3::new(1.0, 2.0, 7.0));
        assert_eq!(*ray.origin(), Point3::new(1.0, 2.0, 3.0));
        assert_eq!(*ray.dest(), Point3::new(1.0, 2.0, 7.0));
        assert_relative_eq!(*ray.direction(), Vec3::z());
        assert_relative_eq!(ray.length(), 4.0);
    }

    #[test]
    fn test_direction_after_mutation() {
        let mut ray = Ray::new(Point3::new(0.0, 0.0, 0.0), Point3::new(3.0, 4.0, 0.0));
        assert_direction_invariant(&ray);

        ray.set_origin(Point3::new(-1.0, 2.0, 5.0));
        assert_direction_invariant(&ray);

        ray.set_dest(Point3::new(8.0, -3.0, 1.0));
        assert_direction_invariant(&ray);

        ray.set(Point3::new(2.0, 2.0, 2.0), Point3::new(-2.0, 0.5, 9.0));
        assert_direction_invariant(&ray);
        assert_relative_eq!(ray.length(), (16.0f64 + 2.25 + 49.0).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Point3::origin(), Point3::new(10.0, 0.0, 0.0));
        assert_relative_eq!(ray.point_at(5.0), Point3::new(5.0, 0.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(ray.point_at(0.0), *ray.origin());
        assert_relative_eq!(ray.point_at(ray.length()), *ray.dest(), epsilon = 1e-12);
    }

    #[test]
    fn test_zero_length_ray() {
        let p = Point3::new(1.0, 1.0, 1.0);
        let ray = Ray::new(p, p);
        assert_eq!(ray.length(), 0.0);
        assert_eq!(*ray.direction(), Vec3::zeros());
        assert!(ray.is_degenerate());
    }

    #[test]
    fn test_collapse_and_recover() {
        let mut ray = Ray::new(Point3::origin(), Point3::new(0.0, 2.0, 0.0));
        ray.set_dest(Point3::origin());
        assert!(ray.is_degenerate());
        ray.set_origin(Point3::new(0.0, 0.0, -1.0));
        assert!(!ray.is_degenerate());
        assert_relative_eq!(*ray.direction(), Vec3::z());
    }

    #[test]
    fn test_from_parts() {
        let origin = Point3::origin();
        let dest = Point3::new(0.0, 5.0, 0.0);
        let ray = Ray::try_from_parts(origin, dest, Vec3::y(), &Tolerance::DEFAULT).unwrap();
        assert_eq!(ray, Ray::new(origin, dest));

        let err = Ray::try_from_parts(origin, dest, Vec3::x(), &Tolerance::DEFAULT).unwrap_err();
        assert!(matches!(err, RayError::DirectionMismatch { .. }));
    }

    #[test]
    fn test_from_parts_rejects_nan_direction() {
        let origin = Point3::origin();
        let dest = Point3::new(0.0, 0.0, 5.0);
        let nan = Vec3::new(f64::NAN, f64::NAN, f64::NAN);
        let err = Ray::try_from_parts(origin, dest, nan, &Tolerance::DEFAULT).unwrap_err();
        assert!(matches!(err, RayError::DirectionMismatch { .. }));

        let partly_nan = Vec3::new(0.0, f64::NAN, 1.0);
        assert!(Ray::try_from_parts(origin, dest, partly_nan, &Tolerance::DEFAULT).is_err());

        let infinite = Vec3::new(0.0, 0.0, f64::INFINITY);
        assert!(Ray::try_from_parts(origin, dest, infinite, &Tolerance::DEFAULT).is_err());
    }

    #[test]
    fn test_partial_ray() {
        let mut partial = PartialRay::new();
        assert!(!partial.is_complete());
        assert_eq!(partial.build(), Err(RayError::MissingOrigin));

        partial.set_origin(Point3::origin());
        assert_eq!(partial.build(), Err(RayError::MissingDestination));

        partial.set_dest(Point3::new(0.0, 0.0, 3.0));
        assert!(partial.is_complete());
        let ray = Ray::try_from(partial).unwrap();
        assert_relative_eq!(*ray.direction(), Vec3::z());
        assert_eq!(PartialRay::from(ray), partial);
    }

    #[test]
    fn test_intersects_triangle_points() {
        let ray = Ray::new(Point3::new(0.1, 0.2, 1.0), Point3::new(0.1, 0.2, -1.0));
        let hit = ray
            .intersects_triangle(
                &Point3::origin(),
                &Point3::new(1.0, 0.0, 0.0),
                &Point3::new(0.0, 1.0, 0.0),
            )
            .unwrap();
        assert_relative_eq!(hit.bary.u, 0.1, epsilon = 1e-12);
        assert_relative_eq!(hit.bary.v, 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_partial_ray_set() {
        let mut partial = PartialRay::new();
        partial.set(Point3::new(1.0, 0.0, 0.0), Point3::new(1.0, 0.0, -2.0));
        assert_eq!(partial.origin(), Some(&Point3::new(1.0, 0.0, 0.0)));
        assert_eq!(partial.dest(), Some(&Point3::new(1.0, 0.0, -2.0)));
        let ray = partial.build().unwrap();
        assert_relative_eq!(ray.length(), 2.0);
    }
}

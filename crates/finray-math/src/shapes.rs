//! Bounding and query shapes: boxes, spheres, planes and triangles.

use crate::{Point3, Vec3};

/// Axis-aligned bounding box in 3D.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Point3,
    /// Maximum corner.
    pub max: Point3,
}

impl Aabb {
    /// Create an AABB from min and max corners.
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Create an AABB from its center and half-size along each axis.
    pub fn from_center_half_extents(center: Point3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Create an empty (inverted) AABB suitable for expansion.
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Expand this AABB to include a point.
    pub fn include_point(&mut self, p: &Point3) {
        self.min = self.min.inf(p);
        self.max = self.max.sup(p);
    }

    /// Center of the box.
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Test if a point lies inside or on the boundary of the box.
    pub fn contains_point(&self, p: &Point3) -> bool {
        (0..3).all(|axis| p[axis] >= self.min[axis] && p[axis] <= self.max[axis])
    }
}

/// A sphere given by center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSphere {
    /// Center point.
    pub center: Point3,
    /// Radius.
    pub radius: f64,
}

impl BoundingSphere {
    /// Create a sphere.
    pub fn new(center: Point3, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Squared radius.
    #[inline]
    pub fn radius_sq(&self) -> f64 {
        self.radius * self.radius
    }

    /// Test if a point lies inside or on the sphere.
    pub fn contains_point(&self, p: &Point3) -> bool {
        (p - self.center).norm_squared() <= self.radius_sq()
    }
}

/// A plane in Hessian normal form: `dot(normal, p) + distance == 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneEq {
    /// Unit normal.
    pub normal: Vec3,
    /// Signed distance term.
    pub distance: f64,
}

impl PlaneEq {
    /// Create a plane from a unit normal and distance term.
    pub fn new(normal: Vec3, distance: f64) -> Self {
        Self { normal, distance }
    }

    /// Create a plane through `point` with the given normal.
    /// The normal does not need to be normalized but must be non-zero.
    pub fn from_point_normal(point: &Point3, normal: &Vec3) -> Self {
        let normal = normal.normalize();
        let distance = -normal.dot(&point.coords);
        Self { normal, distance }
    }

    /// Signed distance from `p` to the plane; positive on the normal side.
    #[inline]
    pub fn signed_distance(&self, p: &Point3) -> f64 {
        self.normal.dot(&p.coords) + self.distance
    }
}

/// A triangle given by its three corners, in winding order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First corner.
    pub a: Point3,
    /// Second corner.
    pub b: Point3,
    /// Third corner.
    pub c: Point3,
}

impl Triangle {
    /// Create a triangle.
    pub fn new(a: Point3, b: Point3, c: Point3) -> Self {
        Self { a, b, c }
    }

    /// Unnormalized face normal, `(b - a) × (c - a)`. Its length is twice the area.
    pub fn scaled_normal(&self) -> Vec3 {
        (self.b - self.a).cross(&(self.c - self.a))
    }

    /// Triangle area.
    pub fn area(&self) -> f64 {
        0.5 * self.scaled_normal().norm()
    }

    /// Tight AABB around the three corners.
    pub fn aabb(&self) -> Aabb {
        let mut aabb = Aabb::empty();
        for p in [&self.a, &self.b, &self.c] {
            aabb.include_point(p);
        }
        aabb
    }
}

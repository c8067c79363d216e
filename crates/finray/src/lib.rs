#![warn(missing_docs)]

//! Finite rays and their intersection tests.
//!
//! A [`Ray`] here is a segment: it starts at an origin, stops at a
//! destination, and only crossings within that span count as hits. The
//! crate tests rays against spheres, planes, triangles and axis-aligned
//! boxes, and interpolates triangle attributes from the barycentric
//! coordinates of a hit.
//!
//! # Architecture
//!
//! - [`Ray`] - Finite ray with eagerly derived unit direction
//! - [`PartialRay`] - A ray whose endpoints are not all known yet
//! - [`intersect`] - One intersector per shape, plus the [`Intersect`] trait
//! - [`barycentric_interpolate`] - Attribute interpolation for triangle hits
//!
//! Every epsilon comes from [`Tolerance`], so degenerate input is
//! classified the same way by every test.
//!
//! # Example
//!
//! ```
//! use finray::{barycentric_interpolate, Point3, Ray, Triangle, Vec3};
//!
//! let tri = Triangle::new(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! );
//! let ray = Ray::new(Point3::new(0.25, 0.25, 1.0), Point3::new(0.25, 0.25, -1.0));
//!
//! let hit = ray.intersects(&tri).unwrap();
//! let normal = barycentric_interpolate(hit.bary.u, hit.bary.v, Vec3::z(), Vec3::z(), Vec3::z());
//! assert_eq!(normal, Vec3::z());
//! ```

mod barycentric;
pub mod error;
pub mod intersect;
mod ray;

pub use barycentric::{barycentric_interpolate, Barycentric};
pub use error::{RayError, Result};
pub use intersect::{
    intersect_aabb, intersect_plane, intersect_sphere, intersect_triangle, Intersect, SpanHit,
    SphereHit, TriangleHit,
};
pub use ray::{PartialRay, Ray, RayHit};

pub use finray_math::{
    safe_length, safe_normalize, Aabb, BoundingSphere, PlaneEq, Point3, Tolerance,
    ToleranceError, Triangle, Vec3,
};

//! Ray-triangle intersection (plane hit plus 2-D edge-sign test).

use whitted_math::{try_normalize, Point3, Vec3, EPSILON};

use super::{is_finite_point, Intersection, Shape};
use crate::material::Material;
use crate::Ray;

/// A triangle with vertices `a`, `b`, `c`.
///
/// The inside test runs on the projection onto the x-y plane, so it is
/// only meaningful when that projection has non-zero area. Triangles
/// standing perpendicular to the x-y plane give unreliable results.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    /// First vertex.
    pub a: Point3,
    /// Second vertex.
    pub b: Point3,
    /// Third vertex.
    pub c: Point3,
    /// Surface material.
    pub material: Material,
}

impl Triangle {
    /// Create a triangle.
    pub fn new(a: Point3, b: Point3, c: Point3, material: Material) -> Self {
        Self { a, b, c, material }
    }

    /// Unit normal `(b - a) × (c - a)`, or `None` for a zero-area triangle.
    pub fn plane_normal(&self) -> Option<Vec3> {
        try_normalize(&(self.b - self.a).cross(&(self.c - self.a)))
    }

    /// Centroid of the three vertices.
    pub fn centroid(&self) -> Point3 {
        Point3::from((self.a.coords + self.b.coords + self.c.coords) / 3.0)
    }
}

/// Signed area term of `p1` against the edge `p2`-`p3`, in the x-y plane.
fn edge_sign(p1: &Point3, p2: &Point3, p3: &Point3) -> f64 {
    (p1.x - p3.x) * (p2.y - p3.y) - (p2.x - p3.x) * (p1.y - p3.y)
}

impl Shape for Triangle {
    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let normal = self.plane_normal()?;

        let denom = normal.dot(ray.dir());
        // Ray is parallel to the triangle's plane
        if denom.abs() <= EPSILON {
            return None;
        }

        let t = (self.a - ray.origin).dot(&normal) / denom;
        if t <= 0.0 {
            return None;
        }

        let p = ray.at(t);
        let b1 = edge_sign(&p, &self.a, &self.b) < 0.0;
        let b2 = edge_sign(&p, &self.b, &self.c) < 0.0;
        let b3 = edge_sign(&p, &self.c, &self.a) < 0.0;

        if b1 == b2 && b2 == b3 {
            Some(Intersection::new(t))
        } else {
            None
        }
    }

    fn normal_at(&self, _point: &Point3) -> Vec3 {
        self.plane_normal().unwrap_or_else(Vec3::zeros)
    }

    fn material(&self) -> &Material {
        &self.material
    }

    fn check_geometry(&self) -> Option<String> {
        if ![self.a, self.b, self.c].iter().all(is_finite_point) {
            return Some("triangle vertex is not finite".into());
        }
        if self.plane_normal().is_none() {
            return Some("triangle has zero area".into());
        }
        None
    }
}

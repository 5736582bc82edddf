//! Ray-sphere intersection (quadratic equation).

use whitted_math::{try_normalize, Point3, Vec3};

use super::{is_finite_point, Intersection, Shape};
use crate::material::Material;
use crate::Ray;

/// A sphere given by center and radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    /// Center of the sphere.
    pub center: Point3,
    /// Radius of the sphere.
    pub radius: f64,
    /// Surface material.
    pub material: Material,
}

impl Sphere {
    /// Create a sphere.
    pub fn new(center: Point3, radius: f64, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

impl Shape for Sphere {
    /// Returns the nearer of the two roots, even when it lies behind the
    /// ray origin. A ray starting inside the sphere therefore reports a
    /// negative distance, which the scene query treats as a miss.
    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let oc = ray.origin - self.center;
        let l = ray.dir();

        // |oc + t*l|^2 = r^2 with |l| = 1
        let b = l.dot(&oc);
        let discriminant = b * b - oc.dot(&oc) + self.radius * self.radius;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_disc = discriminant.sqrt();
        let t1 = -b + sqrt_disc;
        let t2 = -b - sqrt_disc;
        Some(Intersection::new(t1.min(t2)))
    }

    fn normal_at(&self, point: &Point3) -> Vec3 {
        try_normalize(&(point - self.center)).unwrap_or_else(Vec3::zeros)
    }

    fn material(&self) -> &Material {
        &self.material
    }

    fn check_geometry(&self) -> Option<String> {
        if !is_finite_point(&self.center) {
            return Some("sphere center is not finite".into());
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Some(format!("sphere radius {} must be positive", self.radius));
        }
        None
    }
}

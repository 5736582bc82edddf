//! Renderable primitives and their ray intersection algorithms.
//!
//! Each primitive kind implements [`Shape`]. Scenes store the closed
//! [`Primitive`] enum, which dispatches to the concrete kind with a match.

mod floor;
mod quadric;
mod sphere;
mod triangle;

pub use floor::Floor;
pub use quadric::{Quadric, QuadricForm};
pub use sphere::Sphere;
pub use triangle::Triangle;

use whitted_math::{Point3, Rgb, Vec3};

use crate::material::Material;
use crate::Ray;

/// Result of intersecting a ray with a single primitive.
///
/// `distance` may be zero or negative for primitives that report the
/// nearest root regardless of sign; the scene query discards those.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Parameter along the ray.
    pub distance: f64,
    /// Color sampled at the hit point, overriding the material's base
    /// color (checkerboard tiles).
    pub sample: Option<Rgb>,
}

impl Intersection {
    /// An intersection with no sampled color.
    pub fn new(distance: f64) -> Self {
        Self {
            distance,
            sample: None,
        }
    }

    /// An intersection carrying a sampled surface color.
    pub fn with_sample(distance: f64, sample: Rgb) -> Self {
        Self {
            distance,
            sample: Some(sample),
        }
    }
}

/// Capabilities every primitive exposes to the tracer.
pub trait Shape: Send + Sync + std::fmt::Debug {
    /// Intersect `ray` with the surface. `None` means no intersection.
    fn intersect(&self, ray: &Ray) -> Option<Intersection>;

    /// Unit surface normal at `point`, or the zero vector where the
    /// surface has no defined normal.
    fn normal_at(&self, point: &Point3) -> Vec3;

    /// Material of the surface.
    fn material(&self) -> &Material;

    /// Describe the first geometric problem with this primitive, if any.
    fn check_geometry(&self) -> Option<String> {
        None
    }
}

/// A scene primitive.
#[derive(Debug, Clone)]
pub enum Primitive {
    /// See [`Sphere`].
    Sphere(Sphere),
    /// See [`Triangle`].
    Triangle(Triangle),
    /// See [`Floor`].
    Floor(Floor),
    /// See [`Quadric`].
    Quadric(Quadric),
}

impl Primitive {
    fn shape(&self) -> &dyn Shape {
        match self {
            Primitive::Sphere(s) => s,
            Primitive::Triangle(t) => t,
            Primitive::Floor(f) => f,
            Primitive::Quadric(q) => q,
        }
    }

    /// Describe the first problem with this primitive's geometry or
    /// material, if any.
    pub fn check(&self) -> Option<String> {
        self.check_geometry().or_else(|| self.material().check())
    }
}

impl Shape for Primitive {
    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        self.shape().intersect(ray)
    }

    fn normal_at(&self, point: &Point3) -> Vec3 {
        self.shape().normal_at(point)
    }

    fn material(&self) -> &Material {
        self.shape().material()
    }

    fn check_geometry(&self) -> Option<String> {
        self.shape().check_geometry()
    }
}

impl From<Sphere> for Primitive {
    fn from(s: Sphere) -> Self {
        Primitive::Sphere(s)
    }
}

impl From<Triangle> for Primitive {
    fn from(t: Triangle) -> Self {
        Primitive::Triangle(t)
    }
}

impl From<Floor> for Primitive {
    fn from(f: Floor) -> Self {
        Primitive::Floor(f)
    }
}

impl From<Quadric> for Primitive {
    fn from(q: Quadric) -> Self {
        Primitive::Quadric(q)
    }
}

fn is_finite_point(p: &Point3) -> bool {
    p.coords.iter().all(|c| c.is_finite())
}

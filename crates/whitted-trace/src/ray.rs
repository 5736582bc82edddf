//! Ray representation.

use whitted_math::{Dir3, Point3, Vec3, EPSILON};

/// A ray in 3D space defined by origin and direction.
///
/// Rays are built fresh for every primary, shadow, reflection and
/// refraction probe and never change afterwards.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Unit direction of the ray.
    pub direction: Dir3,
}

impl Ray {
    /// Create a new ray from origin and direction.
    ///
    /// The direction will be normalized; it must not be zero. Use
    /// [`Ray::try_new`] when it may be.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: Dir3::new_normalize(direction),
        }
    }

    /// Create a ray, or `None` if `direction` is too short to normalize.
    pub fn try_new(origin: Point3, direction: Vec3) -> Option<Self> {
        Dir3::try_new(direction, EPSILON).map(|direction| Self { origin, direction })
    }

    /// Unit direction as a plain vector.
    #[inline]
    pub fn dir(&self) -> &Vec3 {
        self.direction.as_ref()
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction.as_ref()
    }
}

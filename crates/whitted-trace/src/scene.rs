//! Scene description and nearest-hit query.

use whitted_math::{Point3, Rgb};

use crate::error::{Result, TraceError};
use crate::primitive::{Primitive, Shape};
use crate::Ray;

/// The nearest valid intersection of a ray with a scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Distance along the ray, always strictly positive.
    pub distance: f64,
    /// Index of the primitive in [`Scene::primitives`].
    pub index: usize,
    /// Surface color sampled by the primitive, if it samples one.
    pub sample: Option<Rgb>,
}

/// Primitives, point lights and a background color.
///
/// A scene is built once and read by every ray of a render pass; it is
/// `Send + Sync` and needs no locking.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    primitives: Vec<Primitive>,
    lights: Vec<Point3>,
    background: Rgb,
}

impl Scene {
    /// Create a scene with a black background.
    ///
    /// Primitive order defines the tie-break between equally distant hits.
    pub fn new(primitives: Vec<Primitive>, lights: Vec<Point3>) -> Self {
        Self {
            primitives,
            lights,
            background: Rgb::zeros(),
        }
    }

    /// Set the color returned for primary rays that hit nothing.
    pub fn with_background(mut self, background: Rgb) -> Self {
        self.background = background;
        self
    }

    /// Primitives in scene order.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Point light positions.
    pub fn lights(&self) -> &[Point3] {
        &self.lights
    }

    /// Background color.
    pub fn background(&self) -> Rgb {
        self.background
    }

    /// Find the primitive with the smallest strictly positive intersection
    /// distance along `ray`.
    ///
    /// Linear scan in scene order; on an exact tie the earlier primitive
    /// wins.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<Hit> {
        let mut nearest: Option<Hit> = None;
        for (index, prim) in self.primitives.iter().enumerate() {
            let Some(isect) = prim.intersect(ray) else {
                continue;
            };
            // Also rejects NaN
            if !(isect.distance > 0.0) {
                continue;
            }
            if nearest.map_or(true, |h| isect.distance < h.distance) {
                nearest = Some(Hit {
                    distance: isect.distance,
                    index,
                    sample: isect.sample,
                });
            }
        }
        nearest
    }

    /// Whether any primitive intersects `ray` at a distance in
    /// `(0, max_distance)`.
    pub fn occluded(&self, ray: &Ray, max_distance: f64) -> bool {
        self.primitives.iter().any(|prim| {
            prim.intersect(ray)
                .is_some_and(|isect| isect.distance > 0.0 && isect.distance < max_distance)
        })
    }

    /// Validate every primitive and light.
    pub fn validate(&self) -> Result<()> {
        for (index, prim) in self.primitives.iter().enumerate() {
            if let Some(reason) = prim.check() {
                log::warn!("primitive {index} rejected: {reason}");
                return Err(TraceError::InvalidPrimitive { index, reason });
            }
        }
        for (index, light) in self.lights.iter().enumerate() {
            if !light.coords.iter().all(|c| c.is_finite()) {
                log::warn!("light {index} rejected: {light:?}");
                return Err(TraceError::InvalidLight { index });
            }
        }
        Ok(())
    }
}

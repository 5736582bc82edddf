#![warn(missing_docs)]

//! Recursive Whitted-style ray tracing.
//!
//! A ray cast into a [`Scene`] of primitives and point lights is shaded with
//! Phong local illumination, shadow rays, and reflected and refracted bounces
//! up to a fixed recursion limit.
//!
//! # Architecture
//!
//! - [`Ray`] - Ray representation with origin and unit direction
//! - [`primitive`] - Sphere, triangle, checkerboard floor and clipped quadric
//! - [`Scene`] - Primitives plus lights, with the nearest-hit query
//! - [`shade`] - The recursive shading algorithm
//! - [`render`] - Parallel shading of a whole pixel grid
//!
//! # Example
//!
//! ```
//! use whitted_math::{Point3, Rgb, Vec3};
//! use whitted_trace::primitive::Sphere;
//! use whitted_trace::{shade, Material, Ray, Scene, TraceSettings};
//!
//! let sphere = Sphere::new(Point3::origin(), 1.0, Material::default());
//! let scene = Scene::new(vec![sphere.into()], vec![Point3::new(5.0, 5.0, 5.0)]);
//!
//! let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
//! let color: Rgb = shade(&ray, &scene, 0, &TraceSettings::default());
//! assert!(color.iter().all(|c| (0.0..=1.0).contains(c)));
//! ```

mod error;
mod material;
pub mod primitive;
mod ray;
mod render;
mod scene;
mod settings;
mod shade;

pub use error::{Result, TraceError};
pub use material::{Coefficients, Material};
pub use primitive::{Intersection, Primitive, Shape};
pub use ray::Ray;
pub use render::{render, Frame};
pub use scene::{Hit, Scene};
pub use settings::{
    TraceSettings, DEFAULT_BOUNCE_BIAS, DEFAULT_RECURSION_LIMIT, DEFAULT_SHADOW_BIAS,
    MAX_RECURSION_LIMIT,
};
pub use shade::shade;

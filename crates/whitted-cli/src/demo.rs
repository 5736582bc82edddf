//! Built-in demo scene.

use whitted_math::{Point3, Rgb};
use whitted_trace::primitive::{Floor, Quadric, QuadricForm, Sphere, Triangle};
use whitted_trace::{Coefficients, Material, Scene};

pub const FLOOR_WIDTH: f64 = 1000.0;
pub const TILE_SIZE: f64 = 20.0;

/// Checkerboard floor, a reflective sphere, a triangle, a clipped
/// cylinder and two point lights.
pub fn demo_scene() -> Scene {
    let floor = Floor::new(
        FLOOR_WIDTH,
        TILE_SIZE,
        Material::default().with_coefficients(Coefficients::new(0.4, 0.2, 0.2, 0.2)),
    );

    let sphere = Sphere::new(
        Point3::new(0.0, 0.0, 20.0),
        20.0,
        Material::new(Rgb::new(0.0, 1.0, 0.0))
            .with_shininess(10)
            .with_coefficients(Coefficients::new(0.4, 0.2, 0.2, 0.2)),
    );

    let triangle = Triangle::new(
        Point3::new(-70.0, 60.0, 0.0),
        Point3::new(-30.0, 60.0, 0.0),
        Point3::new(-50.0, 45.0, 50.0),
        Material::new(Rgb::new(1.0, 0.0, 0.0))
            .with_shininess(5)
            .with_coefficients(Coefficients::new(0.4, 0.2, 0.1, 0.3)),
    );

    // x² + y² = 400 around (0, -60), cut to 0 <= z <= 35
    let cylinder = QuadricForm {
        a: 1.0,
        b: 1.0,
        h: 120.0,
        j: 3200.0,
        ..Default::default()
    };
    let quadric = Quadric::new(
        cylinder,
        Point3::new(0.0, 0.0, 0.0),
        0.0,
        0.0,
        35.0,
        Material::new(Rgb::new(0.0, 0.0, 1.0))
            .with_shininess(15)
            .with_coefficients(Coefficients::new(0.4, 0.1, 0.3, 0.2)),
    );

    Scene::new(
        vec![floor.into(), sphere.into(), triangle.into(), quadric.into()],
        vec![Point3::new(70.0, 70.0, 70.0), Point3::new(-70.0, 70.0, 70.0)],
    )
}

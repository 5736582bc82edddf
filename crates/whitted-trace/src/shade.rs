//! Recursive Whitted shading: Phong local illumination plus reflected and
//! refracted bounces.

use whitted_math::{clamp_rgb, reflect, refract, try_normalize, Point3, Rgb, Vec3, EPSILON};

use crate::primitive::Shape;
use crate::scene::{Hit, Scene};
use crate::settings::TraceSettings;
use crate::Ray;

/// Color seen along `ray`, with every channel in `[0, 1]`.
///
/// `depth` is the bounce level of `ray` (0 for primary rays). Secondary rays
/// are only cast while `depth < settings.recursion_limit`. A ray that hits
/// nothing returns the scene background.
pub fn shade(ray: &Ray, scene: &Scene, depth: u32, settings: &TraceSettings) -> Rgb {
    match scene.nearest_hit(ray) {
        Some(hit) => shade_hit(ray, &hit, scene, depth, settings),
        None => clamp_rgb(&scene.background()),
    }
}

fn shade_hit(ray: &Ray, hit: &Hit, scene: &Scene, depth: u32, settings: &TraceSettings) -> Rgb {
    let prim = &scene.primitives()[hit.index];
    let material = prim.material();
    let k = &material.coefficients;
    let base = hit.sample.unwrap_or(material.base_color);
    let shininess = i32::try_from(material.shininess).unwrap_or(i32::MAX);

    let point = ray.at(hit.distance);
    let surface_normal = prim.normal_at(&point);

    let mut color = base * k.ambient;

    for light in scene.lights() {
        let to_light = light - point;
        let dist = to_light.norm();
        if dist <= EPSILON {
            continue;
        }
        let to_light = to_light / dist;

        // Light-facing side of the surface
        let normal = if to_light.dot(&surface_normal) < 0.0 {
            -surface_normal
        } else {
            surface_normal
        };

        let shadow = Ray::new(point + to_light * settings.shadow_bias, to_light);
        if !scene.occluded(&shadow, dist) {
            let lambert = to_light.dot(&normal).max(0.0);
            let phong = reflect(ray.dir(), &normal)
                .dot(ray.dir())
                .max(0.0)
                .powi(shininess);
            color += base * (material.source_factor * (lambert * k.diffuse + phong * k.specular));
        }

        if depth < settings.recursion_limit {
            let reflected = try_normalize(&reflect(ray.dir(), &normal))
                .and_then(|dir| bounce(&point, dir, scene, depth, settings));
            if let Some(c) = reflected {
                color += c * k.reflective;
            }

            // None on total internal reflection
            let refracted = refract(ray.dir(), &normal, material.refractive_index)
                .and_then(|dir| bounce(&point, dir, scene, depth, settings));
            if let Some(c) = refracted {
                color += c * material.refractive_index;
            }
        }

        color = clamp_rgb(&color);
    }

    clamp_rgb(&color)
}

/// Shade a secondary ray leaving `point` along `dir`, or `None` if it hits
/// nothing.
fn bounce(
    point: &Point3,
    dir: Vec3,
    scene: &Scene,
    depth: u32,
    settings: &TraceSettings,
) -> Option<Rgb> {
    let ray = Ray::try_new(point + dir * settings.bounce_bias, dir)?;
    let hit = scene.nearest_hit(&ray)?;
    log::trace!("bounce depth {} hit primitive {} at t={}", depth + 1, hit.index, hit.distance);
    Some(shade_hit(&ray, &hit, scene, depth + 1, settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{Coefficients, Material};
    use crate::primitive::{Floor, Primitive, Sphere, Triangle};
    use approx::assert_relative_eq;

    fn white_sphere(center: Point3, radius: f64) -> Primitive {
        Sphere::new(center, radius, Material::default()).into()
    }

    fn in_unit_range(c: &Rgb) -> bool {
        c.iter().all(|v| (0.0..=1.0).contains(v))
    }

    #[test]
    fn test_miss_returns_background() {
        let bg = Rgb::new(0.1, 0.2, 0.3);
        let scene = Scene::new(vec![], vec![]).with_background(bg);
        let ray = Ray::new(Point3::origin(), Vec3::z());
        assert_eq!(shade(&ray, &scene, 0, &TraceSettings::default()), bg);
    }

    #[test]
    fn test_no_lights_is_ambient() {
        let scene = Scene::new(vec![white_sphere(Point3::origin(), 1.0)], vec![]);
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let c = shade(&ray, &scene, 0, &TraceSettings::default());
        assert_relative_eq!(c, Rgb::repeat(0.4), epsilon = 1e-12);
    }

    #[test]
    fn test_shadowed_light_contributes_nothing() {
        let surface = white_sphere(Point3::origin(), 1.0);
        let occluder = white_sphere(Point3::new(0.0, 0.0, 5.0), 1.0);
        let light = Point3::new(0.0, 0.0, 10.0);
        // Reaches the apex (0, 0, 1) from the side, missing the occluder
        let ray = Ray::new(Point3::new(0.0, 2.0, 3.0), Vec3::new(0.0, -1.0, -1.0));
        let settings = TraceSettings::with_recursion_limit(0);

        let lit = Scene::new(vec![surface.clone()], vec![light]);
        let dark = Scene::new(vec![surface, occluder], vec![light]);

        let lit_color = shade(&ray, &lit, 0, &settings);
        let dark_color = shade(&ray, &dark, 0, &settings);

        assert_relative_eq!(dark_color, Rgb::repeat(0.4), epsilon = 1e-12);
        assert!(lit_color.x > dark_color.x);
    }

    #[test]
    fn test_light_at_hit_point_is_skipped() {
        let scene = Scene::new(
            vec![white_sphere(Point3::origin(), 1.0)],
            vec![Point3::new(0.0, 0.0, 1.0)],
        );
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let c = shade(&ray, &scene, 0, &TraceSettings::with_recursion_limit(0));
        assert_relative_eq!(c, Rgb::repeat(0.4), epsilon = 1e-12);
    }

    fn mirror_scene() -> Scene {
        // Black mirror below a white sphere; everything A shows is reflected
        let mirror = Material::new(Rgb::zeros())
            .with_coefficients(Coefficients::new(0.2, 0.6, 0.4, 1.0))
            .with_refractive_index(1.0);
        Scene::new(
            vec![
                Sphere::new(Point3::origin(), 1.0, mirror).into(),
                white_sphere(Point3::new(0.0, 0.0, 10.0), 1.0),
            ],
            vec![Point3::new(5.0, 5.0, 5.0)],
        )
    }

    #[test]
    fn test_reflection_contributes_below_limit() {
        let scene = mirror_scene();
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let c = shade(&ray, &scene, 0, &TraceSettings::with_recursion_limit(1));
        assert!(c.x >= 0.4 - 1e-12);
        assert!(in_unit_range(&c));
    }

    #[test]
    fn test_reflection_weighted_by_reflective() {
        let half = Material::new(Rgb::zeros())
            .with_coefficients(Coefficients::new(0.2, 0.6, 0.4, 0.5))
            .with_refractive_index(1.0);
        let target = white_sphere(Point3::new(0.0, 0.0, 10.0), 1.0);
        let scene = Scene::new(
            vec![Sphere::new(Point3::origin(), 1.0, half).into(), target],
            vec![Point3::new(5.0, 5.0, 5.0)],
        );
        let settings = TraceSettings::with_recursion_limit(1);

        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let c = shade(&ray, &scene, 0, &settings);

        // The bounce leaves the apex (0, 0, 1) straight up, offset by the bias
        let bounce = Ray::new(Point3::new(0.0, 0.0, 2.0), Vec3::z());
        let seen = shade(&bounce, &scene, 1, &settings);
        assert!(seen.x >= 0.4);
        assert_relative_eq!(c, seen * 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_refraction_weighted_by_refractive_index() {
        // Black pane with no mirror term; head-on rays pass straight through
        let pane = Material::new(Rgb::zeros())
            .with_coefficients(Coefficients::new(0.2, 0.6, 0.4, 0.0))
            .with_refractive_index(0.5);
        let scene = Scene::new(
            vec![
                Triangle::new(
                    Point3::new(-10.0, -10.0, 0.0),
                    Point3::new(10.0, -10.0, 0.0),
                    Point3::new(0.0, 10.0, 0.0),
                    pane,
                )
                .into(),
                white_sphere(Point3::new(0.0, 0.0, -10.0), 2.0),
            ],
            vec![Point3::new(0.0, 0.0, 10.0)],
        );
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));

        // The sphere below is lit by ambient only: the pane shadows it
        let c = shade(&ray, &scene, 0, &TraceSettings::with_recursion_limit(1));
        assert_relative_eq!(c, Rgb::repeat(0.4 * 0.5), epsilon = 1e-12);

        let c = shade(&ray, &scene, 0, &TraceSettings::with_recursion_limit(0));
        assert_eq!(c, Rgb::zeros());
    }

    #[test]
    fn test_no_bounce_at_limit() {
        let scene = mirror_scene();
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let settings = TraceSettings::with_recursion_limit(2);
        let at_limit = shade(&ray, &scene, 2, &settings);
        let local_only = shade(&ray, &scene, 0, &TraceSettings::with_recursion_limit(0));
        assert_eq!(at_limit, local_only);
        assert_eq!(at_limit, Rgb::zeros());
    }

    #[test]
    fn test_total_internal_reflection_stays_defined() {
        let dense = Material::default().with_refractive_index(3.0);
        let scene = Scene::new(
            vec![
                Sphere::new(Point3::origin(), 1.0, dense).into(),
                Floor::new(100.0, 10.0, Material::default()).into(),
            ],
            vec![Point3::new(5.0, 5.0, 5.0)],
        );
        // Grazing hit near the sphere's silhouette
        let ray = Ray::new(Point3::new(-5.0, 0.0, 0.99), Vec3::x());
        let c = shade(&ray, &scene, 0, &TraceSettings::default());
        assert!(in_unit_range(&c));
    }

    #[test]
    fn test_floor_tile_replaces_base_color() {
        let scene = Scene::new(vec![Floor::new(100.0, 10.0, Material::default()).into()], vec![]);
        let settings = TraceSettings::with_recursion_limit(0);
        let down = Vec3::new(0.0, 0.0, -1.0);

        let black = shade(&Ray::new(Point3::new(-45.0, -45.0, 5.0), down), &scene, 0, &settings);
        let white = shade(&Ray::new(Point3::new(-35.0, -45.0, 5.0), down), &scene, 0, &settings);
        assert_eq!(black, Rgb::zeros());
        assert_relative_eq!(white, Rgb::repeat(0.4), epsilon = 1e-12);
    }

    #[test]
    fn test_output_clamped() {
        let hot = Material::default()
            .with_coefficients(Coefficients::new(1.0, 1.0, 1.0, 1.0))
            .with_source_factor(10.0);
        let scene = Scene::new(
            vec![
                Sphere::new(Point3::origin(), 1.0, hot).into(),
                Floor::new(1000.0, 20.0, Material::default()).into(),
            ],
            vec![Point3::new(5.0, 5.0, 5.0), Point3::new(-5.0, 5.0, 8.0)],
        );
        let settings = TraceSettings::default();
        for (x, y) in [(0.0, 0.0), (0.5, 0.3), (-0.7, 0.2), (3.0, 3.0)] {
            let ray = Ray::new(Point3::new(x, y, 5.0), Vec3::new(0.0, 0.0, -1.0));
            assert!(in_unit_range(&shade(&ray, &scene, 0, &settings)));
        }
    }
}

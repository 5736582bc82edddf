//! Ray-quadric intersection, clipped to an axis-aligned box.

use whitted_math::{try_normalize, Point3, Vec3, EPSILON};

use super::{is_finite_point, Intersection, Shape};
use crate::material::Material;
use crate::Ray;

/// Coefficients of `Ax² + By² + Cz² + Dxy + Eyz + Fzx + Gx + Hy + Iz + J = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct QuadricForm {
    /// Coefficient of x².
    pub a: f64,
    /// Coefficient of y².
    pub b: f64,
    /// Coefficient of z².
    pub c: f64,
    /// Coefficient of xy.
    pub d: f64,
    /// Coefficient of yz.
    pub e: f64,
    /// Coefficient of zx.
    pub f: f64,
    /// Coefficient of x.
    pub g: f64,
    /// Coefficient of y.
    pub h: f64,
    /// Coefficient of z.
    pub i: f64,
    /// Constant term.
    pub j: f64,
}

impl QuadricForm {
    /// Build from the ten coefficients in `A..J` order.
    pub fn from_array(k: [f64; 10]) -> Self {
        let [a, b, c, d, e, f, g, h, i, j] = k;
        Self {
            a,
            b,
            c,
            d,
            e,
            f,
            g,
            h,
            i,
            j,
        }
    }

    /// Value of the implicit function at `p`.
    pub fn eval(&self, p: &Point3) -> f64 {
        let (x, y, z) = (p.x, p.y, p.z);
        self.a * x * x
            + self.b * y * y
            + self.c * z * z
            + self.d * x * y
            + self.e * y * z
            + self.f * z * x
            + self.g * x
            + self.h * y
            + self.i * z
            + self.j
    }

    /// Gradient of the implicit function at `p`.
    pub fn gradient(&self, p: &Point3) -> Vec3 {
        let (x, y, z) = (p.x, p.y, p.z);
        Vec3::new(
            2.0 * self.a * x + self.d * y + self.f * z + self.g,
            2.0 * self.b * y + self.d * x + self.e * z + self.h,
            2.0 * self.c * z + self.e * y + self.f * x + self.i,
        )
    }

    /// Coefficients `(a, b, c)` of `a t² + b t + c = 0` along `ray`.
    fn along(&self, ray: &Ray) -> (f64, f64, f64) {
        let o = &ray.origin;
        let d = ray.dir();

        let qa = self.a * d.x * d.x
            + self.b * d.y * d.y
            + self.c * d.z * d.z
            + self.d * d.x * d.y
            + self.e * d.y * d.z
            + self.f * d.z * d.x;

        let qb = 2.0 * (self.a * o.x * d.x + self.b * o.y * d.y + self.c * o.z * d.z)
            + self.d * (o.x * d.y + d.x * o.y)
            + self.e * (o.y * d.z + d.y * o.z)
            + self.f * (o.z * d.x + d.z * o.x)
            + self.g * d.x
            + self.h * d.y
            + self.i * d.z;

        (qa, qb, self.eval(o))
    }
}

/// A general quadric surface clipped to the box from `reference_point`
/// to `reference_point + (length, width, height)`.
///
/// A zero extent disables clipping along that axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Quadric {
    /// Implicit equation of the surface.
    pub form: QuadricForm,
    /// Minimum corner of the clipping box.
    pub reference_point: Point3,
    /// Box extent along x.
    pub length: f64,
    /// Box extent along y.
    pub width: f64,
    /// Box extent along z.
    pub height: f64,
    /// Surface material.
    pub material: Material,
}

impl Quadric {
    /// Create a clipped quadric.
    pub fn new(
        form: QuadricForm,
        reference_point: Point3,
        length: f64,
        width: f64,
        height: f64,
        material: Material,
    ) -> Self {
        Self {
            form,
            reference_point,
            length,
            width,
            height,
            material,
        }
    }

    /// Whether `p` lies inside the clipping box (bounds inclusive).
    pub fn in_bounds(&self, p: &Point3) -> bool {
        let r = &self.reference_point;
        within(self.length, r.x, p.x)
            && within(self.width, r.y, p.y)
            && within(self.height, r.z, p.z)
    }
}

fn within(extent: f64, min: f64, v: f64) -> bool {
    extent <= 0.0 || (min <= v && v <= min + extent)
}

impl Shape for Quadric {
    /// Returns the smaller root inside the box, or the only root inside it.
    /// Like [`Sphere`](super::Sphere), the result may be negative.
    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let (a, b, c) = self.form.along(ray);

        // Not quadratic along this ray
        if a.abs() < EPSILON {
            return None;
        }

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_disc = discriminant.sqrt();
        let t1 = (-b + sqrt_disc) / (2.0 * a);
        let t2 = (-b - sqrt_disc) / (2.0 * a);

        let t = match (self.in_bounds(&ray.at(t1)), self.in_bounds(&ray.at(t2))) {
            (false, false) => return None,
            (true, false) => t1,
            (false, true) => t2,
            (true, true) => t1.min(t2),
        };
        Some(Intersection::new(t))
    }

    fn normal_at(&self, point: &Point3) -> Vec3 {
        try_normalize(&self.form.gradient(point)).unwrap_or_else(Vec3::zeros)
    }

    fn material(&self) -> &Material {
        &self.material
    }

    fn check_geometry(&self) -> Option<String> {
        let k = &self.form;
        let all = [k.a, k.b, k.c, k.d, k.e, k.f, k.g, k.h, k.i, k.j];
        if !all.iter().all(|v| v.is_finite()) {
            return Some("quadric coefficient is not finite".into());
        }
        if !is_finite_point(&self.reference_point) {
            return Some("quadric reference point is not finite".into());
        }
        let extents = [
            ("length", self.length),
            ("width", self.width),
            ("height", self.height),
        ];
        for (name, extent) in extents {
            if !(extent.is_finite() && extent >= 0.0) {
                return Some(format!("quadric {name} {extent} must be non-negative"));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::Sphere;
    use approx::assert_relative_eq;

    fn sphere_form(r: f64) -> QuadricForm {
        QuadricForm {
            a: 1.0,
            b: 1.0,
            c: 1.0,
            j: -r * r,
            ..Default::default()
        }
    }

    fn boxed_sphere(r: f64) -> Quadric {
        Quadric::new(
            sphere_form(r),
            Point3::new(-r, -r, -r),
            2.0 * r,
            2.0 * r,
            2.0 * r,
            Material::default(),
        )
    }

    #[test]
    fn test_matches_sphere() {
        let r = 2.0;
        let quadric = boxed_sphere(r);
        let sphere = Sphere::new(Point3::origin(), r, Material::default());

        let rays = [
            Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0)),
            Ray::new(Point3::new(-10.0, 0.5, 0.3), Vec3::new(1.0, 0.0, 0.0)),
            Ray::new(Point3::new(6.0, 6.0, 6.0), Vec3::new(-1.0, -1.0, -1.0)),
            Ray::new(Point3::new(4.0, -3.0, 1.0), Vec3::new(-1.0, 0.7, -0.2)),
        ];
        for ray in &rays {
            let q = quadric.intersect(ray).unwrap();
            let s = sphere.intersect(ray).unwrap();
            assert_relative_eq!(q.distance, s.distance, epsilon = 1e-9);
        }

        let miss = Ray::new(Point3::new(-10.0, 5.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(quadric.intersect(&miss).is_none());
        assert!(sphere.intersect(&miss).is_none());
    }

    #[test]
    fn test_normal_matches_sphere() {
        let quadric = boxed_sphere(2.0);
        let p = Point3::new(0.0, 2.0, 0.0);
        assert_relative_eq!(quadric.normal_at(&p), Vec3::y(), epsilon = 1e-12);
    }

    #[test]
    fn test_clipping_keeps_far_root() {
        // Keep only the upper half (z in [0, 2]) of a radius-2 sphere
        let q = Quadric::new(
            sphere_form(2.0),
            Point3::new(-2.0, -2.0, 0.0),
            4.0,
            4.0,
            2.0,
            Material::default(),
        );
        // Travelling up through the axis: near root is at z = -2, clipped
        let ray = Ray::new(Point3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 1.0));
        let hit = q.intersect(&ray).unwrap();
        assert_relative_eq!(hit.distance, 7.0, epsilon = 1e-9);
    }

    #[test]
    fn test_clipping_rejects_both() {
        let q = Quadric::new(
            sphere_form(2.0),
            Point3::new(5.0, 5.0, 5.0),
            1.0,
            1.0,
            1.0,
            Material::default(),
        );
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(q.intersect(&ray).is_none());
    }

    #[test]
    fn test_zero_extent_disables_axis() {
        // Infinite cylinder x² + y² = 1 along z, unclipped
        let cyl = QuadricForm {
            a: 1.0,
            b: 1.0,
            j: -1.0,
            ..Default::default()
        };
        let q = Quadric::new(cyl, Point3::origin(), 0.0, 0.0, 0.0, Material::default());
        let ray = Ray::new(Point3::new(-5.0, 0.0, 1000.0), Vec3::new(1.0, 0.0, 0.0));
        let hit = q.intersect(&ray).unwrap();
        assert_relative_eq!(hit.distance, 4.0, epsilon = 1e-9);
    }

    #[test]
    fn test_degenerate_leading_coefficient() {
        // Same cylinder, ray along its axis: a = 0
        let cyl = QuadricForm {
            a: 1.0,
            b: 1.0,
            j: -1.0,
            ..Default::default()
        };
        let q = Quadric::new(cyl, Point3::origin(), 0.0, 0.0, 0.0, Material::default());
        let ray = Ray::new(Point3::new(0.5, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
        assert!(q.intersect(&ray).is_none());

        // A plane z = 1 is linear everywhere
        let plane = QuadricForm {
            i: 1.0,
            j: -1.0,
            ..Default::default()
        };
        let q = Quadric::new(plane, Point3::origin(), 0.0, 0.0, 0.0, Material::default());
        assert!(q.intersect(&ray).is_none());
    }

    #[test]
    fn test_zero_gradient_normal() {
        let q = boxed_sphere(1.0);
        assert_eq!(q.normal_at(&Point3::origin()), Vec3::zeros());
    }

    #[test]
    fn test_check_geometry() {
        assert!(boxed_sphere(1.0).check_geometry().is_none());
        let mut bad = boxed_sphere(1.0);
        bad.height = -1.0;
        assert!(bad.check_geometry().unwrap().contains("height"));
    }

    #[test]
    fn test_from_array_order() {
        let k = QuadricForm::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]);
        assert_eq!(k.a, 1.0);
        assert_eq!(k.f, 6.0);
        assert_eq!(k.j, 10.0);
        assert_relative_eq!(k.eval(&Point3::origin()), 10.0);
    }
}

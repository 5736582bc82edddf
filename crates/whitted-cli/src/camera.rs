//! Pinhole camera producing one primary ray per pixel.

use whitted_math::{rotate, try_normalize, Point3, Vec3};
use whitted_trace::Ray;

/// A pinhole camera with an orthonormal look/right/up frame.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Position of the pinhole.
    pub eye: Point3,
    /// Unit view direction.
    pub look: Vec3,
    /// Unit vector pointing to the right of the image.
    pub right: Vec3,
    /// Unit vector pointing to the top of the image.
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov_y: f64,
}

impl Camera {
    /// Camera at `eye` looking at `target`. `None` if `eye == target` or
    /// the view direction is parallel to `world_up`.
    pub fn look_at(eye: Point3, target: Point3, world_up: Vec3, fov_y: f64) -> Option<Self> {
        let look = try_normalize(&(target - eye))?;
        let right = try_normalize(&look.cross(&world_up))?;
        let up = right.cross(&look);
        Some(Self {
            eye,
            look,
            right,
            up,
            fov_y,
        })
    }

    /// Turn left (positive) or right (negative) by `steps` rotation steps.
    pub fn yaw(&mut self, steps: i32) {
        let sign = steps.signum() as f64;
        for _ in 0..steps.unsigned_abs() {
            self.look = rotate(&self.look, &self.up, sign);
            self.right = rotate(&self.right, &self.up, sign);
        }
    }

    /// Tilt up (positive) or down (negative) by `steps` rotation steps.
    pub fn pitch(&mut self, steps: i32) {
        let sign = steps.signum() as f64;
        for _ in 0..steps.unsigned_abs() {
            self.look = rotate(&self.look, &self.right, sign);
            self.up = rotate(&self.up, &self.right, sign);
        }
    }

    /// Primary ray through the center of pixel `(x, y)`, row 0 at the top.
    pub fn ray_for_pixel(&self, x: u32, y: u32, width: u32, height: u32) -> Ray {
        let half_height = height as f64 / 2.0;
        let plane_distance = half_height / (self.fov_y.to_radians() / 2.0).tan();
        let dx = x as f64 + 0.5 - width as f64 / 2.0;
        let dy = y as f64 + 0.5 - half_height;
        let dir = self.look * plane_distance + self.right * dx - self.up * dy;
        Ray::new(self.eye, dir)
    }
}

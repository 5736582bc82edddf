//! Bounded checkerboard floor on the plane z = 0.

use whitted_math::{Point3, Rgb, Vec3};

use super::{Intersection, Shape};
use crate::material::Material;
use crate::Ray;

/// A square checkerboard of `floor_width` per side, centred on the origin
/// in the plane z = 0.
///
/// Tiles alternate black and white. The tile color is returned with each
/// intersection rather than stored on the floor, so a floor can be shared
/// across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Floor {
    /// Side length of the whole floor.
    pub floor_width: f64,
    /// Side length of one tile.
    pub tile_size: f64,
    /// Material; its base color is replaced by the tile color on each hit.
    pub material: Material,
    corner: Point3,
    n_tiles: u64,
}

impl Floor {
    /// Create a floor. The tile count per side is `floor_width / tile_size`
    /// rounded down.
    pub fn new(floor_width: f64, tile_size: f64, material: Material) -> Self {
        let n_tiles = if tile_size > 0.0 && floor_width > 0.0 {
            // Saturating float-to-int conversion
            (floor_width / tile_size) as u64
        } else {
            0
        };
        Self {
            floor_width,
            tile_size,
            material,
            corner: Point3::new(-floor_width / 2.0, -floor_width / 2.0, 0.0),
            n_tiles,
        }
    }

    /// Number of tiles along each side.
    pub fn tiles_per_side(&self) -> u64 {
        self.n_tiles
    }

    /// Tile indices `(i, j)` containing `point`, or `None` off the board.
    pub fn tile_at(&self, point: &Point3) -> Option<(u64, u64)> {
        let i = ((point.x - self.corner.x) / self.tile_size).floor();
        let j = ((point.y - self.corner.y) / self.tile_size).floor();
        let n = self.n_tiles as f64;
        // Also rejects NaN
        if !(i >= 0.0 && j >= 0.0 && i < n && j < n) {
            return None;
        }
        Some((i as u64, j as u64))
    }

    /// Checkerboard gray level of tile `(i, j)`: 0.0 or 1.0.
    pub fn tile_color(i: u64, j: u64) -> Rgb {
        let c = ((i % 2) ^ (j % 2)) as f64;
        Rgb::new(c, c, c)
    }
}

impl Shape for Floor {
    fn intersect(&self, ray: &Ray) -> Option<Intersection> {
        let dir = ray.dir();
        if dir.z == 0.0 {
            return None;
        }

        let t = -ray.origin.z / dir.z;
        let (i, j) = self.tile_at(&ray.at(t))?;
        Some(Intersection::with_sample(t, Self::tile_color(i, j)))
    }

    fn normal_at(&self, _point: &Point3) -> Vec3 {
        Vec3::z()
    }

    fn material(&self) -> &Material {
        &self.material
    }

    fn check_geometry(&self) -> Option<String> {
        if !(self.floor_width.is_finite() && self.floor_width > 0.0) {
            return Some(format!("floor width {} must be positive", self.floor_width));
        }
        if !(self.tile_size.is_finite() && self.tile_size > 0.0) {
            return Some(format!("tile size {} must be positive", self.tile_size));
        }
        if self.floor_width / self.tile_size >= u64::MAX as f64 {
            return Some(format!(
                "floor of width {} has too many tiles of size {}",
                self.floor_width, self.tile_size
            ));
        }
        None
    }
}

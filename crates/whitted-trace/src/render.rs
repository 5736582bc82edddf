//! Parallel render pass over a pixel grid.

use rayon::prelude::*;
use whitted_math::Rgb;

use crate::scene::Scene;
use crate::settings::TraceSettings;
use crate::shade::shade;
use crate::Ray;

/// A rendered image, pixels stored row-major from the top-left.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height` colors, each channel in `[0, 1]`.
    pub pixels: Vec<Rgb>,
}

impl Frame {
    /// Color at column `x`, row `y`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize).copied()
    }

    /// Interleaved 8-bit RGB bytes. Channels are scaled by 255 and
    /// truncated.
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|c| [to_byte(c.x), to_byte(c.y), to_byte(c.z)])
            .collect()
    }
}

fn to_byte(channel: f64) -> u8 {
    // Saturating cast; NaN maps to 0
    (channel * 255.0) as u8
}

/// Shade every pixel of a `width` x `height` grid.
///
/// `ray_for_pixel(x, y)` supplies the primary ray for each pixel. Rows are
/// shaded in parallel; the scene is only read.
pub fn render<F>(
    scene: &Scene,
    settings: &TraceSettings,
    width: u32,
    height: u32,
    ray_for_pixel: F,
) -> Frame
where
    F: Fn(u32, u32) -> Ray + Sync,
{
    log::debug!(
        "rendering {}x{} with {} primitives, {} lights, recursion limit {}",
        width,
        height,
        scene.primitives().len(),
        scene.lights().len(),
        settings.recursion_limit
    );

    let pixels: Vec<Rgb> = (0..height)
        .into_par_iter()
        .flat_map_iter(|y| {
            let ray_for_pixel = &ray_for_pixel;
            (0..width).map(move |x| shade(&ray_for_pixel(x, y), scene, 0, settings))
        })
        .collect();

    Frame {
        width,
        height,
        pixels,
    }
}

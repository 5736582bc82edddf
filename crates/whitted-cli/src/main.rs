//! whitted CLI - render the demo scene to a PNG
//!
//! Wraps the tracer core with a pinhole camera, a built-in scene and image
//! output.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;

use whitted_math::{Point3, Vec3};
use whitted_trace::{render, TraceSettings};

mod camera;
mod demo;
mod logger;

use camera::Camera;
use logger::LogLevel;

const EYE: [f64; 3] = [100.0, 100.0, 50.0];
const FOV_Y_DEGREES: f64 = 80.0;

#[derive(Parser)]
#[command(name = "whitted")]
#[command(about = "Recursive Whitted-style ray tracer", long_about = None)]
struct Cli {
    /// Logging level
    #[arg(long, global = true, default_value = "info")]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the demo scene to a PNG file
    Render {
        /// TOML file with trace settings (recursion_limit, shadow_bias, bounce_bias)
        #[arg(short, long)]
        settings: Option<PathBuf>,
        /// Output image path
        #[arg(short, long, default_value = "whitted.png")]
        output: PathBuf,
        /// Image width in pixels
        #[arg(long, default_value_t = 768)]
        width: u32,
        /// Image height in pixels
        #[arg(long, default_value_t = 768)]
        height: u32,
        /// Override the settings file's recursion limit
        #[arg(short, long)]
        recursion_limit: Option<u32>,
        /// Turn the camera by this many rotation steps (positive is left)
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        yaw: i32,
        /// Tilt the camera by this many rotation steps (positive is up)
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        pitch: i32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_logger(cli.log_level);

    match cli.command {
        Commands::Render {
            settings,
            output,
            width,
            height,
            recursion_limit,
            yaw,
            pitch,
        } => {
            let mut settings = load_settings(settings.as_deref())?;
            if let Some(limit) = recursion_limit {
                settings.recursion_limit = limit;
            }
            settings.validate()?;
            render_demo(&settings, &output, width, height, yaw, pitch)?;
        }
    }

    Ok(())
}

fn load_settings(path: Option<&Path>) -> Result<TraceSettings> {
    let Some(path) = path else {
        return Ok(TraceSettings::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read settings from {}", path.display()))?;
    let settings = TraceSettings::from_toml_str(&text)
        .with_context(|| format!("invalid settings in {}", path.display()))?;
    Ok(settings)
}

fn render_demo(
    settings: &TraceSettings,
    output: &Path,
    width: u32,
    height: u32,
    yaw: i32,
    pitch: i32,
) -> Result<()> {
    if width == 0 || height == 0 {
        anyhow::bail!("image size must be non-zero, got {}x{}", width, height);
    }

    let scene = demo::demo_scene();
    scene.validate()?;

    let mut camera = Camera::look_at(Point3::from(EYE), Point3::origin(), Vec3::z(), FOV_Y_DEGREES)
        .context("camera view direction is degenerate")?;
    camera.yaw(yaw);
    camera.pitch(pitch);

    let start = Instant::now();
    let frame = render(&scene, settings, width, height, |x, y| {
        camera.ray_for_pixel(x, y, width, height)
    });
    log::info!("rendered {}x{} in {:.2?}", width, height, start.elapsed());

    let image = image::RgbImage::from_raw(width, height, frame.to_rgb8())
        .context("frame size does not match image dimensions")?;
    image
        .save(output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    println!("Wrote {}", output.display());

    Ok(())
}

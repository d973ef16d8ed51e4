//! Demo binary that renders an equirectangular sky panorama to a PNG.
//!
//! The upper hemisphere is the composited sky (gradient + celestial accents);
//! the lower hemisphere stands in for a flat wet ground plane so the
//! reflection compositor is exercised too. Every pixel is an independent
//! sample, rendered across a band of worker threads.
//!
//! Run with `cargo run -p welkin-demo -- --time-of-day 0.05 --rain 0.4`.

use std::path::PathBuf;

use clap::Parser;
use glam::{Vec2, Vec3};
use tracing::info;

use welkin_celestial::SkyCompositor;
use welkin_config::{CliArgs, WelkinConfig};
use welkin_env::{Dimension, Environment, SkyClock, TorchLight, ViewSample};
use welkin_reflection::apply_wet_reflection;
use welkin_sky::grade;

/// Welkin sky panorama renderer.
#[derive(Parser, Debug)]
#[command(name = "welkin", about = "Welkin sky panorama renderer")]
struct DemoArgs {
    #[command(flatten)]
    config_args: CliArgs,

    /// Output image width.
    #[arg(long, default_value_t = 1024)]
    width: u32,

    /// Output image height.
    #[arg(long, default_value_t = 512)]
    height: u32,

    /// Time of day in [0, 1): 0 midnight, 0.25 dawn, 0.5 noon.
    #[arg(long, default_value_t = 0.5)]
    time_of_day: f64,

    /// Rain intensity in [0, 1].
    #[arg(long, default_value_t = 0.0)]
    rain: f32,

    /// World dimension: overworld, nether, or end.
    #[arg(long, default_value = "overworld")]
    dimension: String,

    /// Render from underwater.
    #[arg(long)]
    underwater: bool,

    /// Animation clock sample in seconds.
    #[arg(long, default_value_t = 8.0)]
    time: f32,

    /// Worker threads.
    #[arg(long, default_value_t = 4)]
    threads: usize,

    /// Output PNG path.
    #[arg(long, default_value = "welkin.png")]
    output: PathBuf,
}

fn parse_dimension(name: &str) -> Dimension {
    match name {
        "nether" => Dimension::Nether,
        "end" => Dimension::End,
        _ => Dimension::Overworld,
    }
}

/// Stand-in for the host's fog collaborator.
fn fog_color_for(dimension: Dimension, day_factor: f32, underwater: bool) -> Vec3 {
    if underwater {
        return Vec3::new(0.05, 0.25, 0.35);
    }
    match dimension {
        Dimension::Overworld => {
            let daylight = day_factor.clamp(0.0, 1.0);
            Vec3::new(0.01, 0.01, 0.02).lerp(Vec3::new(0.65, 0.75, 0.85), daylight)
        }
        Dimension::Nether => Vec3::new(0.30, 0.10, 0.05),
        Dimension::End => Vec3::new(0.10, 0.05, 0.15),
    }
}

/// Map a panorama pixel to a unit view direction (y up).
fn panorama_dir(px: u32, py: u32, width: u32, height: u32) -> Vec3 {
    let phi = (px as f32 + 0.5) / width as f32 * std::f32::consts::TAU;
    let theta = (py as f32 + 0.5) / height as f32 * std::f32::consts::PI;
    Vec3::new(
        theta.sin() * phi.sin(),
        theta.cos(),
        -theta.sin() * phi.cos(),
    )
}

const EYE_HEIGHT: f32 = 1.6;
const RENDER_DISTANCE: f32 = 96.0;

fn render_pixel(
    compositor: &SkyCompositor,
    triad: &welkin_sky::SkyColorTriad,
    env: &Environment,
    dir: Vec3,
    time: f32,
) -> Vec3 {
    if dir.y >= 0.0 {
        return compositor.render(triad, env, dir, false, time);
    }

    // Ground plane sample: project the ray onto a floor below the camera.
    let distance = (EYE_HEIGHT / -dir.y).min(RENDER_DISTANCE);
    let world_pos = dir * distance - Vec3::new(0.0, EYE_HEIGHT, 0.0);
    let view = ViewSample {
        view_dir: dir,
        cam_distance: distance,
        render_distance: RENDER_DISTANCE,
        world_pos,
        tiled_chunk_pos: (world_pos / 16.0).floor(),
    };
    let torch = TorchLight {
        color: Vec3::from(compositor.config().lighting.overworld_torch),
        levels: Vec2::new(0.1, 0.9),
    };

    let mut ground = env.fog_color * 0.6 + Vec3::splat(0.12);
    let reflection =
        apply_wet_reflection(&mut ground, triad, env, &view, &torch, time, compositor);
    ground.lerp(reflection.truncate(), reflection.w)
}

fn main() {
    let args = DemoArgs::parse();

    // Resolve config directory
    let config_dir = args.config_args.config.clone().unwrap_or_else(|| {
        dirs::config_dir()
            .expect("Failed to resolve config directory")
            .join("welkin")
    });

    // Load or create config, then apply CLI overrides
    let mut config = WelkinConfig::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        WelkinConfig::default()
    });
    if let Err(e) = config.apply_cli_overrides(&args.config_args) {
        eprintln!("Bad CLI override: {e}");
        std::process::exit(2);
    }
    if let Err(e) = config.validate() {
        eprintln!("Invalid config: {e}");
        std::process::exit(2);
    }

    welkin_log::init_logging(Some(&config));

    let dimension = parse_dimension(&args.dimension);
    let mut clock = SkyClock::new(1200.0);
    clock.time_of_day = args.time_of_day.rem_euclid(1.0);
    let fog = fog_color_for(dimension, clock.day_factor(), args.underwater);
    let env = clock.environment(
        &config.celestial,
        dimension,
        args.rain,
        args.underwater,
        fog,
    );

    let grading = config.grading.clone();
    let compositor = SkyCompositor::new(config);
    let triad = compositor.resolve_triad(&env);
    info!(
        "Rendering {}x{} panorama: dimension {:?}, day factor {:.2}, rain {:.2}",
        args.width, args.height, dimension, env.day_factor, env.rain_factor
    );

    let width = args.width;
    let height = args.height;
    let threads = args.threads.max(1).min(height as usize);
    let start = std::time::Instant::now();

    // One row band per worker; every pixel is an independent pure sample.
    let mut rows: Vec<Vec<u8>> = Vec::with_capacity(height as usize);
    std::thread::scope(|scope| {
        let mut handles = Vec::with_capacity(threads);
        for band in 0..threads {
            let compositor = &compositor;
            let triad = &triad;
            let env = &env;
            let grading = &grading;
            let y_start = (band * height as usize) / threads;
            let y_end = ((band + 1) * height as usize) / threads;
            handles.push(scope.spawn(move || {
                let mut band_rows = Vec::with_capacity(y_end - y_start);
                for py in y_start..y_end {
                    let mut row = Vec::with_capacity(width as usize * 3);
                    for px in 0..width {
                        let dir = panorama_dir(px, py as u32, width, height);
                        let hdr = render_pixel(compositor, triad, env, dir, args.time);
                        let graded = grade(hdr, grading);
                        for channel in [graded.x, graded.y, graded.z] {
                            row.push((channel.clamp(0.0, 1.0) * 255.0) as u8);
                        }
                    }
                    band_rows.push(row);
                }
                band_rows
            }));
        }
        for handle in handles {
            rows.extend(handle.join().expect("render worker panicked"));
        }
    });

    let mut pixels = Vec::with_capacity((width * height * 3) as usize);
    for row in rows {
        pixels.extend(row);
    }
    let image = image::RgbImage::from_raw(width, height, pixels)
        .expect("pixel buffer size mismatch");
    if let Err(e) = image.save(&args.output) {
        eprintln!("Failed to write {}: {e}", args.output.display());
        std::process::exit(1);
    }

    info!(
        "Wrote {} in {:.2}s",
        args.output.display(),
        start.elapsed().as_secs_f32()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panorama_dirs_are_unit_length() {
        for py in [0, 128, 255] {
            for px in [0, 300, 511] {
                let dir = panorama_dir(px, py, 512, 256);
                assert!(
                    (dir.length() - 1.0).abs() < 1e-5,
                    "Non-unit panorama dir at ({px}, {py}): {dir}"
                );
            }
        }
    }

    #[test]
    fn test_panorama_top_row_points_up() {
        let dir = panorama_dir(0, 0, 512, 256);
        assert!(dir.y > 0.99, "Top row should look at the zenith, got {dir}");
    }

    #[test]
    fn test_dimension_parsing() {
        assert_eq!(parse_dimension("end"), Dimension::End);
        assert_eq!(parse_dimension("nether"), Dimension::Nether);
        assert_eq!(parse_dimension("overworld"), Dimension::Overworld);
        assert_eq!(parse_dimension("anything"), Dimension::Overworld);
    }

    #[test]
    fn test_render_pixel_covers_both_hemispheres() {
        let compositor = SkyCompositor::new(WelkinConfig::default());
        let mut clock = SkyClock::new(1200.0);
        clock.time_of_day = 0.5;
        let fog = fog_color_for(Dimension::Overworld, clock.day_factor(), false);
        let celestial = compositor.config().celestial.clone();
        let env = clock.environment(&celestial, Dimension::Overworld, 0.5, false, fog);
        let triad = compositor.resolve_triad(&env);
        for dir in [
            Vec3::new(0.3, 0.8, 0.52).normalize(),
            Vec3::new(0.3, -0.8, 0.52).normalize(),
        ] {
            let color = render_pixel(&compositor, &triad, &env, dir, 8.0);
            assert!(
                color.is_finite() && color.min_element() >= 0.0,
                "Bad pixel {color} at {dir}"
            );
        }
    }
}

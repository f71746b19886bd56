//! This example runs a lasso selection over a synthetic point cloud without a window.
//!
//! The selection runs once on the calling thread and once on the selection worker:
//!
//! ```sh
//! cargo run --example headless -- --points 1000000 --radius 200
//! ```
//!
//! To view more options, run with `--help`:
//!
//! ```sh
//! cargo run --example headless -- --help
//! ```

use std::{sync::Arc, time::Instant};

use clap::Parser;
use colored::Colorize;
use glam::*;

use lasso_select as ls;

/// The command line arguments.
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "\
    Select points of a synthetic point cloud with a circular lasso.\n\
    \n\
    The cloud is a cube of points centered at the origin, viewed from +Z.\n\
    "
)]
struct Args {
    /// Number of points to generate.
    #[arg(short, long, default_value_t = 500_000)]
    points: usize,

    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Radius of the lasso circle in pixels.
    #[arg(short, long, default_value_t = 150.0)]
    radius: f32,

    /// Number of pointer samples along the lasso circle.
    #[arg(short, long, default_value_t = 256)]
    samples: usize,
}

fn main() -> Result<(), ls::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let size = uvec2(args.width, args.height);

    log::debug!("Creating point cloud");
    let positions = cube_cloud(args.points);

    log::debug!("Creating camera");
    let mut camera = ls::Camera::new(0.1..1e4, 60f32.to_radians());
    camera.look_at(vec3(0.0, 0.0, 3.0), Vec3::ZERO);
    let transform = ls::CameraTransform::new(&camera, size);

    log::debug!("Capturing lasso");
    let mut lasso: ls::LassoCapture = ls::LassoCapture::default();
    let center = size.as_vec2() / 2.0;
    let now = Instant::now();
    for i in 0..args.samples {
        let angle = i as f32 / args.samples as f32 * std::f32::consts::TAU;
        let pos = center + Vec2::from_angle(angle) * args.radius;
        if i == 0 {
            lasso.pointer_down(pos, ls::PointerButtons::PRIMARY);
        } else {
            lasso.pointer_move(pos);
        }
    }

    let Some(ls::LassoEvent::Completed(polygon)) = lasso.pointer_up(now) else {
        println!("{}", "Lasso too short, nothing selected".yellow());
        return Ok(());
    };

    println!(
        "Lasso polygon has {} vertices from {} samples",
        polygon.len().to_string().cyan(),
        args.samples
    );

    let mut selector = ls::Selector::new();
    let result = selector.select(&positions, &transform, &polygon);
    println!(
        "{} selected {} of {} points in {} ms",
        "[sync]".green().bold(),
        result.selected_count.to_string().cyan(),
        args.points,
        format!("{:.3}", result.elapsed_ms()).cyan(),
    );

    let mut colors = vec![0.8; positions.len()];
    let base_colors = colors.clone();
    ls::SelectionHighlight::default().apply(&mut colors, &base_colors, &result.mask);

    let mut worker = ls::SelectionWorker::new()?;
    let mut latest = ls::LatestSelection::new();

    let positions: Arc<[f32]> = positions.into();
    let stale = worker.submit(ls::WorkerRequest::ProjectAndSelect {
        positions: positions.clone(),
        transform,
        polygon: ls::Polygon::new(polygon.vertices()[..3].to_vec()),
        screen_positions: Vec::new(),
    })?;
    latest.track(&stale);

    let pending = worker.submit(ls::WorkerRequest::ProjectAndSelect {
        positions,
        transform,
        polygon,
        screen_positions: selector.screen_positions().to_vec(),
    })?;
    latest.track(&pending);

    if latest.accept(stale.wait()?).is_none() {
        println!("{} superseded result discarded", "[worker]".green().bold());
    }

    if let Some(response) = latest.accept(pending.wait()?) {
        println!(
            "{} selected {} points in {} ms",
            "[worker]".green().bold(),
            response.selected_count.to_string().cyan(),
            format!("{:.3}", response.processing_time.as_secs_f64() * 1000.0).cyan(),
        );

        if response.mask != result.mask {
            println!("{}", "Worker and sync masks differ".red());
        }
    }

    Ok(())
}

/// Generate a cube of points in `[-1, 1]^3` on a regular lattice.
fn cube_cloud(count: usize) -> Vec<f32> {
    let side = (count as f32).cbrt().ceil().max(1.0) as usize;
    let step = if side > 1 { 2.0 / (side - 1) as f32 } else { 0.0 };

    (0..count)
        .flat_map(|i| {
            let (x, y, z) = (i % side, (i / side) % side, i / (side * side));
            [
                x as f32 * step - 1.0,
                y as f32 * step - 1.0,
                z as f32 * step - 1.0,
            ]
        })
        .collect()
}

extern crate nalgebra as na;

use clap::Parser;
use log::{error, info};
use na::Vector3;

use tracelib::config::RenderConfig;
use tracelib::output::save_png;
use tracelib::{render_frame, Camera, Canvas, Scene};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

fn run(args: &Args) -> tracelib::Result<()> {
    let mut config = match &args.config {
        Some(path) => {
            info!("loading scene from {}", path);
            RenderConfig::load(path)?
        }
        None => RenderConfig::default(),
    };
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(depth) = args.depth {
        config.recursion_depth = depth;
    }

    let canvas = Canvas::checked(config.width, config.height)?;
    let scene = Scene::from_manifest(&config.scene)?;

    let camera_config = &config.camera;
    let mut camera = Camera::new(
        Vector3::from(camera_config.position),
        camera_config.projection_plane_distance,
        camera_config.viewport_height * canvas.aspect_ratio(),
        camera_config.viewport_height,
    );
    camera.set_orientation(
        camera_config.yaw.to_radians(),
        camera_config.pitch.to_radians(),
    );
    info!(
        "camera at {:?}, yaw {:.1}°, pitch {:.1}°",
        camera.position.as_slice(),
        camera.yaw().to_degrees(),
        camera.pitch().to_degrees()
    );

    let frame = render_frame(&camera, &scene, canvas, config.recursion_depth);
    save_png(&frame, &args.output)
}

fn main() {
    let args = Args::parse();
    init_logger(args.log_level.clone().into());

    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

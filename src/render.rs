use log::info;
use std::time::Instant;

use crate::camera::Camera;
use crate::canvas::{Canvas, Frame};
use crate::engine::{trace_ray, warn_degenerate_lights, EPSILON};
use crate::scene::Scene;

/// Renders one frame of `scene` as seen from `camera`, one primary ray per
/// pixel, following up to `depth` mirror bounces.
///
/// Pixels are resolved one after another; the scene is only read.
pub fn render_frame(camera: &Camera, scene: &Scene, canvas: Canvas, depth: u32) -> Frame {
    warn_degenerate_lights(scene);
    let start = Instant::now();

    let mut frame = Frame::new(canvas, scene.background);
    for (x, y) in canvas.coordinates() {
        let direction = camera.pixel_to_world_ray(x, y, canvas.width, canvas.height);
        let color = trace_ray(scene, &camera.position, &direction, EPSILON, f32::INFINITY, depth);
        frame.set(x, y, color);
    }

    info!(
        "rendered {}x{} frame ({} objects, {} lights) in {:.2?}",
        canvas.width,
        canvas.height,
        scene.objects.len(),
        scene.lights.len(),
        start.elapsed()
    );
    frame
}

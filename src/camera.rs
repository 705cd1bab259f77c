//! Pinhole camera mapping canvas pixels to ray directions.
//!
//! Camera space has x to the right, y up and z forward. The viewport is a
//! `viewport_width` by `viewport_height` rectangle at distance
//! `projection_plane_distance` along z, and every pixel on the canvas maps
//! to one point on it.

use na::Vector3;
use std::f32::consts::FRAC_PI_2;

use crate::canvas::Canvas;
use crate::vector::normalize_or_zero;

/// Pitch stays this far from straight up/down so that forward never lines
/// up with the world up vector.
const PITCH_LIMIT: f32 = 89.0 * std::f32::consts::PI / 180.0;

fn world_up() -> Vector3<f32> {
    Vector3::new(0.0, 1.0, 0.0)
}

#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vector3<f32>,
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub projection_plane_distance: f32,
    yaw: f32,
    pitch: f32,
    forward: Vector3<f32>,
    right: Vector3<f32>,
    up: Vector3<f32>,
}

impl Camera {
    /// A camera looking down +z (yaw 90°, pitch 0).
    pub fn new(
        position: Vector3<f32>,
        projection_plane_distance: f32,
        viewport_width: f32,
        viewport_height: f32,
    ) -> Camera {
        let mut camera = Camera {
            position,
            viewport_width,
            viewport_height,
            projection_plane_distance,
            yaw: FRAC_PI_2,
            pitch: 0.0,
            forward: Vector3::zeros(),
            right: Vector3::zeros(),
            up: Vector3::zeros(),
        };
        camera.update_basis();
        camera
    }

    /// A camera whose viewport is one unit high and as wide as the canvas
    /// aspect ratio requires.
    pub fn for_canvas(
        position: Vector3<f32>,
        projection_plane_distance: f32,
        canvas: &Canvas,
    ) -> Camera {
        Camera::new(position, projection_plane_distance, canvas.aspect_ratio(), 1.0)
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn forward(&self) -> Vector3<f32> {
        self.forward
    }

    pub fn right(&self) -> Vector3<f32> {
        self.right
    }

    pub fn up(&self) -> Vector3<f32> {
        self.up
    }

    /// Points the camera; angles are in radians and pitch is clamped to ±89°.
    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch.max(-PITCH_LIMIT).min(PITCH_LIMIT);
        self.update_basis();
    }

    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.set_orientation(self.yaw + delta_yaw, self.pitch + delta_pitch);
    }

    fn update_basis(&mut self) {
        self.forward = normalize_or_zero(&Vector3::new(
            self.yaw.cos() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.sin() * self.pitch.cos(),
        ));
        self.right = normalize_or_zero(&world_up().cross(&self.forward));
        self.up = normalize_or_zero(&self.forward.cross(&self.right));
    }

    /// Camera-space direction through the pixel `(x, y)`, measured from the
    /// canvas center with y up. Not normalized.
    pub fn pixel_to_ray(
        &self,
        x: i32,
        y: i32,
        canvas_width: u32,
        canvas_height: u32,
    ) -> Vector3<f32> {
        if canvas_width == 0 || canvas_height == 0 {
            return Vector3::zeros();
        }
        Vector3::new(
            x as f32 * self.viewport_width / canvas_width as f32,
            y as f32 * self.viewport_height / canvas_height as f32,
            self.projection_plane_distance,
        )
    }

    /// Same as `pixel_to_ray`, rotated into world space by the camera's
    /// orientation.
    pub fn pixel_to_world_ray(
        &self,
        x: i32,
        y: i32,
        canvas_width: u32,
        canvas_height: u32,
    ) -> Vector3<f32> {
        let local = self.pixel_to_ray(x, y, canvas_width, canvas_height);
        self.right * local.x + self.up * local.y + self.forward * local.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn close(a: &Vector3<f32>, b: &Vector3<f32>) -> bool {
        (a - b).norm() < EPSILON
    }

    #[test]
    fn center_pixel_points_at_viewport_center() {
        let camera = Camera::new(Vector3::zeros(), 1.0, 1.0, 1.0);
        assert_eq!(camera.pixel_to_ray(0, 0, 100, 100), Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn corner_pixels_span_viewport() {
        let camera = Camera::new(Vector3::zeros(), 2.0, 4.0, 3.0);
        let ray = camera.pixel_to_ray(-50, 30, 100, 60);
        assert!(close(&ray, &Vector3::new(-2.0, 1.5, 2.0)));
    }

    #[test]
    fn default_orientation_matches_camera_space() {
        let camera = Camera::new(Vector3::zeros(), 1.0, 1.0, 1.0);
        assert!(close(&camera.forward(), &Vector3::new(0.0, 0.0, 1.0)));
        assert!(close(&camera.right(), &Vector3::new(1.0, 0.0, 0.0)));
        assert!(close(&camera.up(), &Vector3::new(0.0, 1.0, 0.0)));
        let local = camera.pixel_to_ray(10, -20, 100, 100);
        let world = camera.pixel_to_world_ray(10, -20, 100, 100);
        assert!(close(&local, &world));
    }

    #[test]
    fn basis_follows_yaw() {
        let mut camera = Camera::new(Vector3::zeros(), 1.0, 1.0, 1.0);
        camera.set_orientation(0.0, 0.0);
        assert!(close(&camera.forward(), &Vector3::new(1.0, 0.0, 0.0)));
        assert!(close(&camera.right(), &Vector3::new(0.0, 0.0, -1.0)));
        camera.rotate(FRAC_PI_2, 0.0);
        assert!(close(&camera.forward(), &Vector3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn extreme_pitch_is_clamped() {
        let mut camera = Camera::new(Vector3::zeros(), 1.0, 1.0, 1.0);
        camera.set_orientation(FRAC_PI_2, 10.0);
        assert!((camera.pitch() - PITCH_LIMIT).abs() < EPSILON);
        for v in &[camera.forward(), camera.right(), camera.up()] {
            assert!((v.norm() - 1.0).abs() < EPSILON);
        }
        assert!(camera.forward().dot(&camera.right()).abs() < EPSILON);
        assert!(camera.forward().dot(&camera.up()).abs() < EPSILON);
    }

    #[test]
    fn aspect_ratio_sets_viewport_width() {
        let camera = Camera::for_canvas(Vector3::zeros(), 1.0, &Canvas::new(800, 400));
        assert_eq!(camera.viewport_width, 2.0);
        assert_eq!(camera.viewport_height, 1.0);
    }
}

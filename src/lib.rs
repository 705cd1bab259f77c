//! A Whitted-style ray tracer for scenes of spheres.
//!
//! One ray per pixel is cast from the camera through a viewport, shaded
//! with ambient, diffuse and Phong specular light from ambient, point and
//! directional sources, tested for shadows, and reflected recursively up to
//! a fixed depth.

extern crate image;
extern crate nalgebra as na;

pub mod camera;
pub mod canvas;
pub mod collection;
pub mod color;
pub mod config;
pub mod engine;
pub mod error;
pub mod light;
pub mod object;
pub mod output;
pub mod render;
pub mod scene;
pub mod vector;

pub use camera::Camera;
pub use canvas::{Canvas, Frame};
pub use color::Color;
pub use config::RenderConfig;
pub use engine::{closest_intersection, compute_lighting, trace_ray};
pub use error::{Error, Result};
pub use light::Light;
pub use object::{Object, Sphere};
pub use render::render_frame;
pub use scene::Scene;

//! Render settings and scene manifest, read from TOML.
//!
//! ```toml
//! width = 640
//! height = 480
//! recursion_depth = 3
//!
//! [camera]
//! position = [0.0, 0.0, 0.0]
//! yaw = 90.0
//!
//! [scene]
//! background = [0.0, 0.0, 0.0]
//!
//! [[scene.spheres]]
//! center = [0.0, -1.0, 3.0]
//! radius = 1.0
//! color = [255.0, 0.0, 0.0]
//! specular = 500
//! reflectivity = 0.2
//!
//! [[scene.lights]]
//! type = "point"
//! position = [2.0, 1.0, 0.0]
//! intensity = 0.6
//! ```

use na::Vector3;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::color::Color;
use crate::engine::DEFAULT_RECURSION_DEPTH;
use crate::error::Result;
use crate::light::Light;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub recursion_depth: u32,
    pub camera: CameraConfig,
    pub scene: SceneManifest,
}

impl Default for RenderConfig {
    fn default() -> RenderConfig {
        RenderConfig {
            width: 640,
            height: 480,
            recursion_depth: DEFAULT_RECURSION_DEPTH,
            camera: CameraConfig::default(),
            scene: SceneManifest::default(),
        }
    }
}

impl RenderConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<RenderConfig> {
        let text = fs::read_to_string(path)?;
        RenderConfig::parse(&text)
    }

    pub fn parse(text: &str) -> Result<RenderConfig> {
        Ok(toml::from_str(text)?)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub projection_plane_distance: f32,
    /// Viewport height in world units; the width follows the canvas aspect.
    pub viewport_height: f32,
    /// Degrees; 90 looks down +z.
    pub yaw: f32,
    /// Degrees, clamped to ±89.
    pub pitch: f32,
}

impl Default for CameraConfig {
    fn default() -> CameraConfig {
        CameraConfig {
            position: [0.0, 0.0, 0.0],
            projection_plane_distance: 1.0,
            viewport_height: 1.0,
            yaw: 90.0,
            pitch: 0.0,
        }
    }
}

/// The spheres and lights a scene is built from.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneManifest {
    #[serde(default)]
    pub background: Color,
    #[serde(default)]
    pub spheres: Vec<SphereSpec>,
    #[serde(default)]
    pub lights: Vec<LightSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SphereSpec {
    pub center: [f32; 3],
    pub radius: f32,
    pub color: Color,
    #[serde(default)]
    pub specular: u32,
    #[serde(default)]
    pub reflectivity: f32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LightSpec {
    Ambient { intensity: f32 },
    Point { position: [f32; 3], intensity: f32 },
    Directional { direction: [f32; 3], intensity: f32 },
}

impl From<&LightSpec> for Light {
    fn from(spec: &LightSpec) -> Light {
        match *spec {
            LightSpec::Ambient { intensity } => Light::ambient(intensity),
            LightSpec::Point {
                position,
                intensity,
            } => Light::point(Vector3::from(position), intensity),
            LightSpec::Directional {
                direction,
                intensity,
            } => Light::directional(Vector3::from(direction), intensity),
        }
    }
}

impl Default for SceneManifest {
    /// Three coloured spheres resting on a huge ground sphere.
    fn default() -> SceneManifest {
        let sphere = |center: [f32; 3], radius, color: [f32; 3], specular, reflectivity| {
            SphereSpec {
                center,
                radius,
                color: Color::from(color),
                specular,
                reflectivity,
            }
        };
        SceneManifest {
            background: Color::BLACK,
            spheres: vec![
                sphere([0.0, -1.0, 3.0], 1.0, [255.0, 0.0, 0.0], 500, 0.2),
                sphere([-2.0, 0.0, 4.0], 1.0, [0.0, 255.0, 0.0], 10, 0.4),
                sphere([2.0, 0.0, 4.0], 1.0, [0.0, 0.0, 255.0], 500, 0.3),
                sphere([0.0, -5001.0, 0.0], 5000.0, [255.0, 255.0, 0.0], 1000, 0.5),
            ],
            lights: vec![
                LightSpec::Ambient { intensity: 0.2 },
                LightSpec::Point {
                    position: [2.0, 1.0, 0.0],
                    intensity: 0.6,
                },
                LightSpec::Directional {
                    direction: [1.0, 4.0, 4.0],
                    intensity: 0.2,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn empty_file_uses_defaults() {
        let config = RenderConfig::parse("").unwrap();
        assert_eq!((config.width, config.height), (640, 480));
        assert_eq!(config.recursion_depth, DEFAULT_RECURSION_DEPTH);
        assert_eq!(config.scene.spheres.len(), 4);
        assert_eq!(config.scene.lights.len(), 3);
        assert_eq!(config.camera.yaw, 90.0);
    }

    #[test]
    fn parses_spheres_and_tagged_lights() {
        let config = RenderConfig::parse(
            r#"
            width = 200
            height = 100

            [camera]
            position = [0.0, 1.0, -2.0]
            pitch = -10.0

            [scene]
            background = [10.0, 20.0, 30.0]

            [[scene.spheres]]
            center = [0.0, 0.0, 4.0]
            radius = 1.0
            color = [255.0, 0.0, 0.0]

            [[scene.lights]]
            type = "ambient"
            intensity = 0.2

            [[scene.lights]]
            type = "directional"
            direction = [1.0, 4.0, 4.0]
            intensity = 0.3
            "#,
        )
        .unwrap();
        assert_eq!(config.width, 200);
        assert_eq!(config.camera.position, [0.0, 1.0, -2.0]);
        assert_eq!(config.camera.projection_plane_distance, 1.0);
        assert_eq!(config.scene.background, Color::new(10.0, 20.0, 30.0));
        assert_eq!(config.scene.spheres.len(), 1);
        assert_eq!(config.scene.spheres[0].specular, 0);
        assert_eq!(
            Light::from(&config.scene.lights[1]),
            Light::directional(Vector3::new(1.0, 4.0, 4.0), 0.3)
        );
    }

    #[test]
    fn bundled_mirrors_scene_parses() {
        let config = RenderConfig::parse(include_str!("../scenes/mirrors.toml")).unwrap();
        assert_eq!(config.recursion_depth, 5);
        assert_eq!(config.scene.spheres.len(), 4);
        assert_eq!(config.scene.spheres[2].reflectivity, 0.0);
        assert_eq!(config.scene.lights.len(), 3);
    }

    #[test]
    fn unknown_light_type_is_rejected() {
        let result = RenderConfig::parse(
            r#"
            [scene]
            [[scene.lights]]
            type = "spot"
            intensity = 1.0
            "#,
        );
        match result {
            Err(Error::Config(_)) => {}
            other => panic!("expected config error, got {:?}", other),
        }
    }
}

use log::debug;
use na::Vector3;

use crate::color::Color;
use crate::config::SceneManifest;
use crate::error::{Error, Result};
use crate::light::{light_list, Light, LightList};
use crate::object::{object_list, Object, ObjectList, Sphere};

/// Everything a frame is rendered from. Read-only while rendering.
#[derive(Debug, Clone)]
pub struct Scene {
    pub objects: ObjectList,
    pub lights: LightList,
    /// Colour of rays that hit nothing.
    pub background: Color,
}

impl Scene {
    pub fn new(background: Color) -> Scene {
        Scene {
            objects: object_list(),
            lights: light_list(),
            background,
        }
    }

    pub fn add_object<O: Into<Object>>(&mut self, object: O) -> Result<()> {
        self.objects.add(object.into())
    }

    pub fn add_light(&mut self, light: Light) -> Result<()> {
        self.lights.add(light)
    }

    /// Builds a scene from a manifest, stopping at the first sphere that
    /// breaks the data model or the first failed insertion.
    pub fn from_manifest(manifest: &SceneManifest) -> Result<Scene> {
        let mut scene = Scene::new(manifest.background);
        for (index, spec) in manifest.spheres.iter().enumerate() {
            if !(spec.radius > 0.0) {
                return Err(Error::InvalidSphere {
                    index,
                    reason: format!("radius must be positive, got {}", spec.radius),
                });
            }
            if !(0.0..=1.0).contains(&spec.reflectivity) {
                return Err(Error::InvalidSphere {
                    index,
                    reason: format!("reflectivity must be in [0, 1], got {}", spec.reflectivity),
                });
            }
            scene.add_object(Sphere::new(
                Vector3::from(spec.center),
                spec.radius,
                spec.color,
                spec.specular,
                spec.reflectivity,
            ))?;
        }
        for spec in &manifest.lights {
            scene.add_light(Light::from(spec))?;
        }
        debug!(
            "built scene with {} objects and {} lights",
            scene.objects.len(),
            scene.lights.len()
        );
        Ok(scene)
    }

    /// Drops all objects and lights. Safe to call more than once.
    pub fn clear(&mut self) {
        self.objects.free();
        self.lights.free();
    }
}

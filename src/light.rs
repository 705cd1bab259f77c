use na::Vector3;

use crate::collection::Collection;

/// Storage reserved by the first insertion into a light list.
pub const INITIAL_LIGHT_CAPACITY: usize = 4;

pub type LightList = Collection<Light>;

pub fn light_list() -> LightList {
    Collection::new("light", INITIAL_LIGHT_CAPACITY)
}

/// A light source.
#[derive(Debug, Clone, PartialEq)]
pub enum Light {
    /// Uniform light reaching every surface; never shadowed.
    Ambient { intensity: f32 },
    /// Light radiating from a point in world space.
    Point {
        position: Vector3<f32>,
        intensity: f32,
    },
    /// Parallel light. `direction` points from surfaces towards the light
    /// and is normalized at use, not here.
    Directional {
        direction: Vector3<f32>,
        intensity: f32,
    },
}

impl Light {
    pub fn ambient(intensity: f32) -> Light {
        Light::Ambient { intensity }
    }

    pub fn point(position: Vector3<f32>, intensity: f32) -> Light {
        Light::Point {
            position,
            intensity,
        }
    }

    pub fn directional(direction: Vector3<f32>, intensity: f32) -> Light {
        Light::Directional {
            direction,
            intensity,
        }
    }

    pub fn intensity(&self) -> f32 {
        match *self {
            Light::Ambient { intensity }
            | Light::Point { intensity, .. }
            | Light::Directional { intensity, .. } => intensity,
        }
    }

    /// Unnormalized vector from `point` towards this light together with the
    /// furthest parameter a shadow ray has to check. `None` for ambient light.
    pub fn towards(&self, point: &Vector3<f32>) -> Option<(Vector3<f32>, f32)> {
        match self {
            Light::Ambient { .. } => None,
            Light::Point { position, .. } => {
                let to_light = position - point;
                let distance = to_light.norm();
                Some((to_light, distance))
            }
            Light::Directional { direction, .. } => Some((*direction, f32::INFINITY)),
        }
    }
}

//! Ray/scene intersection, shading and recursive reflection.

use log::warn;
use na::Vector3;

use crate::color::Color;
use crate::light::Light;
use crate::object::{Object, ObjectList};
use crate::scene::Scene;
use crate::vector::{normalize_or_zero, reflect};

/// Lower bound on `t` for rays leaving a surface, so that a shadow or
/// reflection ray does not hit the surface it starts on.
pub const EPSILON: f32 = 0.05;

/// Mirror bounces followed after the primary hit.
pub const DEFAULT_RECURSION_DEPTH: u32 = 3;

/// The nearest object along a ray and the parameter at which it is hit.
#[derive(Debug, Clone, Copy)]
pub struct ClosestHit<'a> {
    pub object: &'a Object,
    pub t: f32,
}

/// Scans every object for the smallest root in the open interval
/// `(t_min, t_max)`. On ties the object earlier in the list wins.
pub fn closest_intersection<'a>(
    objects: &'a ObjectList,
    origin: &Vector3<f32>,
    direction: &Vector3<f32>,
    t_min: f32,
    t_max: f32,
) -> Option<ClosestHit<'a>> {
    let mut closest: Option<ClosestHit<'a>> = None;
    for object in objects {
        let roots = match object.intersect(origin, direction) {
            Some(roots) => roots,
            None => continue,
        };
        for &t in &[roots.near, roots.far] {
            let in_range = t > t_min && t < t_max;
            let closer = closest.map_or(true, |hit| t < hit.t);
            if in_range && closer {
                closest = Some(ClosestHit { object, t });
            }
        }
    }
    closest
}

/// True when something lies between `point` and `t_max` along `direction`.
fn in_shadow(
    objects: &ObjectList,
    point: &Vector3<f32>,
    direction: &Vector3<f32>,
    t_max: f32,
) -> bool {
    closest_intersection(objects, point, direction, EPSILON, t_max).is_some()
}

/// Total light intensity reaching `point`, capped at 1.
///
/// `view` points from the surface back towards the viewer. Ambient lights
/// always contribute; point and directional lights contribute a diffuse and,
/// when `specular > 0`, a Phong term unless a shadow ray to them is blocked.
pub fn compute_lighting(
    scene: &Scene,
    point: &Vector3<f32>,
    normal: &Vector3<f32>,
    specular: u32,
    view: &Vector3<f32>,
) -> f32 {
    let view = normalize_or_zero(view);
    let mut intensity: f32 = 0.0;

    for light in &scene.lights {
        let (to_light, t_max) = match light.towards(point) {
            Some(towards) => towards,
            None => {
                intensity += light.intensity();
                continue;
            }
        };
        let light_direction = normalize_or_zero(&to_light);
        if light_direction == Vector3::zeros() {
            // light sits on the surface or has no direction
            continue;
        }
        if in_shadow(&scene.objects, point, &light_direction, t_max) {
            continue;
        }

        let n_dot_l = normal.dot(&light_direction);
        if n_dot_l > 0.0 {
            intensity += light.intensity() * n_dot_l;
        }

        if specular > 0 {
            let reflected = normalize_or_zero(&reflect(&light_direction, normal));
            let r_dot_v = reflected.dot(&view);
            if r_dot_v > 0.0 {
                intensity += light.intensity() * r_dot_v.powi(specular.min(i32::MAX as u32) as i32);
            }
        }
    }

    intensity.min(1.0)
}

/// Colour seen along a ray.
///
/// Rays that hit nothing take the background colour. Otherwise the hit is
/// shaded locally and, while `depth > 0` and the surface reflects, blended
/// with the colour of the mirrored ray traced at `depth - 1`.
pub fn trace_ray(
    scene: &Scene,
    origin: &Vector3<f32>,
    direction: &Vector3<f32>,
    t_min: f32,
    t_max: f32,
    depth: u32,
) -> Color {
    let direction = normalize_or_zero(direction);
    let hit = match closest_intersection(&scene.objects, origin, &direction, t_min, t_max) {
        Some(hit) => hit,
        None => return scene.background,
    };

    let point = origin + direction * hit.t;
    let normal = hit.object.surface_normal(&point);
    let view = -direction;
    let intensity = compute_lighting(scene, &point, &normal, hit.object.specular(), &view);
    let local_color = hit.object.color() * intensity;

    let reflectivity = hit.object.reflectivity();
    if depth == 0 || reflectivity <= 0.0 {
        return local_color;
    }

    let reflected_direction = reflect(&view, &normal);
    let reflected_color = trace_ray(
        scene,
        &point,
        &reflected_direction,
        EPSILON,
        f32::INFINITY,
        depth - 1,
    );
    local_color.blend(reflected_color, reflectivity)
}

/// Logs lights that can never contribute anything.
pub(crate) fn warn_degenerate_lights(scene: &Scene) {
    for (index, light) in scene.lights.iter().enumerate() {
        if let Light::Directional { direction, .. } = light {
            if normalize_or_zero(direction) == Vector3::zeros() {
                warn!("directional light #{} has no direction and will be ignored", index);
            }
        }
    }
}

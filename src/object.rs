use na::Vector3;

use crate::collection::Collection;
use crate::color::Color;
use crate::vector::{normalize_or_zero, NORMALIZE_EPSILON};

/// Storage reserved by the first insertion into an object list.
pub const INITIAL_OBJECT_CAPACITY: usize = 8;

/// The scene's objects, in insertion order.
pub type ObjectList = Collection<Object>;

pub fn object_list() -> ObjectList {
    Collection::new("object", INITIAL_OBJECT_CAPACITY)
}

/// Both parameters at which a ray crosses a sphere, with `near <= far`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionRoots {
    pub near: f32,
    pub far: f32,
}

/// A sphere, defined by its center, radius and surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    pub center: Vector3<f32>,
    pub radius: f32,
    pub color: Color,
    /// Phong exponent; 0 disables the highlight.
    pub specular: u32,
    /// Share of the final colour taken from the mirror ray, in [0, 1].
    pub reflectivity: f32,
}

impl Sphere {
    pub fn new(
        center: Vector3<f32>,
        radius: f32,
        color: Color,
        specular: u32,
        reflectivity: f32,
    ) -> Sphere {
        Sphere {
            center,
            radius,
            color,
            specular,
            reflectivity,
        }
    }

    /// Solves `a t² + b t + c = 0` for the ray `origin + t * direction`.
    ///
    /// `a` is computed from `direction`, so non-unit directions are fine.
    /// Returns `None` when the ray misses.
    pub fn intersect(
        &self,
        origin: &Vector3<f32>,
        direction: &Vector3<f32>,
    ) -> Option<IntersectionRoots> {
        let center_to_origin = origin - self.center;
        let a = direction.dot(direction);
        if a < NORMALIZE_EPSILON * NORMALIZE_EPSILON {
            return None;
        }
        let b = 2.0 * center_to_origin.dot(direction);
        let c = center_to_origin.norm_squared() - self.radius * self.radius;
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrt_discriminant = discriminant.sqrt();
        let t1 = (-b - sqrt_discriminant) / (2.0 * a);
        let t2 = (-b + sqrt_discriminant) / (2.0 * a);
        Some(IntersectionRoots {
            near: t1.min(t2),
            far: t1.max(t2),
        })
    }

    /// Outward unit normal at a point on the surface.
    pub fn surface_normal(&self, point: &Vector3<f32>) -> Vector3<f32> {
        normalize_or_zero(&(point - self.center))
    }
}

/// Every primitive the tracer knows how to draw.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    Sphere(Sphere),
}

impl Object {
    pub fn intersect(
        &self,
        origin: &Vector3<f32>,
        direction: &Vector3<f32>,
    ) -> Option<IntersectionRoots> {
        match self {
            Object::Sphere(sphere) => sphere.intersect(origin, direction),
        }
    }

    pub fn surface_normal(&self, point: &Vector3<f32>) -> Vector3<f32> {
        match self {
            Object::Sphere(sphere) => sphere.surface_normal(point),
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Object::Sphere(sphere) => sphere.color,
        }
    }

    pub fn specular(&self) -> u32 {
        match self {
            Object::Sphere(sphere) => sphere.specular,
        }
    }

    pub fn reflectivity(&self) -> f32 {
        match self {
            Object::Sphere(sphere) => sphere.reflectivity,
        }
    }
}

impl From<Sphere> for Object {
    fn from(sphere: Sphere) -> Object {
        Object::Sphere(sphere)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // let's be generous for now
    const EPSILON: f32 = 0.0001;

    fn sphere_at(x: f32, y: f32, z: f32, radius: f32) -> Sphere {
        Sphere::new(
            Vector3::new(x, y, z),
            radius,
            Color::new(255.0, 0.0, 0.0),
            0,
            0.0,
        )
    }

    /// Ray aimed at the center from outside: roots at distance ∓ radius.
    #[test]
    fn ray_intersects_sphere() {
        let sphere = sphere_at(0.0, 0.0, 4.0, 1.0);
        let roots = sphere
            .intersect(&Vector3::zeros(), &Vector3::new(0.0, 0.0, 1.0))
            .unwrap();
        assert!((roots.near - 3.0).abs() < EPSILON);
        assert!((roots.far - 5.0).abs() < EPSILON);
    }

    #[test]
    fn non_unit_direction_scales_roots() {
        let sphere = sphere_at(0.0, 0.0, 4.0, 1.0);
        let roots = sphere
            .intersect(&Vector3::zeros(), &Vector3::new(0.0, 0.0, 2.0))
            .unwrap();
        assert!((roots.near - 1.5).abs() < EPSILON);
        assert!((roots.far - 2.5).abs() < EPSILON);
    }

    #[test]
    fn ray_misses_sphere() {
        let sphere = sphere_at(0.0, 3.0, 4.0, 1.0);
        let direction = Vector3::new(0.0, 0.0, 1.0);
        assert!(sphere.intersect(&Vector3::zeros(), &direction).is_none());
        let beside = sphere_at(5.0, 0.0, 0.0, 1.0);
        assert!(beside.intersect(&Vector3::zeros(), &direction).is_none());
    }

    /// A sphere behind the origin yields two negative roots, never a miss.
    #[test]
    fn sphere_behind_origin_has_negative_roots() {
        let sphere = sphere_at(0.0, 0.0, -4.0, 1.0);
        let roots = sphere
            .intersect(&Vector3::zeros(), &Vector3::new(0.0, 0.0, 1.0))
            .unwrap();
        assert!((roots.near + 5.0).abs() < EPSILON);
        assert!((roots.far + 3.0).abs() < EPSILON);
    }

    #[test]
    fn very_short_direction_still_hits() {
        let sphere = sphere_at(0.0, 0.0, 4.0, 1.0);
        let roots = sphere
            .intersect(&Vector3::zeros(), &Vector3::new(0.0, 0.0, 1e-4))
            .unwrap();
        assert!((roots.near - 30000.0).abs() < 1.0);
        assert!((roots.far - 50000.0).abs() < 1.0);
    }

    #[test]
    fn roots_are_ordered_for_every_hit() {
        let sphere = sphere_at(0.5, -0.25, 3.0, 1.5);
        for &(dx, dy, dz) in &[
            (0.0, 0.0, 1.0),
            (0.1, 0.0, 1.0),
            (0.0, -0.3, -1.0),
            (0.2, -0.1, 0.9),
            (-1.0, 0.0, 0.0),
        ] {
            let direction = Vector3::new(dx, dy, dz);
            if let Some(roots) = sphere.intersect(&Vector3::zeros(), &direction) {
                assert!(roots.near <= roots.far);
            }
        }
        // origin inside the sphere: one root behind, one ahead
        let roots = sphere
            .intersect(&Vector3::new(0.5, -0.25, 3.0), &Vector3::new(0.0, 0.0, -1.0))
            .unwrap();
        assert!(roots.near < 0.0 && roots.far > 0.0);
    }

    #[test]
    fn zero_direction_never_hits() {
        let sphere = sphere_at(0.0, 0.0, 0.0, 1.0);
        assert!(sphere.intersect(&Vector3::zeros(), &Vector3::zeros()).is_none());
    }

    /// Trivial case of a surface normal calculation.
    #[test]
    fn sphere_surface_normal() {
        let sphere = Object::from(sphere_at(0.0, 0.0, 1.0, 0.1));
        let surface_normal = sphere.surface_normal(&Vector3::zeros());
        let expected_surface_normal = Vector3::<f32>::new(0.0, 0.0, -1.0);
        for i in 0..3 {
            assert!((surface_normal[i] - expected_surface_normal[i]).abs() < EPSILON);
        }
    }
}

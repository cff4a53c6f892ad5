pub mod description;
pub mod examples;

use crate::{
    aggregate::Group,
    color::{self, Rgb},
    error::SceneError,
    material::Material,
    math::vec::Vec3,
    ray::Ray,
    shape::{IntersectionResult, Sphere, Surface},
};

/// A point light, without attenuation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub color: Rgb,
}

/// Everything a shader needs to know about the world.
///
/// A scene is built once then only read while rendering.
#[derive(Debug, Clone)]
pub struct Scene {
    pub objects: Group,
    pub light: Light,
    pub background: Rgb,
}

impl Scene {
    /// An empty scene lit by `light`, on a black background
    pub fn new(light: Light) -> Self {
        Self {
            objects: Group::new(),
            light,
            background: color::BLACK,
        }
    }

    /// Insert an object in the scene
    pub fn insert_object<S: Into<Surface>>(&mut self, object: S) {
        self.objects.push(object)
    }

    pub fn insert_sphere(
        &mut self,
        material: Material,
        center: Vec3,
        radius: f64,
    ) -> Result<(), SceneError> {
        self.insert_object(Sphere::new(center, radius, material)?);
        Ok(())
    }

    /// Nearest hit of `ray` with any object of the scene
    pub fn hit(&self, ray: &Ray) -> IntersectionResult<'_> {
        self.objects.hit(ray)
    }
}

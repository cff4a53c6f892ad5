use crate::{color::Rgb, math::vec::Vec3, scene::Scene, shape::HitRecord};

use super::Shader;

/// Paints every hit with the material color, ignoring the light.
#[derive(Debug, Clone, Copy, Default)]
pub struct Flat;

impl Shader for Flat {
    fn shade(&self, hit: &HitRecord<'_>, _scene: &Scene, _eye: Vec3) -> Rgb {
        hit.surface.material.color
    }
}

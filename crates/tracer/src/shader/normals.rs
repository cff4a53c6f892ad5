use crate::{
    color::{Rgb, Vec3AsRgbExt},
    math::vec::Vec3,
    scene::Scene,
    shape::HitRecord,
};

use super::Shader;

/// Debug view, maps the unit normal from `[-1, 1]` to `[0, 1]` on each channel.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normals;

impl Shader for Normals {
    fn shade(&self, hit: &HitRecord<'_>, _scene: &Scene, _eye: Vec3) -> Rgb {
        ((hit.normal + Vec3::ONE) / 2.0).rgb()
    }
}

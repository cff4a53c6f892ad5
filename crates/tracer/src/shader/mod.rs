//! Local illumination models, evaluated once per hit point.

mod blinn_phong;
mod flat;
mod normals;

pub use blinn_phong::{BlinnPhong, BlinnPhongTerms};
pub use flat::Flat;
pub use normals::Normals;

use crate::{color::Rgb, math::vec::Vec3, scene::Scene, shape::HitRecord};

pub trait Shader: Send + Sync {
    /// Color seen from `eye` at the hit point.
    ///
    /// Lights are never occluded and no secondary ray is cast.
    fn shade(&self, hit: &HitRecord<'_>, scene: &Scene, eye: Vec3) -> Rgb;
}

//! Scenes written in TOML.
//!
//! ```toml
//! [camera]
//! eye = [0.0, 0.0, 0.0]
//! direction = [0.0, 0.0, 1.0]
//!
//! [light]
//! position = [0.0, -3.0, 2.0]
//! color = [255, 255, 255]
//!
//! [[spheres]]
//! center = [0.0, 0.0, 2.0]
//! radius = 0.5
//! material = { shininess = 1, color = [255, 0, 0] }
//! ```

use serde::Deserialize;

use crate::{
    camera::CameraDescription,
    error::SceneError,
    material::Material,
    math::vec::{Vec3, Vec3FromArrayExt},
};

use super::{Light, Scene};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneDescription {
    #[serde(default)]
    pub camera: CameraDescription,
    pub light: LightDescription,
    #[serde(default)]
    pub spheres: Vec<SphereDescription>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LightDescription {
    pub position: [f64; 3],
    #[serde(default = "white")]
    pub color: [u8; 3],
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SphereDescription {
    pub center: [f64; 3],
    pub radius: f64,
    pub material: MaterialDescription,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MaterialDescription {
    pub shininess: u32,
    pub color: [u8; 3],
}

fn white() -> [u8; 3] {
    [255, 255, 255]
}

impl SceneDescription {
    pub fn from_toml_str(s: &str) -> Result<Self, SceneError> {
        Ok(toml::from_str(s)?)
    }

    /// Build the scene, checking every sphere and material
    pub fn build_scene(&self) -> Result<Scene, SceneError> {
        let mut scene = Scene::new(Light {
            position: Vec3::from_f64_array(self.light.position),
            color: image::Rgb(self.light.color),
        });

        for sphere in &self.spheres {
            let MaterialDescription { shininess, color } = sphere.material;
            scene.insert_sphere(
                Material::new(shininess, image::Rgb(color))?,
                Vec3::from_f64_array(sphere.center),
                sphere.radius,
            )?;
        }

        Ok(scene)
    }
}

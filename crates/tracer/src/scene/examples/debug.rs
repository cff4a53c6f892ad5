use crate::{
    color,
    error::SceneError,
    material::Material,
    math::vec::Vec3,
    scene::{Light, Scene},
};

/// A single red sphere in front of the camera, lit from below.
pub struct DebugScene;

impl TryFrom<DebugScene> for Scene {
    type Error = SceneError;

    fn try_from(_: DebugScene) -> Result<Self, Self::Error> {
        let mut scene = Scene::new(Light {
            position: Vec3::new(0.0, -3.0, 2.0),
            color: color::WHITE,
        });

        scene.insert_sphere(
            Material::new(1, color::RED)?,
            Vec3::new(0.0, 0.0, 2.0),
            0.5,
        )?;
        Ok(scene)
    }
}

use crate::{
    aggregate::Group,
    color,
    error::SceneError,
    material::Material,
    math::vec::Vec3,
    scene::{Light, Scene},
    shape::Sphere,
};

/// A few spheres of various shininess, the small ones grouped together.
pub struct SpheresScene;

impl TryFrom<SpheresScene> for Scene {
    type Error = SceneError;

    fn try_from(_: SpheresScene) -> Result<Self, Self::Error> {
        let mut scene = Scene::new(Light {
            position: Vec3::new(-4.0, 5.0, -2.0),
            color: color::WHITE,
        });

        let matte_blue = Material::new(4, image::Rgb([40, 70, 200]))?;
        let shiny_red = Material::new(64, image::Rgb([200, 30, 30]))?;
        let glossy_green = Material::new(16, image::Rgb([30, 160, 60]))?;
        let ivory = Material::new(128, image::Rgb([230, 220, 190]))?;

        scene.insert_sphere(shiny_red, Vec3::new(0.0, 0.0, 4.0), 1.0)?;
        scene.insert_sphere(matte_blue, Vec3::new(-2.2, -0.3, 5.0), 0.7)?;
        scene.insert_sphere(glossy_green, Vec3::new(2.0, 0.5, 6.0), 1.2)?;

        // Large sphere acting as a floor
        scene.insert_sphere(
            Material::new(2, color::gray(90))?,
            Vec3::new(0.0, -1001.0, 5.0),
            1000.0,
        )?;

        let pearls = [-1.2, -0.4, 0.4, 1.2]
            .into_iter()
            .map(|x| Sphere::new(Vec3::new(x, -0.75, 2.5), 0.25, ivory))
            .collect::<Result<Group, _>>()?;
        scene.insert_object(pearls);

        Ok(scene)
    }
}

use crate::{
    color::{Rgb, RgbAsVec3Ext, Vec3AsRgbExt},
    math::vec::Vec3,
    scene::Scene,
    shape::HitRecord,
};

use super::Shader;

/// Blinn-Phong model with a single point light.
///
/// The ambient and diffuse colors are both the material color. The specular color is a
/// constant gray.
#[derive(Debug, Clone, Copy)]
pub struct BlinnPhong {
    pub specular: Vec3,
}

impl Default for BlinnPhong {
    fn default() -> Self {
        Self {
            specular: Vec3::splat(0.5),
        }
    }
}

/// Contribution of each term, with channels normalized to `[0, 1]` and not clamped yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlinnPhongTerms {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

impl BlinnPhongTerms {
    pub fn sum(&self) -> Vec3 {
        self.ambient + self.diffuse + self.specular
    }
}

impl BlinnPhong {
    pub fn terms(&self, hit: &HitRecord<'_>, scene: &Scene, eye: Vec3) -> BlinnPhongTerms {
        let material = &hit.surface.material;
        let light = scene.light.color.vec();
        let albedo = material.color.vec();
        let n = hit.normal;

        // A light or an eye sitting on the hit point gives a zero vector, and no contribution
        let l = (scene.light.position - hit.point).normalize_or_zero();
        let v = (eye - hit.point).normalize_or_zero();
        let h = (v + l).normalize_or_zero();

        let lambert = n.dot(l).max(0.0);
        let highlight = n.dot(h).max(0.0).powf(material.shininess() as f64);

        BlinnPhongTerms {
            ambient: albedo * light,
            diffuse: albedo * light * lambert,
            specular: self.specular * light * highlight,
        }
    }
}

impl Shader for BlinnPhong {
    fn shade(&self, hit: &HitRecord<'_>, scene: &Scene, eye: Vec3) -> Rgb {
        self.terms(hit, scene, eye).sum().rgb()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        color::{self, Rgb},
        material::Material,
        math::vec::Vec3,
        scene::{Light, Scene},
        shape::{HitRecord, Sphere},
    };

    use super::{BlinnPhong, Shader};

    fn scene_with_light(position: Vec3, color: Rgb) -> Scene {
        Scene::new(Light { position, color })
    }

    fn unit_sphere(material: Material) -> Sphere {
        Sphere::new(Vec3::ZERO, 1.0, material).unwrap()
    }

    fn hit_on_top(sphere: &Sphere) -> HitRecord<'_> {
        HitRecord {
            t: 1.0,
            point: Vec3::Y,
            normal: Vec3::Y,
            surface: sphere,
        }
    }

    #[test]
    fn head_on_light_saturates() {
        let sphere = unit_sphere(Material::new(1, image::Rgb([100, 50, 0])).unwrap());
        let hit = hit_on_top(&sphere);
        let scene = scene_with_light(Vec3::new(0.0, 5.0, 0.0), color::WHITE);

        let shader = BlinnPhong {
            specular: Vec3::splat(0.4),
        };

        let terms = shader.terms(&hit, &scene, Vec3::new(0.0, 3.0, 0.0));
        let albedo = Vec3::new(100. / 255., 50. / 255., 0.);
        assert!(terms.ambient.distance(albedo) < 1e-12);
        assert!(terms.diffuse.distance(albedo) < 1e-12);
        assert!(terms.specular.distance(Vec3::splat(0.4)) < 1e-12);

        // 2 * albedo + 0.4, red is clamped
        let c = shader.shade(&hit, &scene, Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(c, image::Rgb([255, 202, 102]));
    }

    #[test]
    fn light_below_the_surface_only_leaves_ambient() {
        let sphere = unit_sphere(Material::new(10, image::Rgb([60, 60, 60])).unwrap());
        let hit = hit_on_top(&sphere);
        let scene = scene_with_light(Vec3::new(0.0, -5.0, 0.0), color::WHITE);

        // The eye is also below, so n.h is negative
        let terms = BlinnPhong::default().terms(&hit, &scene, Vec3::new(0.0, -3.0, 0.0));
        assert_eq!(terms.diffuse, Vec3::ZERO);
        assert_eq!(terms.specular, Vec3::ZERO);
        assert_eq!(
            BlinnPhong::default().shade(&hit, &scene, Vec3::new(0.0, -3.0, 0.0)),
            image::Rgb([60, 60, 60])
        );
    }

    #[test]
    fn black_light_gives_black() {
        let sphere = unit_sphere(Material::new(3, color::WHITE).unwrap());
        let hit = hit_on_top(&sphere);
        let scene = scene_with_light(Vec3::new(1.0, 5.0, 0.0), color::BLACK);

        let c = BlinnPhong::default().shade(&hit, &scene, Vec3::new(0.0, 3.0, 1.0));
        assert_eq!(c, color::BLACK);
    }

    #[test]
    fn light_color_filters_each_channel() {
        let sphere = unit_sphere(Material::new(1, color::WHITE).unwrap());
        let hit = hit_on_top(&sphere);
        let scene = scene_with_light(Vec3::new(0.0, 5.0, 0.0), color::GREEN);

        let c = BlinnPhong::default().shade(&hit, &scene, Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(c, image::Rgb([0, 255, 0]));
    }

    #[test]
    fn diffuse_is_monotonic_in_n_dot_l() {
        let sphere = unit_sphere(Material::new(20, image::Rgb([120, 80, 200])).unwrap());
        let hit = hit_on_top(&sphere);
        let eye = Vec3::new(0.3, 4.0, 0.1);

        // Light moving from the horizon of the hit point to straight above it
        let mut previous: Option<(f64, Vec3)> = None;
        for step in 0..=90 {
            let angle = (step as f64).to_radians();
            let position = Vec3::Y + 5.0 * Vec3::new(angle.cos(), angle.sin(), 0.0);
            let scene = scene_with_light(position, color::WHITE);

            let n_dot_l = hit.normal.dot((position - hit.point).normalize());
            let diffuse = BlinnPhong::default().terms(&hit, &scene, eye).diffuse;

            if let Some((previous_n_dot_l, previous_diffuse)) = previous {
                assert!(n_dot_l >= previous_n_dot_l);
                assert!(diffuse.cmpge(previous_diffuse).all(), "{diffuse} < {previous_diffuse}");
            }
            previous = Some((n_dot_l, diffuse));
        }
    }

    #[test]
    fn higher_shininess_narrows_the_highlight() {
        let dull = unit_sphere(Material::new(1, color::BLACK).unwrap());
        let shiny = unit_sphere(Material::new(64, color::BLACK).unwrap());
        let scene = scene_with_light(Vec3::new(3.0, 5.0, 0.0), color::WHITE);
        let shader = BlinnPhong::default();

        // Mirror configuration: h is exactly the normal, the highlight is at full strength
        let eye = Vec3::new(-3.0, 5.0, 0.0);
        for sphere in [&dull, &shiny] {
            let terms = shader.terms(&hit_on_top(sphere), &scene, eye);
            assert!(terms.specular.distance(Vec3::splat(0.5)) < 1e-12);
        }

        let eye = Vec3::new(0.0, 1.0, 5.0);
        let dull_terms = shader.terms(&hit_on_top(&dull), &scene, eye);
        let shiny_terms = shader.terms(&hit_on_top(&shiny), &scene, eye);
        assert!(shiny_terms.specular.x < dull_terms.specular.x);
        assert!(shiny_terms.specular.x > 0.0);
    }

    #[test]
    fn huge_shininess_keeps_a_pinpoint_highlight() {
        let sphere = unit_sphere(Material::new(3_000_000_000, color::BLACK).unwrap());
        let hit = hit_on_top(&sphere);
        let scene = scene_with_light(Vec3::new(3.0, 5.0, 0.0), color::WHITE);

        let c = BlinnPhong::default().shade(&hit, &scene, Vec3::new(0.0, 1.0, 5.0));
        assert_eq!(c, color::BLACK);

        // Still at full strength in the mirror configuration
        let terms = BlinnPhong::default().terms(&hit, &scene, Vec3::new(-3.0, 5.0, 0.0));
        assert!(terms.specular.distance(Vec3::splat(0.5)) < 1e-12);
    }
}

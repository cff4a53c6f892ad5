use crate::{
    error::SceneError,
    material::Material,
    math::{float::FloatAsExt, vec::Vec3},
    ray::Ray,
    utils::counter::counter,
};

use super::{HitRecord, IntersectionResult};

/// A simple sphere shape, normals are pointing outwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    radius: f64,
    pub material: Material,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f64, material: Material) -> Result<Self, SceneError> {
        // The intersection test squares the radius
        let radius = radius
            .into_positive()
            .filter(|r| (r * r).is_finite())
            .ok_or(SceneError::InvalidRadius { radius })?;
        Ok(Self {
            center,
            radius,
            material,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Nearest intersection between `ray` and the sphere.
    ///
    /// The smaller root of the quadratic is taken, whatever its sign, as long as the ray range
    /// allows it. Otherwise the larger root is tried. A tangent ray hits once.
    pub fn hit(&self, ray: &Ray) -> IntersectionResult<'_> {
        counter!("Sphere intersection tests");

        let d = ray.direction();
        let oc = ray.origin() - self.center;

        // `a` is non zero: a ray direction is never degenerate
        let a = d.length_squared();
        let b_half = d.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant_quarter = b_half * b_half - a * c;
        if discriminant_quarter < 0.0 {
            return IntersectionResult::NoIntersection;
        }

        let sqrt_d = f64::sqrt(discriminant_quarter);
        let t1 = (-b_half + sqrt_d) / a;
        let t2 = (-b_half - sqrt_d) / a;
        let (near, far) = (t1.min(t2), t1.max(t2));

        let range = ray.range();
        let t = if range.contains(&near) {
            near
        } else if range.contains(&far) {
            far
        } else {
            return IntersectionResult::NoIntersection;
        };

        let point = ray.point_at(t);
        let normal = (point - self.center).normalize();

        IntersectionResult::Intersection(HitRecord {
            t,
            point,
            normal,
            surface: self,
        })
    }
}

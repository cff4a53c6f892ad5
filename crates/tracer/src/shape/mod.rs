//! Contains the objects that are meant to be rendered.
//!
//! A [Surface] is either a [Sphere], the only primitive, or a [Group] of surfaces.
//! Both answer the same question: does a [Ray] hit me, and if so where is the
//! nearest hit.

pub mod sphere;

pub use sphere::Sphere;

use crate::{aggregate::Group, math::vec::Vec3, ray::Ray};

#[derive(Debug, Clone)]
pub enum Surface {
    Sphere(Sphere),
    Group(Group),
}

impl Surface {
    pub fn hit(&self, ray: &Ray) -> IntersectionResult<'_> {
        match self {
            Surface::Sphere(sphere) => sphere.hit(ray),
            Surface::Group(group) => group.hit(ray),
        }
    }
}

impl From<Sphere> for Surface {
    fn from(sphere: Sphere) -> Self {
        Surface::Sphere(sphere)
    }
}

impl From<Group> for Surface {
    fn from(group: Group) -> Self {
        Surface::Group(group)
    }
}

/// Result of a successful intersection.
///
/// `surface` is the sphere that was hit. It is only borrowed, the scene owns it.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    pub t: f64,
    pub point: Vec3,
    /// Unit length, pointing outwards
    pub normal: Vec3,
    pub surface: &'a Sphere,
}

/// An `Option`-like type that takes care of intersections data.
#[derive(Debug, Clone, Copy)]
pub enum IntersectionResult<'a> {
    Intersection(HitRecord<'a>),
    NoIntersection,
}

impl<'a> IntersectionResult<'a> {
    pub fn is_intersection(&self) -> bool {
        matches!(self, Self::Intersection(_))
    }

    /// Keeps the nearest of the two intersections.
    ///
    /// On a tie `self` is kept.
    pub fn min(self, other: Self) -> Self {
        let Self::Intersection(HitRecord { t: t1, .. }) = self else {
            return other;
        };
        let Self::Intersection(HitRecord { t: t2, .. }) = other else {
            return self;
        };

        if t2 < t1 {
            other
        } else {
            self
        }
    }

    pub fn into_option(self) -> Option<HitRecord<'a>> {
        match self {
            Self::Intersection(record) => Some(record),
            Self::NoIntersection => None,
        }
    }
}

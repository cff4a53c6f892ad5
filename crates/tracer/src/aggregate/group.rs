use crate::{
    ray::Ray,
    shape::{IntersectionResult, Surface},
};

/// An ordered collection of surfaces, intersected by a linear scan.
///
/// Children may be groups themselves.
#[derive(Debug, Clone, Default)]
pub struct Group(pub Vec<Surface>);

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<S: Into<Surface>>(&mut self, surface: S) {
        self.0.push(surface.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Nearest hit among all the children.
    ///
    /// When two children are hit at exactly the same time, the first one is kept.
    pub fn hit(&self, ray: &Ray) -> IntersectionResult<'_> {
        self.0
            .iter()
            .fold(IntersectionResult::NoIntersection, |nearest, surface| {
                nearest.min(surface.hit(ray))
            })
    }
}

impl<S: Into<Surface>> FromIterator<S> for Group {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

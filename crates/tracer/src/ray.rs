use std::ops::RangeInclusive;

use crate::{
    error::RayError,
    math::vec::{Vec3, Vec3AsNonZero},
};

/// Below this length a direction is considered to be zero
const DEGENERATE_EPS: f64 = 1e-150;

/// A parametric line `origin + t * direction`.
///
/// The direction is not normalized, but it is guaranteed to be finite and non zero:
/// a [Ray] can only be built through [Ray::new] or [Ray::new_with_range].
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    origin: Vec3,
    direction: Vec3,
    bounds: (f64, f64),
}

impl Ray {
    /// A ray with no bound on `t`, negative values included
    pub fn new(origin: Vec3, direction: Vec3) -> Result<Self, RayError> {
        Self::new_with_range(origin, direction, f64::NEG_INFINITY..=f64::INFINITY)
    }

    pub fn new_with_range(
        origin: Vec3,
        direction: Vec3,
        range: RangeInclusive<f64>,
    ) -> Result<Self, RayError> {
        let direction = direction
            .into_non_zero(DEGENERATE_EPS)
            .ok_or(RayError::Degenerate { direction })?;

        Ok(Self {
            origin,
            direction,
            bounds: (*range.start(), *range.end()),
        })
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    pub fn range(&self) -> RangeInclusive<f64> {
        self.bounds.0..=self.bounds.1
    }

    pub fn point_at(&self, t: f64) -> Vec3 {
        self.origin + t * self.direction
    }
}

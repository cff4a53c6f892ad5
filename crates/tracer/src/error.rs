use derive_more::{Display, Error};

use crate::math::vec::Vec3;

/// Raised when a ray cannot be traced at all.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq)]
pub enum RayError {
    #[display("degenerate ray: direction {direction} has no usable length")]
    Degenerate { direction: Vec3 },

    #[display("pixel ({x}, {y}) is outside of the {width}x{height} image")]
    OutOfImage {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// Raised while building a [Scene](crate::scene::Scene) or a [Camera](crate::camera::Camera)
/// from a description.
#[derive(Debug, Display, Error)]
pub enum SceneError {
    #[display("sphere radius must be positive, and finite once squared, got {radius}")]
    InvalidRadius { radius: f64 },

    #[display("material shininess must be at least 1")]
    InvalidShininess,

    #[display("camera looking along {direction} with up {up} has no orthonormal basis")]
    DegenerateCamera { direction: Vec3, up: Vec3 },

    #[display("invalid view plane: {reason}")]
    InvalidViewPlane { reason: &'static str },

    #[display("image dimensions must be non zero, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    #[display("invalid scene description: {_0}")]
    Parse(#[error(source)] toml::de::Error),
}

impl From<toml::de::Error> for SceneError {
    fn from(err: toml::de::Error) -> Self {
        SceneError::Parse(err)
    }
}

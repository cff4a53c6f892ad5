use crate::{color::Rgb, error::SceneError};

/// Surface properties read by the shaders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Phong exponent, always at least 1
    shininess: u32,
    pub color: Rgb,
}

impl Material {
    pub fn new(shininess: u32, color: Rgb) -> Result<Self, SceneError> {
        if shininess == 0 {
            return Err(SceneError::InvalidShininess);
        }
        Ok(Self { shininess, color })
    }

    pub fn shininess(&self) -> u32 {
        self.shininess
    }
}

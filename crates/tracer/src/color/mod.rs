//! 8-bit colors and their conversion to and from normalized vectors.
//!
//! Scene colors are stored as `u8` triples. Shading happens on [Vec3] with each
//! channel normalized to `[0, 1]`, then goes back to bytes with [Vec3AsRgbExt::rgb].

use crate::math::vec::Vec3;

pub type Rgb = image::Rgb<u8>;

pub const WHITE: Rgb = image::Rgb([255, 255, 255]);
pub const BLACK: Rgb = image::Rgb([0, 0, 0]);
pub const RED: Rgb = image::Rgb([255, 0, 0]);
pub const GREEN: Rgb = image::Rgb([0, 255, 0]);
pub const BLUE: Rgb = image::Rgb([0, 0, 255]);

pub trait RgbAsVec3Ext {
    /// Normalized channels, in `[0, 1]`
    fn vec(&self) -> Vec3;
}

impl RgbAsVec3Ext for Rgb {
    fn vec(&self) -> Vec3 {
        let [r, g, b] = self.0;
        Vec3::new(r as f64, g as f64, b as f64) / 255.
    }
}

pub trait Vec3AsRgbExt {
    /// Denormalize to `[0, 255]`, clamping each channel, then round to the nearest integer
    fn rgb(&self) -> Rgb;
}

impl Vec3AsRgbExt for Vec3 {
    fn rgb(&self) -> Rgb {
        // NaN saturates to 0 in the cast
        image::Rgb(self.to_array().map(|c| (c * 255.).clamp(0., 255.).round() as u8))
    }
}

pub fn gray(c: u8) -> Rgb {
    image::Rgb([c, c, c])
}

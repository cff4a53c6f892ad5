use image::RgbImage;
use itertools::Itertools;
use rayon::prelude::*;

use crate::{
    camera::Camera,
    color::Rgb,
    counter,
    error::RayError,
    scene::Scene,
    shader::Shader,
    shape::IntersectionResult,
};

/// Casts one ray per pixel and shades the nearest hit.
pub struct Renderer {
    pub camera: Camera,
    pub scene: Scene,
    pub shader: Box<dyn Shader>,
}

impl Renderer {
    /// Color of the raster pixel `(x, y)`, row 0 being the top of the image.
    ///
    /// Fails with [RayError::OutOfImage] for a pixel outside of the camera raster.
    pub fn process_pixel(&self, x: u32, y: u32) -> Result<Rgb, RayError> {
        counter!("Rays cast");
        let ray = self.camera.raster_ray(x, y)?;

        let color = match self.scene.hit(&ray) {
            IntersectionResult::Intersection(hit) => {
                self.shader.shade(&hit, &self.scene, self.camera.eye)
            }
            IntersectionResult::NoIntersection => self.scene.background,
        };
        Ok(color)
    }

    /// Render the whole image on the current thread.
    ///
    /// `on_row_rendered` is called with the index of each row once it is complete.
    pub fn run_monothreaded<F: FnMut(u32)>(
        &self,
        mut on_row_rendered: F,
    ) -> Result<RgbImage, RayError> {
        let (width, height) = (self.camera.width, self.camera.height);
        self.log_start();

        let mut image = RgbImage::new(width, height);
        for (y, x) in (0..height).cartesian_product(0..width) {
            image.put_pixel(x, y, self.process_pixel(x, y)?);
            if x + 1 == width {
                log::debug!("Row {y} done");
                on_row_rendered(y);
            }
        }

        log::info!("Image fully generated");
        Ok(image)
    }

    /// Render the whole image on the rayon thread pool, one row per task.
    ///
    /// Each task writes to its own row of the image, the output is the same as
    /// [Renderer::run_monothreaded].
    pub fn run_multithreaded<F: Fn(u32) + Sync>(
        &self,
        on_row_rendered: F,
    ) -> Result<RgbImage, RayError> {
        let (width, height) = (self.camera.width, self.camera.height);
        self.log_start();

        let mut image = RgbImage::new(width, height);
        let row_len = width as usize * 3;

        image
            .par_chunks_mut(row_len)
            .enumerate()
            .try_for_each(|(y, row)| -> Result<(), RayError> {
                let y = y as u32;
                let pixels: &mut [[u8; 3]] = bytemuck::cast_slice_mut(row);
                for (x, pixel) in pixels.iter_mut().enumerate() {
                    *pixel = self.process_pixel(x as u32, y)?.0;
                }

                log::debug!("Row {y} done");
                on_row_rendered(y);
                Ok(())
            })?;

        log::info!("Image fully generated");
        Ok(image)
    }

    fn log_start(&self) {
        if self.scene.objects.is_empty() {
            log::warn!("The scene is empty, the image will only show the background");
        }
        log::info!(
            "Generating {}x{} image with {} top level objects...",
            self.camera.width,
            self.camera.height,
            self.scene.objects.len()
        );
    }
}

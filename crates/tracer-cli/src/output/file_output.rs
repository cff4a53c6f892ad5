use anyhow::{Context, Result};
use image::{ImageFormat, RgbImage};
use std::path::{Path, PathBuf};

use super::FinalOutput;

/// Saves the image on disk, the format being picked from the extension.
///
/// The image is first written next to the destination then renamed over it, so a
/// failed run never leaves a truncated file behind.
pub struct FileOutput {
    pub path: PathBuf,
}

impl FileOutput {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    fn temporary_path(&self) -> PathBuf {
        let mut file_name = self.path.file_name().unwrap_or_default().to_os_string();
        file_name.push(".tmp");
        self.path.with_file_name(file_name)
    }
}

impl FinalOutput for FileOutput {
    fn commit(&self, image: &RgbImage) -> Result<()> {
        let format = ImageFormat::from_path(&self.path)
            .with_context(|| format!("Unsupported output format for {}", self.path.display()))?;

        if let Some(outdir) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(outdir)
                .with_context(|| format!("Could not create {}", outdir.display()))?;
        }

        let tmp_path = self.temporary_path();
        log::info!("Saving image to {}...", self.path.display());
        if let Err(err) = image.save_with_format(&tmp_path, format) {
            remove_leftover(&tmp_path);
            return Err(err).with_context(|| format!("Could not write {}", tmp_path.display()));
        }

        if let Err(err) = std::fs::rename(&tmp_path, &self.path) {
            remove_leftover(&tmp_path);
            return Err(err)
                .with_context(|| format!("Could not move the image to {}", self.path.display()));
        }
        Ok(())
    }
}

fn remove_leftover(path: &Path) {
    if path.exists() {
        if let Err(err) = std::fs::remove_file(path) {
            log::warn!("Could not remove {}: {err}", path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use image::RgbImage;

    use super::{FileOutput, FinalOutput};

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("tracer-cli-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn writes_png_without_leftovers() {
        let dir = scratch_dir("png");
        let path = dir.join("nested").join("render.png");

        let mut image = RgbImage::new(3, 2);
        image.put_pixel(1, 1, image::Rgb([255, 0, 0]));
        FileOutput::new(&path).commit(&image).unwrap();

        let read_back = image::open(&path).unwrap().to_rgb8();
        assert_eq!(read_back.as_raw(), image.as_raw());

        let entries: Vec<_> = std::fs::read_dir(path.parent().unwrap())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(entries, vec!["render.png".to_string()]);

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn unknown_format_is_an_error() {
        let dir = scratch_dir("unknown");
        let path = dir.join("render.unknown");

        assert!(FileOutput::new(&path).commit(&RgbImage::new(1, 1)).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn failed_write_leaves_nothing() {
        let dir = scratch_dir("failed");
        std::fs::create_dir_all(&dir).unwrap();
        // The destination is a directory, renaming over it fails
        let path = dir.join("render.png");
        std::fs::create_dir_all(path.join("occupied")).unwrap();

        assert!(FileOutput::new(&path).commit(&RgbImage::new(1, 1)).is_err());
        assert!(path.is_dir());
        assert!(!dir.join("render.png.tmp").exists());

        std::fs::remove_dir_all(dir).unwrap();
    }
}

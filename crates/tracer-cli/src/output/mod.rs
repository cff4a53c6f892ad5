mod file_output;

use anyhow::Result;
use image::RgbImage;

pub use file_output::FileOutput;

/// Receives the image once it is fully rendered
pub trait FinalOutput: Send {
    fn commit(&self, image: &RgbImage) -> Result<()>;
}

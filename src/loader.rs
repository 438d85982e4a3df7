use image::{DynamicImage, ImageReader};
use std::path::Path;

use crate::error::{CoinscanError, Result};

/// Path read when none is given on the command line.
pub const DEFAULT_IMAGE_PATH: &str = "./2.png";

/// Open and decode the image at `path`, guessing the format from its
/// contents when the extension is missing or wrong.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let path = path.as_ref();
    let load_err = |source| CoinscanError::ImageLoad {
        path: path.to_path_buf(),
        source,
    };

    let reader = ImageReader::open(path)
        .map_err(|e| load_err(image::ImageError::IoError(e)))?
        .with_guessed_format()
        .map_err(|e| load_err(image::ImageError::IoError(e)))?;
    reader.decode().map_err(load_err)
}

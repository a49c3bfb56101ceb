//! Source image loading.
//!
//! Decodes any bitmap format a [`image`] can read to interleaved 8-bit
//! RGB and copies it into a scoped working directory, matching the
//! original implementation's "load, then copy to a temp location" step.

use std::path::Path;

use tempfile::TempDir;

use crate::error::{Error, Result};

/// A decoded 8-bit RGB image, interleaved `(R,G,B,R,G,B,...)`.
#[derive(Debug, Clone)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    /// Interleaved RGB bytes, length `3 * width * height`.
    pub rgb: Vec<u8>,
}

impl ImageBuffer {
    /// Number of pixels in this buffer.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Loaded input: the decoded buffer plus the scoped temp directory
/// holding a copy of it, kept alive for the lifetime of the pipeline.
pub struct LoadedImage {
    pub buffer: ImageBuffer,
    /// Scoped working directory; its tree is removed when this value (and
    /// thus the pipeline holding it) is dropped.
    pub temp_dir: TempDir,
}

/// Decode the source image at `path` to interleaved 8-bit sRGB-layout RGB
/// bytes, copying the original file into a freshly created temp directory.
pub fn load_input_image(path: &Path) -> Result<LoadedImage> {
    let dyn_image = image::open(path).map_err(|source| Error::ImageLoad {
        path: path.display().to_string(),
        source,
    })?;

    let rgb_image = dyn_image.to_rgb8();
    let (width, height) = rgb_image.dimensions();

    let temp_dir = tempfile::Builder::new()
        .prefix("rip-core-")
        .tempdir()
        .map_err(Error::Io)?;

    if let Some(file_name) = path.file_name() {
        let dest = temp_dir.path().join(file_name);
        std::fs::copy(path, &dest).map_err(Error::Io)?;
    }

    Ok(LoadedImage {
        buffer: ImageBuffer {
            width,
            height,
            rgb: rgb_image.into_raw(),
        },
        temp_dir,
    })
}

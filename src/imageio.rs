// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Image loading and saving.

use crate::error::{Error, Result};
use image::{GenericImageView, RgbImage};
use std::path::Path;
use tracing::info;

/// Load an image from disk as 8-bit RGB, whatever it was stored as.
///
/// # Errors
///
/// Returns an error if the file cannot be decoded, or decodes to an
/// image with no pixels.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<RgbImage> {
    let path = path.as_ref();

    let img = image::open(path).map_err(|source| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;

    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::EmptyImage { width, height });
    }
    info!(path = %path.display(), width, height, "loaded image");
    Ok(img.to_rgb8())
}

/// Save an image, with the format taken from the path's extension.
///
/// # Errors
///
/// Returns an error if the format is unknown or the file cannot be
/// written.
pub fn save_image<P: AsRef<Path>>(image: &RgbImage, path: P) -> Result<()> {
    let path = path.as_ref();
    image.save(path).map_err(|source| Error::ImageSave {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), width = image.width(), height = image.height(), "saved image");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};

    #[test]
    fn round_trip_through_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixels.png");
        let image: RgbImage = ImageBuffer::from_fn(4, 2, |x, y| Rgb([x as u8 * 60, y as u8 * 90, 7]));

        save_image(&image, &path).unwrap();
        assert_eq!(load_image(&path).unwrap(), image);
    }

    #[test]
    fn missing_files_name_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nowhere.png");
        match load_image(&path) {
            Err(Error::ImageLoad { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected a load error, got {:?}", other),
        }
    }

    #[test]
    fn unknown_extensions_fail_to_save() {
        let dir = tempfile::tempdir().unwrap();
        let image = RgbImage::new(1, 1);
        assert!(matches!(
            save_image(&image, dir.path().join("pixels.unknown")),
            Err(Error::ImageSave { .. })
        ));
    }
}

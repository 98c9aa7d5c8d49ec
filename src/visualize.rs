// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam visualization
//!
//! Paints each seam onto a copy of the image it is about to be removed
//! from, so the carve can be replayed frame by frame.

use crate::error::{Error, Result};
use crate::seam::Seam;
use crate::seamcarver::SeamObserver;
use image::{Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// The color seams are painted in.
pub const SEAM_COLOR: Rgb<u8> = Rgb([0, 255, 0]);

/// Return a copy of `image` with `seam` drawn over it.  Every seam
/// pixel is painted along with its four neighbors, so that a one-pixel
/// seam is visible in a large image.
pub fn paint_seam(image: &RgbImage, seam: &Seam) -> Result<RgbImage> {
    let (width, height) = image.dimensions();
    seam.check_against(seam.axis(), width, height)?;

    let mut painted = image.clone();
    for (x, y) in seam.coordinates() {
        let neighbors = [
            (x, y),
            (x.wrapping_sub(1), y),
            (x + 1, y),
            (x, y.wrapping_sub(1)),
            (x, y + 1),
        ];
        for (nx, ny) in neighbors {
            if nx < width && ny < height {
                painted.put_pixel(nx, ny, SEAM_COLOR);
            }
        }
    }
    Ok(painted)
}

/// A [`SeamObserver`] that writes every seam, painted onto the image,
/// to a numbered PNG in a directory: `frame-00000.png`,
/// `frame-00001.png`, and so on.
///
/// Observers cannot fail the carve, so the first error is held until
/// [`finish`](FrameWriter::finish) and no more frames are written after
/// it.
pub struct FrameWriter {
    directory: PathBuf,
    written: usize,
    error: Option<Error>,
}

impl FrameWriter {
    /// Prepare to write frames into `directory`, creating it if needed.
    pub fn new<P: AsRef<Path>>(directory: P) -> Result<Self> {
        let directory = directory.as_ref().to_path_buf();
        fs::create_dir_all(&directory)?;
        Ok(FrameWriter {
            directory,
            written: 0,
            error: None,
        })
    }

    fn frame_path(&self) -> PathBuf {
        self.directory.join(format!("frame-{:05}.png", self.written))
    }

    fn write_frame(&mut self, seam: &Seam, image: &RgbImage) -> Result<()> {
        let path = self.frame_path();
        paint_seam(image, seam)?
            .save(&path)
            .map_err(|source| Error::ImageSave {
                path: path.clone(),
                source,
            })?;
        debug!(path = %path.display(), "wrote frame");
        self.written += 1;
        Ok(())
    }

    /// The number of frames written, or the first error encountered.
    pub fn finish(self) -> Result<usize> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.written),
        }
    }
}

impl SeamObserver<Rgb<u8>> for FrameWriter {
    fn seam_found(&mut self, seam: &Seam, image: &RgbImage) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.write_frame(seam, image) {
            warn!("{}; no further frames will be written", err);
            self.error = Some(err);
        }
    }
}

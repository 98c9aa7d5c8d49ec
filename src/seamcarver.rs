// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main function
//!
//! The main seamcarver routine.  Shrinking happens in two phases:
//! every vertical seam needed to reach the target width is removed
//! first, then every horizontal seam needed to reach the target
//! height.  Each carve recomputes the energy map from scratch on the
//! image the previous carve produced.

use crate::error::{Error, Result};
use crate::seam::{Axis, Seam};
use crate::seamfinder::{find_horizontal_seam, find_vertical_seam};
use crate::seamremoval::remove_seam;
use image::{GenericImageView, ImageBuffer, Pixel, Primitive};
use tracing::{debug, info, warn};

#[cfg(not(feature = "threaded"))]
use crate::energy::calculate_energy;
#[cfg(feature = "threaded")]
use crate::energy::calculate_energy_parallel;

/// Something that wants to watch the carve happen: it is shown every
/// seam, together with the image the seam is about to be removed from.
/// Observers only ever get shared references and cannot change what
/// is carved.
///
/// Any `FnMut(&Seam, &ImageBuffer<P, _>)` closure is an observer.
pub trait SeamObserver<P: Pixel> {
    fn seam_found(&mut self, seam: &Seam, image: &ImageBuffer<P, Vec<P::Subpixel>>);
}

impl<P, F> SeamObserver<P> for F
where
    P: Pixel,
    F: FnMut(&Seam, &ImageBuffer<P, Vec<P::Subpixel>>),
{
    fn seam_found(&mut self, seam: &Seam, image: &ImageBuffer<P, Vec<P::Subpixel>>) {
        self(seam, image)
    }
}

/// One complete energy, seam, removal cycle, shrinking the image by
/// one column (vertical) or one row (horizontal).
fn carve_once<P, S, O>(
    image: ImageBuffer<P, Vec<S>>,
    axis: Axis,
    observer: &mut O,
) -> Result<ImageBuffer<P, Vec<S>>>
where
    P: Pixel<Subpixel = S> + Sync + 'static,
    S: Primitive + Sync + 'static,
    O: SeamObserver<P> + ?Sized,
{
    #[cfg(feature = "threaded")]
    let energy = calculate_energy_parallel(&image, num_cpus::get())?;
    #[cfg(not(feature = "threaded"))]
    let energy = calculate_energy(&image)?;

    let seam = match axis {
        Axis::Vertical => find_vertical_seam(&energy)?,
        Axis::Horizontal => find_horizontal_seam(&energy)?,
    };
    debug!(
        %axis,
        width = image.width(),
        height = image.height(),
        "carving seam"
    );
    observer.seam_found(&seam, &image);
    remove_seam(&image, &seam)
}

/// Holds the image to be carved.  The image itself is never modified;
/// every carve works on, and returns, a fresh buffer.
pub struct SeamCarver<'a, I> {
    image: &'a I,
}

impl<'a, I, P, S> SeamCarver<'a, I>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + Sync + 'static,
    S: Primitive + Sync + 'static,
{
    /// Creates a new SeamCarver with an image to be carved.
    pub fn new(image: &'a I) -> Self {
        Self { image }
    }

    /// Given a desired new width and height, repeatedly carve seams out
    /// of the image.
    ///
    /// Seam carving can only shrink.  A target at or above the current
    /// size on an axis leaves that axis alone: the image is *not*
    /// grown to meet it.
    pub fn carve(&self, new_width: u32, new_height: u32) -> Result<ImageBuffer<P, Vec<S>>> {
        self.carve_with(new_width, new_height, &mut |_: &Seam, _: &ImageBuffer<P, Vec<S>>| {})
    }

    /// [`carve`](Self::carve), showing each seam to `observer` before it
    /// is removed.
    pub fn carve_with<O>(
        &self,
        new_width: u32,
        new_height: u32,
        observer: &mut O,
    ) -> Result<ImageBuffer<P, Vec<S>>>
    where
        O: SeamObserver<P> + ?Sized,
    {
        let (width, height) = self.image.dimensions();
        if width == 0 || height == 0 {
            return Err(Error::EmptyImage { width, height });
        }
        if new_width == 0 || new_height == 0 {
            return Err(Error::InvalidTarget {
                width: new_width,
                height: new_height,
            });
        }
        if new_width > width || new_height > height {
            warn!(
                width,
                height,
                new_width,
                new_height,
                "seam carving cannot enlarge an image; larger targets are left as-is"
            );
        }

        let scratch = ImageBuffer::from_fn(width, height, |x, y| self.image.get_pixel(x, y));

        let vertical = width.saturating_sub(new_width);
        info!(from = width, to = width - vertical, "removing vertical seams");
        let scratch = (0..vertical).try_fold(scratch, |image, _| {
            carve_once(image, Axis::Vertical, observer)
        })?;

        let horizontal = height.saturating_sub(new_height);
        info!(from = height, to = height - horizontal, "removing horizontal seams");
        let scratch = (0..horizontal).try_fold(scratch, |image, _| {
            carve_once(image, Axis::Horizontal, observer)
        })?;

        info!(
            width = scratch.width(),
            height = scratch.height(),
            "carving complete"
        );
        Ok(scratch)
    }
}

/// Carve `image` down to `new_width` x `new_height`.
pub fn carve_to_size<I, P, S>(image: &I, new_width: u32, new_height: u32) -> Result<ImageBuffer<P, Vec<S>>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + Sync + 'static,
    S: Primitive + Sync + 'static,
{
    SeamCarver::new(image).carve(new_width, new_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage};

    // Columns of 0, 100 and 255: the middle column sits between the
    // extremes and carries the most energy.
    fn bright_middle() -> RgbImage {
        ImageBuffer::from_fn(3, 3, |x, _| {
            let v = [0u8, 100, 255][x as usize];
            Rgb([v, v, v])
        })
    }

    #[test]
    fn carving_keeps_the_high_energy_column() {
        let carved = carve_to_size(&bright_middle(), 2, 3).unwrap();
        assert_eq!(carved.dimensions(), (2, 3));
        for y in 0..3 {
            assert_eq!(carved.get_pixel(0, y), &Rgb([100, 100, 100]));
            assert_eq!(carved.get_pixel(1, y), &Rgb([255, 255, 255]));
        }
    }

    #[test]
    fn vertical_seams_go_before_horizontal_ones() {
        let image: GrayImage = ImageBuffer::from_fn(6, 5, |x, y| Luma([(x * 40 + y * 3) as u8]));
        let mut seen = Vec::new();
        let carved = SeamCarver::new(&image)
            .carve_with(4, 2, &mut |seam: &Seam, current: &GrayImage| {
                seen.push((seam.axis(), current.dimensions()));
            })
            .unwrap();
        assert_eq!(carved.dimensions(), (4, 2));
        assert_eq!(
            seen,
            vec![
                (Axis::Vertical, (6, 5)),
                (Axis::Vertical, (5, 5)),
                (Axis::Horizontal, (4, 5)),
                (Axis::Horizontal, (4, 4)),
                (Axis::Horizontal, (4, 3)),
            ]
        );
    }

    #[test]
    fn same_size_is_a_no_op() {
        let image = bright_middle();
        let mut carves = 0;
        let carved = SeamCarver::new(&image)
            .carve_with(3, 3, &mut |_: &Seam, _: &RgbImage| carves += 1)
            .unwrap();
        assert_eq!(carves, 0);
        assert_eq!(carved, image);
    }

    #[test]
    fn larger_targets_do_not_grow() {
        let carved = carve_to_size(&bright_middle(), 10, 2).unwrap();
        assert_eq!(carved.dimensions(), (3, 2));
    }

    #[test]
    fn down_to_a_single_pixel() {
        let carved = carve_to_size(&bright_middle(), 1, 1).unwrap();
        assert_eq!(carved.dimensions(), (1, 1));
    }

    #[test]
    fn zero_targets_are_rejected() {
        assert!(matches!(
            carve_to_size(&bright_middle(), 0, 3),
            Err(Error::InvalidTarget { .. })
        ));
    }

    #[test]
    fn empty_images_are_rejected() {
        assert!(matches!(
            carve_to_size(&RgbImage::new(4, 0), 1, 1),
            Err(Error::EmptyImage { .. })
        ));
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Remove a seam from an image
//!
//! The result is a new buffer one column (or row) smaller.  Pixels
//! before the seam keep their coordinates; pixels after it slide over
//! by one to close the gap.  The seam is checked against the image
//! before anything is allocated, so a bad seam never yields a partial
//! image.

use crate::cq;
use crate::error::{Error, Result};
use crate::seam::{Axis, Seam};
use image::{GenericImageView, ImageBuffer, Pixel, Primitive};

fn check<I: GenericImageView>(image: &I, seam: &Seam, axis: Axis) -> Result<(u32, u32)> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::EmptyImage { width, height });
    }
    seam.check_against(axis, width, height)?;
    let extent = cq!(axis == Axis::Vertical, width, height);
    if extent == 1 {
        return Err(Error::CannotShrink { axis });
    }
    Ok((width, height))
}

/// Remove a top-to-bottom seam: one pixel from every row, at the
/// column the seam gives for that row.
pub fn remove_vertical_seam<I, P, S>(image: &I, seam: &Seam) -> Result<ImageBuffer<P, Vec<S>>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = check(image, seam, Axis::Vertical)?;
    let cuts = seam.as_slice();
    Ok(ImageBuffer::from_fn(width - 1, height, |x, y| {
        let cut = cuts[y as usize];
        image.get_pixel(cq!(x < cut, x, x + 1), y)
    }))
}

/// Remove a left-to-right seam: one pixel from every column, at the
/// row the seam gives for that column.
pub fn remove_horizontal_seam<I, P, S>(image: &I, seam: &Seam) -> Result<ImageBuffer<P, Vec<S>>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = check(image, seam, Axis::Horizontal)?;
    let cuts = seam.as_slice();
    Ok(ImageBuffer::from_fn(width, height - 1, |x, y| {
        let cut = cuts[x as usize];
        image.get_pixel(x, cq!(y < cut, y, y + 1))
    }))
}

/// Remove `seam` along its own axis.
pub fn remove_seam<I, P, S>(image: &I, seam: &Seam) -> Result<ImageBuffer<P, Vec<S>>>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    match seam.axis() {
        Axis::Vertical => remove_vertical_seam(image, seam),
        Axis::Horizontal => remove_horizontal_seam(image, seam),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    // Every pixel is distinct, so any misplaced pixel shows up.
    //  0  1  2  3
    // 10 11 12 13
    // 20 21 22 23
    fn numbered() -> GrayImage {
        ImageBuffer::from_fn(4, 3, |x, y| Luma([(y * 10 + x) as u8]))
    }

    #[test]
    fn vertical_removal_drops_one_pixel_per_row() {
        let seam = Seam::new(Axis::Vertical, vec![0, 1, 2]);
        let carved = remove_vertical_seam(&numbered(), &seam).unwrap();
        assert_eq!(carved.dimensions(), (3, 3));
        assert_eq!(carved.into_raw(), vec![1, 2, 3, 10, 12, 13, 20, 21, 23]);
    }

    #[test]
    fn horizontal_removal_drops_one_pixel_per_column() {
        let seam = Seam::new(Axis::Horizontal, vec![0, 1, 2, 2]);
        let carved = remove_horizontal_seam(&numbered(), &seam).unwrap();
        assert_eq!(carved.dimensions(), (4, 2));
        assert_eq!(carved.into_raw(), vec![10, 1, 2, 3, 20, 21, 12, 13]);
    }

    #[test]
    fn remove_seam_follows_the_axis() {
        let seam = Seam::new(Axis::Horizontal, vec![2, 2, 2, 2]);
        let carved = remove_seam(&numbered(), &seam).unwrap();
        assert_eq!(carved.into_raw(), vec![0, 1, 2, 3, 10, 11, 12, 13]);
    }

    #[test]
    fn the_input_is_left_alone() {
        let image = numbered();
        let seam = Seam::new(Axis::Vertical, vec![1, 1, 1]);
        let _ = remove_vertical_seam(&image, &seam).unwrap();
        assert_eq!(image, numbered());
    }

    #[test]
    fn mismatched_seams_fail_fast() {
        let image = numbered();
        let short = Seam::new(Axis::Vertical, vec![0, 0]);
        assert!(matches!(
            remove_vertical_seam(&image, &short),
            Err(Error::SeamLength { .. })
        ));

        let wrong_way = Seam::new(Axis::Horizontal, vec![0, 0, 0]);
        assert!(matches!(
            remove_vertical_seam(&image, &wrong_way),
            Err(Error::AxisMismatch { .. })
        ));

        let off_the_edge = Seam::new(Axis::Horizontal, vec![0, 1, 2, 3]);
        assert!(matches!(
            remove_horizontal_seam(&image, &off_the_edge),
            Err(Error::SeamOutOfRange { position: 3, .. })
        ));
    }

    #[test]
    fn cannot_remove_the_last_column() {
        let image: GrayImage = ImageBuffer::from_pixel(1, 2, Luma([5]));
        let seam = Seam::new(Axis::Vertical, vec![0, 0]);
        assert!(matches!(
            remove_vertical_seam(&image, &seam),
            Err(Error::CannotShrink {
                axis: Axis::Vertical
            })
        ));
    }
}

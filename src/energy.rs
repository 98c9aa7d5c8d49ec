// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The energy of a pixel is the magnitude of its color gradient,
//! estimated from its four neighbors with central differences:
//!
//! ```text
//!        |Δx|² = (Δrx)²+(Δgx)²+(Δbx)²
//!        |Δy|² = (Δry)²+(Δgy)²+(Δby)²
//!       e(x,y) = ⌊√(|Δx|²+|Δy|²)⌋
//! ```
//!
//! Neighbors that would fall off the image are replaced by the pixel
//! itself: the index is clamped, never wrapped or mirrored.

use crate::cq;
use crate::error::{Error, Result};
use crate::twodmap::{EnergyMap, Lattice, TwoDimensionalMap};
use image::{GenericImageView, GrayImage, ImageBuffer, Luma, Pixel, Primitive};
use itertools::iproduct;
use num_traits::NumCast;

// Takes the channels from two pixels and sums the squares of the
// per-channel differences.
#[inline]
fn energy_of_pair<P, S>(p1: &P, p2: &P) -> u64
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    p1.channels()
        .iter()
        .zip(p2.channels())
        .map(|(&c1, &c2)| {
            let c1: i64 = NumCast::from(c1).unwrap_or_default();
            let c2: i64 = NumCast::from(c2).unwrap_or_default();
            ((c1 - c2) * (c1 - c2)) as u64
        })
        .sum()
}

/// The energy of the single pixel at (x, y) of a non-empty image.
fn pixel_energy<I, P, S>(image: &I, x: u32, y: u32) -> u32
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let (mw, mh) = (width - 1, height - 1);

    let (left, right, up, down) = (
        image.get_pixel(cq!(x == 0, 0, x - 1), y),
        image.get_pixel(cq!(x >= mw, mw, x + 1), y),
        image.get_pixel(x, cq!(y == 0, 0, y - 1)),
        image.get_pixel(x, cq!(y >= mh, mh, y + 1)),
    );
    let squared = energy_of_pair(&right, &left) + energy_of_pair(&down, &up);
    // Exact for anything up to 2^52, far beyond six squared 16-bit
    // channel differences.
    (squared as f64).sqrt().floor() as u32
}

fn reject_empty<I: GenericImageView>(image: &I) -> Result<()> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::EmptyImage { width, height });
    }
    Ok(())
}

/// Compute the energy of every pixel in an image.  This is generic on
/// the image type and works over every channel of the pixel, so an
/// RGB image is measured in color and a grayscale one in luma.
pub fn calculate_energy<I, P, S>(image: &I) -> Result<EnergyMap>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    reject_empty(image)?;
    let (width, height) = image.dimensions();

    let energy = iproduct!(0..height, 0..width)
        .map(|(y, x)| pixel_energy(image, x, y))
        .collect();
    TwoDimensionalMap::from_raw(width, height, energy).ok_or(Error::EmptyImage { width, height })
}

/// [`calculate_energy`], with the rows of the map divided into `threads`
/// bands, each computed on its own thread.  Every pixel only reads the
/// (unchanging) image, so the result is identical to the sequential
/// version.
#[cfg(feature = "threaded")]
pub fn calculate_energy_parallel<I, P, S>(image: &I, threads: usize) -> Result<EnergyMap>
where
    I: GenericImageView<Pixel = P> + Sync,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    reject_empty(image)?;
    let (width, height) = image.dimensions();
    let stride = width as usize;
    let rows_per_band = (height as usize + threads.max(1) - 1) / threads.max(1);

    let mut energy = vec![0u32; stride * height as usize];
    crossbeam::scope(|scope| {
        for (band, chunk) in energy.chunks_mut(rows_per_band * stride).enumerate() {
            scope.spawn(move |_| {
                let first = band * rows_per_band * stride;
                for (offset, cell) in chunk.iter_mut().enumerate() {
                    let index = first + offset;
                    *cell = pixel_energy(image, (index % stride) as u32, (index / stride) as u32);
                }
            });
        }
    })
    .map_err(|_| Error::Worker)?;

    TwoDimensionalMap::from_raw(width, height, energy).ok_or(Error::EmptyImage { width, height })
}

/// Render an energy map as a grayscale image, scaled so that the most
/// energetic pixel is white.  A map with no energy at all is black.
pub fn energy_to_image(energy: &EnergyMap) -> GrayImage {
    let (width, height) = energy.dimensions();
    let factor = energy.as_slice().iter().copied().max().unwrap_or(0).max(1) as u64;
    ImageBuffer::from_fn(width, height, |x, y| {
        Luma([(energy.at(x, y) as u64 * 255 / factor) as u8])
    })
}

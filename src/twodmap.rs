// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Two-dimensional scalar fields.
//!
//! Both the energy map and the transient cost grid of the seam search
//! are dense, row-major grids the size of the image they describe.

use std::ops::{Index, IndexMut};

/// Read-only access to a grid of values.  Implemented by the map
/// itself and by the transposing [`Flipper`](crate::flipper::Flipper),
/// so the seam search can be written once for both directions.
pub trait Lattice {
    type Cell: Copy;

    /// Number of columns.
    fn width(&self) -> u32;

    /// Number of rows.
    fn height(&self) -> u32;

    /// The value at column `x`, row `y`.
    fn at(&self, x: u32, y: u32) -> Self::Cell;

    /// True if there is nothing in the grid along either axis.
    fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

/// An addressable two-dimensional field: a basic u32 for the energy
/// map, or the u64 running totals of the seam search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    width: u32,
    height: u32,
    data: Vec<P>,
}

/// The per-pixel energy of an image.
pub type EnergyMap = TwoDimensionalMap<u32>;

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// A new map with every cell set to the content type's default.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            data: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major buffer.  Returns `None` if the buffer
    /// is not exactly `width * height` long.
    pub fn from_raw(width: u32, height: u32, data: Vec<P>) -> Option<Self> {
        if data.len() != width as usize * height as usize {
            return None;
        }
        Some(TwoDimensionalMap {
            width,
            height,
            data,
        })
    }

    /// (width, height), in the same order as `image`'s `dimensions()`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The row-major contents.
    pub fn as_slice(&self) -> &[P] {
        &self.data
    }

    /// One row of the map.
    pub fn row(&self, y: u32) -> &[P] {
        let start = self.get_index(0, y);
        &self.data[start..start + self.width as usize]
    }

    // Keep the index math in exactly one place.  This is the same
    // layout `image::ImageBuffer` uses.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

impl<P: Default + Copy> Lattice for TwoDimensionalMap<P> {
    type Cell = P;

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn at(&self, x: u32, y: u32) -> P {
        self[(x, y)]
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.data[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.data[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addressing_is_row_major() {
        let mut map: TwoDimensionalMap<u32> = TwoDimensionalMap::new(3, 2);
        map[(2, 0)] = 7;
        map[(0, 1)] = 9;
        assert_eq!(map.as_slice(), &[0, 0, 7, 9, 0, 0]);
        assert_eq!(map.row(1), &[9, 0, 0]);
        assert_eq!(map.at(2, 0), 7);
    }

    #[test]
    fn from_raw_checks_length() {
        assert!(TwoDimensionalMap::from_raw(2, 2, vec![1u32, 2, 3]).is_none());
        let map = TwoDimensionalMap::from_raw(2, 2, vec![1u32, 2, 3, 4]).unwrap();
        assert_eq!(map.dimensions(), (2, 2));
        assert_eq!(map[(1, 1)], 4);
    }

    #[test]
    fn empty_maps_know_it() {
        let map: EnergyMap = TwoDimensionalMap::new(0, 4);
        assert!(map.is_empty());
        assert!(!EnergyMap::new(1, 1).is_empty());
    }
}

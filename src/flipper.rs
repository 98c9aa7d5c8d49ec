// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Lattice dimensional flipper
//!
//! A utility proxy for any [`Lattice`] that maps the width to the
//! original height, and vice versa, as well as every x to y and vice
//! versa.
//!
//! A horizontal seam through a map is a vertical seam through the
//! flipped map, so the seam search only has to be written for one
//! direction.  Nothing is copied; the flip is purely in the addressing.

use crate::twodmap::Lattice;

/// A transposed view of a borrowed lattice.
pub struct Flipper<'a, L: ?Sized> {
    pub lattice: &'a L,
}

impl<'a, L: ?Sized> Flipper<'a, L> {
    pub fn new(lattice: &'a L) -> Self {
        Flipper { lattice }
    }
}

impl<'a, L: Lattice + ?Sized> Lattice for Flipper<'a, L> {
    type Cell = L::Cell;

    fn width(&self) -> u32 {
        self.lattice.height()
    }

    fn height(&self) -> u32 {
        self.lattice.width()
    }

    fn at(&self, x: u32, y: u32) -> L::Cell {
        self.lattice.at(y, x)
    }
}

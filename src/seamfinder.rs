// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the minimum-energy seam through an energy map
//!
//! A dynamic program fills a cost grid the size of the map, top to
//! bottom: each cell is its own energy plus the cheapest of the (up to)
//! three cells touching it in the row above.  The seam is then traced
//! back up from the cheapest cell of the bottom row.
//!
//! Only the vertical case is implemented; a horizontal seam is a
//! vertical seam through the [`Flipper`]ed map.

use crate::cq;
use crate::error::{Error, Result};
use crate::flipper::Flipper;
use crate::seam::{Axis, Seam};
use crate::twodmap::{EnergyMap, Lattice, TwoDimensionalMap};
use tracing::trace;

type CostGrid = TwoDimensionalMap<u64>;

// Populate the first row with its native energies, then every
// subsequent cell with its energy plus the lowest adjacent cost in
// the row above.
fn cumulative_cost<L: Lattice<Cell = u32>>(energy: &L) -> CostGrid {
    let (width, height) = (energy.width(), energy.height());
    let maxwidth = width - 1;
    let mut cost = CostGrid::new(width, height);

    for x in 0..width {
        cost[(x, 0)] = energy.at(x, 0) as u64;
    }

    for y in 1..height {
        for x in 0..width {
            let straight = cost[(x, y - 1)];
            let left = cq!(x > 0, cost[(x - 1, y - 1)], u64::MAX);
            let right = cq!(x < maxwidth, cost[(x + 1, y - 1)], u64::MAX);
            cost[(x, y)] = energy.at(x, y) as u64 + straight.min(left).min(right);
        }
    }
    cost
}

// The bottom anchor is the first column with the least total cost.
fn cheapest_column(cost: &CostGrid) -> u32 {
    let last = cost.row(cost.height() - 1);
    let mut best = 0;
    for (x, &total) in last.iter().enumerate().skip(1) {
        if total < last[best] {
            best = x;
        }
    }
    best as u32
}

/// Walk back up the cost grid from the bottom anchor.
///
/// At every row the walk starts from the column chosen one row below
/// and considers the candidates in a fixed order: straight up, then
/// upper-left if it is strictly cheaper, then the column to the right
/// of *whichever of those won* if that is strictly cheaper still.  Note
/// that once the walk has stepped left, the right-hand candidate is the
/// original straight-up cell, which has already lost; so an upper-left
/// cell that beats straight-up is taken even when upper-right is
/// cheaper.  This order decides where seams land on ties and must not
/// be replaced with a three-way minimum.
fn trace_seam(cost: &CostGrid) -> Vec<u32> {
    let (width, height) = (cost.width(), cost.height());
    let maxwidth = width - 1;

    let mut col = cheapest_column(cost);
    let mut seam = vec![0u32; height as usize];
    seam[height as usize - 1] = col;

    for y in (0..height - 1).rev() {
        if col > 0 && cost[(col - 1, y)] < cost[(col, y)] {
            col -= 1;
        }
        if col < maxwidth && cost[(col + 1, y)] < cost[(col, y)] {
            col += 1;
        }
        seam[y as usize] = col;
    }
    seam
}

fn minimum_seam<L: Lattice<Cell = u32>>(energy: &L) -> Result<(Vec<u32>, u64)> {
    if energy.is_empty() {
        return Err(Error::EmptyImage {
            width: energy.width(),
            height: energy.height(),
        });
    }
    let cost = cumulative_cost(energy);
    let seam = trace_seam(&cost);
    let total = cost[(seam[seam.len() - 1], cost.height() - 1)];
    Ok((seam, total))
}

/// Given an energy map, return the seam of x-coordinates, one per row,
/// whose pixels sum to the least energy from top to bottom.
pub fn find_vertical_seam(energy: &EnergyMap) -> Result<Seam> {
    let (indices, total) = minimum_seam(energy)?;
    trace!(anchor = indices[indices.len() - 1], cost = total, "vertical seam");
    Ok(Seam::new(Axis::Vertical, indices))
}

/// Given an energy map, return the seam of y-coordinates, one per
/// column, whose pixels sum to the least energy from left to right.
pub fn find_horizontal_seam(energy: &EnergyMap) -> Result<Seam> {
    let (indices, total) = minimum_seam(&Flipper::new(energy))?;
    trace!(anchor = indices[indices.len() - 1], cost = total, "horizontal seam");
    Ok(Seam::new(Axis::Horizontal, indices))
}

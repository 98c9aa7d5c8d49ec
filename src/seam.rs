// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seams: one coordinate per row, or one per column.

use crate::error::{Error, Result};
use std::fmt;

/// The direction a seam runs.  A vertical seam runs top to bottom and
/// removing it narrows the image; a horizontal seam runs left to right
/// and removing it shortens the image.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::Vertical => "vertical",
            Axis::Horizontal => "horizontal",
        })
    }
}

/// An 8-connected path across an image.
///
/// For a vertical seam, `indices[y]` is the column removed from row
/// `y`; for a horizontal seam, `indices[x]` is the row removed from
/// column `x`.  A seam is checked against the image every time it is
/// used, so a seam computed for one image can't quietly corrupt
/// another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seam {
    axis: Axis,
    indices: Vec<u32>,
}

impl Seam {
    pub fn new(axis: Axis, indices: Vec<u32>) -> Self {
        Seam { axis, indices }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.indices
    }

    pub fn into_inner(self) -> Vec<u32> {
        self.indices
    }

    /// The (x, y) image coordinate of every pixel on the seam.
    pub fn coordinates(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let axis = self.axis;
        self.indices
            .iter()
            .zip(0u32..)
            .map(move |(&index, step)| match axis {
                Axis::Vertical => (index, step),
                Axis::Horizontal => (step, index),
            })
    }

    /// Confirm this seam can be removed from a `width` x `height`
    /// image along `axis`: right direction, right length, in range,
    /// and connected.
    pub fn check_against(&self, axis: Axis, width: u32, height: u32) -> Result<()> {
        if self.axis != axis {
            return Err(Error::AxisMismatch {
                expected: axis,
                actual: self.axis,
            });
        }

        let (span, bound) = match axis {
            Axis::Vertical => (height, width),
            Axis::Horizontal => (width, height),
        };

        if self.indices.len() != span as usize {
            return Err(Error::SeamLength {
                axis,
                expected: span as usize,
                actual: self.indices.len(),
            });
        }

        if let Some((position, &index)) = self
            .indices
            .iter()
            .enumerate()
            .find(|(_, &index)| index >= bound)
        {
            return Err(Error::SeamOutOfRange {
                position,
                index,
                bound,
            });
        }

        match self
            .indices
            .windows(2)
            .position(|pair| pair[0].abs_diff(pair[1]) > 1)
        {
            Some(position) => Err(Error::SeamDisconnected { position }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_follow_the_axis() {
        let seam = Seam::new(Axis::Vertical, vec![2, 1, 1]);
        assert_eq!(seam.coordinates().collect::<Vec<_>>(), [(2, 0), (1, 1), (1, 2)]);

        let seam = Seam::new(Axis::Horizontal, vec![0, 1]);
        assert_eq!(seam.coordinates().collect::<Vec<_>>(), [(0, 0), (1, 1)]);
    }

    #[test]
    fn a_good_seam_checks_out() {
        let seam = Seam::new(Axis::Vertical, vec![0, 1, 2, 2]);
        assert!(seam.check_against(Axis::Vertical, 3, 4).is_ok());
    }

    #[test]
    fn rejects_the_wrong_direction() {
        let seam = Seam::new(Axis::Horizontal, vec![0, 0, 0]);
        assert!(matches!(
            seam.check_against(Axis::Vertical, 3, 3),
            Err(Error::AxisMismatch { .. })
        ));
    }

    #[test]
    fn rejects_the_wrong_length() {
        let seam = Seam::new(Axis::Vertical, vec![0, 0]);
        assert!(matches!(
            seam.check_against(Axis::Vertical, 3, 3),
            Err(Error::SeamLength {
                expected: 3,
                actual: 2,
                ..
            })
        ));
    }

    #[test]
    fn rejects_out_of_range_indices() {
        let seam = Seam::new(Axis::Horizontal, vec![1, 2, 2]);
        assert!(matches!(
            seam.check_against(Axis::Horizontal, 3, 2),
            Err(Error::SeamOutOfRange {
                position: 1,
                index: 2,
                bound: 2
            })
        ));
    }

    #[test]
    fn rejects_jumps() {
        let seam = Seam::new(Axis::Vertical, vec![0, 2, 2]);
        assert!(matches!(
            seam.check_against(Axis::Vertical, 3, 3),
            Err(Error::SeamDisconnected { position: 0 })
        ));
    }
}

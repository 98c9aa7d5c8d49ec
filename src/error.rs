// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors for the seam carver.
//!
//! Everything the core can reject is a precondition failure: the
//! algorithms are deterministic, so nothing here is worth retrying.

use crate::seam::Axis;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the seam carver.
#[derive(Error, Debug)]
pub enum Error {
    /// An image or energy map with no pixels along one axis.
    #[error("cannot carve an empty image ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    /// A carve target with a zero dimension.
    #[error("target size {width}x{height} must be at least 1x1")]
    InvalidTarget { width: u32, height: u32 },

    /// A seam handed to the remover for the other direction.
    #[error("expected a {expected} seam, got a {actual} seam")]
    AxisMismatch { expected: Axis, actual: Axis },

    /// The seam does not span the image it is being applied to.
    #[error("{axis} seam has {actual} entries, image needs {expected}")]
    SeamLength {
        axis: Axis,
        expected: usize,
        actual: usize,
    },

    /// A seam index outside the image.
    #[error("seam entry {position} is {index}, must be below {bound}")]
    SeamOutOfRange {
        position: usize,
        index: u32,
        bound: u32,
    },

    /// Two consecutive seam entries more than one pixel apart.
    #[error("seam is not 8-connected between entries {position} and {}", .position + 1)]
    SeamDisconnected { position: usize },

    /// Removing a seam would leave an image with no pixels.
    #[error("image is one pixel across; a {axis} seam cannot be removed")]
    CannotShrink { axis: Axis },

    /// Failed to load an image file.
    #[error("failed to load image from {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to save an image file.
    #[error("failed to save image to {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A worker thread panicked while computing energy.
    #[error("energy worker thread panicked")]
    Worker,
}

/// Result type alias for seam carving operations.
pub type Result<T> = std::result::Result<T, Error>;

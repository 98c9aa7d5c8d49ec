// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! # seamcarve
//!
//! Content-aware image shrinking by seam carving.  An image loses its
//! least interesting column (or row) at a time: the connected path of
//! pixels with the lowest total energy, where energy is the strength of
//! the local color gradient.
//!
//! ```no_run
//! # fn main() -> seamcarve::Result<()> {
//! let image = seamcarve::imageio::load_image("wide.png")?;
//! let narrow = seamcarve::carve_to_size(&image, 300, image.height())?;
//! seamcarve::imageio::save_image(&narrow, "narrow.png")?;
//! # Ok(())
//! # }
//! ```

// Rust's `if` is already an expression, but `cargo fmt` spreads every
// one over five lines, and the border-handling rules of the energy and
// seam code read much better as a table of one-liners.
#[doc(hidden)]
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}

pub mod energy;
pub mod error;
pub mod flipper;
pub mod imageio;
pub mod seam;
pub mod seamcarver;
pub mod seamfinder;
pub mod seamremoval;
pub mod twodmap;
pub mod visualize;

pub use energy::calculate_energy;
pub use error::{Error, Result};
pub use seam::{Axis, Seam};
pub use seamcarver::{carve_to_size, SeamCarver, SeamObserver};
pub use seamfinder::{find_horizontal_seam, find_vertical_seam};
pub use seamremoval::{remove_horizontal_seam, remove_vertical_seam};
pub use twodmap::{EnergyMap, Lattice};

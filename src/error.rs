// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The ways a carve request can be refused.
//!
//! Every one of these is a construction error on the caller's side;
//! the arithmetic inside the engine is total over valid inputs.
//! Cancellation is *not* an error and lives in
//! [`Carved`](crate::seamcarver::Carved) instead.

use failure::Fail;

#[derive(Debug, Clone, PartialEq, Eq, Fail)]
pub enum CarveError {
    /// The flat buffer does not hold exactly `width × height` cells.
    #[fail(
        display = "buffer holds {} values, but the dimensions require {}",
        actual, expected
    )]
    BufferSize { expected: usize, actual: usize },

    /// An image with no rows (or no columns) has no seam to find.
    #[fail(display = "cannot carve an empty {}x{} image", width, height)]
    EmptyImage { width: u32, height: u32 },

    /// Carving would drive the width to zero or below.
    #[fail(
        display = "cannot remove {} seams from an image {} pixels wide",
        lines, width
    )]
    TooManySeams { lines: u32, width: u32 },

    /// A seam must name exactly one column per row.
    #[fail(display = "seam has {} entries for an image {} rows tall", rows, height)]
    SeamLength { rows: usize, height: u32 },

    /// A seam names a column that is not in the image.
    #[fail(
        display = "seam row {} names column {}, but the image is {} pixels wide",
        row, column, width
    )]
    SeamColumn { row: usize, column: u32, width: u32 },

    /// Not one of the energy storage models.
    #[fail(
        display = "unknown energy model {:?}; expected \"saturating\" or \"magnitude\"",
        _0
    )]
    UnknownEnergyModel(String),

    /// The background carving thread has gone away.
    #[fail(display = "the carving worker has shut down")]
    WorkerGone,
}

pub type Result<T> = std::result::Result<T, CarveError>;

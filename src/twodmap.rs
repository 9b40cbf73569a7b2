// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! An addressable two-dimensional field.
//!
//! Every intermediate product of the carver is one of these: the
//! luminance field (`u8`), the energy field and cost table (`u32`),
//! and the direction table (`i8`).

use crate::error::{CarveError, Result};
use std::ops::{Index, IndexMut};

/// A row-major grid of `width × height` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    width: u32,
    height: u32,
    cells: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// Define a new map with every cell at its default value.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            cells: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major vector.  The vector must hold exactly
    /// one value per cell.
    pub fn from_vec(width: u32, height: u32, cells: Vec<P>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if cells.len() != expected {
            return Err(CarveError::BufferSize {
                expected,
                actual: cells.len(),
            });
        }
        Ok(TwoDimensionalMap {
            width,
            height,
            cells,
        })
    }

    // Keep the index math in exactly one place and never, ever mess
    // with it anywhere else.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// One full row, left to right.
    pub fn row(&self, y: u32) -> &[P] {
        let start = self.get_index(0, y);
        &self.cells[start..start + self.width as usize]
    }

    pub fn as_slice(&self) -> &[P] {
        &self.cells
    }

    pub fn into_vec(self) -> Vec<P> {
        self.cells
    }

    /// Produce a fresh map one column narrower, skipping the column
    /// named by `seam` in each row.  `seam` must hold one in-bounds
    /// column per row.
    pub fn without_seam(&self, seam: &[u32]) -> Result<Self> {
        check_seam(seam, self.width, self.height)?;
        Ok(self.cut_seam(seam))
    }

    // The carver only ever cuts seams it found in a map of the same
    // shape, so it skips the check.
    pub(crate) fn cut_seam(&self, seam: &[u32]) -> Self {
        let width = self.width - 1;
        let mut cells = Vec::with_capacity(width as usize * self.height as usize);
        for (y, &skip) in (0..self.height).zip(seam) {
            let row = self.row(y);
            let skip = skip as usize;
            cells.extend_from_slice(&row[..skip]);
            cells.extend_from_slice(&row[skip + 1..]);
        }
        TwoDimensionalMap {
            width,
            height: self.height,
            cells,
        }
    }
}

/// Refuse a seam that does not name exactly one column, inside
/// `0..width`, for each of `height` rows.  An empty image has no seam.
pub fn check_seam(seam: &[u32], width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(CarveError::EmptyImage { width, height });
    }
    if seam.len() != height as usize {
        return Err(CarveError::SeamLength {
            rows: seam.len(),
            height,
        });
    }
    if let Some((row, &column)) = seam.iter().enumerate().find(|&(_, &c)| c >= width) {
        return Err(CarveError::SeamColumn { row, column, width });
    }
    Ok(())
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.cells[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}

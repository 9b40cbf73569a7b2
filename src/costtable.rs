// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The cumulative cost table and its companion direction table.
//!
//! Row 0 of the cost table is row 0 of the energy field.  Every later
//! cell holds its own energy plus the cheapest of the (up to) three
//! cells touching it in the row above, and the direction table records
//! which of those three won as a column offset of −1, 0 or +1.
//!
//! Ties go to the first candidate examined, in the fixed order −1, 0,
//! +1: the comparison against the running minimum is strictly
//! less-than.  The same rule picks the leftmost cheapest column on the
//! bottom row.

use crate::twodmap::TwoDimensionalMap;
use log::trace;

const OFFSETS: [i8; 3] = [-1, 0, 1];

#[derive(Debug)]
pub struct CostTable {
    cost: TwoDimensionalMap<u32>,
    direction: TwoDimensionalMap<i8>,
}

impl CostTable {
    /// Accumulate an energy field, top to bottom.
    pub fn build(energy: &TwoDimensionalMap<u32>) -> Self {
        let (width, height) = energy.dimensions();
        let mut cost = TwoDimensionalMap::new(width, height);
        let mut direction = TwoDimensionalMap::new(width, height);
        trace!("building {}x{} cost table", width, height);

        if height == 0 {
            return CostTable { cost, direction };
        }
        for x in 0..width {
            cost[(x, 0)] = energy[(x, 0)];
        }

        for y in 1..height {
            for x in 0..width {
                let mut best: Option<(u32, i8)> = None;
                for &dir in OFFSETS.iter() {
                    let above = i64::from(x) + i64::from(dir);
                    if above < 0 || above >= i64::from(width) {
                        continue;
                    }
                    let candidate = cost[(above as u32, y - 1)].saturating_add(energy[(x, y)]);
                    match best {
                        Some((min, _)) if candidate >= min => {}
                        _ => best = Some((candidate, dir)),
                    }
                }
                // Every column has at least its straight-up neighbour.
                let (min, dir) = best.unwrap_or((energy[(x, y)], 0));
                cost[(x, y)] = min;
                direction[(x, y)] = dir;
            }
        }

        CostTable { cost, direction }
    }

    pub fn cost(&self) -> &TwoDimensionalMap<u32> {
        &self.cost
    }

    pub fn direction(&self) -> &TwoDimensionalMap<i8> {
        &self.direction
    }

    /// The leftmost column holding the minimum of the bottom row, or
    /// `None` for a table with no cells.
    pub fn cheapest_column(&self) -> Option<u32> {
        let (width, height) = self.cost.dimensions();
        if width == 0 || height == 0 {
            return None;
        }
        let bottom = self.cost.row(height - 1);
        let mut best = 0;
        for (x, &c) in bottom.iter().enumerate() {
            if c < bottom[best] {
                best = x;
            }
        }
        Some(best as u32)
    }

    /// Follow the direction table from `column` on the bottom row up
    /// to row 0, returning one column per row, top to bottom.
    ///
    /// # Panics
    ///
    /// If `column` is not a column of the table.
    pub fn backtrack(&self, column: u32) -> Vec<u32> {
        let height = self.cost.height() as usize;
        let mut seam = vec![0u32; height];
        let mut x = column;
        for y in (0..height).rev() {
            seam[y] = x;
            if y > 0 {
                let dir = self.direction[(x, y as u32)];
                x = (i64::from(x) + i64::from(dir)) as u32;
            }
        }
        seam
    }

    /// The cheapest seam through the table, or `None` if it is empty.
    pub fn seam(&self) -> Option<Vec<u32>> {
        self.cheapest_column().map(|column| self.backtrack(column))
    }
}

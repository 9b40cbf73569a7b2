// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! How the carver asks for the next seam.

use crate::costtable::CostTable;
use crate::energy::{calculate_energy, EnergyModel};
use crate::twodmap::TwoDimensionalMap;

/// This trait defines how we will return seams from an image.  It's a
/// primitive interface, just enough to make room for more than one
/// seam finder.
pub trait SeamFinder {
    /// The column to remove from each row, top to bottom, or `None`
    /// if the image is empty.
    fn find_vertical_seam(&self) -> Option<Vec<u32>>;
}

/// The Laplacian seam finder: energy → cost table → cheapest path.
/// Every intermediate table lives only for the duration of one call.
pub struct LaplacianSeams<'a> {
    luma: &'a TwoDimensionalMap<u8>,
    model: EnergyModel,
}

impl<'a> LaplacianSeams<'a> {
    pub fn new(luma: &'a TwoDimensionalMap<u8>, model: EnergyModel) -> Self {
        LaplacianSeams { luma, model }
    }
}

impl<'a> SeamFinder for LaplacianSeams<'a> {
    fn find_vertical_seam(&self) -> Option<Vec<u32>> {
        let energy = calculate_energy(self.luma, self.model);
        CostTable::build(&energy).seam()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thin_bright_line_saturates_to_zero() {
        // A one-pixel white line in a black field.  The line's own
        // response is negative and saturates to zero, its neighbours
        // saturate to 255, and the far column is flat.  The leftmost
        // zero column is the line itself.
        #[rustfmt::skip]
        let luma = TwoDimensionalMap::from_vec(4, 3, vec![
            0, 255, 0, 0,
            0, 255, 0, 0,
            0, 255, 0, 0,
        ]).unwrap();
        let energy = calculate_energy(&luma, EnergyModel::Saturating);
        assert_eq!(energy.row(0), &[255, 0, 255, 0]);
        let seam = LaplacianSeams::new(&luma, EnergyModel::Saturating).find_vertical_seam();
        assert_eq!(seam, Some(vec![1, 1, 1]));
    }

    #[test]
    fn middle_of_single_row_is_cheapest() {
        let luma = TwoDimensionalMap::from_vec(3, 1, vec![10, 200, 10]).unwrap();
        let seam = LaplacianSeams::new(&luma, EnergyModel::Saturating).find_vertical_seam();
        assert_eq!(seam, Some(vec![1]));
    }
}

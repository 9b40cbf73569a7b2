// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! Given a luminance field, run the discrete Laplacian over it: the
//! eight neighbours of every cell weighted +1 and the cell itself
//! weighted −8.  Coordinates that fall off the edge are clamped to the
//! nearest valid row or column, so border cells see themselves (or
//! their edge neighbours) more than once.
//!
//! The classic model stores the result in an 8-bit saturating cell,
//! which throws away every negative response and everything above
//! 255.  That loss shapes which seam wins, so it is the default and is
//! reproduced bit for bit.  [`EnergyModel::Magnitude`] keeps the
//! absolute response instead, for callers that want the wider range.

use crate::cq;
use crate::error::CarveError;
use crate::twodmap::TwoDimensionalMap;
use itertools::iproduct;
use num_traits::clamp;
use std::str::FromStr;

/// How the raw Laplacian response is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyModel {
    /// Saturate into 0..=255.  Negative responses become zero.
    Saturating,
    /// Keep `|response|`, 0..=2040.
    Magnitude,
}

impl Default for EnergyModel {
    fn default() -> Self {
        EnergyModel::Saturating
    }
}

impl FromStr for EnergyModel {
    type Err = CarveError;

    fn from_str(name: &str) -> Result<Self, CarveError> {
        match name {
            "saturating" => Ok(EnergyModel::Saturating),
            "magnitude" => Ok(EnergyModel::Magnitude),
            other => Err(CarveError::UnknownEnergyModel(other.to_string())),
        }
    }
}

impl EnergyModel {
    #[inline]
    fn store(self, response: i32) -> u32 {
        match self {
            EnergyModel::Saturating => clamp(response, 0, 255) as u32,
            EnergyModel::Magnitude => response.abs() as u32,
        }
    }
}

/// The unstored Laplacian response at (x, y).
///
/// # Panics
///
/// If (x, y) is not a cell of `luma`; in particular, an empty field
/// has no response anywhere.
pub fn laplacian(luma: &TwoDimensionalMap<u8>, x: u32, y: u32) -> i32 {
    let (mw, mh) = (luma.width() - 1, luma.height() - 1);
    let xs = [cq!(x == 0, 0, x - 1), x, cq!(x >= mw, mw, x + 1)];
    let ys = [cq!(y == 0, 0, y - 1), y, cq!(y >= mh, mh, y + 1)];

    iproduct!(ys.iter().enumerate(), xs.iter().enumerate()).fold(
        0i32,
        |acc, ((j, &ny), (i, &nx))| {
            let v = i32::from(luma[(nx, ny)]);
            acc + cq!(i == 1 && j == 1, -8 * v, v)
        },
    )
}

// Luminance Field -> Energy Field

/// Compute the energy of every cell of a luminance field.
pub fn calculate_energy(luma: &TwoDimensionalMap<u8>, model: EnergyModel) -> TwoDimensionalMap<u32> {
    let (width, height) = luma.dimensions();
    let mut emap = TwoDimensionalMap::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        emap[(x, y)] = model.store(laplacian(luma, x, y));
    }
    emap
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Render an energy field as a greyscale picture, for eyeballing what
//! the carver is about to cut.

use crate::twodmap::TwoDimensionalMap;
use image::{GrayImage, Luma};
use itertools::iproduct;
use num_traits::clamp;

/// Scale the field so its maximum lands on 255.  An all-zero field
/// stays black.
pub fn energy_to_image(energy: &TwoDimensionalMap<u32>) -> GrayImage {
    let (width, height) = energy.dimensions();
    let factor = u64::from(energy.as_slice().iter().cloned().max().unwrap_or(0).max(1));
    let mut out = GrayImage::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        let c = u64::from(energy[(x, y)]) * 255 / factor;
        out.put_pixel(x, y, Luma([clamp(c, 0, 255) as u8]));
    }
    out
}

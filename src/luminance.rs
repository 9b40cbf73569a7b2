// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Reduce an RGBA buffer to an 8-bit luminance field.
//!
//! Computed once, up front.  After that the field is narrowed in
//! lock-step with the pixel buffer; removing a seam never changes the
//! colour of a surviving pixel, so there is nothing to recompute.

use crate::pixels::RgbaBuffer;
use crate::twodmap::TwoDimensionalMap;

// ITU-R BT.709 relative luminance weights.
const RED: f64 = 0.2126;
const GREEN: f64 = 0.7152;
const BLUE: f64 = 0.0722;

/// Store a real value the way an 8-bit clamped cell does: NaN and
/// anything at or below zero become 0, anything at or above 255
/// becomes 255, and the rest round to nearest with ties to even.
pub fn clamp_to_u8(v: f64) -> u8 {
    if v.is_nan() || v <= 0.0 {
        return 0;
    }
    if v >= 255.0 {
        return 255;
    }
    v.round_ties_even() as u8
}

/// The luminance of a single RGBA pixel.  Alpha is ignored.
#[inline]
pub fn luma_of(pixel: &[u8]) -> u8 {
    clamp_to_u8(RED * f64::from(pixel[0]) + GREEN * f64::from(pixel[1]) + BLUE * f64::from(pixel[2]))
}

/// Derive the luminance field for a whole buffer.
pub fn luminance(image: &RgbaBuffer) -> TwoDimensionalMap<u8> {
    let (width, height) = image.dimensions();
    let mut luma = TwoDimensionalMap::new(width, height);
    for (i, pixel) in image.pixels().enumerate() {
        let (x, y) = ((i % width as usize) as u32, (i / width as usize) as u32);
        luma[(x, y)] = luma_of(pixel);
    }
    luma
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_and_rounds_half_to_even() {
        assert_eq!(clamp_to_u8(-3.0), 0);
        assert_eq!(clamp_to_u8(f64::NAN), 0);
        assert_eq!(clamp_to_u8(300.0), 255);
        assert_eq!(clamp_to_u8(1.5), 2);
        assert_eq!(clamp_to_u8(2.5), 2);
        assert_eq!(clamp_to_u8(2.51), 3);
        assert_eq!(clamp_to_u8(7.49), 7);
    }

    #[test]
    fn primaries_follow_bt709() {
        assert_eq!(luma_of(&[255, 0, 0, 255]), 54); // 54.213
        assert_eq!(luma_of(&[0, 255, 0, 255]), 182); // 182.376
        assert_eq!(luma_of(&[0, 0, 255, 255]), 18); // 18.411
        assert_eq!(luma_of(&[255, 255, 255, 0]), 255);
        assert_eq!(luma_of(&[0, 0, 0, 255]), 0);
    }

    #[test]
    fn field_matches_buffer_layout() {
        let buffer = RgbaBuffer::from_raw(
            2,
            1,
            vec![0, 0, 0, 255, 255, 255, 255, 255],
        )
        .unwrap();
        let luma = luminance(&buffer);
        assert_eq!(luma.dimensions(), (2, 1));
        assert_eq!(luma.as_slice(), &[0, 255]);
    }
}

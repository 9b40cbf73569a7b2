// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The pixel buffer handed to, and returned from, the carver.
//!
//! A flat, row-major run of RGBA bytes.  The carver makes no
//! assumption about where the bytes came from or where they go; the
//! `image` conversions at the bottom are the glue the CLI uses.

use crate::error::{CarveError, Result};
use crate::twodmap::check_seam;
use image::RgbaImage;

/// Bytes per pixel: red, green, blue, alpha.
pub const CHANNELS: usize = 4;

/// An owned RGBA image.  `data.len() == 4 * width * height`, always.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RgbaBuffer {
    /// Take ownership of a row-major RGBA byte vector, refusing it if
    /// the length disagrees with the dimensions.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(CarveError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(RgbaBuffer {
            width,
            height,
            data,
        })
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

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// The four channels of the pixel at (x, y).
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * CHANNELS;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Iterate over the pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(CHANNELS)
    }

    /// Produce a new buffer one column narrower, dropping the pixel
    /// named by `seam` from each row.  Relative order and all four
    /// channels of the survivors are preserved.  A seam without exactly
    /// one in-bounds column per row is refused.
    pub fn without_seam(&self, seam: &[u32]) -> Result<RgbaBuffer> {
        check_seam(seam, self.width, self.height)?;
        Ok(self.cut_seam(seam))
    }

    pub(crate) fn cut_seam(&self, seam: &[u32]) -> RgbaBuffer {
        let stride = self.width as usize * CHANNELS;
        let width = self.width - 1;
        let mut data = Vec::with_capacity(width as usize * self.height as usize * CHANNELS);
        for (row, &skip) in self.data.chunks_exact(stride).zip(seam) {
            let cut = skip as usize * CHANNELS;
            data.extend_from_slice(&row[..cut]);
            data.extend_from_slice(&row[cut + CHANNELS..]);
        }
        RgbaBuffer {
            width,
            height: self.height,
            data,
        }
    }
}

impl From<RgbaImage> for RgbaBuffer {
    fn from(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        RgbaBuffer {
            width,
            height,
            data: image.into_raw(),
        }
    }
}

impl From<RgbaBuffer> for RgbaImage {
    fn from(buffer: RgbaBuffer) -> Self {
        RgbaImage::from_raw(buffer.width, buffer.height, buffer.data)
            .expect("RgbaBuffer always holds 4 * width * height bytes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(width: u32, height: u32) -> RgbaBuffer {
        let data = (0..width * height)
            .flat_map(|i| vec![i as u8, i as u8, i as u8, 255])
            .collect();
        RgbaBuffer::from_raw(width, height, data).unwrap()
    }

    #[test]
    fn refuses_mismatched_lengths() {
        assert_eq!(
            RgbaBuffer::from_raw(2, 2, vec![0; 15]),
            Err(CarveError::BufferSize {
                expected: 16,
                actual: 15
            })
        );
    }

    #[test]
    fn removes_one_pixel_per_row() {
        let narrower = numbered(3, 2).without_seam(&[2, 0]).unwrap();
        assert_eq!(narrower.dimensions(), (2, 2));
        let reds: Vec<u8> = narrower.pixels().map(|p| p[0]).collect();
        assert_eq!(reds, vec![0, 1, 4, 5]);
        assert_eq!(narrower.pixel(1, 1), [5, 5, 5, 255]);
    }

    #[test]
    fn short_or_wide_seams_are_refused() {
        let buffer = RgbaBuffer::from_raw(3, 2, vec![7; 24]).unwrap();
        assert_eq!(
            buffer.without_seam(&[0]),
            Err(CarveError::SeamLength { rows: 1, height: 2 })
        );
        assert_eq!(
            buffer.without_seam(&[5, 0]),
            Err(CarveError::SeamColumn {
                row: 0,
                column: 5,
                width: 3
            })
        );
        let narrower = buffer.without_seam(&[0, 2]).unwrap();
        assert_eq!(narrower.as_raw().len(), 2 * 2 * 4);
    }

    #[test]
    fn image_round_trip_keeps_bytes() {
        let buffer = numbered(4, 3);
        let image: RgbaImage = buffer.clone().into();
        assert_eq!(image.dimensions(), (4, 3));
        assert_eq!(RgbaBuffer::from(image), buffer);
    }
}

// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main driver
//!
//! Narrow an image one vertical seam at a time.  Each iteration runs
//! energy → cost table → path → carve over the previous iteration's
//! output and replaces the pixel buffer and luminance field with
//! fresh, one-column-narrower copies.
//!
//! The work can be driven to completion in one call, stepped by hand,
//! or run against a staleness predicate that is polled between
//! iterations.  A cancelled run hands back the last completed buffer;
//! no partially carved seam is ever observable.

use crate::energy::EnergyModel;
use crate::error::{CarveError, Result};
use crate::luminance::luminance;
use crate::pixels::RgbaBuffer;
use crate::seamfinder::{LaplacianSeams, SeamFinder};
use crate::twodmap::TwoDimensionalMap;
use log::{debug, info};

/// Knobs for a carve run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarveOptions {
    pub energy: EnergyModel,
}

impl CarveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_energy_model(mut self, energy: EnergyModel) -> Self {
        self.energy = energy;
        self
    }
}

/// How a run ended.  Both variants carry a whole, valid buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Carved {
    /// Every requested seam was removed.
    Complete(RgbaBuffer),
    /// The staleness predicate fired after `seams_removed` seams.
    Cancelled {
        buffer: RgbaBuffer,
        seams_removed: u32,
    },
}

impl Carved {
    pub fn is_complete(&self) -> bool {
        match self {
            Carved::Complete(_) => true,
            Carved::Cancelled { .. } => false,
        }
    }

    pub fn buffer(&self) -> &RgbaBuffer {
        match self {
            Carved::Complete(buffer) | Carved::Cancelled { buffer, .. } => buffer,
        }
    }

    pub fn into_buffer(self) -> RgbaBuffer {
        match self {
            Carved::Complete(buffer) | Carved::Cancelled { buffer, .. } => buffer,
        }
    }
}

/// Owns the image being carved and its luminance field, and knows how
/// many seams remain to be taken out.
#[derive(Debug)]
pub struct SeamCarver {
    pixels: RgbaBuffer,
    luma: TwoDimensionalMap<u8>,
    remaining: u32,
    removed: u32,
    options: CarveOptions,
}

impl SeamCarver {
    /// Prepare to remove `lines` seams with the default options.
    pub fn new(pixels: RgbaBuffer, lines: u32) -> Result<Self> {
        Self::with_options(pixels, lines, CarveOptions::default())
    }

    /// Prepare to remove `lines` seams.  Refuses empty images and any
    /// request that would leave the image zero pixels wide.
    pub fn with_options(pixels: RgbaBuffer, lines: u32, options: CarveOptions) -> Result<Self> {
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(CarveError::EmptyImage { width, height });
        }
        if lines >= width {
            return Err(CarveError::TooManySeams { lines, width });
        }
        let luma = luminance(&pixels);
        Ok(SeamCarver {
            pixels,
            luma,
            remaining: lines,
            removed: 0,
            options,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Seams still to be removed.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Seams removed so far.
    pub fn removed(&self) -> u32 {
        self.removed
    }

    pub fn is_done(&self) -> bool {
        self.remaining == 0
    }

    pub fn buffer(&self) -> &RgbaBuffer {
        &self.pixels
    }

    pub fn luminance(&self) -> &TwoDimensionalMap<u8> {
        &self.luma
    }

    /// Remove one seam, returning the path that was cut, or `None`
    /// when there is nothing left to do.
    pub fn step(&mut self) -> Option<Vec<u32>> {
        if self.remaining == 0 {
            return None;
        }
        let seam = LaplacianSeams::new(&self.luma, self.options.energy).find_vertical_seam()?;
        self.pixels = self.pixels.cut_seam(&seam);
        self.luma = self.luma.cut_seam(&seam);
        self.remaining -= 1;
        self.removed += 1;
        debug!(
            "carved seam {} (now {}x{})",
            self.removed,
            self.pixels.width(),
            self.pixels.height()
        );
        Some(seam)
    }

    /// Drive the carver to the end, polling `is_stale` at every
    /// checkpoint.  A checkpoint falls before each iteration's energy
    /// map is computed; the first `true` ends the run with whatever
    /// whole seams have been removed so far.
    pub fn run<F>(mut self, mut is_stale: F) -> Carved
    where
        F: FnMut() -> bool,
    {
        while !self.is_done() {
            if is_stale() {
                info!(
                    "carve cancelled after {} seams, {} left",
                    self.removed, self.remaining
                );
                return Carved::Cancelled {
                    seams_removed: self.removed,
                    buffer: self.pixels,
                };
            }
            if self.step().is_none() {
                break;
            }
        }
        info!(
            "carved {} seams, result is {}x{}",
            self.removed,
            self.pixels.width(),
            self.pixels.height()
        );
        Carved::Complete(self.pixels)
    }

    pub fn into_buffer(self) -> RgbaBuffer {
        self.pixels
    }
}

/// Stepping a carver yields the removed seams in order.
impl Iterator for SeamCarver {
    type Item = Vec<u32>;

    fn next(&mut self) -> Option<Vec<u32>> {
        self.step()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining as usize, Some(self.remaining as usize))
    }
}

/// Remove `lines` seams from `buffer` with no cancellation.
pub fn carve(buffer: RgbaBuffer, lines: u32) -> Result<RgbaBuffer> {
    Ok(SeamCarver::new(buffer, lines)?.run(|| false).into_buffer())
}

/// Remove `lines` seams from `buffer`, giving up early if `is_stale`
/// says so at a checkpoint.
pub fn carve_cancellable<F>(buffer: RgbaBuffer, lines: u32, is_stale: F) -> Result<Carved>
where
    F: FnMut() -> bool,
{
    Ok(SeamCarver::new(buffer, lines)?.run(is_stale))
}

/// The whole engine behind one call: raw row-major RGBA bytes in,
/// a buffer `lines` columns narrower out.
pub fn seamcarve<F>(
    data: Vec<u8>,
    width: u32,
    height: u32,
    lines: u32,
    options: CarveOptions,
    is_stale: F,
) -> Result<Carved>
where
    F: FnMut() -> bool,
{
    let buffer = RgbaBuffer::from_raw(width, height, data)?;
    Ok(SeamCarver::with_options(buffer, lines, options)?.run(is_stale))
}

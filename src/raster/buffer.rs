use rayon::prelude::*;

use crate::foundation::{
    core::{Canvas, Rgba8},
    error::{PanofoldError, PanofoldResult},
};

/// Row-major straight RGBA8 pixel grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a `width x height` buffer with every pixel set to `fill`.
    ///
    /// The allocation is fallible: a page that cannot be reserved is reported as
    /// [`PanofoldError::Allocation`] instead of aborting the process.
    pub fn new_filled(width: u32, height: u32, fill: Rgba8) -> PanofoldResult<Self> {
        let len = byte_len(width, height)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|e| {
            PanofoldError::allocation(format!("{width}x{height} rgba8 buffer: {e}"))
        })?;
        for _ in 0..(len / 4) {
            data.extend_from_slice(&fill);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> PanofoldResult<Self> {
        let len = byte_len(width, height)?;
        if data.len() != len {
            return Err(PanofoldError::invalid_parameter(format!(
                "rgba8 buffer length {} does not match {width}x{height}",
                data.len()
            )));
        }
        Ok(Self {
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

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.width as usize * 4
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.offset(x, y);
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Writes `px` at `(x, y)`; returns `false` when the position is off the grid.
    pub fn put(&mut self, x: u32, y: u32, px: Rgba8) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let i = self.offset(x, y);
        self.data[i..i + 4].copy_from_slice(&px);
        true
    }

    pub fn fill(&mut self, px: Rgba8) {
        for dst in self.data.chunks_exact_mut(4) {
            dst.copy_from_slice(&px);
        }
    }

    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.stride();
        &self.data[start..start + self.stride()]
    }

    /// Disjoint mutable rows, top to bottom. Empty when the buffer has no columns.
    pub fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, u8> {
        let stride = self.stride().max(4);
        self.data.chunks_exact_mut(stride)
    }

    /// Parallel counterpart of [`PixelBuffer::rows_mut`].
    pub fn par_rows_mut(&mut self) -> rayon::slice::ChunksExactMut<'_, u8> {
        let stride = self.stride().max(4);
        self.data.par_chunks_exact_mut(stride)
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }
}

/// Writes `px` into column `x` of a row slice obtained from [`PixelBuffer::rows_mut`].
pub(crate) fn put_in_row(row: &mut [u8], x: usize, px: Rgba8) {
    let i = x * 4;
    if let Some(dst) = row.get_mut(i..i + 4) {
        dst.copy_from_slice(&px);
    }
}

fn byte_len(width: u32, height: u32) -> PanofoldResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or_else(|| PanofoldError::allocation(format!("{width}x{height} overflows usize")))
}

/// Decoded panorama. Immutable and never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceImage {
    pixels: PixelBuffer,
}

impl SourceImage {
    pub fn new(pixels: PixelBuffer) -> PanofoldResult<Self> {
        if pixels.canvas().is_empty() {
            return Err(PanofoldError::invalid_parameter(format!(
                "source image must be non-empty (got {}x{})",
                pixels.width(),
                pixels.height()
            )));
        }
        Ok(Self { pixels })
    }

    pub fn from_rgba_image(img: image::RgbaImage) -> PanofoldResult<Self> {
        let (width, height) = img.dimensions();
        Self::new(PixelBuffer::from_rgba8(width, height, img.into_raw())?)
    }

    /// Single-color panorama, mostly useful for calibration prints and tests.
    pub fn solid(width: u32, height: u32, px: Rgba8) -> PanofoldResult<Self> {
        Self::new(PixelBuffer::new_filled(width, height, px)?)
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/buffer.rs"]
mod tests;

use std::{io::Cursor, path::Path};

use image::ImageEncoder as _;

use crate::{
    foundation::{
        core::{Canvas, Rgba8},
        error::{PanofoldError, PanofoldResult},
    },
    overlay::guides::GuideLineOverlay,
    project::{NetProjector, cube::CrossEdges},
    raster::buffer::PixelBuffer,
};

/// A finished page: straight RGBA8, fully opaque when rendered on an opaque background.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetFrame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl NetFrame {
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.data.get(i..i + 4).map(|px| [px[0], px[1], px[2], px[3]])
    }

    /// Lossless PNG of the page.
    pub fn encode_png(&self) -> PanofoldResult<Vec<u8>> {
        let mut out = Vec::new();
        image::codecs::png::PngEncoder::new(Cursor::new(&mut out))
            .write_image(
                &self.data,
                self.width,
                self.height,
                image::ExtendedColorType::Rgba8,
            )
            .map_err(|e| PanofoldError::encode(format!("png {}x{}: {e}", self.width, self.height)))?;
        Ok(out)
    }

    pub fn save_png(&self, path: &Path) -> PanofoldResult<()> {
        image::save_buffer_with_format(
            path,
            &self.data,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| PanofoldError::encode(format!("write png '{}': {e}", path.display())))
    }

    /// Stable 64-bit digest of dimensions and pixels.
    pub fn fingerprint(&self) -> u64 {
        let mut h = xxhash_rust::xxh3::Xxh3::new();
        h.update(&self.width.to_le_bytes());
        h.update(&self.height.to_le_bytes());
        h.update(&self.data);
        h.digest()
    }
}

/// Owns the page buffer for one conversion.
///
/// The compositor is consumed by [`PageCompositor::project`], so exactly one
/// projector ever writes into a page, and nothing reaches a caller until
/// [`ProjectedPage::finish`].
pub struct PageCompositor {
    canvas: PixelBuffer,
}

impl PageCompositor {
    pub fn new(page: Canvas, background: Rgba8) -> PanofoldResult<Self> {
        if page.is_empty() {
            return Err(PanofoldError::invalid_parameter(format!(
                "page must be non-empty (got {}x{})",
                page.width, page.height
            )));
        }
        Ok(Self {
            canvas: PixelBuffer::new_filled(page.width, page.height, background)?,
        })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas.canvas()
    }

    pub fn project<P: NetProjector + ?Sized>(
        mut self,
        projector: &P,
        parallel: bool,
    ) -> ProjectedPage {
        projector.project(&mut self.canvas, parallel);
        ProjectedPage {
            canvas: self.canvas,
        }
    }
}

/// A page after its projector ran; guides may still be drawn on top.
pub struct ProjectedPage {
    canvas: PixelBuffer,
}

impl ProjectedPage {
    pub fn overlay(mut self, guides: &GuideLineOverlay, edges: &CrossEdges) -> Self {
        guides.draw(&mut self.canvas, edges);
        self
    }

    pub fn finish(self) -> NetFrame {
        let (width, height) = (self.canvas.width(), self.canvas.height());
        NetFrame {
            width,
            height,
            data: self.canvas.into_raw(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/page.rs"]
mod tests;

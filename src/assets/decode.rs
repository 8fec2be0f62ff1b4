use std::path::Path;

use anyhow::Context;

use crate::{
    foundation::error::{PanofoldError, PanofoldResult},
    raster::buffer::SourceImage,
};

/// Decode an uploaded panorama (PNG, JPEG, WebP, ...) into straight RGBA8.
pub fn decode_source(bytes: &[u8]) -> PanofoldResult<SourceImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| PanofoldError::decode(format!("decode image from memory: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    tracing::debug!(
        width = rgba.width(),
        height = rgba.height(),
        "panorama decoded"
    );
    SourceImage::from_rgba_image(rgba)
}

pub fn load_source(path: &Path) -> PanofoldResult<SourceImage> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read panorama '{}'", path.display()))?;
    decode_source(&bytes)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;

use crate::foundation::{
    core::Rgba8,
    math::{mul_div255_u8, unit_to_u8},
};

/// Premultiplied RGBA8. On an opaque page straight and premultiplied pixels coincide.
pub type PremulRgba8 = [u8; 4];

/// Straight color + opacity to the premultiplied pixel that is blended onto the page.
pub fn premul_with_opacity(rgb: [u8; 3], opacity: f32) -> PremulRgba8 {
    let a = u16::from(unit_to_u8(opacity));
    [
        mul_div255_u8(u16::from(rgb[0]), a),
        mul_div255_u8(u16::from(rgb[1]), a),
        mul_div255_u8(u16::from(rgb[2]), a),
        a as u8,
    ]
}

/// Porter-Duff source-over.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    if src[3] == 0 {
        return dst;
    }
    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), inv));
    }
    out
}

pub fn over_in_place(dst: &mut [u8], src: PremulRgba8) {
    if dst.len() < 4 {
        return;
    }
    let out: Rgba8 = over([dst[0], dst[1], dst[2], dst[3]], src);
    dst[..4].copy_from_slice(&out);
}

#[cfg(test)]
#[path = "../../tests/unit/raster/composite.rs"]
mod tests;

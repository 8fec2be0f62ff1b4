use crate::{
    foundation::{
        core::{LonLat, Rgba8},
        math::lon_lat_to_uv,
    },
    raster::buffer::SourceImage,
};

/// What to do with a source coordinate that lands outside the panorama.
///
/// The gore net relies on `Clip` leaving the background untouched, while every
/// cube face pixel must receive a color, hence `Wrap` there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgePolicy {
    Clip,
    Wrap,
}

/// Nearest-neighbor lookup of a (lon, lat) direction in an equirectangular image.
#[derive(Clone, Copy, Debug)]
pub struct EquirectSampler<'a> {
    source: &'a SourceImage,
    edge: EdgePolicy,
}

impl<'a> EquirectSampler<'a> {
    pub fn new(source: &'a SourceImage, edge: EdgePolicy) -> Self {
        Self { source, edge }
    }

    pub fn edge(&self) -> EdgePolicy {
        self.edge
    }

    /// Source pixel for `p`, or `None` when the policy is `Clip` and it falls outside.
    pub fn source_coord(&self, p: LonLat) -> Option<(u32, u32)> {
        let (u, v) = lon_lat_to_uv(p);
        let w = i64::from(self.source.width());
        let h = i64::from(self.source.height());
        let sx = (u * w as f64).floor();
        let sy = (v * h as f64).floor();
        if !sx.is_finite() || !sy.is_finite() {
            return None;
        }
        let (sx, sy) = (sx as i64, sy as i64);
        match self.edge {
            EdgePolicy::Clip => {
                ((0..w).contains(&sx) && (0..h).contains(&sy)).then_some((sx as u32, sy as u32))
            }
            EdgePolicy::Wrap => Some((sx.rem_euclid(w) as u32, sy.rem_euclid(h) as u32)),
        }
    }

    /// Opaque color of the nearest source pixel. Source alpha is dropped.
    pub fn sample(&self, p: LonLat) -> Option<Rgba8> {
        let (sx, sy) = self.source_coord(p)?;
        self.source
            .pixels()
            .get(sx, sy)
            .map(|[r, g, b, _]| [r, g, b, 255])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/sampler.rs"]
mod tests;

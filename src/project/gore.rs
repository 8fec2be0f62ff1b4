//! Orange-peel gores: the sphere unrolled into `num_gores` pole-to-pole lunes.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::{
    foundation::{
        core::{Canvas, LonLat},
        error::{PanofoldError, PanofoldResult},
    },
    project::NetProjector,
    raster::{
        buffer::{SourceImage, put_in_row},
        sampler::{EdgePolicy, EquirectSampler},
    },
};

/// Derived gore pattern geometry for one page.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GoreGeometry {
    pub num_gores: u32,
    /// The gores laid side by side span the page width (the equator).
    pub pattern_width: u32,
    /// Pole-to-pole length: half the equator, floored.
    pub gore_height: u32,
    pub gore_width: f64,
    /// First page row of the pattern; the pattern is centred vertically.
    pub y_offset: i64,
}

impl GoreGeometry {
    pub fn new(page: Canvas, num_gores: u32) -> PanofoldResult<Self> {
        if num_gores == 0 {
            return Err(PanofoldError::invalid_parameter("num_gores must be > 0"));
        }
        if page.is_empty() {
            return Err(PanofoldError::invalid_parameter(
                "gore page must be non-empty",
            ));
        }
        let pattern_width = page.width;
        let gore_height = pattern_width / 2;
        Ok(Self {
            num_gores,
            pattern_width,
            gore_height,
            gore_width: f64::from(pattern_width) / f64::from(num_gores),
            y_offset: (i64::from(page.height) - i64::from(gore_height)) / 2,
        })
    }

    /// Latitude of pattern row `y`; row 0 is the `-PI/2` pole.
    pub fn latitude(&self, y: u32) -> f64 {
        (f64::from(y) / f64::from(self.gore_height)) * PI - FRAC_PI_2
    }

    /// Half-width of every gore at `lat`. Follows `cos(lat)` down to zero at the poles.
    pub fn half_width_at(&self, lat: f64) -> f64 {
        lat.cos() * (self.gore_width / 2.0)
    }

    /// Signed distance of column `x` from the centre line of its gore.
    pub fn offset_from_centre(&self, x: u32) -> f64 {
        f64::from(x) % self.gore_width - self.gore_width / 2.0
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        self.offset_from_centre(x).abs() < self.half_width_at(self.latitude(y))
    }

    /// Sphere position shown at pattern pixel `(x, y)`, or `None` between gores.
    pub fn locate(&self, x: u32, y: u32) -> Option<LonLat> {
        if x >= self.pattern_width || y >= self.gore_height {
            return None;
        }
        let n = f64::from(self.num_gores);
        let lat = self.latitude(y);
        let half = self.half_width_at(lat);
        let d = self.offset_from_centre(x);
        if d.abs() >= half {
            return None;
        }
        let gore_index = (f64::from(x) / self.gore_width).floor();
        let lon_in_slice = (d / half) * (PI / n);
        let lon = (gore_index - (n / 2.0 - 0.5)) * (TAU / n) + lon_in_slice;
        Some(LonLat::new(lon, lat))
    }

    /// Pattern row shown on page row `page_y`, if any.
    pub fn pattern_row(&self, page_y: u32) -> Option<u32> {
        let y = i64::from(page_y) - self.y_offset;
        (0..i64::from(self.gore_height))
            .contains(&y)
            .then_some(y as u32)
    }
}

/// Nearest-neighbor equirectangular-to-gore remap.
///
/// Pixels between gores, and pixels whose source coordinate falls outside the
/// panorama, are never written.
pub struct GoreProjector<'a> {
    geometry: GoreGeometry,
    sampler: EquirectSampler<'a>,
}

impl<'a> GoreProjector<'a> {
    pub fn new(page: Canvas, source: &'a SourceImage, num_gores: u32) -> PanofoldResult<Self> {
        let geometry = GoreGeometry::new(page, num_gores)?;
        if num_gores % 2 == 1 {
            tracing::warn!(num_gores, "odd gore count: pattern is not symmetric about the centre");
        }
        tracing::debug!(?geometry, "gore geometry");
        Ok(Self {
            geometry,
            sampler: EquirectSampler::new(source, EdgePolicy::Clip),
        })
    }

    pub fn geometry(&self) -> &GoreGeometry {
        &self.geometry
    }
}

impl NetProjector for GoreProjector<'_> {
    fn project_row(&self, y: u32, row: &mut [u8]) {
        let Some(py) = self.geometry.pattern_row(y) else {
            return;
        };
        let cols = (row.len() / 4).min(self.geometry.pattern_width as usize);
        for x in 0..cols as u32 {
            if let Some(p) = self.geometry.locate(x, py)
                && let Some(px) = self.sampler.sample(p)
            {
                put_in_row(row, x as usize, px);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/project/gore.rs"]
mod tests;

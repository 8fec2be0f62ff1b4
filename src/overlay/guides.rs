use std::collections::BTreeSet;

use crate::{
    foundation::{
        core::{Line, Point},
        error::{PanofoldError, PanofoldResult},
    },
    project::cube::CrossEdges,
    raster::{
        buffer::PixelBuffer,
        composite::{over_in_place, premul_with_opacity},
    },
};

/// Stroke appearance of one kind of guide line.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GuideStyle {
    pub rgb: [u8; 3],
    pub opacity: f32,
    pub width_px: f64,
    /// `(on, off)` lengths in pixels; `None` strokes a solid line.
    pub dash: Option<(f64, f64)>,
}

impl GuideStyle {
    pub fn cut() -> Self {
        Self {
            rgb: [0, 0, 0],
            opacity: 0.4,
            width_px: 2.0,
            dash: None,
        }
    }

    pub fn fold() -> Self {
        Self {
            rgb: [50, 50, 50],
            opacity: 0.5,
            width_px: 2.0,
            dash: Some((15.0, 5.0)),
        }
    }

    pub fn validate(&self) -> PanofoldResult<()> {
        if !(self.width_px.is_finite() && self.width_px > 0.0) {
            return Err(PanofoldError::invalid_parameter(
                "guide width_px must be finite and > 0",
            ));
        }
        if !self.opacity.is_finite() {
            return Err(PanofoldError::invalid_parameter(
                "guide opacity must be finite",
            ));
        }
        if let Some((on, off)) = self.dash
            && !(on.is_finite() && off.is_finite() && on > 0.0 && off >= 0.0)
        {
            return Err(PanofoldError::invalid_parameter(
                "guide dash needs on > 0 and off >= 0",
            ));
        }
        Ok(())
    }
}

/// Cut and fold lines drawn over a finished cube net.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GuideLineOverlay {
    pub cut: GuideStyle,
    pub fold: GuideStyle,
}

impl Default for GuideLineOverlay {
    fn default() -> Self {
        Self {
            cut: GuideStyle::cut(),
            fold: GuideStyle::fold(),
        }
    }
}

impl GuideLineOverlay {
    pub fn validate(&self) -> PanofoldResult<()> {
        self.cut.validate()?;
        self.fold.validate()
    }

    /// Strokes the closed cut outline, then the fold lines on top.
    pub fn draw(&self, canvas: &mut PixelBuffer, edges: &CrossEdges) {
        // The outline is one closed path: extending each side by half the
        // stroke width yields mitred corners.
        let cut = coverage(canvas, &edges.cut, &self.cut, self.cut.width_px / 2.0);
        paint(canvas, &cut, &self.cut);
        let fold = coverage(canvas, &edges.fold, &self.fold, 0.0);
        paint(canvas, &fold, &self.fold);
        tracing::debug!(
            cut_px = cut.len(),
            fold_px = fold.len(),
            "guide lines stroked"
        );
    }
}

/// Pixels whose centre lies under the stroke of any segment, each listed once
/// so overlapping segments do not darken joins twice.
fn coverage(
    canvas: &PixelBuffer,
    segments: &[Line],
    style: &GuideStyle,
    end_extension: f64,
) -> BTreeSet<(u32, u32)> {
    let half = style.width_px / 2.0;
    let reach = half.max(end_extension);
    let mut covered = BTreeSet::new();
    for seg in segments {
        let dir = seg.p1 - seg.p0;
        let len = dir.hypot();
        if len == 0.0 {
            continue;
        }
        let along = dir / len;
        let x0 = (seg.p0.x.min(seg.p1.x) - reach).floor().max(0.0) as u32;
        let y0 = (seg.p0.y.min(seg.p1.y) - reach).floor().max(0.0) as u32;
        let x1 = ((seg.p0.x.max(seg.p1.x) + reach).ceil().max(0.0) as u32).min(canvas.width());
        let y1 = ((seg.p0.y.max(seg.p1.y) + reach).ceil().max(0.0) as u32).min(canvas.height());
        for y in y0..y1 {
            for x in x0..x1 {
                let c = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5) - seg.p0;
                let t = c.dot(along);
                let across = c.cross(along).abs();
                if across >= half || t < -end_extension || t >= len + end_extension {
                    continue;
                }
                if let Some((on, off)) = style.dash
                    && t.rem_euclid(on + off) >= on
                {
                    continue;
                }
                covered.insert((x, y));
            }
        }
    }
    covered
}

fn paint(canvas: &mut PixelBuffer, covered: &BTreeSet<(u32, u32)>, style: &GuideStyle) {
    let src = premul_with_opacity(style.rgb, style.opacity);
    for &(x, y) in covered {
        if let Some(mut px) = canvas.get(x, y) {
            over_in_place(&mut px, src);
            canvas.put(x, y, px);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/guides.rs"]
mod tests;

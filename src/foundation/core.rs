use crate::foundation::error::{PanofoldError, PanofoldResult};

pub use kurbo::{Line, Point, Rect, Vec2};

/// Straight (non-premultiplied) RGBA8.
pub type Rgba8 = [u8; 4];

pub const WHITE: Rgba8 = [255, 255, 255, 255];

/// Number of gores used when the caller does not ask for a specific count.
pub const DEFAULT_GORE_COUNT: u32 = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    /// A4 landscape at 300 DPI. Every printed net uses this page.
    pub const A4_LANDSCAPE_300DPI: Canvas = Canvas {
        width: 3508,
        height: 2480,
    };

    pub fn pixel_count(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Sphere,
    Cube,
}

impl Shape {
    pub fn name(self) -> &'static str {
        match self {
            Shape::Sphere => "sphere",
            Shape::Cube => "cube",
        }
    }

    /// File name the printable page is saved under by default.
    pub fn default_output_name(self) -> String {
        format!("{}-to-print.png", self.name())
    }
}

/// What to build from a panorama.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum ProjectionRequest {
    Sphere { num_gores: u32 },
    Cube,
}

impl ProjectionRequest {
    pub fn sphere(num_gores: u32) -> Self {
        Self::Sphere { num_gores }
    }

    pub fn shape(self) -> Shape {
        match self {
            Self::Sphere { .. } => Shape::Sphere,
            Self::Cube => Shape::Cube,
        }
    }

    pub fn validate(self) -> PanofoldResult<()> {
        match self {
            Self::Sphere { num_gores: 0 } => Err(PanofoldError::invalid_parameter(
                "num_gores must be > 0",
            )),
            _ => Ok(()),
        }
    }
}

impl Default for ProjectionRequest {
    fn default() -> Self {
        Self::sphere(DEFAULT_GORE_COUNT)
    }
}

/// A point on the unit sphere, in radians.
///
/// `lon` runs over `[-PI, PI]`, `lat` over `[-PI/2, PI/2]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

impl LonLat {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

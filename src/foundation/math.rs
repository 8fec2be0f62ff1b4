use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::foundation::core::LonLat;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn normalize(self) -> Self {
        let r = self.length();
        Self::new(self.x / r, self.y / r, self.z / r)
    }

    /// Longitude/latitude of this direction as seen from the cube centre.
    ///
    /// `x` is negated so that walking right across the side faces walks right
    /// across the panorama instead of mirroring it.
    pub fn to_lon_lat(self) -> LonLat {
        let r = self.length();
        LonLat::new((-self.x).atan2(self.z), (self.y / r).asin())
    }
}

/// Normalized equirectangular texture coordinate, each axis nominally in `[0, 1]`.
pub fn lon_lat_to_uv(p: LonLat) -> (f64, f64) {
    ((p.lon + PI) / TAU, (p.lat + FRAC_PI_2) / PI)
}

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// `0.0..=1.0` opacity to an 8-bit alpha, rounded.
pub(crate) fn unit_to_u8(v: f32) -> u8 {
    ((v.clamp(0.0, 1.0) * 255.0).round() as i32).clamp(0, 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;

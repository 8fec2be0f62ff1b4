use std::f64::consts::{FRAC_PI_2, PI};

use super::*;
use crate::raster::buffer::PixelBuffer;

fn gradient_source() -> SourceImage {
    let mut px = PixelBuffer::new_filled(8, 4, [0, 0, 0, 255]).unwrap();
    for y in 0..4 {
        for x in 0..8 {
            px.put(x, y, [x as u8 * 10, y as u8 * 10, 7, 40]);
        }
    }
    SourceImage::new(px).unwrap()
}

#[test]
fn centre_maps_to_middle_pixel() {
    let src = gradient_source();
    let s = EquirectSampler::new(&src, EdgePolicy::Clip);
    assert_eq!(s.source_coord(LonLat::new(0.0, 0.0)), Some((4, 2)));
    assert_eq!(s.sample(LonLat::new(0.0, 0.0)), Some([40, 20, 7, 255]));
}

#[test]
fn clip_drops_the_far_edge() {
    let src = gradient_source();
    let s = EquirectSampler::new(&src, EdgePolicy::Clip);
    assert_eq!(s.source_coord(LonLat::new(-PI, -FRAC_PI_2)), Some((0, 0)));
    assert_eq!(s.source_coord(LonLat::new(PI, 0.0)), None);
    assert_eq!(s.source_coord(LonLat::new(0.0, FRAC_PI_2)), None);
    assert_eq!(s.source_coord(LonLat::new(-PI - 0.1, 0.0)), None);
    assert_eq!(s.sample(LonLat::new(PI, 0.0)), None);
}

#[test]
fn wrap_folds_the_far_edge_back() {
    let src = gradient_source();
    let s = EquirectSampler::new(&src, EdgePolicy::Wrap);
    assert_eq!(s.source_coord(LonLat::new(PI, 0.0)), Some((0, 2)));
    assert_eq!(s.source_coord(LonLat::new(0.0, FRAC_PI_2)), Some((4, 0)));
    assert_eq!(s.source_coord(LonLat::new(-PI - 0.1, 0.0)), Some((7, 2)));
    assert!(s.sample(LonLat::new(PI, FRAC_PI_2)).is_some());
}

#[test]
fn non_finite_directions_never_sample() {
    let src = gradient_source();
    for edge in [EdgePolicy::Clip, EdgePolicy::Wrap] {
        let s = EquirectSampler::new(&src, edge);
        assert_eq!(s.sample(LonLat::new(f64::NAN, 0.0)), None);
    }
}

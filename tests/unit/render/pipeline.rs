use super::*;
use crate::{
    foundation::core::WHITE,
    project::{cube::CubeLayout, gore::GoreGeometry},
    render::settings::RenderThreading,
};

const GREY: [u8; 4] = [128, 128, 128, 255];

fn page() -> Canvas {
    Canvas {
        width: 360,
        height: 260,
    }
}

fn parallel(threads: usize) -> NetSettings {
    NetSettings {
        threading: RenderThreading {
            parallel: true,
            threads: Some(threads),
        },
        ..NetSettings::default()
    }
}

#[test]
fn invalid_requests_fail_before_allocation() {
    let source = SourceImage::solid(4, 2, GREY).unwrap();
    let err = render_on_page(
        &source,
        ProjectionRequest::sphere(0),
        &NetSettings::default(),
        page(),
    )
    .unwrap_err();
    assert!(matches!(err, PanofoldError::InvalidParameter(_)));

    let bad = NetSettings {
        threading: RenderThreading {
            parallel: true,
            threads: Some(0),
        },
        ..NetSettings::default()
    };
    let err = render_on_page(&source, ProjectionRequest::Cube, &bad, page()).unwrap_err();
    assert!(matches!(err, PanofoldError::InvalidParameter(_)));
}

#[test]
fn sphere_page_is_grey_inside_gores_and_white_elsewhere() {
    let source = SourceImage::solid(4, 2, GREY).unwrap();
    let frame = render_on_page(
        &source,
        ProjectionRequest::sphere(12),
        &NetSettings::default(),
        page(),
    )
    .unwrap();
    let g = GoreGeometry::new(page(), 12).unwrap();
    for y in 0..page().height {
        for x in 0..page().width {
            let inside = g.pattern_row(y).is_some_and(|py| g.contains(x, py));
            let expected = if inside { GREY } else { WHITE };
            assert_eq!(frame.pixel(x, y), Some(expected), "({x},{y})");
        }
    }
}

#[test]
fn cube_page_has_faces_and_guides() {
    let source = SourceImage::solid(4, 2, GREY).unwrap();
    let frame = render_on_page(
        &source,
        ProjectionRequest::Cube,
        &NetSettings::default(),
        page(),
    )
    .unwrap();
    let layout = CubeLayout::for_page(page()).unwrap();
    let (fx, fy) = layout.origin(crate::project::cube::CubeFace::Front);
    let s = layout.face_size;
    // Face interior keeps the sample.
    assert_eq!(frame.pixel(fx + s / 2, fy + s / 2), Some(GREY));
    // Outside the cross stays white.
    assert_eq!(frame.pixel(0, 0), Some(WHITE));
    // Fold between front and right darkens the grey.
    let fold = frame.pixel(fx + s, fy + 2).unwrap();
    assert!(fold[0] < GREY[0], "{fold:?}");
}

#[test]
fn parallel_matches_sequential_byte_for_byte() {
    let mut px = crate::raster::buffer::PixelBuffer::new_filled(24, 12, GREY).unwrap();
    for y in 0..12 {
        for x in 0..24 {
            px.put(x, y, [x as u8 * 10, y as u8 * 20, (x * y) as u8, 255]);
        }
    }
    let source = SourceImage::new(px).unwrap();
    for request in [ProjectionRequest::sphere(12), ProjectionRequest::Cube] {
        let seq = render_on_page(&source, request, &NetSettings::default(), page()).unwrap();
        let par = render_on_page(&source, request, &parallel(3), page()).unwrap();
        assert_eq!(seq.fingerprint(), par.fingerprint(), "{request:?}");
        assert_eq!(seq, par);
    }
}

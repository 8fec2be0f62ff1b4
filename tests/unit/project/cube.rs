use super::*;
use crate::{
    foundation::core::WHITE,
    raster::buffer::PixelBuffer,
};

fn small_page() -> Canvas {
    Canvas {
        width: 130,
        height: 92,
    }
}

fn same_direction(a: Vec3, b: Vec3) -> bool {
    let (a, b) = (a.normalize(), b.normalize());
    (a.x - b.x).abs() < 1e-12 && (a.y - b.y).abs() < 1e-12 && (a.z - b.z).abs() < 1e-12
}

#[test]
fn a4_layout_is_centred_wide_cross() {
    let layout = CubeLayout::for_page(Canvas::A4_LANDSCAPE_300DPI).unwrap();
    assert_eq!(layout.face_size, 826);
    assert_eq!((layout.offset_x, layout.offset_y), (102, 1));
    assert_eq!(layout.origin(CubeFace::Top), (928, 1));
    assert_eq!(layout.origin(CubeFace::Left), (102, 827));
    assert_eq!(layout.origin(CubeFace::Front), (928, 827));
    assert_eq!(layout.origin(CubeFace::Right), (1754, 827));
    assert_eq!(layout.origin(CubeFace::Back), (2580, 827));
    assert_eq!(layout.origin(CubeFace::Bottom), (928, 1653));
}

#[test]
fn tiny_page_is_rejected() {
    let page = Canvas {
        width: 3,
        height: 100,
    };
    assert!(matches!(
        CubeLayout::for_page(page),
        Err(PanofoldError::InvalidParameter(_))
    ));
}

#[test]
fn faces_do_not_overlap() {
    let layout = CubeLayout::for_page(small_page()).unwrap();
    for (i, a) in CubeFace::ALL.iter().enumerate() {
        for b in &CubeFace::ALL[i + 1..] {
            let overlap = layout.rect(*a).intersect(layout.rect(*b));
            assert_eq!(overlap.area(), 0.0, "{a:?} / {b:?}");
        }
    }
}

#[test]
fn cross_has_five_folds_and_fourteen_cut_sides() {
    let layout = CubeLayout::for_page(Canvas::A4_LANDSCAPE_300DPI).unwrap();
    let edges = layout.edges();
    assert_eq!(edges.fold.len(), 5);
    assert_eq!(edges.cut.len(), 14);

    let s = 826.0;
    let (ox, oy) = (102.0, 1.0);
    let expected_folds = [
        Line::new((ox + s, oy + s), (ox + 2.0 * s, oy + s)),
        Line::new((ox + s, oy + s), (ox + s, oy + 2.0 * s)),
        Line::new((ox + 2.0 * s, oy + s), (ox + 2.0 * s, oy + 2.0 * s)),
        Line::new((ox + s, oy + 2.0 * s), (ox + 2.0 * s, oy + 2.0 * s)),
        Line::new((ox + 3.0 * s, oy + s), (ox + 3.0 * s, oy + 2.0 * s)),
    ];
    for fold in expected_folds {
        assert!(edges.fold.contains(&fold), "missing fold {fold:?}");
    }
    for fold in &edges.fold {
        assert!(!edges.cut.contains(fold), "fold {fold:?} also cut");
    }
}

#[test]
fn cut_sides_form_a_closed_outline() {
    use std::collections::HashMap;

    let layout = CubeLayout::for_page(small_page()).unwrap();
    let mut degree: HashMap<(i64, i64), u32> = HashMap::new();
    let mut perimeter = 0.0;
    for seg in layout.edges().cut {
        for p in [seg.p0, seg.p1] {
            *degree.entry((p.x as i64, p.y as i64)).or_default() += 1;
        }
        perimeter += (seg.p1 - seg.p0).hypot();
    }
    assert!(degree.values().all(|&d| d == 2), "{degree:?}");
    assert_eq!(perimeter, 14.0 * f64::from(layout.face_size));
}

#[test]
fn shared_edges_are_continuous_on_the_cube() {
    let seams = [
        // (a, b, a sits left of b rather than above it)
        (CubeFace::Top, CubeFace::Front, false),
        (CubeFace::Front, CubeFace::Bottom, false),
        (CubeFace::Left, CubeFace::Front, true),
        (CubeFace::Front, CubeFace::Right, true),
        (CubeFace::Right, CubeFace::Back, true),
        // Glued edge closing the band around the cube.
        (CubeFace::Back, CubeFace::Left, true),
    ];
    for (a, b, horizontal_neighbors) in seams {
        for k in -10..=10 {
            let t = f64::from(k) / 10.0;
            let (da, db) = if horizontal_neighbors {
                (a.direction(1.0, t), b.direction(-1.0, t))
            } else {
                (a.direction(t, 1.0), b.direction(t, -1.0))
            };
            assert!(same_direction(da, db), "{a:?}/{b:?} t={t}: {da:?} vs {db:?}");
        }
    }
}

#[test]
fn front_face_centre_looks_at_panorama_centre() {
    let p = CubeFace::Front.direction(0.0, 0.0).to_lon_lat();
    assert_eq!((p.lon, p.lat), (0.0, 0.0));
    let right = CubeFace::Right.direction(0.0, 0.0).to_lon_lat();
    assert!((right.lon + std::f64::consts::FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn every_face_pixel_receives_a_sample() {
    let mut src = PixelBuffer::new_filled(7, 5, [0, 0, 0, 255]).unwrap();
    for y in 0..5 {
        for x in 0..7 {
            src.put(x, y, [10 + x as u8, 20 + y as u8, 30, 0]);
        }
    }
    let source = SourceImage::new(src).unwrap();
    let page = small_page();
    let projector = CubeNetProjector::new(page, &source).unwrap();
    let sentinel = [1, 2, 3, 4];
    let mut canvas = PixelBuffer::new_filled(page.width, page.height, sentinel).unwrap();
    projector.project(&mut canvas, false);

    let layout = *projector.layout();
    let mut face_pixels = 0;
    for y in 0..page.height {
        for x in 0..page.width {
            let px = canvas.get(x, y).unwrap();
            if layout.face_at(x, y).is_some() {
                face_pixels += 1;
                assert_ne!(px, sentinel, "blank face pixel at ({x},{y})");
                assert_eq!(px[3], 255);
            } else {
                assert_eq!(px, sentinel, "stray write at ({x},{y})");
            }
        }
    }
    assert_eq!(face_pixels, 6 * layout.face_size * layout.face_size);
}

#[test]
fn solid_source_fills_faces_with_that_color() {
    let color = [12, 200, 99, 255];
    let source = SourceImage::solid(2, 1, color).unwrap();
    let page = small_page();
    let projector = CubeNetProjector::new(page, &source).unwrap();
    let mut a = PixelBuffer::new_filled(page.width, page.height, WHITE).unwrap();
    let mut b = a.clone();
    projector.project(&mut a, false);
    projector.project(&mut b, true);
    assert_eq!(a, b);

    let layout = *projector.layout();
    for y in 0..page.height {
        for x in 0..page.width {
            let expected = if layout.face_at(x, y).is_some() {
                color
            } else {
                WHITE
            };
            assert_eq!(a.get(x, y), Some(expected));
        }
    }
}

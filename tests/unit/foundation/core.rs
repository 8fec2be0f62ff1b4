use super::*;

#[test]
fn a4_page_is_landscape_300dpi() {
    let page = Canvas::A4_LANDSCAPE_300DPI;
    assert_eq!((page.width, page.height), (3508, 2480));
    assert_eq!(page.pixel_count(), 3508 * 2480);
    assert!(!page.is_empty());
    assert!(Canvas { width: 0, height: 4 }.is_empty());
}

#[test]
fn zero_gores_are_rejected() {
    assert!(matches!(
        ProjectionRequest::sphere(0).validate(),
        Err(PanofoldError::InvalidParameter(_))
    ));
    ProjectionRequest::sphere(1).validate().unwrap();
    ProjectionRequest::Cube.validate().unwrap();
}

#[test]
fn default_request_is_twelve_gore_sphere() {
    let req = ProjectionRequest::default();
    assert_eq!(req, ProjectionRequest::Sphere { num_gores: 12 });
    assert_eq!(req.shape(), Shape::Sphere);
}

#[test]
fn request_json_is_tagged_by_shape() {
    let json = serde_json::to_string(&ProjectionRequest::sphere(8)).unwrap();
    assert_eq!(json, r#"{"shape":"sphere","num_gores":8}"#);
    let back: ProjectionRequest = serde_json::from_str(r#"{"shape":"cube"}"#).unwrap();
    assert_eq!(back, ProjectionRequest::Cube);
}

#[test]
fn default_output_names() {
    assert_eq!(Shape::Sphere.default_output_name(), "sphere-to-print.png");
    assert_eq!(Shape::Cube.default_output_name(), "cube-to-print.png");
}

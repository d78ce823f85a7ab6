use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn layout_follows_proportional_rules() {
    let l = FaceLayout::for_surface(400, 400).unwrap();
    assert_eq!(l.center, Point::new(200.0, 200.0));
    assert_eq!(l.radius, 180.0);
    assert!(close(l.eye_left.x, 200.0 - 180.0 * 0.3));
    assert!(close(l.eye_left.y, 200.0 - 180.0 * 0.2));
    assert!(close(l.eye_right.x, 200.0 + 180.0 * 0.3));
    assert!(close(l.eye_radius, 180.0 * 0.12));
    assert!(close(l.mouth_center.y, 200.0 + 180.0 * 0.3));
    assert!(close(l.mouth_width, 180.0 * 0.25));
}

#[test]
fn layout_uses_the_shorter_edge() {
    let l = FaceLayout::for_surface(640, 400).unwrap();
    assert_eq!(l.radius, 180.0);
    assert_eq!(l.center, Point::new(320.0, 200.0));
}

#[test]
fn degenerate_surfaces_are_rejected() {
    assert!(FaceLayout::for_surface(40, 40).is_err());
    assert!(FaceLayout::for_surface(40, 400).is_err());
}

#[test]
fn eye_lookup_mirrors_sides() {
    let l = FaceLayout::for_surface(300, 300).unwrap();
    assert!(l.eye(Side::Left).x < l.center.x);
    assert!(l.eye(Side::Right).x > l.center.x);
    assert_eq!(l.eye(Side::Left).y, l.eye(Side::Right).y);
}

#[test]
fn lighten_moves_toward_white() {
    assert_eq!(
        lighten(Rgba8::rgb(100, 100, 100), 0.5),
        Rgba8::rgb(178, 178, 178)
    );
    assert_eq!(lighten(Rgba8::rgb(10, 20, 30), 0.0), Rgba8::rgb(10, 20, 30));
    assert_eq!(
        lighten(Rgba8::rgb(10, 20, 30), 1.0),
        Rgba8::rgb(255, 255, 255)
    );
}

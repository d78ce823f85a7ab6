use super::*;

#[test]
fn rejects_undersized_and_oversized_dimensions() {
    assert!(AvatarSurface::new(MIN_SURFACE_DIM - 1, 128).is_err());
    assert!(AvatarSurface::new(128, 16).is_err());
    assert!(AvatarSurface::new(70_000, 128).is_err());
    assert!(AvatarSurface::new(128, 96).is_ok());
}

#[test]
fn fresh_surface_reads_back_transparent_black() {
    let s = AvatarSurface::new(64, 64).unwrap();
    let f = s.read_frame();
    assert_eq!(f.width, 64);
    assert_eq!(f.height, 64);
    assert_eq!(f.data.len(), 64 * 64 * 4);
    assert!(f.data.iter().all(|&b| b == 0));
}

#[test]
fn finish_frame_replaces_previous_content() {
    let mut s = AvatarSurface::new(64, 64).unwrap();
    {
        let ctx = s.begin_frame();
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(255, 0, 0, 255));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, 64.0, 64.0));
    }
    s.finish_frame();
    assert!(s.read_frame().data.iter().any(|&b| b != 0));

    // An empty frame fully clears the previous one.
    s.begin_frame();
    s.finish_frame();
    assert!(s.read_frame().data.iter().all(|&b| b == 0));
}

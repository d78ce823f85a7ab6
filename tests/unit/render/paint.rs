use super::*;

fn bw_stops() -> Vec<GradientStop> {
    vec![
        stop(0.0, Rgba8::rgb(0, 0, 0)),
        stop(1.0, Rgba8::rgb(255, 255, 255)),
    ]
}

#[test]
fn stop_evaluation_interpolates_and_clamps() {
    let s = bw_stops();
    assert_eq!(eval_stops(&s, -1.0), Rgba8::rgb(0, 0, 0));
    assert_eq!(eval_stops(&s, 2.0), Rgba8::rgb(255, 255, 255));
    assert_eq!(eval_stops(&s, 0.5), Rgba8::rgb(128, 128, 128));
}

#[test]
fn midpoint_stops_partition_the_range() {
    let s = vec![
        stop(0.0, Rgba8::rgb(10, 0, 0)),
        stop(0.5, Rgba8::rgb(20, 0, 0)),
        stop(1.0, Rgba8::rgb(30, 0, 0)),
    ];
    assert_eq!(eval_stops(&s, 0.25).r, 15);
    assert_eq!(eval_stops(&s, 0.75).r, 25);
}

#[test]
fn empty_stop_list_is_transparent() {
    assert_eq!(eval_stops(&[], 0.5), Rgba8::transparent());
}

#[test]
fn premultiply_scales_color_channels() {
    assert_eq!(premul(Rgba8::rgba(255, 128, 0, 128)), [128, 64, 0, 128]);
    assert_eq!(premul(Rgba8::rgb(9, 9, 9)), [9, 9, 9, 255]);
    assert_eq!(premul(Rgba8::rgba(200, 200, 200, 0)), [0, 0, 0, 0]);
}

#[test]
fn gradient_keys_distinguish_geometry_and_stops() {
    let g1 = Gradient::Radial {
        center: Point::new(10.0, 10.0),
        radius: 5.0,
        stops: bw_stops(),
    };
    let g2 = Gradient::Radial {
        center: Point::new(10.0, 12.0),
        radius: 5.0,
        stops: bw_stops(),
    };
    let g3 = Gradient::Radial {
        center: Point::new(10.0, 10.0),
        radius: 5.0,
        stops: vec![stop(0.0, Rgba8::rgb(1, 2, 3))],
    };
    assert_ne!(
        gradient_key(&g1, 0.0, 0.0, 32, 32),
        gradient_key(&g2, 0.0, 0.0, 32, 32)
    );
    assert_ne!(
        gradient_key(&g1, 0.0, 0.0, 32, 32),
        gradient_key(&g3, 0.0, 0.0, 32, 32)
    );
    assert_eq!(
        gradient_key(&g1, 0.0, 0.0, 32, 32),
        gradient_key(&g1, 0.0, 0.0, 32, 32)
    );
}

#[test]
fn cache_reuses_rasterized_paints() {
    let mut cache = GradientCache::default();
    let g = Gradient::Linear {
        from: Point::new(0.0, 0.0),
        to: Point::new(0.0, 16.0),
        stops: bw_stops(),
    };
    let _ = cache.paint_for(&g, 0.0, 0.0, 16, 16);
    let _ = cache.paint_for(&g, 0.0, 0.0, 16, 16);
    assert_eq!(cache.images.len(), 1);

    let _ = cache.paint_for(&g, 0.0, 0.0, 8, 8);
    assert_eq!(cache.images.len(), 2);
}

#[test]
fn cpu_path_translation_offsets_points() {
    let mut path = kurbo::BezPath::new();
    path.move_to(Point::new(10.0, 10.0));
    path.line_to(Point::new(20.0, 10.0));
    let out = to_cpu_path(path.elements().iter().copied(), 10.0, 10.0);
    let els = out.elements();
    assert_eq!(
        els[0],
        vello_cpu::kurbo::PathEl::MoveTo(vello_cpu::kurbo::Point::new(0.0, 0.0))
    );
    assert_eq!(
        els[1],
        vello_cpu::kurbo::PathEl::LineTo(vello_cpu::kurbo::Point::new(10.0, 0.0))
    );
}

use std::f64::consts::PI;

use kurbo::{Arc, BezPath, Circle, Ellipse, Point, Rect, Vec2};

use crate::avatar::params::{Gender, RenderParams, Style, Variant};
use crate::avatar::style::FaceStyle;
use crate::foundation::core::Rgba8;
use crate::foundation::error::{VizardError, VizardResult};
use crate::foundation::math::SpeckleRng;
use crate::render::paint::{Gradient, Painter, stop};

// Static texture seeds (hair strands, stubble). These must be stable across
// frames so only the camouflage background flickers.
const HAIR_SEED: u64 = 0x5eed_4a17;
const STUBBLE_SEED: u64 = 0x5eed_57bb;

/// Margin between the face disc and the surface edge, in pixels.
pub(crate) const FACE_MARGIN: f64 = 20.0;

/// Anchor points and radii shared by every drawing step, all derived from
/// `min(width, height)` so the output is resolution-independent.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FaceLayout {
    pub(crate) center: Point,
    pub(crate) radius: f64,
    pub(crate) eye_left: Point,
    pub(crate) eye_right: Point,
    pub(crate) eye_radius: f64,
    pub(crate) mouth_center: Point,
    pub(crate) mouth_width: f64,
}

impl FaceLayout {
    pub(crate) fn for_surface(width: u32, height: u32) -> VizardResult<Self> {
        let w = f64::from(width);
        let h = f64::from(height);
        let radius = w.min(h) / 2.0 - FACE_MARGIN;
        if radius <= 0.0 {
            return Err(VizardError::validation(
                "surface too small for a positive face radius",
            ));
        }
        let center = Point::new(w / 2.0, h / 2.0);
        let eye_y = center.y - radius * 0.2;
        let eye_dx = radius * 0.3;
        Ok(Self {
            center,
            radius,
            eye_left: Point::new(center.x - eye_dx, eye_y),
            eye_right: Point::new(center.x + eye_dx, eye_y),
            eye_radius: radius * 0.12,
            mouth_center: Point::new(center.x, center.y + radius * 0.3),
            mouth_width: radius * 0.25,
        })
    }

    fn eye(&self, side: Side) -> Point {
        match side {
            Side::Left => self.eye_left,
            Side::Right => self.eye_right,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    pub(crate) const BOTH: [Side; 2] = [Side::Left, Side::Right];

    fn sign(self) -> f64 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

fn lighten(c: Rgba8, t: f64) -> Rgba8 {
    Rgba8 {
        r: crate::foundation::math::lerp_u8(c.r, 255, t),
        g: crate::foundation::math::lerp_u8(c.g, 255, t),
        b: crate::foundation::math::lerp_u8(c.b, 255, t),
        a: c.a,
    }
}

const BLACK: Rgba8 = Rgba8::rgb(0, 0, 0);
const WHITE: Rgba8 = Rgba8::rgb(255, 255, 255);

/// Procedural camouflage backdrop (realistic male only). Randomized per call
/// on purpose; the caller advances the seed stream each frame.
pub(crate) fn draw_camouflage(p: &mut Painter<'_>, width: f64, height: f64, rng: &mut SpeckleRng) {
    const CAMO_BASE: Rgba8 = Rgba8::rgb(0x4b, 0x53, 0x20);
    const CAMO_TONES: [Rgba8; 4] = [
        Rgba8::rgb(0x6b, 0x8e, 0x23),
        Rgba8::rgb(0x3d, 0x2b, 0x1f),
        Rgba8::rgb(0x8a, 0x7d, 0x5a),
        Rgba8::rgb(0x2f, 0x4f, 0x2f),
    ];

    p.fill(&Rect::new(0.0, 0.0, width, height), CAMO_BASE);
    let unit = width.min(height);
    for _ in 0..48 {
        let center = Point::new(rng.range(0.0, width), rng.range(0.0, height));
        let rx = rng.range(0.04, 0.14) * unit;
        let ry = rng.range(0.04, 0.14) * unit;
        let rot = rng.range(0.0, PI);
        let color = *rng.pick(&CAMO_TONES);
        p.fill(&Ellipse::new(center, (rx, ry), rot), color);
    }
}

/// Hair silhouette, drawn before the face disc so the face occludes it.
pub(crate) fn draw_hair(p: &mut Painter<'_>, l: &FaceLayout, s: &FaceStyle, variant: Variant) {
    let c = l.center;
    let r = l.radius;
    match (variant.style, variant.gender) {
        (Style::Stylized, Gender::Female) => {
            let crown = Point::new(c.x, c.y - r * 0.3);
            p.fill(&Ellipse::new(crown, (r * 1.2, r * 1.4), 0.0), s.hair);
            for i in 0..8 {
                let angle = (i as f64 / 8.0) * 2.0 * PI;
                let dir = Vec2::new(angle.cos(), angle.sin());
                p.line(
                    crown + dir * (r * 0.8),
                    crown + dir * (r * 1.3),
                    (r * 0.013).max(1.5),
                    s.hair_strand,
                );
            }
        }
        (Style::Stylized, Gender::Male) => {
            // Lower half-ellipse above the forehead; the face disc covers the rest.
            let arc = Arc::new(
                Point::new(c.x, c.y - r * 0.4),
                (r * 0.9, r * 0.6),
                0.0,
                PI,
                0.0,
            );
            p.fill(&arc, s.hair);
        }
        (Style::Realistic, Gender::Female) => {
            let crown = Point::new(c.x, c.y - r * 0.25);
            p.fill(&Ellipse::new(crown, (r * 1.28, r * 1.5), 0.0), s.hair_strand);
            let mid = Ellipse::new(Point::new(c.x, c.y - r * 0.3), (r * 1.12, r * 1.32), 0.0);
            p.fill_gradient(
                &mid,
                &Gradient::Linear {
                    from: Point::new(c.x, c.y - r * 1.6),
                    to: Point::new(c.x, c.y + r * 1.0),
                    stops: vec![stop(0.0, lighten(s.hair, 0.25)), stop(1.0, s.hair)],
                },
            );
            let mut rng = SpeckleRng::new(HAIR_SEED);
            for _ in 0..14 {
                let angle = rng.range(-2.6, -0.5);
                let start = crown + Vec2::new(angle.cos(), angle.sin()) * (r * 0.55);
                let sway = rng.range(-0.25, 0.25) * r;
                let end = Point::new(start.x + sway, c.y + r * rng.range(0.9, 1.35));
                let mut strand = BezPath::new();
                strand.move_to(start);
                strand.quad_to(Point::new(start.x + sway * 0.4, (start.y + end.y) / 2.0), end);
                p.stroke(&strand, (r * 0.012).max(1.0), s.hair_strand);
            }
        }
        (Style::Realistic, Gender::Male) => {
            let cap = Ellipse::new(Point::new(c.x, c.y - r * 0.45), (r * 0.97, r * 0.6), 0.0);
            p.fill(&cap, s.hair);
            // Speckled buzz-cut texture along the hairline.
            let mut rng = SpeckleRng::new(HAIR_SEED);
            for _ in 0..120 {
                let x = c.x + rng.range(-0.9, 0.9) * r;
                let y = c.y - r * rng.range(0.38, 0.95);
                let nx = (x - c.x) / (r * 0.97);
                let ny = (y - (c.y - r * 0.45)) / (r * 0.6);
                if nx * nx + ny * ny > 1.0 {
                    continue;
                }
                p.fill(
                    &Circle::new(Point::new(x, y), (r * 0.012).max(0.8)),
                    s.hair_strand,
                );
            }
        }
    }
}

/// Face disc with a soft directional shading overlay.
pub(crate) fn draw_face_base(p: &mut Painter<'_>, l: &FaceLayout, s: &FaceStyle) {
    let disc = Circle::new(l.center, l.radius);
    p.fill(&disc, s.skin);
    p.fill_gradient(
        &disc,
        &Gradient::Radial {
            center: l.center - Vec2::new(l.radius * 0.3, l.radius * 0.3),
            radius: l.radius * 1.6,
            stops: vec![stop(0.0, s.skin_shade.with_alpha(0)), stop(1.0, s.skin_shade)],
        },
    );
}

/// Cheekbone/jaw gradients and forehead highlight (realistic only). Cosmetic
/// overlays; they sit on the skin and under the features.
pub(crate) fn draw_face_structure(p: &mut Painter<'_>, l: &FaceLayout, s: &FaceStyle) {
    let c = l.center;
    let r = l.radius;
    let disc = Circle::new(c, r);

    for side in Side::BOTH {
        let cheek = Point::new(c.x + side.sign() * r * 0.45, c.y + r * 0.08);
        p.fill_gradient(
            &Circle::new(cheek, r * 0.38),
            &Gradient::Radial {
                center: cheek,
                radius: r * 0.38,
                stops: vec![
                    stop(0.0, s.skin_shade.with_alpha(45)),
                    stop(1.0, s.skin_shade.with_alpha(0)),
                ],
            },
        );
    }

    p.fill_gradient(
        &disc,
        &Gradient::Linear {
            from: Point::new(c.x, c.y + r * 0.45),
            to: Point::new(c.x, c.y + r * 0.95),
            stops: vec![
                stop(0.0, s.skin_shade.with_alpha(0)),
                stop(1.0, s.skin_shade.with_alpha(60)),
            ],
        },
    );

    p.fill_gradient(
        &disc,
        &Gradient::Radial {
            center: Point::new(c.x, c.y - r * 0.5),
            radius: r * 0.55,
            stops: vec![
                stop(0.0, WHITE.with_alpha(26)),
                stop(1.0, WHITE.with_alpha(0)),
            ],
        },
    );
}

/// Eyebrows plus the realistic-male frown/wrinkle decoration. The male brow
/// angle is deliberately stern regardless of any emotional input.
pub(crate) fn draw_eyebrows(p: &mut Painter<'_>, l: &FaceLayout, s: &FaceStyle, variant: Variant) {
    let er = l.eye_radius;
    let width = er * s.brow_width;

    if variant.style == Style::Stylized {
        let left = l.eye_left;
        let right = l.eye_right;
        p.line(
            Point::new(left.x - er * 0.8, left.y - er * 0.8),
            Point::new(left.x + er * 0.8, left.y - er * 0.6),
            width,
            s.brow,
        );
        p.line(
            Point::new(right.x - er * 0.8, right.y - er * 0.6),
            Point::new(right.x + er * 0.8, right.y - er * 0.8),
            width,
            s.brow,
        );
        return;
    }

    for side in Side::BOTH {
        let e = l.eye(side);
        let (inner_y, outer_y, arch) = match variant.gender {
            // Inner end sits lower than the outer end: a fixed stern look.
            Gender::Male => (-er * 0.55, -er * 0.95, 0.0),
            Gender::Female => (-er * 0.8, -er * 0.7, er * 0.25),
        };
        let n = 9;
        for i in 0..n {
            let t = i as f64 / (n - 1) as f64;
            // `t` runs inner -> outer; mirror the x span per side.
            let x = e.x + side.sign() * (-er * 0.75 + t * er * 1.6);
            let y = e.y + inner_y + (outer_y - inner_y) * t - arch * (PI * t).sin();
            p.line(
                Point::new(x, y),
                Point::new(x + side.sign() * er * 0.12, y - er * 0.22),
                width * 0.45,
                s.brow,
            );
        }
    }

    if variant.gender == Gender::Male {
        draw_male_wrinkles(p, l, s);
    }
}

fn draw_male_wrinkles(p: &mut Painter<'_>, l: &FaceLayout, s: &FaceStyle) {
    let c = l.center;
    let r = l.radius;
    let er = l.eye_radius;
    let crease = BLACK.with_alpha(40);

    // Frown lines between the brows.
    for side in Side::BOTH {
        let x = c.x + side.sign() * r * 0.05;
        let y = l.eye_left.y - er * 1.1;
        p.line(
            Point::new(x, y),
            Point::new(x + side.sign() * r * 0.015, y + r * 0.07),
            (r * 0.01).max(1.0),
            crease,
        );
    }

    // Forehead wrinkle arcs.
    for (ry, lift) in [(0.30, 0.25), (0.24, 0.32)] {
        let arc = Arc::new(
            Point::new(c.x, c.y - r * lift),
            (r * 0.42, r * ry),
            1.15 * PI,
            0.7 * PI,
            0.0,
        );
        p.stroke_shape(&arc, (r * 0.01).max(1.0), crease);
    }

    // Crow's feet at the outer eye corners.
    for side in Side::BOTH {
        let corner = Point::new(l.eye(side).x + side.sign() * er * 1.35, l.eye(side).y);
        for dy in [-0.25, 0.0, 0.25] {
            p.line(
                corner + Vec2::new(0.0, dy * er),
                corner + Vec2::new(side.sign() * er * 0.45, dy * er * 2.2),
                (r * 0.008).max(0.8),
                crease,
            );
        }
    }
}

/// One composed eye: socket -> white -> iris -> pupil -> highlights -> lid ->
/// lashes. Iris and pupil are vertically scaled by `eye_openness`.
pub(crate) fn draw_eye(
    p: &mut Painter<'_>,
    l: &FaceLayout,
    s: &FaceStyle,
    params: &RenderParams,
    side: Side,
) {
    let realistic = params.variant.style == Style::Realistic;
    let e = l.eye(side);
    let er = l.eye_radius;
    let aspect = if realistic { s.eye_aspect } else { 1.0 };
    let open = params.eye_openness.clamp(0.04, 2.0);

    if realistic {
        p.fill(
            &Ellipse::new(e + Vec2::new(0.0, er * 0.02), (er * 1.45 * aspect, er), 0.0),
            BLACK.with_alpha(30),
        );
    }

    let white = Ellipse::new(e, (er * 1.2 * aspect, er * 0.8), 0.0);
    p.fill(&white, WHITE);
    if realistic {
        p.fill_gradient(
            &white,
            &Gradient::Radial {
                center: e - Vec2::new(er * 0.35, er * 0.3),
                radius: er * 1.6,
                stops: vec![
                    stop(0.0, WHITE.with_alpha(0)),
                    stop(1.0, Rgba8::rgba(120, 120, 120, 70)),
                ],
            },
        );
    }

    let iris_ry = er * 0.7 * open;
    let iris = Ellipse::new(e, (er * 0.7 * aspect, iris_ry), 0.0);
    if realistic {
        p.fill_gradient(
            &iris,
            &Gradient::Radial {
                center: e,
                radius: er * 0.7,
                stops: vec![
                    stop(0.0, lighten(s.iris, 0.25)),
                    stop(0.75, s.iris),
                    stop(1.0, s.iris_rim),
                ],
            },
        );
        // Radial texture spokes, squashed with the iris.
        let squash = open.min(1.0);
        for i in 0..10 {
            let angle = (i as f64 / 10.0) * 2.0 * PI;
            let dir = Vec2::new(angle.cos(), angle.sin() * squash);
            p.line(
                e + dir * (er * 0.28),
                e + dir * (er * 0.62),
                (er * 0.03).max(0.5),
                s.iris_rim.with_alpha(110),
            );
        }
    } else {
        p.fill(&iris, s.iris);
    }

    p.fill(
        &Ellipse::new(e, (er * 0.3 * aspect, er * 0.3 * open), 0.0),
        BLACK,
    );

    p.fill(
        &Ellipse::new(e + Vec2::new(-er * 0.1, -er * 0.1), (er * 0.15, er * 0.15), 0.0),
        WHITE,
    );
    if realistic {
        p.fill(
            &Ellipse::new(e + Vec2::new(er * 0.18, er * 0.12), (er * 0.07, er * 0.07), 0.0),
            WHITE.with_alpha(170),
        );
        let lid = Arc::new(e, (er * 1.2 * aspect, er * 0.8), PI, PI, 0.0);
        p.stroke_shape(&lid, er * 0.1, s.lash.with_alpha(180));
    }

    draw_lashes(p, e, er, aspect, s);
}

fn draw_lashes(p: &mut Painter<'_>, e: Point, er: f64, aspect: f64, s: &FaceStyle) {
    if s.lash_count == 0 {
        return;
    }
    let n = s.lash_count;
    for i in 0..n {
        let f = if n == 1 {
            0.0
        } else {
            -1.0 + 2.0 * (i as f64) / ((n - 1) as f64)
        };
        p.line(
            Point::new(e.x + f * er * 0.6 * aspect, e.y - er * 0.8),
            Point::new(
                e.x + f * er * 0.75 * aspect,
                e.y - er * 0.8 - er * 0.38 * s.lash_len,
            ),
            er * 0.07,
            s.lash,
        );
    }
    if s.lower_lashes {
        for f in [-0.7, -0.25, 0.25, 0.7] {
            p.line(
                Point::new(e.x + f * er * 0.5 * aspect, e.y + er * 0.75),
                Point::new(e.x + f * er * 0.6 * aspect, e.y + er * 0.95),
                er * 0.05,
                s.lash,
            );
        }
    }
}

/// Nose shading strokes; the realistic variant adds nostrils and a bridge
/// shadow.
pub(crate) fn draw_nose(p: &mut Painter<'_>, l: &FaceLayout, variant: Variant) {
    let c = l.center;
    let ns = l.radius * 0.15;
    let outline = BLACK.with_alpha(51);
    let width = (l.radius * 0.013).max(1.0);

    p.line(
        Point::new(c.x, c.y - ns * 0.3),
        Point::new(c.x - ns * 0.2, c.y + ns * 0.1),
        width,
        outline,
    );
    p.line(
        Point::new(c.x, c.y + ns * 0.1),
        Point::new(c.x + ns * 0.2, c.y + ns * 0.1),
        width,
        outline,
    );

    if variant.style == Style::Realistic {
        for side in Side::BOTH {
            p.fill(
                &Ellipse::new(
                    Point::new(c.x + side.sign() * ns * 0.28, c.y + ns * 0.18),
                    (ns * 0.13, ns * 0.08),
                    0.0,
                ),
                BLACK.with_alpha(90),
            );
        }
        let bridge = Ellipse::new(
            Point::new(c.x - ns * 0.18, c.y - ns * 0.35),
            (ns * 0.12, ns * 0.55),
            0.0,
        );
        p.fill_gradient(
            &bridge,
            &Gradient::Linear {
                from: Point::new(c.x - ns * 0.3, c.y),
                to: Point::new(c.x, c.y),
                stops: vec![stop(0.0, BLACK.with_alpha(36)), stop(1.0, BLACK.with_alpha(0))],
            },
        );
    }
}

/// Mouth state machine: the open branch draws iff
/// [`RenderParams::mouth_is_open`], otherwise the closed branch draws. The
/// open-mouth height has a floor so it never collapses mid-syllable.
pub(crate) fn draw_mouth(
    p: &mut Painter<'_>,
    l: &FaceLayout,
    s: &FaceStyle,
    params: &RenderParams,
) {
    let m = l.mouth_center;
    let mw = l.mouth_width;
    let r = l.radius;
    let mh = (params.mouth_openness * r * 0.15).max(r * 0.03);

    if params.mouth_is_open() {
        let interior = Ellipse::new(m, (mw, mh), 0.0);
        p.fill(&interior, s.mouth_interior);
        p.fill_gradient(
            &interior,
            &Gradient::Linear {
                from: Point::new(m.x, m.y - mh),
                to: Point::new(m.x, m.y + mh),
                stops: vec![stop(0.0, BLACK.with_alpha(0)), stop(1.0, BLACK.with_alpha(90))],
            },
        );

        let teeth_c = Point::new(m.x, m.y - mh * 0.3);
        p.fill(&Ellipse::new(teeth_c, (mw * 0.8, mh * 0.3), 0.0), WHITE);

        if params.variant.style == Style::Realistic {
            for f in [-0.6, -0.3, 0.0, 0.3, 0.6] {
                let x = m.x + f * mw * 0.8;
                p.line(
                    Point::new(x, teeth_c.y - mh * 0.22),
                    Point::new(x, teeth_c.y + mh * 0.22),
                    (mw * 0.015).max(0.6),
                    BLACK.with_alpha(60),
                );
            }
            p.fill(
                &Ellipse::new(Point::new(m.x, m.y + mh * 0.45), (mw * 0.45, mh * 0.35), 0.0),
                s.tongue,
            );
        }
        return;
    }

    match params.variant.style {
        Style::Stylized => {
            let smile = Arc::new(m, (mw, mw), 0.0, PI, 0.0);
            p.stroke_shape(&smile, (r * 0.013).max(2.0), s.mouth_interior);
        }
        Style::Realistic => {
            let lip = Ellipse::new(m, (mw * 1.05, mw * 0.32), 0.0);
            p.fill_gradient(
                &lip,
                &Gradient::Linear {
                    from: Point::new(m.x, m.y - mw * 0.32),
                    to: Point::new(m.x, m.y + mw * 0.32),
                    stops: vec![stop(0.0, s.lip), stop(1.0, s.lip_dark)],
                },
            );
            p.fill(
                &Ellipse::new(Point::new(m.x, m.y - mw * 0.1), (mw * 0.55, mw * 0.07), 0.0),
                WHITE.with_alpha(70),
            );
            p.stroke_shape(&lip, (mw * 0.02).max(0.8), s.lip_dark.with_alpha(200));
        }
    }
}

/// Final cosmetic pass: blush or stubble, then a vignette over the face disc.
pub(crate) fn draw_overlays(p: &mut Painter<'_>, l: &FaceLayout, s: &FaceStyle) {
    let c = l.center;
    let r = l.radius;

    if let Some(blush) = s.blush {
        for side in Side::BOTH {
            p.fill(
                &Ellipse::new(
                    Point::new(c.x + side.sign() * r * 0.5, c.y + r * 0.1),
                    (r * 0.15, r * 0.1),
                    0.0,
                ),
                blush,
            );
        }
    }

    if s.stubble {
        p.fill(
            &Ellipse::new(Point::new(c.x, c.y + r * 0.48), (r * 0.55, r * 0.36), 0.0),
            BLACK.with_alpha(26),
        );
        let mut rng = SpeckleRng::new(STUBBLE_SEED);
        for _ in 0..140 {
            let x = rng.range(-0.55, 0.55);
            let y = rng.range(0.12, 0.84);
            let nx = x / 0.55;
            let ny = (y - 0.48) / 0.36;
            if nx * nx + ny * ny > 1.0 {
                continue;
            }
            p.fill(
                &Circle::new(Point::new(c.x + x * r, c.y + y * r), (r * 0.012).max(0.6)),
                s.hair.with_alpha(160),
            );
        }
    }

    p.fill_gradient(
        &Circle::new(c, r),
        &Gradient::Radial {
            center: c,
            radius: r,
            stops: vec![
                stop(0.0, BLACK.with_alpha(0)),
                stop(0.82, BLACK.with_alpha(0)),
                stop(1.0, BLACK.with_alpha(50)),
            ],
        },
    );
}

#[cfg(test)]
#[path = "../../tests/unit/avatar/features.rs"]
mod tests;

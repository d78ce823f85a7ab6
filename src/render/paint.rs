use std::collections::HashMap;
use std::sync::Arc;

use kurbo::{Cap, Join, PathEl, Point, Shape, Stroke};

use crate::foundation::core::Rgba8;
use crate::foundation::math::{Fnv1a64, lerp_u8};

/// One color stop of a hand-rasterized gradient paint. Offsets are in
/// `[0, 1]` and must be non-decreasing across a stop list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct GradientStop {
    pub(crate) offset: f64,
    pub(crate) color: Rgba8,
}

pub(crate) fn stop(offset: f64, color: Rgba8) -> GradientStop {
    GradientStop { offset, color }
}

/// Gradient paint geometry in absolute surface coordinates.
///
/// `vello_cpu` paints are solid colors or images, so gradients are rasterized
/// into small premultiplied image paints and cached by geometry + stops.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Gradient {
    Radial {
        center: Point,
        radius: f64,
        stops: Vec<GradientStop>,
    },
    Linear {
        from: Point,
        to: Point,
        stops: Vec<GradientStop>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct GradientKey {
    w: u16,
    h: u16,
    // Geometry quantized to quarter pixels relative to the paint origin.
    geom: [i32; 4],
    kind: u8,
    stops: u64,
}

/// Cache of rasterized gradient paints, keyed by size, geometry and stops.
/// Lives on the renderer so repeated frames reuse the same images.
#[derive(Default)]
pub(crate) struct GradientCache {
    images: HashMap<GradientKey, vello_cpu::Image>,
}

/// Immediate-mode drawing helper over a `vello_cpu::RenderContext`.
///
/// All geometry is in absolute surface coordinates; each call sets its own
/// transform and paint so draws are order-independent in state.
pub(crate) struct Painter<'a> {
    ctx: &'a mut vello_cpu::RenderContext,
    gradients: &'a mut GradientCache,
    width: f64,
    height: f64,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(
        ctx: &'a mut vello_cpu::RenderContext,
        gradients: &'a mut GradientCache,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            ctx,
            gradients,
            width: f64::from(width),
            height: f64::from(height),
        }
    }

    /// Fill a shape with a solid (possibly translucent) color.
    pub(crate) fn fill(&mut self, shape: &impl Shape, color: Rgba8) {
        if color.a == 0 {
            return;
        }
        self.ctx
            .set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_paint(peniko_color(color));
        let path = to_cpu_path(shape.path_elements(PATH_TOLERANCE), 0.0, 0.0);
        self.ctx.fill_path(&path);
    }

    /// Fill a shape with a gradient paint.
    pub(crate) fn fill_gradient(&mut self, shape: &impl Shape, gradient: &Gradient) {
        let bbox = shape.bounding_box();
        let x0 = bbox.x0.floor().clamp(0.0, self.width);
        let y0 = bbox.y0.floor().clamp(0.0, self.height);
        let x1 = bbox.x1.ceil().clamp(0.0, self.width);
        let y1 = bbox.y1.ceil().clamp(0.0, self.height);
        let w = (x1 - x0).max(1.0) as u16;
        let h = (y1 - y0).max(1.0) as u16;
        if x1 <= x0 || y1 <= y0 {
            return;
        }

        let img = self.gradients.paint_for(gradient, x0, y0, w, h);
        self.ctx
            .set_transform(cpu_translate(x0, y0));
        self.ctx.set_paint(img);
        let path = to_cpu_path(shape.path_elements(PATH_TOLERANCE), x0, y0);
        self.ctx.fill_path(&path);
    }

    /// Stroke a path with round caps and joins by expanding it to a fill.
    pub(crate) fn stroke(&mut self, path: &kurbo::BezPath, width: f64, color: Rgba8) {
        if color.a == 0 || width <= 0.0 {
            return;
        }
        let style = Stroke::new(width).with_caps(Cap::Round).with_join(Join::Round);
        let expanded = kurbo::stroke(
            path.elements().iter().copied(),
            &style,
            &kurbo::StrokeOpts::default(),
            PATH_TOLERANCE,
        );
        self.fill(&expanded, color);
    }

    /// Stroke a single line segment.
    pub(crate) fn line(&mut self, p0: Point, p1: Point, width: f64, color: Rgba8) {
        let mut path = kurbo::BezPath::new();
        path.move_to(p0);
        path.line_to(p1);
        self.stroke(&path, width, color);
    }

    /// Stroke the outline of a shape (e.g. a smile arc or lip outline).
    pub(crate) fn stroke_shape(&mut self, shape: &impl Shape, width: f64, color: Rgba8) {
        let path = shape.to_path(PATH_TOLERANCE);
        self.stroke(&path, width, color);
    }
}

const PATH_TOLERANCE: f64 = 0.1;

impl GradientCache {
    fn paint_for(&mut self, gradient: &Gradient, x0: f64, y0: f64, w: u16, h: u16) -> vello_cpu::Image {
        let key = gradient_key(gradient, x0, y0, w, h);
        if let Some(img) = self.images.get(&key).cloned() {
            return img;
        }
        let img = rasterize_gradient(gradient, x0, y0, w, h);
        self.images.insert(key, img.clone());
        img
    }
}

fn gradient_key(gradient: &Gradient, x0: f64, y0: f64, w: u16, h: u16) -> GradientKey {
    let q = |v: f64| -> i32 { (v * 4.0).round() as i32 };
    let (kind, geom, stops) = match gradient {
        Gradient::Radial {
            center,
            radius,
            stops,
        } => (
            0u8,
            [q(center.x - x0), q(center.y - y0), q(*radius), 0],
            stops,
        ),
        Gradient::Linear { from, to, stops } => (
            1u8,
            [q(from.x - x0), q(from.y - y0), q(to.x - x0), q(to.y - y0)],
            stops,
        ),
    };
    let mut hash = Fnv1a64::new(Fnv1a64::OFFSET_BASIS);
    for s in stops {
        hash.write_u64(s.offset.to_bits());
        hash.write_bytes(&[s.color.r, s.color.g, s.color.b, s.color.a]);
    }
    GradientKey {
        w,
        h,
        geom,
        kind,
        stops: hash.finish(),
    }
}

fn rasterize_gradient(gradient: &Gradient, x0: f64, y0: f64, w: u16, h: u16) -> vello_cpu::Image {
    let wf = usize::from(w);
    let hf = usize::from(h);
    let mut pixels =
        Vec::<vello_cpu::peniko::color::PremulRgba8>::with_capacity(wf.saturating_mul(hf));

    for py in 0..hf {
        for px in 0..wf {
            let p = Point::new(x0 + px as f64 + 0.5, y0 + py as f64 + 0.5);
            let t = match gradient {
                Gradient::Radial { center, radius, .. } => {
                    if *radius <= 0.0 {
                        1.0
                    } else {
                        (p.distance(*center) / radius).clamp(0.0, 1.0)
                    }
                }
                Gradient::Linear { from, to, .. } => {
                    let d = *to - *from;
                    let len2 = d.hypot2();
                    if len2 <= 0.0 {
                        1.0
                    } else {
                        ((p - *from).dot(d) / len2).clamp(0.0, 1.0)
                    }
                }
            };
            let stops = match gradient {
                Gradient::Radial { stops, .. } | Gradient::Linear { stops, .. } => stops,
            };
            let c = eval_stops(stops, t);
            pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array(premul(
                c,
            )));
        }
    }

    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true);
    vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    }
}

/// Piecewise-linear stop evaluation; clamps outside the first/last offsets.
fn eval_stops(stops: &[GradientStop], t: f64) -> Rgba8 {
    let Some(first) = stops.first() else {
        return Rgba8::transparent();
    };
    if t <= first.offset {
        return first.color;
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.offset {
            let span = (b.offset - a.offset).max(f64::EPSILON);
            let local = ((t - a.offset) / span).clamp(0.0, 1.0);
            return Rgba8 {
                r: lerp_u8(a.color.r, b.color.r, local),
                g: lerp_u8(a.color.g, b.color.g, local),
                b: lerp_u8(a.color.b, b.color.b, local),
                a: lerp_u8(a.color.a, b.color.a, local),
            };
        }
    }
    stops.last().map(|s| s.color).unwrap_or(first.color)
}

fn premul(c: Rgba8) -> [u8; 4] {
    let a = u16::from(c.a);
    let mul = |v: u8| -> u8 { (((u16::from(v) * a) + 127) / 255) as u8 };
    [mul(c.r), mul(c.g), mul(c.b), c.a]
}

fn peniko_color(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn cpu_translate(x: f64, y: f64) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::translate(vello_cpu::kurbo::Vec2::new(x, y))
}

fn to_cpu_path(
    els: impl Iterator<Item = PathEl>,
    dx: f64,
    dy: f64,
) -> vello_cpu::kurbo::BezPath {
    let pt = |p: Point| vello_cpu::kurbo::Point::new(p.x - dx, p.y - dy);
    let mut out = vello_cpu::kurbo::BezPath::new();
    for el in els {
        match el {
            PathEl::MoveTo(p) => out.move_to(pt(p)),
            PathEl::LineTo(p) => out.line_to(pt(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/paint.rs"]
mod tests;

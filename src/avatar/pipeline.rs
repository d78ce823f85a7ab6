use crate::avatar::features::{
    self, FaceLayout, Side, draw_camouflage, draw_eye, draw_eyebrows, draw_face_base,
    draw_face_structure, draw_hair, draw_mouth, draw_nose, draw_overlays,
};
use crate::avatar::params::{Gender, RenderParams, Style};
use crate::avatar::style::face_style;
use crate::foundation::error::VizardResult;
use crate::foundation::math::SpeckleRng;
use crate::render::paint::{GradientCache, Painter};
use crate::render::surface::AvatarSurface;

/// Procedural face renderer.
///
/// Holds only caches and the camouflage seed stream; all frame state arrives
/// through [`RenderParams`], so a renderer can serve any number of surfaces.
///
/// Every call fully repaints the surface in a fixed z-order:
/// background, hair, face disc, structure shading, eyebrows, eyes, nose,
/// mouth, overlays. The stylized and realistic variants run the same pipeline
/// with different per-variant style constants and per-step branches.
pub struct AvatarRenderer {
    gradients: GradientCache,
    speckle_seed: u64,
    frame_counter: u64,
}

impl AvatarRenderer {
    /// Renderer with a randomized camouflage seed.
    pub fn new() -> Self {
        Self::with_speckle_seed(rand::random())
    }

    /// Renderer with a pinned camouflage seed. Two freshly seeded renderers
    /// produce byte-identical frame sequences, which is what tests use to pin
    /// down the otherwise intentionally flickering background.
    pub fn with_speckle_seed(seed: u64) -> Self {
        Self {
            gradients: GradientCache::default(),
            speckle_seed: seed,
            frame_counter: 0,
        }
    }

    /// Repaint `surface` from `params`.
    ///
    /// Idempotent and side-effect-free beyond the repaint, except for the
    /// realistic-male camouflage background which is re-randomized per call
    /// (an accepted flicker aesthetic, not a bug). Runs to completion
    /// synchronously; callers must serialize access to one surface.
    #[tracing::instrument(skip_all, fields(w = surface.width(), h = surface.height()))]
    pub fn render(
        &mut self,
        surface: &mut AvatarSurface,
        params: &RenderParams,
    ) -> VizardResult<()> {
        params.validate()?;
        let width = surface.width();
        let height = surface.height();
        let layout = FaceLayout::for_surface(width, height)?;
        let style = face_style(params.variant);

        let camo_seed = self
            .speckle_seed
            .wrapping_add(self.frame_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        self.frame_counter = self.frame_counter.wrapping_add(1);

        let ctx = surface.begin_frame();
        {
            let mut p = Painter::new(ctx, &mut self.gradients, width, height);
            let variant = params.variant;
            let realistic = variant.style == Style::Realistic;

            if realistic && variant.gender == Gender::Male {
                let mut rng = SpeckleRng::new(camo_seed);
                draw_camouflage(&mut p, f64::from(width), f64::from(height), &mut rng);
            }

            draw_hair(&mut p, &layout, &style, variant);
            draw_face_base(&mut p, &layout, &style);
            if realistic {
                draw_face_structure(&mut p, &layout, &style);
            }
            draw_eyebrows(&mut p, &layout, &style, variant);
            for side in Side::BOTH {
                draw_eye(&mut p, &layout, &style, params, side);
            }
            draw_nose(&mut p, &layout, variant);
            draw_mouth(&mut p, &layout, &style, params);
            draw_overlays(&mut p, &layout, &style);
        }
        surface.finish_frame();

        tracing::debug!(
            mouth_open = params.mouth_is_open(),
            eye_openness = params.eye_openness,
            "rendered avatar frame"
        );
        Ok(())
    }

    /// Face margin used by the proportional layout, exposed for callers that
    /// size container chrome around the disc.
    pub const FACE_MARGIN: f64 = features::FACE_MARGIN;
}

impl Default for AvatarRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/avatar/pipeline.rs"]
mod tests;

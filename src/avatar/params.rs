use crate::foundation::core::Rgba8;
use crate::foundation::error::{VizardError, VizardResult};

/// Visual style of the face pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    /// Flat cartoon look with solid fills and simple strokes.
    Stylized,
    /// Shaded look with gradients, lashes, wrinkles and texture.
    Realistic,
}

/// Gender tag selecting per-feature styling constants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Masculine feature set (stern brows, stubble, short hair).
    Male,
    /// Feminine feature set (arched brows, lashes, long hair).
    Female,
}

/// Combination of style and gender selecting a drawing pipeline branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Variant {
    /// Art style.
    pub style: Style,
    /// Feature set.
    pub gender: Gender,
}

impl Variant {
    /// Build a variant from its two tags.
    pub const fn new(style: Style, gender: Gender) -> Self {
        Self { style, gender }
    }

    /// All four supported variants, for exhaustive sweeps.
    pub const ALL: [Variant; 4] = [
        Variant::new(Style::Stylized, Gender::Male),
        Variant::new(Style::Stylized, Gender::Female),
        Variant::new(Style::Realistic, Gender::Male),
        Variant::new(Style::Realistic, Gender::Female),
    ];
}

/// Per-frame render inputs. Recomputed every animation tick; no identity.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderParams {
    /// Vertical iris/pupil scale, nominally in `[0, 1]`. Callers may pass a
    /// biased value (e.g. `v + 0.1`); out-of-range values degrade gracefully.
    pub eye_openness: f64,
    /// Mouth opening proportional to live audio amplitude, `>= 0`.
    pub mouth_openness: f64,
    /// Derived talking state (see [`crate::TalkingState`]).
    pub is_talking: bool,
    /// Pipeline branch to draw.
    pub variant: Variant,
    /// Reserved accent color; accepted but not consumed by drawing yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<Rgba8>,
}

/// Mouth opening threshold below which the talking branch stays closed, so
/// noise-level amplitude does not pop the mouth open.
pub const MOUTH_OPEN_THRESHOLD: f64 = 0.1;

impl RenderParams {
    /// Resting parameters for a given variant (eyes open, mouth closed).
    pub fn idle(variant: Variant) -> Self {
        Self {
            eye_openness: 1.0,
            mouth_openness: 0.0,
            is_talking: false,
            variant,
            accent_color: None,
        }
    }

    /// The one state-machine branch decision in the renderer: the open
    /// (speaking) mouth draws iff talking and the opening exceeds the noise
    /// threshold. Exactly one of the two mouth branches runs per frame.
    pub fn mouth_is_open(&self) -> bool {
        self.is_talking && self.mouth_openness > MOUTH_OPEN_THRESHOLD
    }

    /// Reject non-finite inputs; everything else is clamped by the geometry.
    pub fn validate(&self) -> VizardResult<()> {
        if !self.eye_openness.is_finite() {
            return Err(VizardError::validation("eye_openness must be finite"));
        }
        if !self.mouth_openness.is_finite() || self.mouth_openness < 0.0 {
            return Err(VizardError::validation(
                "mouth_openness must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/avatar/params.rs"]
mod tests;

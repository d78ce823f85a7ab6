use crate::avatar::params::{Gender, Style, Variant};
use crate::foundation::core::Rgba8;

/// Per-variant drawing constants consumed by the face pipeline.
///
/// The stylized and realistic pipelines share one control flow; everything
/// gender- or style-conditioned lives here so new looks are added by editing
/// data, not by branching inside the drawing steps.
#[derive(Clone, Copy, Debug)]
pub(crate) struct FaceStyle {
    pub(crate) skin: Rgba8,
    pub(crate) skin_shade: Rgba8,

    pub(crate) hair: Rgba8,
    pub(crate) hair_strand: Rgba8,

    pub(crate) brow: Rgba8,
    /// Brow stroke width as a factor of the eye radius.
    pub(crate) brow_width: f64,

    pub(crate) iris: Rgba8,
    /// Outer iris color for the realistic radial gradient.
    pub(crate) iris_rim: Rgba8,
    pub(crate) lash: Rgba8,
    /// Upper lash strokes per eye (0 disables lashes).
    pub(crate) lash_count: usize,
    /// Lash length as a factor of the eye radius.
    pub(crate) lash_len: f64,
    pub(crate) lower_lashes: bool,
    /// Horizontal iris/white aspect applied by the realistic pipeline.
    pub(crate) eye_aspect: f64,

    pub(crate) mouth_interior: Rgba8,
    pub(crate) lip: Rgba8,
    pub(crate) lip_dark: Rgba8,
    pub(crate) tongue: Rgba8,

    pub(crate) blush: Option<Rgba8>,
    pub(crate) stubble: bool,
}

const SKIN: Rgba8 = Rgba8::rgb(0xfd, 0xbc, 0xb4);
const SKIN_SHADE: Rgba8 = Rgba8::rgba(200, 150, 140, 77);
const BLUSH: Rgba8 = Rgba8::rgba(255, 182, 193, 102);

pub(crate) fn face_style(variant: Variant) -> FaceStyle {
    let base = FaceStyle {
        skin: SKIN,
        skin_shade: SKIN_SHADE,
        hair: Rgba8::rgb(0x4a, 0x4a, 0x4a),
        hair_strand: Rgba8::rgb(0x65, 0x43, 0x21),
        brow: Rgba8::rgb(0x2c, 0x2c, 0x2c),
        brow_width: 0.33,
        iris: Rgba8::rgb(0x2c, 0x55, 0x30),
        iris_rim: Rgba8::rgb(0x1a, 0x33, 0x1d),
        lash: Rgba8::rgb(0x2c, 0x2c, 0x2c),
        lash_count: 0,
        lash_len: 1.1,
        lower_lashes: false,
        eye_aspect: 1.0,
        mouth_interior: Rgba8::rgb(0x8b, 0x00, 0x00),
        lip: Rgba8::rgb(0xc9, 0x6f, 0x6a),
        lip_dark: Rgba8::rgb(0x8b, 0x3a, 0x3a),
        tongue: Rgba8::rgb(0xc4, 0x5a, 0x66),
        blush: None,
        stubble: false,
    };

    match (variant.style, variant.gender) {
        (Style::Stylized, Gender::Male) => base,
        (Style::Stylized, Gender::Female) => FaceStyle {
            hair: Rgba8::rgb(0x8b, 0x45, 0x13),
            brow: Rgba8::rgb(0x65, 0x43, 0x21),
            brow_width: 0.25,
            iris: Rgba8::rgb(0x4a, 0x90, 0xe2),
            iris_rim: Rgba8::rgb(0x2a, 0x5e, 0xa8),
            lash_count: 7,
            blush: Some(BLUSH),
            ..base
        },
        (Style::Realistic, Gender::Male) => FaceStyle {
            skin: Rgba8::rgb(0xe8, 0xb4, 0x9a),
            hair: Rgba8::rgb(0x3a, 0x3a, 0x3a),
            hair_strand: Rgba8::rgb(0x2a, 0x2a, 0x2a),
            brow_width: 0.40,
            iris: Rgba8::rgb(0x3d, 0x6b, 0x42),
            iris_rim: Rgba8::rgb(0x17, 0x2e, 0x1a),
            lash_count: 4,
            lash_len: 0.85,
            eye_aspect: 0.95,
            stubble: true,
            ..base
        },
        (Style::Realistic, Gender::Female) => FaceStyle {
            skin: Rgba8::rgb(0xf3, 0xc6, 0xb2),
            hair: Rgba8::rgb(0x5a, 0x38, 0x25),
            hair_strand: Rgba8::rgb(0x3e, 0x26, 0x18),
            brow: Rgba8::rgb(0x4e, 0x33, 0x1c),
            brow_width: 0.27,
            iris: Rgba8::rgb(0x4a, 0x90, 0xe2),
            iris_rim: Rgba8::rgb(0x1f, 0x4d, 0x8f),
            lash_count: 7,
            lash_len: 1.25,
            lower_lashes: true,
            eye_aspect: 1.12,
            blush: Some(BLUSH),
            ..base
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/avatar/style.rs"]
mod tests;

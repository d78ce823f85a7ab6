//! Vizard is a procedural animated-avatar renderer.
//!
//! Vizard turns a handful of continuous animation parameters (eye openness,
//! mouth openness, a talking flag) into a fully drawn 2D face, rendered on
//! the CPU into premultiplied RGBA8 pixels. Four face variants are built in,
//! crossing two art styles (stylized, realistic) with two presentations
//! (male, female).
//!
//! # Pipeline overview
//!
//! 1. **Detect**: feed audio amplitude samples to [`TalkingState`] to derive
//!    a debounced `is_talking` flag
//! 2. **Parameterize**: pack the flag plus eye/mouth openness into
//!    [`RenderParams`]
//! 3. **Render**: `AvatarRenderer::render` draws the face onto an
//!    [`AvatarSurface`]; read pixels back as a [`FrameRgba`]
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: a renderer with a pinned speckle seed
//!   produces byte-identical frames for identical inputs.
//! - **No IO in the renderer**: rendering touches pixels only; PNG export
//!   lives on [`FrameRgba`].
//! - **Premultiplied RGBA8** end-to-end.
//!
//! A persona layer ([`AgentPersona`], [`system_instructions`]) carries the
//! conversational identity the avatar fronts for: display name, personality
//! text, body color, and voice, assembled into a system prompt.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod avatar;
mod foundation;
mod persona;
mod render;

pub use animation::talking::{
    AUDIO_OUTPUT_DETECTION_THRESHOLD, TALKING_STATE_COOLDOWN, TalkingState,
};
pub use avatar::params::{Gender, MOUTH_OPEN_THRESHOLD, RenderParams, Style, Variant};
pub use avatar::pipeline::AvatarRenderer;
pub use foundation::core::{FrameRgba, Rgba8};
pub use foundation::error::{VizardError, VizardResult};
pub use persona::agents::{AGENT_COLORS, AgentPersona, Voice, presets};
pub use persona::prompt::{User, system_instructions};
pub use render::surface::{AvatarSurface, MIN_SURFACE_DIM};

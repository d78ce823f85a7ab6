//! Render each built-in avatar variant to a PNG in the current directory.
//!
//! ```sh
//! cargo run --example render_avatar_png
//! ```

use vizard::{AvatarRenderer, AvatarSurface, RenderParams, Variant};

fn main() -> vizard::VizardResult<()> {
    tracing_subscriber::fmt::init();

    let mut renderer = AvatarRenderer::new();
    for variant in Variant::ALL {
        let mut surface = AvatarSurface::new(400, 400)?;

        let params = RenderParams {
            eye_openness: 0.9,
            mouth_openness: 0.5,
            is_talking: true,
            ..RenderParams::idle(variant)
        };
        renderer.render(&mut surface, &params)?;

        let name = format!(
            "avatar_{:?}_{:?}.png",
            variant.style, variant.gender
        )
        .to_lowercase();
        surface.read_frame().write_png(&name)?;
        tracing::info!(file = %name, "wrote avatar frame");
    }
    Ok(())
}

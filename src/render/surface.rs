use crate::foundation::core::FrameRgba;
use crate::foundation::error::{VizardError, VizardResult};

/// Smallest accepted surface edge. Below this the face radius collapses and
/// proportional layout becomes meaningless.
pub const MIN_SURFACE_DIM: u32 = 64;

/// Owned 2D drawing surface: a premultiplied RGBA8 pixmap plus the vector
/// render context that rasterizes into it.
///
/// The renderer fully repaints the pixmap on every call; `vello_cpu` renders
/// from a reset context into the buffer, so no state accumulates across
/// frames and repeated renders with identical inputs are byte-identical.
pub struct AvatarSurface {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
}

impl AvatarSurface {
    /// Allocate a surface. Dimensions must be at least [`MIN_SURFACE_DIM`]
    /// and fit in `u16` (fail fast rather than divide by a degenerate size).
    pub fn new(width: u32, height: u32) -> VizardResult<Self> {
        if width < MIN_SURFACE_DIM || height < MIN_SURFACE_DIM {
            return Err(VizardError::validation(format!(
                "surface must be at least {MIN_SURFACE_DIM}x{MIN_SURFACE_DIM}, got {width}x{height}"
            )));
        }
        let w: u16 = width
            .try_into()
            .map_err(|_| VizardError::validation("surface width exceeds u16"))?;
        let h: u16 = height
            .try_into()
            .map_err(|_| VizardError::validation("surface height exceeds u16"))?;
        Ok(Self {
            width: w,
            height: h,
            ctx: vello_cpu::RenderContext::new(w, h),
            pixmap: vello_cpu::Pixmap::new(w, h),
        })
    }

    /// Surface width in pixels.
    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    /// Surface height in pixels.
    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    pub(crate) fn begin_frame(&mut self) -> &mut vello_cpu::RenderContext {
        self.ctx.reset();
        &mut self.ctx
    }

    /// Flush queued draws and rasterize them into the pixmap, replacing any
    /// previous frame content.
    pub(crate) fn finish_frame(&mut self) {
        self.ctx.flush();
        self.pixmap.data_as_u8_slice_mut().fill(0);
        self.ctx.render_to_pixmap(&mut self.pixmap);
    }

    /// Copy the current pixel contents out as a premultiplied RGBA8 frame.
    pub fn read_frame(&self) -> FrameRgba {
        FrameRgba {
            width: self.width(),
            height: self.height(),
            data: self.pixmap.data_as_u8_slice().to_vec(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;

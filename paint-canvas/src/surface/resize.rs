//! Resize preservation and scaled snapshot drawing for DrawingSurface.

use super::DrawingSurface;
use crate::buffer::PixelBuffer;
use crate::error::PaintResult;
use tiny_skia::Transform;

impl DrawingSurface {
    /// Reinitialize the surface at a new size, stretching the existing artwork
    /// onto it.
    ///
    /// On first mount there is nothing to carry over and the surface is only
    /// initialized.
    pub fn preserve_on_resize(&mut self, width: u32, height: u32) -> PaintResult<()> {
        let held = self.capture();
        log::debug!(
            target: "canvas",
            "resize {}x{} -> {}x{}",
            held.width(), held.height(), width, height
        );
        self.initialize(width, height)?;
        if !held.is_empty() {
            self.draw_buffer_scaled(&held)?;
        }
        Ok(())
    }

    /// Draw `buffer` stretched over the full surface extent with bilinear sampling.
    pub fn draw_buffer_scaled(&mut self, buffer: &PixelBuffer) -> PaintResult<()> {
        let pixmap = self.pixmap_mut()?;
        let Some(source) = buffer.as_pixmap_ref() else {
            return Ok(());
        };
        let scale_x = pixmap.width() as f32 / buffer.width() as f32;
        let scale_y = pixmap.height() as f32 / buffer.height() as f32;
        let paint = tiny_skia::PixmapPaint {
            quality: tiny_skia::FilterQuality::Bilinear,
            ..Default::default()
        };
        pixmap.draw_pixmap(
            0,
            0,
            source,
            &paint,
            Transform::from_scale(scale_x, scale_y),
            None,
        );
        Ok(())
    }

    /// Restore `buffer`, rescaling it when it was captured at another size.
    ///
    /// History snapshots taken before a resize go through here so they land
    /// on the current surface instead of being rejected.
    pub fn restore_fitted(&mut self, buffer: &PixelBuffer) -> PaintResult<()> {
        if buffer.dimensions() == self.dimensions() {
            return self.restore(buffer);
        }
        if buffer.is_empty() {
            log::warn!(target: "canvas", "ignoring empty snapshot restore");
            return Ok(());
        }
        log::debug!(
            target: "canvas",
            "restore {}x{} rescaled to {}x{}",
            buffer.width(), buffer.height(), self.width(), self.height()
        );
        let background = self.background;
        self.pixmap_mut()?.fill(background);
        self.draw_buffer_scaled(buffer)
    }
}

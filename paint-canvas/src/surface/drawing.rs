//! Brush rendering and grain texture for DrawingSurface.

use super::DrawingSurface;
use crate::error::PaintResult;
use crate::geometry::Point;
use crate::style::StrokeStyle;
use rand::Rng;
use tiny_skia::Transform;

impl DrawingSurface {
    /// Fill a disc of `radius` at `center` with the style's color and opacity.
    pub fn fill_dot(&mut self, center: Point, radius: f32, style: &StrokeStyle) -> PaintResult<()> {
        log::debug!(target: "canvas", "dot {} {} r={}", center.x, center.y, radius);
        let pixmap = self.pixmap_mut()?;
        if !(radius.is_finite() && radius > 0.0) {
            return Ok(());
        }
        let Some(path) = tiny_skia::PathBuilder::from_circle(center.x, center.y, radius) else {
            return Ok(());
        };
        let mut paint = tiny_skia::Paint {
            anti_alias: true,
            ..Default::default()
        };
        paint.set_color(style.paint_color());
        pixmap.fill_path(
            &path,
            &paint,
            tiny_skia::FillRule::Winding,
            Transform::identity(),
            None,
        );
        Ok(())
    }

    /// Stroke one straight segment from `from` to `to`.
    pub fn stroke_segment(&mut self, from: Point, to: Point, style: &StrokeStyle) -> PaintResult<()> {
        log::debug!(
            target: "canvas",
            "segment {} {} -> {} {} w={}",
            from.x, from.y, to.x, to.y, style.width
        );
        let pixmap = self.pixmap_mut()?;
        let mut pb = tiny_skia::PathBuilder::new();
        pb.move_to(from.x, from.y);
        pb.line_to(to.x, to.y);
        let Some(path) = pb.finish() else {
            return Ok(());
        };

        let stroke = tiny_skia::Stroke {
            width: style.width,
            line_cap: style.line_cap.into(),
            line_join: tiny_skia::LineJoin::Round,
            ..Default::default()
        };
        let mut paint = tiny_skia::Paint {
            anti_alias: true,
            ..Default::default()
        };
        paint.set_color(style.paint_color());
        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        Ok(())
    }

    /// Stipple low-alpha single-pixel dots to emulate paper grain.
    pub(super) fn stipple_grain(&mut self) {
        let Some(pixmap) = self.pixmap.as_mut() else {
            return;
        };
        let (width, height) = (pixmap.width(), pixmap.height());
        let rng = &mut self.grain.rng;

        for _ in 0..self.grain.dots {
            let x = rng.gen_range(0..width);
            let y = rng.gen_range(0..height);
            let alpha = rng.gen::<f32>() * self.grain.max_alpha;

            let Some(color) = tiny_skia::Color::from_rgba(0.0, 0.0, 0.0, alpha) else {
                continue;
            };
            let mut paint = tiny_skia::Paint {
                anti_alias: false,
                ..Default::default()
            };
            paint.set_color(color);
            if let Some(rect) = tiny_skia::Rect::from_xywh(x as f32, y as f32, 1.0, 1.0) {
                pixmap.fill_rect(rect, &paint, Transform::identity(), None);
            }
        }
    }
}

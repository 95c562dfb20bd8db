//! Stroke style types for paint operations.

use crate::error::{PaintError, PaintResult};

/// Line cap style for brush strokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    /// Rounded edge extending past the endpoint.
    #[default]
    Round,
    /// Square edge extending past the endpoint.
    Square,
}

impl From<LineCap> for tiny_skia::LineCap {
    fn from(cap: LineCap) -> Self {
        match cap {
            LineCap::Round => tiny_skia::LineCap::Round,
            LineCap::Square => tiny_skia::LineCap::Square,
        }
    }
}

/// Fully resolved parameters for rendering one stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Effective paint color.
    pub color: tiny_skia::Color,
    /// Effective line width in surface pixels.
    pub width: f32,
    pub line_cap: LineCap,
    /// Opacity in (0, 1].
    pub opacity: f32,
}

impl StrokeStyle {
    /// The stroke color with opacity folded into its alpha channel.
    pub(crate) fn paint_color(&self) -> tiny_skia::Color {
        let mut color = self.color;
        if self.opacity < 1.0 {
            color.set_alpha((color.alpha() * self.opacity).clamp(0.0, 1.0));
        }
        color
    }
}

/// Parse a CSS color string into a tiny_skia::Color.
pub fn parse_color(s: &str) -> PaintResult<tiny_skia::Color> {
    let parsed =
        csscolorparser::parse(s).map_err(|e| PaintError::ColorParseError(format!("{}: {}", s, e)))?;

    let [r, g, b, a] = parsed.to_array();
    Ok(tiny_skia::Color::from_rgba(r, g, b, a).unwrap_or(tiny_skia::Color::BLACK))
}

//! Drawing tools and their rendering profiles.
//!
//! Tools are data, not behavior: every tool maps to a [`ToolProfile`] record
//! and the stroke controller renders all of them the same way.

use crate::error::PaintError;
use crate::style::{LineCap, StrokeStyle};
use std::fmt;

/// Selectable drawing tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tool {
    Pencil,
    #[default]
    Pen,
    Highlighter,
    Eraser,
}

impl Tool {
    /// All tools in toolbar order.
    pub const ALL: [Tool; 4] = [Tool::Pencil, Tool::Pen, Tool::Highlighter, Tool::Eraser];

    /// The rendering profile for this tool.
    pub fn profile(self) -> &'static ToolProfile {
        match self {
            Tool::Pencil => &PENCIL,
            Tool::Pen => &PEN,
            Tool::Highlighter => &HIGHLIGHTER,
            Tool::Eraser => &ERASER,
        }
    }

    /// Lowercase identifier used in scripts and UI bindings.
    pub fn id(self) -> &'static str {
        match self {
            Tool::Pencil => "pencil",
            Tool::Pen => "pen",
            Tool::Highlighter => "highlighter",
            Tool::Eraser => "eraser",
        }
    }

    /// Human readable toolbar label.
    pub fn label(self) -> &'static str {
        match self {
            Tool::Pencil => "Pencil",
            Tool::Pen => "Pen",
            Tool::Highlighter => "Highlighter",
            Tool::Eraser => "Eraser",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for Tool {
    type Err = PaintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tool::ALL
            .into_iter()
            .find(|tool| tool.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PaintError::UnknownTool(s.to_string()))
    }
}

/// How a tool turns the requested brush color into the painted color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorResolver {
    /// Paint with the brush color as requested.
    Requested,
    /// Paint with the canvas background, ignoring the brush color.
    Background,
}

/// Stroke-rendering parameters for one tool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolProfile {
    /// Stroke opacity in (0, 1].
    pub opacity: f32,
    /// Factor applied to the brush size to get the stroke width.
    pub width_multiplier: f32,
    pub line_cap: LineCap,
    pub color: ColorResolver,
}

static PENCIL: ToolProfile = ToolProfile {
    opacity: 0.7,
    width_multiplier: 0.5,
    line_cap: LineCap::Round,
    color: ColorResolver::Requested,
};

static PEN: ToolProfile = ToolProfile {
    opacity: 1.0,
    width_multiplier: 1.0,
    line_cap: LineCap::Round,
    color: ColorResolver::Requested,
};

static HIGHLIGHTER: ToolProfile = ToolProfile {
    opacity: 0.3,
    width_multiplier: 3.0,
    line_cap: LineCap::Square,
    color: ColorResolver::Requested,
};

static ERASER: ToolProfile = ToolProfile {
    opacity: 1.0,
    width_multiplier: 2.0,
    line_cap: LineCap::Round,
    color: ColorResolver::Background,
};

impl ToolProfile {
    /// Effective color for a requested brush color.
    pub fn resolve_color(
        &self,
        requested: tiny_skia::Color,
        background: tiny_skia::Color,
    ) -> tiny_skia::Color {
        match self.color {
            ColorResolver::Requested => requested,
            ColorResolver::Background => background,
        }
    }

    /// Resolve the full stroke style for a brush.
    pub fn resolve(&self, brush: &Brush, background: tiny_skia::Color) -> StrokeStyle {
        StrokeStyle {
            color: self.resolve_color(brush.color, background),
            width: brush.size * self.width_multiplier,
            line_cap: self.line_cap,
            opacity: self.opacity,
        }
    }
}

/// The brush selection active when a gesture starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brush {
    pub tool: Tool,
    pub size: f32,
    pub color: tiny_skia::Color,
}

use crate::tool::Tool;

/// Canvas background color, also painted by the eraser.
pub const CANVAS_BACKGROUND: &str = "#F5F0E6";

/// Preset brush swatches offered by the toolbar.
pub const PALETTE: [&str; 11] = [
    "#1E3A5F", "#4A7C7C", "#A0522D", "#DAA520", "#2E4A2E", "#8B4513", "#4169E1", "#DC143C",
    "#FFD700", "#FFFFFF", "#000000",
];

/// Default number of undo steps retained.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// Configuration for a [`PaintCanvas`](crate::PaintCanvas).
#[derive(Clone, Debug)]
pub struct CanvasConfig {
    /// Background fill as a CSS color string.
    pub background: String,
    /// Number of paper-grain dots stippled on every initialize. This is a fixed
    /// cost and does not scale with the surface area.
    pub noise_dots: usize,
    /// Upper bound for the alpha of a single grain dot.
    pub noise_max_alpha: f32,
    /// Seed for the grain texture. `None` draws a fresh texture each time.
    pub noise_seed: Option<u64>,
    /// Maximum number of undoable commands (default: 50).
    pub history_capacity: usize,
    /// Smallest accepted brush size.
    pub min_brush_size: f32,
    /// Largest accepted brush size.
    pub max_brush_size: f32,
    /// Brush size selected at startup.
    pub default_brush_size: f32,
    /// Tool selected at startup.
    pub default_tool: Tool,
    /// Brush color selected at startup, as a CSS color string.
    pub default_color: String,
    /// Pixels per inch recorded in exported PNGs (default: 72).
    pub export_ppi: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            background: CANVAS_BACKGROUND.to_string(),
            noise_dots: 2000,
            noise_max_alpha: 0.02,
            noise_seed: None,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            min_brush_size: 2.0,
            max_brush_size: 30.0,
            default_brush_size: 8.0,
            default_tool: Tool::Pen,
            default_color: PALETTE[0].to_string(),
            export_ppi: 72.0,
        }
    }
}

impl CanvasConfig {
    /// Clamp a requested brush size into the configured bounds.
    pub fn clamp_brush_size(&self, size: f32) -> f32 {
        if !size.is_finite() {
            return self.default_brush_size;
        }
        size.clamp(self.min_brush_size, self.max_brush_size)
    }
}

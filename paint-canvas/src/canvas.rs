//! The paint canvas as seen by the surrounding UI.

use crate::config::CanvasConfig;
use crate::error::PaintResult;
use crate::geometry::{ContainerRect, Point, PointerInput};
use crate::history::{Command, CommandHistory};
use crate::stroke::StrokeController;
use crate::style::parse_color;
use crate::surface::{check_dimensions, DrawingSurface};
use crate::tool::{Brush, Tool};
use std::path::{Path, PathBuf};

/// File name offered for downloads of the painting.
pub const EXPORT_FILE_NAME: &str = "my-painting.png";

/// Undo/redo availability, recomputed from history after every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HistoryState {
    pub can_undo: bool,
    pub can_redo: bool,
}

type HistoryListener = Box<dyn FnMut(HistoryState)>;

/// Builder for PaintCanvas.
pub struct PaintCanvasBuilder {
    width: u32,
    height: u32,
    config: CanvasConfig,
}

impl PaintCanvasBuilder {
    /// Create a new builder with specified dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            config: CanvasConfig::default(),
        }
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: CanvasConfig) -> Self {
        self.config = config;
        self
    }

    /// Seed the paper grain so the texture is reproducible.
    pub fn with_noise_seed(mut self, seed: u64) -> Self {
        self.config.noise_seed = Some(seed);
        self
    }

    /// Set the pixel density written into exported PNGs.
    pub fn with_export_ppi(mut self, ppi: f32) -> Self {
        self.config.export_ppi = ppi;
        self
    }

    /// Set the number of undoable steps.
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.config.history_capacity = capacity;
        self
    }

    /// Build the PaintCanvas.
    pub fn build(self) -> PaintResult<PaintCanvas> {
        PaintCanvas::new_internal(self.width, self.height, self.config)
    }
}

/// Freehand paint canvas: surface, tools, gestures and undo history.
pub struct PaintCanvas {
    config: CanvasConfig,
    surface: DrawingSurface,
    history: CommandHistory,
    strokes: StrokeController,
    tool: Tool,
    brush_size: f32,
    brush_color: tiny_skia::Color,
    /// Resize requested mid-gesture, applied when the gesture ends.
    pending_resize: Option<(u32, u32)>,
    history_state: HistoryState,
    listener: Option<HistoryListener>,
}

impl PaintCanvas {
    /// Create a canvas with the default configuration.
    pub fn new(width: u32, height: u32) -> PaintResult<Self> {
        Self::new_internal(width, height, CanvasConfig::default())
    }

    /// Create a new builder for more configuration options.
    pub fn builder(width: u32, height: u32) -> PaintCanvasBuilder {
        PaintCanvasBuilder::new(width, height)
    }

    fn new_internal(width: u32, height: u32, config: CanvasConfig) -> PaintResult<Self> {
        let mut surface = DrawingSurface::new(&config)?;
        surface.preserve_on_resize(width, height)?;
        let brush_color = parse_color(&config.default_color)?;

        Ok(Self {
            history: CommandHistory::new(config.history_capacity),
            strokes: StrokeController::new(),
            tool: config.default_tool,
            brush_size: config.clamp_brush_size(config.default_brush_size),
            brush_color,
            pending_resize: None,
            history_state: HistoryState::default(),
            listener: None,
            surface,
            config,
        })
    }

    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    /// Read-only access to the live surface.
    pub fn surface(&self) -> &DrawingSurface {
        &self.surface
    }

    // --- Brush selection ---

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        log::debug!(target: "canvas", "tool {}", tool);
        self.tool = tool;
    }

    pub fn brush_size(&self) -> f32 {
        self.brush_size
    }

    /// Set the brush size, clamped into the configured bounds.
    pub fn set_brush_size(&mut self, size: f32) {
        self.brush_size = self.config.clamp_brush_size(size);
    }

    pub fn brush_color(&self) -> tiny_skia::Color {
        self.brush_color
    }

    /// Set the brush color from a CSS color string. The eraser ignores it.
    pub fn set_brush_color(&mut self, color: &str) -> PaintResult<()> {
        self.brush_color = parse_color(color)?;
        Ok(())
    }

    fn brush(&self) -> Brush {
        Brush {
            tool: self.tool,
            size: self.brush_size,
            color: self.brush_color,
        }
    }

    // --- Gestures in surface coordinates ---

    pub fn is_drawing(&self) -> bool {
        self.strokes.is_active()
    }

    /// Press at a surface point.
    pub fn gesture_start(&mut self, point: Point) -> PaintResult<()> {
        let brush = self.brush();
        let was_active = self.strokes.is_active();
        self.strokes
            .begin(&mut self.surface, &mut self.history, point, &brush)?;
        if was_active {
            // The implicit close committed a command
            self.publish();
        }
        Ok(())
    }

    /// Drag to a surface point.
    pub fn gesture_move(&mut self, point: Option<Point>) -> PaintResult<()> {
        self.strokes.extend(&mut self.surface, point)
    }

    /// Release. Commits the gesture and applies any deferred resize.
    pub fn gesture_end(&mut self) -> PaintResult<()> {
        let committed = self.strokes.end(&mut self.surface, &mut self.history)?;
        if committed {
            self.publish();
        }
        if let Some((width, height)) = self.pending_resize.take() {
            self.surface.preserve_on_resize(width, height)?;
        }
        Ok(())
    }

    // --- Raw pointer events ---

    /// Pointer pressed. Events without a coordinate are ignored.
    pub fn pointer_down(&mut self, input: &PointerInput, rect: &ContainerRect) -> PaintResult<()> {
        match self.surface.map_pointer_to_surface(input, rect) {
            Some(point) => self.gesture_start(point),
            None => Ok(()),
        }
    }

    /// Pointer moved.
    pub fn pointer_move(&mut self, input: &PointerInput, rect: &ContainerRect) -> PaintResult<()> {
        if !self.strokes.is_active() {
            return Ok(());
        }
        let point = self.surface.map_pointer_to_surface(input, rect);
        self.gesture_move(point)
    }

    /// Pointer released.
    pub fn pointer_up(&mut self) -> PaintResult<()> {
        self.gesture_end()
    }

    /// Pointer left the surface. Treated exactly like a release.
    pub fn pointer_leave(&mut self) -> PaintResult<()> {
        self.gesture_end()
    }

    // --- Viewport ---

    /// Resize the surface, keeping the artwork stretched to the new size.
    ///
    /// Not undoable. During a gesture the resize waits for the gesture to end.
    pub fn resize(&mut self, width: u32, height: u32) -> PaintResult<()> {
        check_dimensions(width, height)?;
        if self.strokes.is_active() {
            log::debug!(target: "canvas", "deferring resize to {}x{}", width, height);
            self.pending_resize = Some((width, height));
            return Ok(());
        }
        if (width, height) == self.surface.dimensions() {
            return Ok(());
        }
        self.surface.preserve_on_resize(width, height)
    }

    // --- History ---

    /// Undo the last command. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo(&mut self.surface);
        self.publish();
        undone
    }

    /// Redo the last undone command. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo(&mut self.surface);
        self.publish();
        redone
    }

    /// Wipe the surface back to a fresh textured background. Undoable.
    pub fn clear(&mut self) -> PaintResult<()> {
        // A pending gesture is committed before the wipe
        self.gesture_end()?;
        let command = Command::begin(self.surface.capture());
        let (width, height) = self.surface.dimensions();
        self.surface.initialize(width, height)?;
        self.history.push(command.finish(self.surface.capture()))?;
        self.publish();
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        self.history_state.can_undo
    }

    pub fn can_redo(&self) -> bool {
        self.history_state.can_redo
    }

    /// Last published undo/redo availability.
    pub fn history_state(&self) -> HistoryState {
        self.history_state
    }

    /// Register a callback invoked with the recomputed [`HistoryState`] after
    /// every mutating call.
    pub fn on_history_change(&mut self, listener: impl FnMut(HistoryState) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    fn publish(&mut self) {
        self.history_state = HistoryState {
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
        };
        if let Some(listener) = self.listener.as_mut() {
            listener(self.history_state);
        }
    }

    // --- Export ---

    /// Encode the current surface as PNG, tagged with the configured `export_ppi`.
    pub fn export_image(&self) -> PaintResult<Vec<u8>> {
        self.surface.to_png(self.config.export_ppi)
    }

    /// Write the PNG export into `dir` as [`EXPORT_FILE_NAME`].
    pub fn save_image(&self, dir: &Path) -> std::io::Result<PathBuf> {
        let png = self
            .export_image()
            .map_err(std::io::Error::other)?;
        let path = dir.join(EXPORT_FILE_NAME);
        std::fs::write(&path, png)?;
        log::info!(target: "canvas", "saved {}", path.display());
        Ok(path)
    }
}

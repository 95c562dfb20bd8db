//! Freehand raster paint canvas built on `tiny-skia`.
//!
//! The canvas owns a single pixel surface with a paper-grain background,
//! renders brush gestures from a small table of tool profiles, keeps a
//! bounded snapshot-based undo/redo history and exports PNG images.
//!
//! # Example
//!
//! ```rust,ignore
//! use paint_canvas::{PaintCanvas, Point, Tool};
//!
//! let mut canvas = PaintCanvas::new(400, 300)?;
//! canvas.set_tool(Tool::Highlighter);
//! canvas.gesture_start(Point::new(50.0, 50.0))?;
//! canvas.gesture_move(Some(Point::new(100.0, 100.0)))?;
//! canvas.gesture_end()?;
//! canvas.undo();
//! let png_data = canvas.export_image()?;
//! ```

mod buffer;
mod canvas;
mod config;
mod error;
mod geometry;
mod history;
mod stroke;
mod style;
mod surface;
mod theme;
mod tool;

// Re-export public API
pub use buffer::PixelBuffer;
pub use canvas::{HistoryState, PaintCanvas, PaintCanvasBuilder, EXPORT_FILE_NAME};
pub use config::{CanvasConfig, CANVAS_BACKGROUND, DEFAULT_HISTORY_CAPACITY, PALETTE};
pub use error::{PaintError, PaintResult};
pub use geometry::{ClientPoint, ContainerRect, Point, PointerInput};
pub use history::{Command, CommandHistory};
pub use stroke::StrokeController;
pub use style::{parse_color, LineCap, StrokeStyle};
pub use surface::{DrawingSurface, MAX_DIMENSION};
pub use theme::ThemeMode;
pub use tool::{Brush, ColorResolver, Tool, ToolProfile};

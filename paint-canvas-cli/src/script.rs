//! Recorded gesture scripts and their replay onto a canvas.

use anyhow::{Context, Result};
use paint_canvas::{ContainerRect, PaintCanvas, PointerInput, Tool};
use serde::Deserialize;

/// One recorded UI event.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ScriptEvent {
    /// Pointer pressed at a client coordinate.
    Down {
        x: f32,
        y: f32,
        #[serde(default)]
        touch: bool,
    },
    /// Pointer moved to a client coordinate.
    Move {
        x: f32,
        y: f32,
        #[serde(default)]
        touch: bool,
    },
    Up,
    Leave,
    /// Container resized to new pixel dimensions.
    Resize { width: u32, height: u32 },
    Tool { tool: String },
    Color { color: String },
    Size { size: f32 },
    Undo,
    Redo,
    Clear,
}

/// Displayed placement of the canvas, for scripts recorded on scaled layouts.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ContainerSpec {
    #[serde(default)]
    pub left: f32,
    #[serde(default)]
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
enum ScriptFile {
    Events(Vec<ScriptEvent>),
    Full {
        #[serde(default)]
        container: Option<ContainerSpec>,
        events: Vec<ScriptEvent>,
    },
}

/// A parsed gesture script.
#[derive(Debug, Clone, PartialEq)]
pub struct Script {
    pub container: Option<ContainerSpec>,
    pub events: Vec<ScriptEvent>,
}

impl Script {
    /// Parse a script given either as a bare event array or as an object
    /// with `events` and an optional `container`.
    pub fn from_json(source: &str) -> Result<Self> {
        let file: ScriptFile =
            serde_json::from_str(source).context("Failed to parse gesture script")?;
        Ok(match file {
            ScriptFile::Events(events) => Script {
                container: None,
                events,
            },
            ScriptFile::Full { container, events } => Script { container, events },
        })
    }

    fn container_rect(&self, canvas: &PaintCanvas) -> ContainerRect {
        match self.container {
            Some(spec) => ContainerRect {
                left: spec.left,
                top: spec.top,
                width: spec.width,
                height: spec.height,
            },
            None => ContainerRect::from_size(canvas.width(), canvas.height()),
        }
    }

    /// Feed every event to `canvas` in order.
    pub fn replay(&self, canvas: &mut PaintCanvas) -> Result<()> {
        for (index, event) in self.events.iter().enumerate() {
            log::debug!("event {}: {:?}", index, event);
            self.apply(canvas, event)
                .with_context(|| format!("Event {} ({:?}) failed", index, event))?;
        }
        // A trailing press without release still counts as a finished stroke
        canvas.pointer_leave()?;
        Ok(())
    }

    fn apply(&self, canvas: &mut PaintCanvas, event: &ScriptEvent) -> Result<()> {
        let rect = self.container_rect(canvas);
        match event {
            ScriptEvent::Down { x, y, touch } => {
                canvas.pointer_down(&pointer(*x, *y, *touch), &rect)?
            }
            ScriptEvent::Move { x, y, touch } => {
                canvas.pointer_move(&pointer(*x, *y, *touch), &rect)?
            }
            ScriptEvent::Up => canvas.pointer_up()?,
            ScriptEvent::Leave => canvas.pointer_leave()?,
            ScriptEvent::Resize { width, height } => canvas.resize(*width, *height)?,
            ScriptEvent::Tool { tool } => canvas.set_tool(tool.parse::<Tool>()?),
            ScriptEvent::Color { color } => canvas.set_brush_color(color)?,
            ScriptEvent::Size { size } => canvas.set_brush_size(*size),
            ScriptEvent::Undo => {
                canvas.undo();
            }
            ScriptEvent::Redo => {
                canvas.redo();
            }
            ScriptEvent::Clear => canvas.clear()?,
        }
        Ok(())
    }
}

fn pointer(x: f32, y: f32, touch: bool) -> PointerInput {
    if touch {
        PointerInput::touch(x, y)
    } else {
        PointerInput::mouse(x, y)
    }
}

//! Gesture state machine: press, drag, release.

use crate::error::PaintResult;
use crate::geometry::Point;
use crate::history::{Command, CommandHistory};
use crate::style::StrokeStyle;
use crate::surface::DrawingSurface;
use crate::tool::Brush;

/// State held between gesture start and end.
#[derive(Debug)]
struct StrokeSession {
    last_point: Point,
    command: Command,
    style: StrokeStyle,
}

/// Drives one gesture at a time from `Idle` to `Active` and back.
#[derive(Debug, Default)]
pub struct StrokeController {
    session: Option<StrokeSession>,
}

impl StrokeController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a gesture is in progress.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Start a gesture at `point`: snapshot the surface and stamp the initial dot.
    ///
    /// A gesture already in progress is committed first.
    pub fn begin(
        &mut self,
        surface: &mut DrawingSurface,
        history: &mut CommandHistory,
        point: Point,
        brush: &Brush,
    ) -> PaintResult<()> {
        if self.is_active() {
            log::warn!(target: "canvas", "gesture started while active, closing previous gesture");
            self.end(surface, history)?;
        }

        let style = brush.tool.profile().resolve(brush, surface.background());
        let command = Command::begin(surface.capture());
        surface.fill_dot(point, style.width / 2.0, &style)?;
        log::debug!(target: "canvas", "gesture start {} at {} {}", brush.tool, point.x, point.y);

        self.session = Some(StrokeSession {
            last_point: point,
            command,
            style,
        });
        Ok(())
    }

    /// Extend the gesture with a segment to `point`.
    ///
    /// Missing or repeated points and moves while idle are ignored.
    pub fn extend(&mut self, surface: &mut DrawingSurface, point: Option<Point>) -> PaintResult<()> {
        let (Some(session), Some(point)) = (self.session.as_mut(), point) else {
            return Ok(());
        };
        if point == session.last_point {
            return Ok(());
        }
        surface.stroke_segment(session.last_point, point, &session.style)?;
        session.last_point = point;
        Ok(())
    }

    /// Finish the gesture and push it to history.
    ///
    /// Returns false when no gesture was active.
    pub fn end(
        &mut self,
        surface: &mut DrawingSurface,
        history: &mut CommandHistory,
    ) -> PaintResult<bool> {
        let Some(session) = self.session.take() else {
            return Ok(false);
        };
        let command = session.command.finish(surface.capture());
        history.push(command)?;
        log::debug!(target: "canvas", "gesture end, {} undoable", history.undo_len());
        Ok(true)
    }
}

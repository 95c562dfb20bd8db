//! Coordinate types shared by pointer decoding and stroke rendering.

use crate::error::{PaintError, PaintResult};

/// A point in surface pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A point in client (viewport) space, as reported by pointer events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClientPoint {
    pub x: f32,
    pub y: f32,
}

/// Measured on-screen rectangle of the element hosting the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerRect {
    /// Left edge in client space.
    pub left: f32,
    /// Top edge in client space.
    pub top: f32,
    /// Displayed width.
    pub width: f32,
    /// Displayed height.
    pub height: f32,
}

impl ContainerRect {
    /// A rectangle at the client origin whose displayed size matches `width`x`height`.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width: width as f32,
            height: height as f32,
        }
    }
}

/// Raw pointer input from either a mouse or a touch screen.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerInput {
    /// Mouse event carrying its client coordinate.
    Mouse { client: ClientPoint },
    /// Touch event carrying the active touch list. Only the first touch is honored.
    Touch { touches: Vec<ClientPoint> },
}

impl PointerInput {
    pub fn mouse(x: f32, y: f32) -> Self {
        PointerInput::Mouse {
            client: ClientPoint { x, y },
        }
    }

    pub fn touch(x: f32, y: f32) -> Self {
        PointerInput::Touch {
            touches: vec![ClientPoint { x, y }],
        }
    }

    /// The client coordinate this event resolves to.
    pub fn client_point(&self) -> PaintResult<ClientPoint> {
        let point = match self {
            PointerInput::Mouse { client } => *client,
            PointerInput::Touch { touches } => {
                *touches.first().ok_or(PaintError::NoPointerCoordinate)?
            }
        };
        if point.x.is_finite() && point.y.is_finite() {
            Ok(point)
        } else {
            Err(PaintError::NoPointerCoordinate)
        }
    }
}

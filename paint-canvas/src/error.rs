//! Error types for paint-canvas.

use thiserror::Error;

/// Result type alias using PaintError.
pub type PaintResult<T> = Result<T, PaintError>;

/// Errors that can occur in paint canvas operations.
#[derive(Debug, Error)]
pub enum PaintError {
    /// Invalid surface dimensions (must be positive and within limits).
    #[error("Invalid dimensions: width={width}, height={height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// A snapshot was restored onto a surface of a different size.
    #[error(
        "Dimension mismatch: surface is {}x{}, snapshot is {}x{}",
        .expected.0, .expected.1, .actual.0, .actual.1
    )]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// A command without an after-state was pushed to history.
    #[error("Command pushed to history before its gesture completed")]
    IncompleteCommand,

    /// A pointer event carried no usable coordinate.
    #[error("Pointer event has no resolvable coordinate")]
    NoPointerCoordinate,

    /// The surface has not been initialized yet.
    #[error("Surface is not mounted")]
    SurfaceNotMounted,

    /// Failed to parse color value.
    #[error("Failed to parse color: {0}")]
    ColorParseError(String),

    /// Unknown tool identifier.
    #[error("Unknown tool: '{0}'")]
    UnknownTool(String),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngError(String),
}

impl From<png::EncodingError> for PaintError {
    fn from(err: png::EncodingError) -> Self {
        PaintError::PngError(err.to_string())
    }
}

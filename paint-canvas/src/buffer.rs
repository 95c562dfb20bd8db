//! Immutable pixel snapshots.

/// A captured copy of the surface pixels.
///
/// Pixel data is premultiplied RGBA8, row-major, exactly as held by the
/// surface. A buffer is never mutated after capture.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub(crate) fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize * 4);
        Self {
            width,
            height,
            data,
        }
    }

    /// The snapshot of a surface with nothing mounted.
    pub(crate) fn empty() -> Self {
        Self::new(0, 0, Vec::new())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of pixels held.
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn is_empty(&self) -> bool {
        self.area() == 0
    }

    /// Raw premultiplied RGBA bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn as_pixmap_ref(&self) -> Option<tiny_skia::PixmapRef<'_>> {
        tiny_skia::PixmapRef::from_bytes(&self.data, self.width, self.height)
    }
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}

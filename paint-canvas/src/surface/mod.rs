//! The raster drawing surface.

mod drawing;
mod export;
mod resize;

use crate::buffer::PixelBuffer;
use crate::config::CanvasConfig;
use crate::error::{PaintError, PaintResult};
use crate::geometry::{ContainerRect, Point, PointerInput};
use crate::style::parse_color;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tiny_skia::Pixmap;

/// Maximum surface dimension (same as Chrome).
pub const MAX_DIMENSION: u32 = 32767;

/// Reject sizes the surface cannot be allocated at.
pub(crate) fn check_dimensions(width: u32, height: u32) -> PaintResult<()> {
    if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(PaintError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Paper-grain texture parameters.
struct Grain {
    dots: usize,
    max_alpha: f32,
    rng: StdRng,
}

/// Owner of the live pixel buffer.
///
/// A surface starts unmounted (0x0) and gets its pixels from [`initialize`].
/// Everything outside the surface only ever sees [`PixelBuffer`] copies.
///
/// [`initialize`]: DrawingSurface::initialize
pub struct DrawingSurface {
    /// Pixel buffer, `None` until the first initialize.
    pixmap: Option<Pixmap>,
    /// Background fill, also used by the eraser.
    background: tiny_skia::Color,
    grain: Grain,
}

impl DrawingSurface {
    /// Create an unmounted surface using the background and grain settings of `config`.
    pub fn new(config: &CanvasConfig) -> PaintResult<Self> {
        let background = parse_color(&config.background)?;
        let rng = match config.noise_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            pixmap: None,
            background,
            grain: Grain {
                dots: config.noise_dots,
                max_alpha: config.noise_max_alpha.clamp(0.0, 1.0),
                rng,
            },
        })
    }

    /// Surface width in pixels (0 while unmounted).
    pub fn width(&self) -> u32 {
        self.pixmap.as_ref().map_or(0, |p| p.width())
    }

    /// Surface height in pixels (0 while unmounted).
    pub fn height(&self) -> u32 {
        self.pixmap.as_ref().map_or(0, |p| p.height())
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    pub fn is_mounted(&self) -> bool {
        self.pixmap.is_some()
    }

    /// The background color painted by initialize and by the eraser.
    pub fn background(&self) -> tiny_skia::Color {
        self.background
    }

    /// Reallocate the surface at `width`x`height`, fill it with the background
    /// and stipple the paper grain over it.
    pub fn initialize(&mut self, width: u32, height: u32) -> PaintResult<()> {
        check_dimensions(width, height)?;
        log::debug!(target: "canvas", "initialize {}x{}", width, height);

        let mut pixmap =
            Pixmap::new(width, height).ok_or(PaintError::InvalidDimensions { width, height })?;
        pixmap.fill(self.background);
        self.pixmap = Some(pixmap);
        self.stipple_grain();
        Ok(())
    }

    /// Snapshot the full current buffer.
    pub fn capture(&self) -> PixelBuffer {
        match &self.pixmap {
            Some(pixmap) => PixelBuffer::new(pixmap.width(), pixmap.height(), pixmap.data().to_vec()),
            None => PixelBuffer::empty(),
        }
    }

    /// Overwrite the surface with `buffer`, which must match the surface size exactly.
    pub fn restore(&mut self, buffer: &PixelBuffer) -> PaintResult<()> {
        let expected = self.dimensions();
        if buffer.dimensions() != expected {
            log::warn!(
                target: "canvas",
                "restore rejected: surface {:?}, snapshot {:?}",
                expected,
                buffer.dimensions()
            );
            return Err(PaintError::DimensionMismatch {
                expected,
                actual: buffer.dimensions(),
            });
        }
        if let Some(pixmap) = self.pixmap.as_mut() {
            log::debug!(target: "canvas", "restore {}x{}", expected.0, expected.1);
            pixmap.data_mut().copy_from_slice(buffer.data());
        }
        Ok(())
    }

    /// Convert a pointer event into surface pixel coordinates.
    ///
    /// The container may be displayed at a different size than the backing
    /// resolution, so coordinates are scaled by the ratio between the two.
    /// Returns `None` when the event has no coordinate, the surface is not
    /// mounted, or the container has no displayed area.
    pub fn map_pointer_to_surface(
        &self,
        input: &PointerInput,
        rect: &ContainerRect,
    ) -> Option<Point> {
        let client = match input.client_point() {
            Ok(client) => client,
            Err(err) => {
                log::trace!(target: "canvas", "pointer ignored: {}", err);
                return None;
            }
        };
        if !self.is_mounted() || rect.width <= 0.0 || rect.height <= 0.0 {
            return None;
        }
        Some(Point {
            x: (client.x - rect.left) * (self.width() as f32 / rect.width),
            y: (client.y - rect.top) * (self.height() as f32 / rect.height),
        })
    }

    pub(crate) fn pixmap_mut(&mut self) -> PaintResult<&mut Pixmap> {
        self.pixmap.as_mut().ok_or(PaintError::SurfaceNotMounted)
    }

    pub(crate) fn pixmap(&self) -> PaintResult<&Pixmap> {
        self.pixmap.as_ref().ok_or(PaintError::SurfaceNotMounted)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn seeded_surface(width: u32, height: u32) -> DrawingSurface {
        let config = CanvasConfig {
            noise_seed: Some(7),
            ..Default::default()
        };
        let mut surface = DrawingSurface::new(&config).unwrap();
        surface.initialize(width, height).unwrap();
        surface
    }

    #[test]
    fn test_new_surface_is_unmounted() {
        let surface = DrawingSurface::new(&CanvasConfig::default()).unwrap();
        assert!(!surface.is_mounted());
        assert_eq!(surface.dimensions(), (0, 0));
        assert!(surface.capture().is_empty());
    }

    #[test]
    fn test_invalid_dimensions() {
        let mut surface = DrawingSurface::new(&CanvasConfig::default()).unwrap();
        assert!(matches!(
            surface.initialize(0, 100),
            Err(PaintError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            surface.initialize(100, MAX_DIMENSION + 1),
            Err(PaintError::InvalidDimensions { .. })
        ));
        assert!(!surface.is_mounted());
    }

    #[test]
    fn test_invalid_background() {
        let config = CanvasConfig {
            background: "paper".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            DrawingSurface::new(&config),
            Err(PaintError::ColorParseError(_))
        ));
    }

    #[test]
    fn test_initialize_adds_grain() {
        let surface = seeded_surface(200, 150);
        let data = surface.capture();
        let first = &data.data()[0..4];
        // The grain means the buffer is not a flat background fill
        assert!(data.data().chunks_exact(4).any(|px| px != first));
        // Every pixel stays opaque
        assert!(data.data().chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn test_initialize_without_grain_is_flat() {
        let config = CanvasConfig {
            noise_dots: 0,
            ..Default::default()
        };
        let mut surface = DrawingSurface::new(&config).unwrap();
        surface.initialize(20, 10).unwrap();
        assert!(surface
            .capture()
            .data()
            .chunks_exact(4)
            .all(|px| px == [245, 240, 230, 255]));
    }

    #[test]
    fn test_capture_restore_roundtrip() {
        let mut surface = seeded_surface(50, 40);
        let before = surface.capture();
        surface.initialize(50, 40).unwrap();
        surface.restore(&before).unwrap();
        assert_eq!(surface.capture(), before);
    }

    #[test]
    fn test_restore_dimension_mismatch() {
        let mut surface = seeded_surface(50, 40);
        let other = seeded_surface(40, 50).capture();
        let before = surface.capture();
        assert!(matches!(
            surface.restore(&other),
            Err(PaintError::DimensionMismatch {
                expected: (50, 40),
                actual: (40, 50)
            })
        ));
        // Surface untouched
        assert_eq!(surface.capture(), before);
    }

    #[test]
    fn test_map_pointer_scales_to_backing_resolution() {
        let surface = seeded_surface(400, 300);
        let rect = ContainerRect {
            left: 10.0,
            top: 20.0,
            width: 200.0,
            height: 150.0,
        };
        let point = surface
            .map_pointer_to_surface(&PointerInput::mouse(60.0, 95.0), &rect)
            .unwrap();
        assert_eq!(point, Point::new(100.0, 150.0));

        let touch = surface
            .map_pointer_to_surface(&PointerInput::touch(10.0, 20.0), &rect)
            .unwrap();
        assert_eq!(touch, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_map_pointer_without_coordinate() {
        let surface = seeded_surface(100, 100);
        let rect = ContainerRect::from_size(100, 100);
        let empty = PointerInput::Touch { touches: vec![] };
        assert!(surface.map_pointer_to_surface(&empty, &rect).is_none());

        let collapsed = ContainerRect::from_size(0, 100);
        assert!(surface
            .map_pointer_to_surface(&PointerInput::mouse(5.0, 5.0), &collapsed)
            .is_none());
    }
}

//! Pixel readback and PNG output for DrawingSurface.

use super::DrawingSurface;
use crate::error::PaintResult;

impl DrawingSurface {
    /// Straight-alpha RGBA of one pixel, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let color = self.pixmap.as_ref()?.pixel(x, y)?.demultiply();
        Some([color.red(), color.green(), color.blue(), color.alpha()])
    }

    /// The whole surface as straight-alpha RGBA bytes.
    pub fn to_rgba(&self) -> PaintResult<Vec<u8>> {
        let pixmap = self.pixmap()?;
        let mut data = Vec::with_capacity(pixmap.data().len());
        for pixel in pixmap.pixels() {
            let c = pixel.demultiply();
            data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        Ok(data)
    }

    /// Export the surface as PNG data with `ppi` pixels per inch recorded in the metadata.
    pub fn to_png(&self, ppi: f32) -> PaintResult<Vec<u8>> {
        let (width, height) = self.dimensions();
        let data = self.to_rgba()?;

        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, width, height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            // Set pixel density metadata (pixels per meter)
            let ppm = (ppi.max(0.0) / 0.0254).round() as u32;
            encoder.set_pixel_dims(Some(png::PixelDimensions {
                xppu: ppm,
                yppu: ppm,
                unit: png::Unit::Meter,
            }));

            let mut writer = encoder.write_header()?;
            writer.write_image_data(&data)?;
        }
        log::debug!(target: "canvas", "png {}x{} ({} bytes)", width, height, buf.len());
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::CanvasConfig;
    use crate::error::PaintError;
    use crate::surface::tests::seeded_surface;
    use crate::surface::DrawingSurface;

    #[test]
    fn test_png_signature_and_size() {
        let surface = seeded_surface(64, 32);
        let png = surface.to_png(72.0).unwrap();
        assert_eq!(&png[..8], &[137, 80, 78, 71, 13, 10, 26, 10]);

        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (64, 32));
        assert_eq!(decoded.as_raw(), &surface.to_rgba().unwrap());
    }

    #[test]
    fn test_png_requires_mounted_surface() {
        let surface = DrawingSurface::new(&CanvasConfig::default()).unwrap();
        assert!(matches!(
            surface.to_png(72.0),
            Err(PaintError::SurfaceNotMounted)
        ));
    }

    #[test]
    fn test_pixel_out_of_bounds() {
        let surface = seeded_surface(10, 10);
        assert!(surface.pixel(9, 9).is_some());
        assert!(surface.pixel(10, 0).is_none());
    }
}

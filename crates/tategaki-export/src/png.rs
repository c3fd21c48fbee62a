//! PNG export format
//!
//! The only format that keeps the alpha channel.

use image::{
    codecs::png::{CompressionType, FilterType, PngEncoder},
    ExtendedColorType, ImageEncoder,
};
use tategaki_core::{
    error::{ExportError, Result},
    traits::Exporter,
    types::BitmapData,
};

use crate::check_buffer;

/// Encode an RGBA canvas as PNG with fast compression
pub fn encode_png(bitmap: &BitmapData) -> Result<Vec<u8>> {
    check_buffer(bitmap)?;

    let mut png_data = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut png_data, CompressionType::Fast, FilterType::Adaptive);
    encoder
        .write_image(&bitmap.data, bitmap.width, bitmap.height, ExtendedColorType::Rgba8)
        .map_err(|e| ExportError::EncodingFailed(format!("PNG encoding failed: {}", e)))?;

    Ok(png_data)
}

/// PNG exporter
///
/// ```
/// use tategaki_export::PngExporter;
/// let exporter = PngExporter::new();
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct PngExporter;

impl PngExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for PngExporter {
    fn name(&self) -> &'static str {
        "png"
    }

    fn export(&self, bitmap: &BitmapData) -> Result<Vec<u8>> {
        encode_png(bitmap)
    }

    fn extension(&self) -> &'static str {
        "png"
    }

    fn mime_type(&self) -> &'static str {
        "image/png"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_exporter_creation() {
        let exporter = PngExporter::new();
        assert_eq!(exporter.name(), "png");
        assert_eq!(exporter.extension(), "png");
        assert_eq!(exporter.mime_type(), "image/png");
    }

    #[test]
    fn test_png_keeps_alpha() {
        let bitmap = BitmapData {
            width: 2,
            height: 1,
            data: vec![255, 0, 0, 255, 0, 0, 255, 0],
        };
        let png = PngExporter::new().export(&bitmap).unwrap();
        assert_eq!(&png[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);

        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
        assert_eq!(decoded.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(decoded.get_pixel(1, 0).0[3], 0);
    }

    #[test]
    fn test_png_is_deterministic() {
        let bitmap = BitmapData {
            width: 3,
            height: 3,
            data: (0..36).map(|i| (i * 7) as u8).collect(),
        };
        assert_eq!(encode_png(&bitmap).unwrap(), encode_png(&bitmap).unwrap());
    }
}

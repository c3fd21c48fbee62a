//! JPEG export format

use image::{codecs::jpeg::JpegEncoder, ExtendedColorType, ImageEncoder};
use tategaki_core::{
    error::{ExportError, Result},
    traits::Exporter,
    types::BitmapData,
};

use crate::check_buffer;

/// Quality used when none is given
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

/// Encode as baseline JPEG; the alpha channel is dropped
pub fn encode_jpeg(bitmap: &BitmapData, quality: u8) -> Result<Vec<u8>> {
    check_buffer(bitmap)?;
    let rgb: Vec<u8> = bitmap
        .data
        .chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();

    let mut jpeg_data = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg_data, quality)
        .write_image(&rgb, bitmap.width, bitmap.height, ExtendedColorType::Rgb8)
        .map_err(|e| ExportError::EncodingFailed(format!("JPEG encoding failed: {}", e)))?;
    Ok(jpeg_data)
}

#[derive(Debug, Clone, Copy)]
pub struct JpegExporter {
    quality: u8,
}

impl JpegExporter {
    pub fn new() -> Self {
        Self::with_quality(DEFAULT_JPEG_QUALITY)
    }

    /// Quality 1–100; out-of-range values are clamped
    pub fn with_quality(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }
}

impl Default for JpegExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for JpegExporter {
    fn name(&self) -> &'static str {
        "jpeg"
    }

    fn export(&self, bitmap: &BitmapData) -> Result<Vec<u8>> {
        encode_jpeg(bitmap, self.quality)
    }

    fn extension(&self) -> &'static str {
        "jpg"
    }

    fn mime_type(&self) -> &'static str {
        "image/jpeg"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jpeg_has_no_alpha_channel() {
        let bitmap = BitmapData {
            width: 8,
            height: 8,
            data: [200, 100, 50, 10].repeat(64),
        };
        let jpeg = JpegExporter::new().export(&bitmap).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);

        let decoded = image::load_from_memory(&jpeg).unwrap();
        assert!(!decoded.color().has_alpha());
    }

    #[test]
    fn test_quality_is_clamped() {
        assert_eq!(JpegExporter::with_quality(0).quality, 1);
        assert_eq!(JpegExporter::with_quality(255).quality, 100);
    }
}

//! Export module for Tategaki
//!
//! Turns a finished canvas into PNG, GIF or JPEG bytes. PNG keeps the alpha
//! channel; GIF and JPEG are always written fully opaque.

use tategaki_core::{
    error::{ExportError, Result},
    traits::Exporter,
    types::{BitmapData, OutputFormat},
};

pub mod gif;
pub mod jpeg;
pub mod png;

pub use gif::GifExporter;
pub use jpeg::JpegExporter;
pub use png::PngExporter;

/// The exporter for `format`
pub fn exporter_for(format: OutputFormat) -> Box<dyn Exporter> {
    match format {
        OutputFormat::Png => Box::new(PngExporter::new()),
        OutputFormat::Gif => Box::new(GifExporter::new()),
        OutputFormat::Jpeg => Box::new(JpegExporter::new()),
    }
}

/// Encode `bitmap` as `format`
pub fn encode(bitmap: &BitmapData, format: OutputFormat) -> Result<Vec<u8>> {
    let exporter = exporter_for(format);
    let bytes = exporter.export(bitmap)?;
    log::debug!(
        "encoded {}x{} as {} ({} bytes)",
        bitmap.width,
        bitmap.height,
        exporter.name(),
        bytes.len()
    );
    Ok(bytes)
}

/// Reject buffers that do not hold `width × height` RGBA pixels
pub(crate) fn check_buffer(bitmap: &BitmapData) -> Result<()> {
    let expected = bitmap.width as usize * bitmap.height as usize * 4;
    if bitmap.width == 0 || bitmap.height == 0 || bitmap.data.len() != expected {
        return Err(ExportError::EncodingFailed(format!(
            "Buffer mismatch: expected {} bytes for {}x{} RGBA, got {}",
            expected,
            bitmap.width,
            bitmap.height,
            bitmap.data.len()
        ))
        .into());
    }
    Ok(())
}

/// RGBA copy with every pixel forced fully opaque
pub(crate) fn opaque_rgba(bitmap: &BitmapData) -> Vec<u8> {
    bitmap
        .data
        .chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2], 255])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white(width: u32, height: u32) -> BitmapData {
        BitmapData {
            width,
            height,
            data: vec![255; (width * height * 4) as usize],
        }
    }

    #[test]
    fn test_exporter_for_each_format() {
        for format in OutputFormat::ALL {
            let exporter = exporter_for(format);
            assert_eq!(exporter.mime_type(), format.mime_type());
            assert_eq!(exporter.extension(), format.extension());
        }
    }

    #[test]
    fn test_encode_signatures() {
        let bitmap = white(4, 4);
        assert!(encode(&bitmap, OutputFormat::Png).unwrap().starts_with(&[0x89, b'P', b'N', b'G']));
        assert!(encode(&bitmap, OutputFormat::Gif).unwrap().starts_with(b"GIF"));
        assert!(encode(&bitmap, OutputFormat::Jpeg).unwrap().starts_with(&[0xFF, 0xD8]));
    }

    #[test]
    fn test_short_buffer_is_rejected() {
        let bitmap = BitmapData {
            width: 4,
            height: 4,
            data: vec![0; 10],
        };
        for format in OutputFormat::ALL {
            let err = encode(&bitmap, format).unwrap_err();
            assert!(err.to_string().contains("Buffer mismatch"));
        }
    }
}

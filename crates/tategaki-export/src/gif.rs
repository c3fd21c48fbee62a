//! GIF export format
//!
//! Palette-quantized, always opaque.

use image::{codecs::gif::GifEncoder, ExtendedColorType};
use tategaki_core::{
    error::{ExportError, Result},
    traits::Exporter,
    types::BitmapData,
};

use crate::{check_buffer, opaque_rgba};

pub fn encode_gif(bitmap: &BitmapData) -> Result<Vec<u8>> {
    check_buffer(bitmap)?;
    let rgba = opaque_rgba(bitmap);

    let mut gif_data = Vec::new();
    {
        let mut encoder = GifEncoder::new(&mut gif_data);
        encoder
            .encode(&rgba, bitmap.width, bitmap.height, ExtendedColorType::Rgba8)
            .map_err(|e| ExportError::EncodingFailed(format!("GIF encoding failed: {}", e)))?;
    }
    Ok(gif_data)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct GifExporter;

impl GifExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for GifExporter {
    fn name(&self) -> &'static str {
        "gif"
    }

    fn export(&self, bitmap: &BitmapData) -> Result<Vec<u8>> {
        encode_gif(bitmap)
    }

    fn extension(&self) -> &'static str {
        "gif"
    }

    fn mime_type(&self) -> &'static str {
        "image/gif"
    }
}

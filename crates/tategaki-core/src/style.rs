//! The frozen style of one render

use std::path::PathBuf;

use crate::types::{HorizontalAlign, OutputFormat, Rgb, VerticalAlign};

/// Default glyph cell size in pixels
pub const DEFAULT_FONT_SIZE: u32 = 40;
/// Default font id, resolved to `ipam.ttf` on the search path
pub const DEFAULT_FONT: &str = "ipam";
/// Largest accepted alpha; 0 is opaque, 127 fully transparent
pub const MAX_ALPHA: u8 = 127;

/// Everything a render needs to know about how text should look
///
/// Built by [`crate::ParameterValidator`] and never mutated afterwards.
/// `width` and `height` stay `None` unless the caller supplied them; the
/// layout engine computes the effective canvas size from the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleConfig {
    pub font_size: u32,
    pub text_color: Rgb,
    pub background_color: Rgb,
    /// 7-bit transparency: 0 opaque, 127 fully transparent
    pub alpha: u8,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub horizontal_align: HorizontalAlign,
    pub vertical_align: VerticalAlign,
    pub font_id: String,
    /// Font file the id resolved to, if validation ran against a resolver
    pub font_path: Option<PathBuf>,
    pub output_format: OutputFormat,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            text_color: Rgb::black(),
            background_color: Rgb::white(),
            alpha: 0,
            width: None,
            height: None,
            horizontal_align: HorizontalAlign::Right,
            vertical_align: VerticalAlign::Top,
            font_id: DEFAULT_FONT.to_string(),
            font_path: None,
            output_format: OutputFormat::Png,
        }
    }
}

impl StyleConfig {
    /// The same style retargeted at `format`
    ///
    /// Formats without an alpha channel always get alpha 0 (opaque), no
    /// matter what was requested.
    pub fn for_format(&self, format: OutputFormat) -> Self {
        let alpha = if format.supports_alpha() { self.alpha } else { 0 };
        Self {
            alpha,
            output_format: format,
            ..self.clone()
        }
    }

    /// 8-bit opacity of the background
    ///
    /// Maps the 7-bit scale onto 8 bits as
    /// `255 - (2a + a/64)`, so 0 stays fully opaque and 127 becomes 0.
    pub fn background_opacity(&self) -> u8 {
        let alpha = self.alpha.min(MAX_ALPHA);
        255 - ((alpha << 1) + (alpha >> 6))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_background_opacity_endpoints() {
        let mut style = StyleConfig::default();
        assert_eq!(style.background_opacity(), 255);

        style.alpha = 127;
        assert_eq!(style.background_opacity(), 0);

        style.alpha = 64;
        assert_eq!(style.background_opacity(), 126);
    }

    #[test]
    fn test_for_format_forces_opaque_without_alpha_channel() {
        let style = StyleConfig {
            alpha: 100,
            ..Default::default()
        };

        let gif = style.for_format(OutputFormat::Gif);
        assert_eq!(gif.alpha, 0);
        assert_eq!(gif.output_format, OutputFormat::Gif);

        let jpeg = style.for_format(OutputFormat::Jpeg);
        assert_eq!(jpeg.alpha, 0);

        let png = style.for_format(OutputFormat::Png);
        assert_eq!(png.alpha, 100);
    }
}

//! Tategaki: Japanese text as vertically written images
//!
//! A string goes in, an encoded PNG, GIF or JPEG comes out, with the text
//! set top-to-bottom in columns that run right-to-left.
//!
//! ```no_run
//! use tategaki::{FontSearchPath, VerticalText};
//!
//! let fonts = FontSearchPath::from_base_dir("font");
//! let text = VerticalText::new(
//!     "吾輩は猫である。\n名前はまだ無い。",
//!     [("font-size", "32"), ("bg-color", "F5F0E1")],
//!     &fonts,
//! )?;
//! let png = text.to_png()?;
//! # Ok::<(), tategaki::TategakiError>(())
//! ```
//!
//! The pipeline runs in five steps, all synchronous:
//!
//! 1. widen half-width kana and ASCII, split lines into columns
//! 2. validate options into a frozen [`StyleConfig`]
//! 3. lay out the columns ([`Layout`])
//! 4. composite every glyph onto a fresh canvas ([`CanvasCompositor`])
//! 5. encode ([`tategaki_export::encode`])
//!
//! Validation errors surface before any canvas exists. Nothing is shared
//! between renders except the read-only [`FontSearchPath`].

use tategaki_core::{error::FontLoadError, types::BitmapData};

pub use tategaki_core::{
    error, layout, params, rotation, types, width, ColumnSequence, Exporter, FontRef,
    FontResolver, GlyphCell, HorizontalAlign, Layout, OutputFormat, ParameterValidator, Result,
    Rgb, Rotation, StyleConfig, TategakiError, VerticalAlign,
};
pub use tategaki_export::{encode, exporter_for};
pub use tategaki_fontdb::{FontFace, FontSearchPath};
pub use tategaki_render::CanvasCompositor;

/// Encoded image bytes and what they are
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    pub bytes: Vec<u8>,
    pub format: OutputFormat,
    pub width: u32,
    pub height: u32,
}

impl RenderedImage {
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    pub fn extension(&self) -> &'static str {
        self.format.extension()
    }
}

/// Validated text ready to render, as many times and formats as needed
#[derive(Debug, Clone)]
pub struct VerticalText {
    columns: ColumnSequence,
    style: StyleConfig,
}

impl VerticalText {
    /// Normalize `text` and validate `params` against `fonts`
    pub fn new<I, K, V>(text: &str, params: I, fonts: &dyn FontResolver) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let style = ParameterValidator::new(fonts).validate(params)?;
        Ok(Self::with_style(text, style))
    }

    /// Use an already validated style
    pub fn with_style(text: &str, style: StyleConfig) -> Self {
        Self {
            columns: ColumnSequence::from_text(text),
            style,
        }
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn columns(&self) -> &ColumnSequence {
        &self.columns
    }

    /// Layout in the validated style
    pub fn layout(&self) -> Result<Layout> {
        Layout::compute(&self.columns, &self.style)
    }

    /// Render in the validated output format
    pub fn render(&self) -> Result<RenderedImage> {
        self.render_as(self.style.output_format)
    }

    /// Render as `format`, loading the resolved font file
    pub fn render_as(&self, format: OutputFormat) -> Result<RenderedImage> {
        let font = self.load_font()?;
        self.render_with(&font, format)
    }

    /// Render as `format` with glyphs from `font`
    pub fn render_with(
        &self,
        font: &dyn FontRef,
        format: OutputFormat,
    ) -> Result<RenderedImage> {
        let style = self.style.for_format(format);
        let bitmap = self.composite(&style, font)?;
        let bytes = encode(&bitmap, format)?;

        Ok(RenderedImage {
            bytes,
            format,
            width: bitmap.width,
            height: bitmap.height,
        })
    }

    pub fn to_png(&self) -> Result<Vec<u8>> {
        Ok(self.render_as(OutputFormat::Png)?.bytes)
    }

    /// GIF output; any requested alpha is ignored
    pub fn to_gif(&self) -> Result<Vec<u8>> {
        Ok(self.render_as(OutputFormat::Gif)?.bytes)
    }

    /// JPEG output; any requested alpha is ignored
    pub fn to_jpeg(&self) -> Result<Vec<u8>> {
        Ok(self.render_as(OutputFormat::Jpeg)?.bytes)
    }

    fn composite(&self, style: &StyleConfig, font: &dyn FontRef) -> Result<BitmapData> {
        let layout = Layout::compute(&self.columns, style)?;
        CanvasCompositor::new().compose(&layout, style, font)
    }

    fn load_font(&self) -> Result<FontFace> {
        let path = self
            .style
            .font_path
            .as_deref()
            .ok_or_else(|| FontLoadError::FileNotFound(self.style.font_id.clone()))?;
        FontFace::from_file(path)
    }
}

/// Validate, lay out, render and encode in one call
pub fn render_vertical<I, K, V>(
    text: &str,
    params: I,
    fonts: &dyn FontResolver,
) -> Result<RenderedImage>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    VerticalText::new(text, params, fonts)?.render()
}

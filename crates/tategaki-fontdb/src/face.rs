//! TrueType fonts loaded into memory

use std::fs;
use std::path::Path;

use read_fonts::{FontRef as ReadFontRef, TableProvider};
use skrifa::{
    instance::{LocationRef, Size},
    outline::{DrawSettings, OutlinePen},
    FontRef as SkrifaFontRef, GlyphId, MetadataProvider,
};
use tategaki_core::{
    error::{FontLoadError, Result},
    FontRef, OutlineSink,
};

/// A font file's bytes, validated once at load time
pub struct FontFace {
    name: String,
    data: Vec<u8>,
}

impl FontFace {
    /// Read and validate a font file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data =
            fs::read(path).map_err(|_| FontLoadError::FileNotFound(path.display().to_string()))?;
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unnamed")
            .to_string();

        Self::from_data(name, data)
    }

    /// Validate font bytes already in memory
    ///
    /// A font without a readable `head` table is rejected here rather than
    /// halfway through a render.
    pub fn from_data(name: impl Into<String>, data: Vec<u8>) -> Result<Self> {
        let font = ReadFontRef::new(&data)
            .map_err(|e| FontLoadError::InvalidData(e.to_string()))?;
        font.head()
            .map_err(|e| FontLoadError::InvalidData(format!("head table: {}", e)))?;

        Ok(Self {
            name: name.into(),
            data,
        })
    }
}

/// Forwards skrifa's pen calls to an [`OutlineSink`]
struct SinkPen<'a> {
    sink: &'a mut dyn OutlineSink,
}

impl OutlinePen for SinkPen<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        self.sink.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.sink.line_to(x, y);
    }

    fn quad_to(&mut self, cx0: f32, cy0: f32, x: f32, y: f32) {
        self.sink.quad_to(cx0, cy0, x, y);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.sink.curve_to(cx0, cy0, cx1, cy1, x, y);
    }

    fn close(&mut self) {
        self.sink.close();
    }
}

impl FontRef for FontFace {
    fn name(&self) -> &str {
        &self.name
    }

    fn draw_glyph(&self, ch: char, pixels_per_em: f32, sink: &mut dyn OutlineSink) -> Result<()> {
        let font = SkrifaFontRef::new(&self.data)
            .map_err(|e| FontLoadError::InvalidData(e.to_string()))?;
        let glyph_id = font.charmap().map(ch).unwrap_or_else(|| {
            log::debug!("{}: U+{:04X} not mapped, drawing .notdef", self.name, ch as u32);
            GlyphId::NOTDEF
        });

        let Some(glyph) = font.outline_glyphs().get(glyph_id) else {
            log::trace!("{}: no outline for U+{:04X}", self.name, ch as u32);
            return Ok(());
        };

        let settings = DrawSettings::unhinted(Size::new(pixels_per_em), LocationRef::default());
        glyph
            .draw(settings, &mut SinkPen { sink })
            .map_err(|_| FontLoadError::OutlineFailed(ch as u32))?;
        Ok(())
    }
}

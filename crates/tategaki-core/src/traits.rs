//! The seams between stages
//!
//! - [`FontResolver`] - turns a font id into a font file during validation
//! - [`FontRef`] - hands glyph outlines to the renderer
//! - [`OutlineSink`] - receives those outlines, one path command at a time
//! - [`Exporter`] - turns a finished canvas into file bytes

use std::path::PathBuf;

use crate::{error::Result, types::BitmapData};

/// Looks up font ids on a read-only search path
///
/// Shared across concurrent renders, so implementations must be immutable
/// once built.
pub trait FontResolver: Send + Sync {
    /// Path of the first `<font_id>.ttf` found, if any
    fn resolve(&self, font_id: &str) -> Option<PathBuf>;
}

/// Receives glyph outline commands in pixel units, y-up, origin on the
/// baseline at the pen position
pub trait OutlineSink {
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32);
    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32);
    fn close(&mut self);
}

/// A loaded font the renderer can draw from
///
/// ```ignore
/// struct Boxes;
///
/// impl FontRef for Boxes {
///     fn name(&self) -> &str {
///         "boxes"
///     }
///
///     fn draw_glyph(&self, _ch: char, ppem: f32, sink: &mut dyn OutlineSink) -> Result<()> {
///         sink.move_to(0.0, 0.0);
///         sink.line_to(ppem, 0.0);
///         sink.line_to(ppem, ppem);
///         sink.close();
///         Ok(())
///     }
/// }
/// ```
pub trait FontRef: Send + Sync {
    /// Identifies the font in logs
    fn name(&self) -> &str;

    /// Trace the outline of `ch` at `pixels_per_em` into `sink`
    ///
    /// Characters missing from the font draw the font's `.notdef` glyph.
    /// Glyphs without an outline (spaces) draw nothing and succeed.
    fn draw_glyph(&self, ch: char, pixels_per_em: f32, sink: &mut dyn OutlineSink) -> Result<()>;
}

/// The final step: pixels become file bytes
pub trait Exporter: Send + Sync {
    fn name(&self) -> &'static str;

    /// Encode the canvas
    fn export(&self, bitmap: &BitmapData) -> Result<Vec<u8>>;

    fn extension(&self) -> &'static str;

    fn mime_type(&self) -> &'static str;
}

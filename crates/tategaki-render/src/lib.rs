//! Tategaki Renderer - glyphs onto the canvas via tiny-skia
//!
//! Outlines are filled with tiny-skia's anti-aliased path renderer on an
//! oversized working surface, rotated there when the character calls for
//! it, and resampled into place with the `image` crate's triangle filter.
//!
//! ```ignore
//! use tategaki_core::{ColumnSequence, Layout, StyleConfig};
//! use tategaki_render::CanvasCompositor;
//!
//! let style = StyleConfig::default();
//! let layout = Layout::compute(&ColumnSequence::from_text("縦書き"), &style)?;
//! let bitmap = CanvasCompositor::new().compose(&layout, &style, &font)?;
//! ```

mod canvas;
mod compositor;
mod glyph;
mod pen;

pub use canvas::Canvas;
pub use compositor::CanvasCompositor;
pub use glyph::{
    background_color, glyph_pixels_per_em, glyph_point_size, GlyphRenderer, BASELINE_RATIO,
    DEVICE_DPI, SUPERSAMPLE_SIZE,
};
pub use pen::PathSink;

//! One full render: canvas, background, every glyph in layout order

use tategaki_core::{
    error::Result,
    layout::{GlyphCell, Layout},
    types::BitmapData,
    FontRef, StyleConfig,
};

use crate::{
    canvas::Canvas,
    glyph::{background_color, GlyphRenderer},
};

/// Orchestrates a render from layout to finished bitmap
///
/// Holds no state between renders; every call allocates its own canvas
/// and working surfaces, so one compositor can serve many threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct CanvasCompositor;

impl CanvasCompositor {
    pub fn new() -> Self {
        Self
    }

    /// Render `layout` in `style` with glyphs from `font`
    ///
    /// Any glyph failure aborts the whole render; no partial image is
    /// returned.
    pub fn compose(
        &self,
        layout: &Layout,
        style: &StyleConfig,
        font: &dyn FontRef,
    ) -> Result<BitmapData> {
        let mut canvas = Canvas::new(
            layout.canvas_width(),
            layout.canvas_height(),
            background_color(style),
        )?;
        let mut glyphs = GlyphRenderer::new(style)?;

        let mut drawn = 0usize;
        for cell in layout.cells() {
            if !cell_is_visible(&cell, layout) {
                log::trace!("U+{:04X} falls outside the canvas", cell.ch as u32);
                continue;
            }
            glyphs.render(font, &cell, &mut canvas)?;
            drawn += 1;
        }

        log::info!(
            "rendered {} glyphs in {} columns onto {}x{} with {}",
            drawn,
            layout.columns().len(),
            canvas.width(),
            canvas.height(),
            font.name()
        );
        Ok(canvas.to_bitmap())
    }
}

/// Whether any pixel of the cell lands on the canvas
fn cell_is_visible(cell: &GlyphCell, layout: &Layout) -> bool {
    let size = i64::from(layout.font_size());
    cell.x < i64::from(layout.canvas_width())
        && cell.y < i64::from(layout.canvas_height())
        && cell.x + size > 0
        && cell.y + size > 0
}

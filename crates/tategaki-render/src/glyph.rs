//! One character, drawn big, turned if needed, then shrunk into its cell
//!
//! Rotating a 40 px glyph smears it. Instead every glyph is drawn onto a
//! fixed 800 px square working surface, rotated there, and only then
//! resampled down to the cell size. The order matters:
//!
//! 1. fill the surface with the background
//! 2. draw the glyph
//! 3. rotate the whole surface about its center, background in the corners
//! 4. resample into the `font_size × font_size` cell on the canvas
//!
//! The surface is reused for every character of a render and repainted in
//! full before each one.

use image::{imageops, imageops::FilterType, ImageBuffer, Rgba, RgbaImage};
use tategaki_core::{
    error::{RenderError, Result},
    layout::GlyphCell,
    FontRef, Rotation, StyleConfig,
};
use tiny_skia::{
    BlendMode, Color, FillRule, FilterQuality, Paint, Pixmap, PixmapPaint, PixmapRef, Transform,
};

use crate::{canvas::Canvas, pen::PathSink};

/// Side of the square working surface in pixels
pub const SUPERSAMPLE_SIZE: u32 = 800;
/// Resolution the glyph point size is interpreted at
pub const DEVICE_DPI: f32 = 96.0;
/// Baseline position as a fraction of the surface height
pub const BASELINE_RATIO: f32 = 0.9;

const POINTS_PER_INCH: f32 = 72.0;

/// Point size glyphs are set at on the working surface
pub fn glyph_point_size() -> f32 {
    SUPERSAMPLE_SIZE as f32 * POINTS_PER_INCH / DEVICE_DPI
}

/// Pixels per em on the working surface
pub fn glyph_pixels_per_em() -> f32 {
    glyph_point_size() * DEVICE_DPI / POINTS_PER_INCH
}

/// Draws characters into cells of a [`Canvas`]
pub struct GlyphRenderer {
    surface: Pixmap,
    spare: Pixmap,
    background: Color,
    ink: Paint<'static>,
    cell_size: u32,
}

impl GlyphRenderer {
    /// Allocate the working surfaces for a render in `style`
    pub fn new(style: &StyleConfig) -> Result<Self> {
        let size = SUPERSAMPLE_SIZE;
        let allocate = || {
            Pixmap::new(size, size).ok_or(RenderError::SurfaceAllocation {
                width: size,
                height: size,
            })
        };

        let text = style.text_color;
        let mut ink = Paint::default();
        ink.set_color_rgba8(text.r, text.g, text.b, 255);
        ink.anti_alias = true;

        Ok(Self {
            surface: allocate()?,
            spare: allocate()?,
            background: background_color(style),
            ink,
            cell_size: style.font_size,
        })
    }

    /// The working surface as it stands after the last [`Self::prepare`]
    pub fn surface(&self) -> PixmapRef<'_> {
        self.surface.as_ref()
    }

    /// Render `cell.ch` into its cell on `canvas`
    pub fn render(
        &mut self,
        font: &dyn FontRef,
        cell: &GlyphCell,
        canvas: &mut Canvas,
    ) -> Result<()> {
        self.prepare(font, cell.ch)?;
        let resampled = self.downsample()?;
        canvas.paste(&resampled, cell.x, cell.y);
        Ok(())
    }

    /// Fill, draw and rotate `ch` on the working surface
    pub fn prepare(&mut self, font: &dyn FontRef, ch: char) -> Result<()> {
        self.surface.fill(self.background);

        let mut sink = PathSink::new();
        font.draw_glyph(ch, glyph_pixels_per_em(), &mut sink)?;
        if let Some(path) = sink.finish() {
            // Outlines are y-up from the baseline; the surface is y-down
            let baseline = SUPERSAMPLE_SIZE as f32 * BASELINE_RATIO;
            let transform = Transform::from_scale(1.0, -1.0).post_translate(0.0, baseline);
            self.surface
                .fill_path(&path, &self.ink, FillRule::Winding, transform, None);
        }

        let rotation = Rotation::for_char(ch);
        if !rotation.is_upright() {
            log::trace!("rotating U+{:04X} by {}°", ch as u32, rotation.degrees());
            self.rotate(rotation);
        }
        Ok(())
    }

    /// Turn the whole surface about its center
    ///
    /// Angles are counter-clockwise positive while tiny-skia turns
    /// clockwise for positive angles on its y-down grid, hence the negation.
    fn rotate(&mut self, rotation: Rotation) {
        let center = SUPERSAMPLE_SIZE as f32 / 2.0;
        let transform = Transform::from_rotate_at(-(rotation.degrees() as f32), center, center);
        let paint = PixmapPaint {
            blend_mode: BlendMode::Source,
            quality: FilterQuality::Nearest,
            ..PixmapPaint::default()
        };

        self.spare.fill(self.background);
        self.spare
            .draw_pixmap(0, 0, self.surface.as_ref(), &paint, transform, None);
        std::mem::swap(&mut self.surface, &mut self.spare);
    }

    /// Smooth resample of the surface down to one cell
    fn downsample(&self) -> Result<RgbaImage> {
        let view = ImageBuffer::<Rgba<u8>, &[u8]>::from_raw(
            self.surface.width(),
            self.surface.height(),
            self.surface.data(),
        )
        .ok_or_else(|| RenderError::Resample("working surface has unexpected size".into()))?;

        Ok(imageops::resize(
            &view,
            self.cell_size,
            self.cell_size,
            FilterType::Triangle,
        ))
    }
}

/// Background with the style's opacity applied
pub fn background_color(style: &StyleConfig) -> Color {
    let bg = style.background_color;
    Color::from_rgba8(bg.r, bg.g, bg.b, style.background_opacity())
}

//! The output raster of one render

use image::RgbaImage;
use tategaki_core::{
    error::{RenderError, Result},
    types::BitmapData,
};
use tiny_skia::{Color, Pixmap};

/// Premultiplied RGBA surface owned by a single render
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Allocate a `width × height` canvas filled with `background`
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self> {
        let mut pixmap =
            Pixmap::new(width, height).ok_or(RenderError::SurfaceAllocation { width, height })?;
        pixmap.fill(background);
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Replace the pixels under `cell` with its contents, top-left at (x, y)
    ///
    /// `cell` holds premultiplied RGBA. Parts falling outside the canvas
    /// are dropped.
    pub fn paste(&mut self, cell: &RgbaImage, x: i64, y: i64) {
        let canvas_w = i64::from(self.pixmap.width());
        let canvas_h = i64::from(self.pixmap.height());
        let cell_w = i64::from(cell.width());

        let x0 = x.max(0);
        let x1 = (x + cell_w).min(canvas_w);
        if x0 >= x1 {
            return;
        }
        let span = ((x1 - x0) * 4) as usize;
        let src_skip = ((x0 - x) * 4) as usize;

        let src = cell.as_raw();
        let src_stride = (cell_w * 4) as usize;
        let dst_stride = (canvas_w * 4) as usize;
        let dst = self.pixmap.data_mut();

        for row in 0..i64::from(cell.height()) {
            let dy = y + row;
            if dy < 0 || dy >= canvas_h {
                continue;
            }
            let s = row as usize * src_stride + src_skip;
            let d = dy as usize * dst_stride + (x0 * 4) as usize;
            dst[d..d + span].copy_from_slice(&src[s..s + span]);
        }
    }

    /// Straight-alpha RGBA copy of the canvas, ready for encoding
    pub fn to_bitmap(&self) -> BitmapData {
        let data = self
            .pixmap
            .pixels()
            .iter()
            .flat_map(|px| {
                let c = px.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();

        BitmapData {
            width: self.pixmap.width(),
            height: self.pixmap.height(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid(size: u32, px: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(size, size, Rgba(px))
    }

    #[test]
    fn test_new_fills_background() {
        let canvas = Canvas::new(3, 2, Color::from_rgba8(10, 20, 30, 255)).unwrap();
        let bitmap = canvas.to_bitmap();
        assert_eq!(bitmap.data.len(), 3 * 2 * 4);
        assert!(bitmap
            .data
            .chunks_exact(4)
            .all(|px| px == [10, 20, 30, 255]));
    }

    #[test]
    fn test_zero_area_is_an_error() {
        assert!(Canvas::new(0, 10, Color::WHITE).is_err());
    }

    #[test]
    fn test_paste_replaces_pixels() {
        let mut canvas = Canvas::new(4, 4, Color::WHITE).unwrap();
        canvas.paste(&solid(2, [0, 0, 0, 255]), 1, 1);
        let bitmap = canvas.to_bitmap();

        assert_eq!(bitmap.pixel(0, 0), Some([255, 255, 255, 255]));
        assert_eq!(bitmap.pixel(1, 1), Some([0, 0, 0, 255]));
        assert_eq!(bitmap.pixel(2, 2), Some([0, 0, 0, 255]));
        assert_eq!(bitmap.pixel(3, 3), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_paste_clips_at_every_edge() {
        let mut canvas = Canvas::new(4, 4, Color::WHITE).unwrap();
        canvas.paste(&solid(3, [0, 0, 0, 255]), -2, -2);
        canvas.paste(&solid(3, [0, 0, 0, 255]), 3, 3);
        canvas.paste(&solid(3, [0, 0, 0, 255]), 10, 0);
        let bitmap = canvas.to_bitmap();

        assert_eq!(bitmap.pixel(0, 0), Some([0, 0, 0, 255]));
        assert_eq!(bitmap.pixel(1, 0), Some([255, 255, 255, 255]));
        assert_eq!(bitmap.pixel(3, 3), Some([0, 0, 0, 255]));
        assert_eq!(bitmap.pixel(2, 3), Some([255, 255, 255, 255]));
    }

    #[test]
    fn test_to_bitmap_demultiplies() {
        let canvas = Canvas::new(1, 1, Color::from_rgba8(255, 0, 0, 128)).unwrap();
        let px = canvas.to_bitmap().pixel(0, 0).unwrap();
        assert_eq!(px[3], 128);
        assert!(px[0] >= 254);
    }
}

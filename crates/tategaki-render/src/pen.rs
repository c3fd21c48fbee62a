//! Glyph outlines into tiny-skia paths

use tategaki_core::OutlineSink;
use tiny_skia::{Path, PathBuilder};

/// Collects outline commands into a [`PathBuilder`]
pub struct PathSink {
    builder: PathBuilder,
}

impl PathSink {
    pub fn new() -> Self {
        Self {
            builder: PathBuilder::new(),
        }
    }

    /// The finished path, or `None` for an empty outline
    pub fn finish(self) -> Option<Path> {
        self.builder.finish()
    }
}

impl Default for PathSink {
    fn default() -> Self {
        Self::new()
    }
}

impl OutlineSink for PathSink {
    fn move_to(&mut self, x: f32, y: f32) {
        self.builder.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.builder.line_to(x, y);
    }

    fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        self.builder.quad_to(cx, cy, x, y);
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.builder.cubic_to(cx0, cy0, cx1, cy1, x, y);
    }

    fn close(&mut self) {
        self.builder.close();
    }
}

//! From lines of text to positioned glyph cells
//!
//! One input line becomes one column. Columns advance horizontally by one
//! `font_size` each, characters advance down the column by one `font_size`
//! each, and the whole block is anchored by an offset derived from the
//! alignment settings.

use crate::{
    error::{RenderError, Result},
    style::StyleConfig,
    types::{HorizontalAlign, VerticalAlign},
    width::to_full_width,
    MAX_CANVAS_PIXELS, MAX_CANVAS_SIZE,
};

/// The text as columns, in the order the lines were written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSequence {
    columns: Vec<Vec<char>>,
}

impl ColumnSequence {
    /// Widen narrow characters, then split into columns
    pub fn from_text(text: &str) -> Self {
        Self::split(&to_full_width(text))
    }

    /// Split already-normalized text on `\r\n`, `\r` or `\n`
    ///
    /// Always yields at least one column; an empty string is one empty column.
    pub fn split(text: &str) -> Self {
        let unified = text.replace("\r\n", "\n").replace('\r', "\n");
        let columns = unified
            .split('\n')
            .map(|line| line.chars().collect())
            .collect();
        Self { columns }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Character count of the longest column
    pub fn max_column_len(&self) -> usize {
        self.columns.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn columns(&self) -> &[Vec<char>] {
        &self.columns
    }

    /// Width of the block of columns at `font_size`
    pub fn natural_width(&self, font_size: u32) -> u64 {
        self.len() as u64 * u64::from(font_size)
    }

    /// Height of the longest column at `font_size`
    pub fn natural_height(&self, font_size: u32) -> u64 {
        self.max_column_len() as u64 * u64::from(font_size)
    }
}

/// One character and the top-left corner of its cell on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphCell {
    pub ch: char,
    pub x: i64,
    pub y: i64,
}

/// Canvas size, anchor offsets and placement order for one render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Columns right-to-left: index 0 is the last input line
    columns: Vec<Vec<char>>,
    font_size: u32,
    canvas_width: u32,
    canvas_height: u32,
    offset_x: i64,
    offset_y: i64,
}

impl Layout {
    /// Fill in missing canvas dimensions and compute offsets
    ///
    /// A computed dimension never drops below one cell, so an empty string
    /// still yields a `font_size × font_size` canvas. Explicit dimensions are
    /// taken as given; text that does not fit is clipped at render time.
    pub fn compute(sequence: &ColumnSequence, style: &StyleConfig) -> Result<Self> {
        let font_size = style.font_size;
        let cell = u64::from(font_size);
        let natural_width = sequence.natural_width(font_size);
        let natural_height = sequence.natural_height(font_size);

        let width = style
            .width
            .map(u64::from)
            .unwrap_or_else(|| natural_width.max(cell));
        let height = style
            .height
            .map(u64::from)
            .unwrap_or_else(|| natural_height.max(cell));

        // Every cell is resampled at full size before clipping
        if cell > u64::from(MAX_CANVAS_SIZE) || cell * cell > MAX_CANVAS_PIXELS {
            return Err(RenderError::InvalidDimensions {
                width: cell,
                height: cell,
            }
            .into());
        }

        let limit = u64::from(MAX_CANVAS_SIZE);
        if width == 0
            || height == 0
            || width > limit
            || height > limit
            || width * height > MAX_CANVAS_PIXELS
        {
            return Err(RenderError::InvalidDimensions { width, height }.into());
        }

        let offset_x = horizontal_offset(style.horizontal_align, width, natural_width);
        let offset_y = vertical_offset(style.vertical_align, height, natural_height);

        let mut columns = sequence.columns().to_vec();
        columns.reverse();

        log::debug!(
            "layout: {} columns, canvas {}x{}, offset ({}, {})",
            columns.len(),
            width,
            height,
            offset_x,
            offset_y
        );

        Ok(Self {
            columns,
            font_size,
            canvas_width: width as u32,
            canvas_height: height as u32,
            offset_x,
            offset_y,
        })
    }

    pub fn canvas_width(&self) -> u32 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> u32 {
        self.canvas_height
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    pub fn offset_x(&self) -> i64 {
        self.offset_x
    }

    pub fn offset_y(&self) -> i64 {
        self.offset_y
    }

    /// Columns in placement order, leftmost first
    pub fn columns(&self) -> &[Vec<char>] {
        &self.columns
    }

    /// Left edge of the column at `index` in placement order
    pub fn column_x(&self, index: usize) -> i64 {
        self.offset_x + index as i64 * i64::from(self.font_size)
    }

    /// Top edge of the character at `index` within its column
    pub fn row_y(&self, index: usize) -> i64 {
        self.offset_y + index as i64 * i64::from(self.font_size)
    }

    /// Every character with its cell, column by column, top to bottom
    pub fn cells(&self) -> impl Iterator<Item = GlyphCell> + '_ {
        self.columns.iter().enumerate().flat_map(move |(col, chars)| {
            let x = self.column_x(col);
            chars.iter().enumerate().map(move |(row, &ch)| GlyphCell {
                ch,
                x,
                y: self.row_y(row),
            })
        })
    }
}

/// Integer division truncates toward zero, so a block wider than the
/// canvas centers with a negative offset rounded toward the origin.
fn horizontal_offset(align: HorizontalAlign, canvas: u64, natural: u64) -> i64 {
    let slack = canvas as i64 - natural as i64;
    match align {
        HorizontalAlign::Right => slack,
        HorizontalAlign::Center => slack / 2,
        HorizontalAlign::Left => 0,
    }
}

fn vertical_offset(align: VerticalAlign, canvas: u64, natural: u64) -> i64 {
    let slack = canvas as i64 - natural as i64;
    match align {
        VerticalAlign::Top => 0,
        VerticalAlign::Middle => slack / 2,
        VerticalAlign::Bottom => slack,
    }
}

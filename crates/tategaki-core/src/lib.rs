//! Tategaki Core: text in, vertical columns out
//!
//! Japanese text written vertically runs top-to-bottom inside a column and
//! the columns march right-to-left across the page. This crate holds
//! everything about that process that does not touch pixels:
//!
//! 1. **Normalization** - half-width kana and ASCII become full-width ([`width`])
//! 2. **Validation** - raw option strings become a frozen [`StyleConfig`] ([`params`])
//! 3. **Layout** - lines become columns with a canvas size and offsets ([`layout`])
//! 4. **Rotation** - each character is classified upright, quarter-turned or
//!    half-turned ([`rotation`])
//!
//! Rasterizing and encoding live in `tategaki-render` and `tategaki-export`;
//! they meet this crate through the traits in [`traits`].
//!
//! ```
//! use tategaki_core::{layout::{ColumnSequence, Layout}, StyleConfig};
//!
//! let columns = ColumnSequence::from_text("縦書き\nです");
//! let style = StyleConfig::default();
//! let layout = Layout::compute(&columns, &style)?;
//!
//! assert_eq!(layout.canvas_width(), 80);
//! assert_eq!(layout.canvas_height(), 120);
//! # Ok::<(), tategaki_core::TategakiError>(())
//! ```

pub mod error;
pub mod layout;
pub mod params;
pub mod rotation;
pub mod style;
pub mod traits;
pub mod width;

pub use error::{Result, TategakiError};
pub use layout::{ColumnSequence, GlyphCell, Layout};
pub use params::ParameterValidator;
pub use rotation::Rotation;
pub use style::StyleConfig;
pub use traits::{Exporter, FontRef, FontResolver, OutlineSink};
pub use types::{HorizontalAlign, OutputFormat, Rgb, VerticalAlign};

/// Largest canvas side any render may request
pub const MAX_CANVAS_SIZE: u32 = 65535;

/// Largest pixel count of the canvas, and of one glyph cell
pub const MAX_CANVAS_PIXELS: u64 = 1 << 26;

/// The data structures shared by every stage
pub mod types {
    use std::fmt;
    use std::str::FromStr;

    /// A flat 24-bit color
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Rgb {
        pub r: u8,
        pub g: u8,
        pub b: u8,
    }

    impl Rgb {
        pub const fn new(r: u8, g: u8, b: u8) -> Self {
            Self { r, g, b }
        }

        pub const fn black() -> Self {
            Self::new(0, 0, 0)
        }

        pub const fn white() -> Self {
            Self::new(255, 255, 255)
        }

        /// Parse exactly six hex digits, case-insensitive, no leading `#`
        pub fn from_hex(hex: &str) -> Option<Self> {
            if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return None;
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
        }
    }

    impl fmt::Display for Rgb {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        }
    }

    /// Where the block of columns sits horizontally on a wider canvas
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum HorizontalAlign {
        #[default]
        Right,
        Center,
        Left,
    }

    impl HorizontalAlign {
        pub const ALL: [Self; 3] = [Self::Right, Self::Center, Self::Left];

        pub fn as_str(&self) -> &'static str {
            match self {
                Self::Right => "right",
                Self::Center => "center",
                Self::Left => "left",
            }
        }
    }

    impl FromStr for HorizontalAlign {
        type Err = ();

        fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
            match s {
                "right" => Ok(Self::Right),
                "center" => Ok(Self::Center),
                "left" => Ok(Self::Left),
                _ => Err(()),
            }
        }
    }

    /// Where the columns sit vertically on a taller canvas
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub enum VerticalAlign {
        #[default]
        Top,
        Middle,
        Bottom,
    }

    impl VerticalAlign {
        pub const ALL: [Self; 3] = [Self::Top, Self::Middle, Self::Bottom];

        pub fn as_str(&self) -> &'static str {
            match self {
                Self::Top => "top",
                Self::Middle => "middle",
                Self::Bottom => "bottom",
            }
        }
    }

    impl FromStr for VerticalAlign {
        type Err = ();

        fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
            match s {
                "top" => Ok(Self::Top),
                "middle" => Ok(Self::Middle),
                "bottom" => Ok(Self::Bottom),
                _ => Err(()),
            }
        }
    }

    /// Encoded image formats
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub enum OutputFormat {
        #[default]
        Png,
        Gif,
        Jpeg,
    }

    impl OutputFormat {
        pub const ALL: [Self; 3] = [Self::Png, Self::Gif, Self::Jpeg];

        pub fn as_str(&self) -> &'static str {
            match self {
                Self::Png => "png",
                Self::Gif => "gif",
                Self::Jpeg => "jpeg",
            }
        }

        /// Only PNG carries the alpha channel through to the file
        pub fn supports_alpha(&self) -> bool {
            matches!(self, Self::Png)
        }

        pub fn extension(&self) -> &'static str {
            match self {
                Self::Png => "png",
                Self::Gif => "gif",
                Self::Jpeg => "jpg",
            }
        }

        pub fn mime_type(&self) -> &'static str {
            match self {
                Self::Png => "image/png",
                Self::Gif => "image/gif",
                Self::Jpeg => "image/jpeg",
            }
        }
    }

    impl FromStr for OutputFormat {
        type Err = ();

        fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
            match s {
                "png" => Ok(Self::Png),
                "gif" => Ok(Self::Gif),
                "jpeg" | "jpg" => Ok(Self::Jpeg),
                _ => Err(()),
            }
        }
    }

    impl fmt::Display for OutputFormat {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.as_str())
        }
    }

    /// A finished canvas: straight (non-premultiplied) RGBA8, row-major
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct BitmapData {
        pub width: u32,
        pub height: u32,
        pub data: Vec<u8>,
    }

    impl BitmapData {
        /// RGBA of the pixel at (x, y), if inside the bitmap
        pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
            if x >= self.width || y >= self.height {
                return None;
            }
            let idx = ((y as usize) * (self.width as usize) + x as usize) * 4;
            let px = self.data.get(idx..idx + 4)?;
            Some([px[0], px[1], px[2], px[3]])
        }

        pub fn is_opaque(&self) -> bool {
            self.data.chunks_exact(4).all(|px| px[3] == 255)
        }
    }
}

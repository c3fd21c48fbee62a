//! Raw option strings in, a frozen [`StyleConfig`] out
//!
//! Options arrive as string pairs, the way a query string or a CLI would
//! deliver them. Recognized keys:
//!
//! | key         | accepted                         | default  |
//! |-------------|----------------------------------|----------|
//! | `font-size` | positive integer                 | `40`     |
//! | `color`     | six hex digits                   | `000000` |
//! | `bg-color`  | six hex digits                   | `FFFFFF` |
//! | `alpha`     | integer 0–127 (0 opaque)         | `0`      |
//! | `width`     | positive integer                 | computed |
//! | `height`    | positive integer                 | computed |
//! | `align`     | `right`, `center`, `left`        | `right`  |
//! | `valign`    | `top`, `middle`, `bottom`        | `top`    |
//! | `font`      | id of a `.ttf` on the search path| `ipam`   |
//! | `format`    | `png`, `gif`, `jpeg` (`jpg`)     | `png`    |
//!
//! Anything else is ignored. Every failure is an
//! [`TategakiError::InvalidParameter`] naming the key.

use std::collections::HashMap;

use crate::{
    error::{Result, TategakiError},
    style::{StyleConfig, MAX_ALPHA},
    traits::FontResolver,
    types::{HorizontalAlign, OutputFormat, Rgb, VerticalAlign},
};

pub const FONT_SIZE: &str = "font-size";
pub const COLOR: &str = "color";
pub const BG_COLOR: &str = "bg-color";
pub const ALPHA: &str = "alpha";
pub const WIDTH: &str = "width";
pub const HEIGHT: &str = "height";
pub const ALIGN: &str = "align";
pub const VALIGN: &str = "valign";
pub const FONT: &str = "font";
pub const FORMAT: &str = "format";

/// Every key the validator understands
pub const KNOWN_KEYS: [&str; 10] = [
    FONT_SIZE, COLOR, BG_COLOR, ALPHA, WIDTH, HEIGHT, ALIGN, VALIGN, FONT, FORMAT,
];

/// Checks options against the acceptance rules and resolves the font
pub struct ParameterValidator<'a> {
    fonts: &'a dyn FontResolver,
}

impl<'a> ParameterValidator<'a> {
    pub fn new(fonts: &'a dyn FontResolver) -> Self {
        Self { fonts }
    }

    /// Validate `params` and build the style
    ///
    /// Later duplicates of a key override earlier ones. Formats without an
    /// alpha channel get alpha 0 regardless of what was asked for.
    pub fn validate<I, K, V>(&self, params: I) -> Result<StyleConfig>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let raw: HashMap<String, String> = params
            .into_iter()
            .filter(|(k, _)| KNOWN_KEYS.contains(&k.as_ref()))
            .map(|(k, v)| (k.as_ref().to_string(), v.as_ref().to_string()))
            .collect();
        let get = |key: &str| raw.get(key).map(String::as_str);

        let mut style = StyleConfig::default();

        if let Some(value) = get(FONT_SIZE) {
            style.font_size = parse_positive(FONT_SIZE, value)?;
        }
        if let Some(value) = get(COLOR) {
            style.text_color = parse_color(COLOR, value)?;
        }
        if let Some(value) = get(BG_COLOR) {
            style.background_color = parse_color(BG_COLOR, value)?;
        }
        if let Some(value) = get(ALPHA) {
            style.alpha = parse_alpha(value)?;
        }
        if let Some(value) = get(WIDTH) {
            style.width = Some(parse_positive(WIDTH, value)?);
        }
        if let Some(value) = get(HEIGHT) {
            style.height = Some(parse_positive(HEIGHT, value)?);
        }
        if let Some(value) = get(ALIGN) {
            style.horizontal_align = value
                .parse::<HorizontalAlign>()
                .map_err(|_| TategakiError::invalid(ALIGN, value))?;
        }
        if let Some(value) = get(VALIGN) {
            style.vertical_align = value
                .parse::<VerticalAlign>()
                .map_err(|_| TategakiError::invalid(VALIGN, value))?;
        }
        if let Some(value) = get(FORMAT) {
            style.output_format = value
                .parse::<OutputFormat>()
                .map_err(|_| TategakiError::invalid(FORMAT, value))?;
        }
        if let Some(value) = get(FONT) {
            style.font_id = value.to_string();
        }
        style.font_path = Some(self.resolve_font(&style.font_id)?);

        let style = style.for_format(style.output_format);
        log::debug!(
            "validated style: {}px {} on {} alpha {} font {} as {}",
            style.font_size,
            style.text_color,
            style.background_color,
            style.alpha,
            style.font_id,
            style.output_format
        );
        Ok(style)
    }

    fn resolve_font(&self, font_id: &str) -> Result<std::path::PathBuf> {
        if !is_plain_font_id(font_id) {
            return Err(TategakiError::invalid(FONT, font_id));
        }
        self.fonts
            .resolve(font_id)
            .ok_or_else(|| TategakiError::invalid(FONT, font_id))
    }
}

/// Font ids name a file inside a search directory, never a path
fn is_plain_font_id(font_id: &str) -> bool {
    !font_id.is_empty()
        && !font_id.contains(['/', '\\', '\0'])
        && !font_id.contains("..")
}

/// ASCII digits only, no sign, no whitespace, not zero
fn parse_positive(field: &str, value: &str) -> Result<u32> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TategakiError::invalid(field, value));
    }
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(TategakiError::invalid(field, value)),
    }
}

fn parse_color(field: &str, value: &str) -> Result<Rgb> {
    Rgb::from_hex(value).ok_or_else(|| TategakiError::invalid(field, value))
}

fn parse_alpha(value: &str) -> Result<u8> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TategakiError::invalid(ALPHA, value));
    }
    match value.parse::<u8>() {
        Ok(alpha) if alpha <= MAX_ALPHA => Ok(alpha),
        _ => Err(TategakiError::invalid(ALPHA, value)),
    }
}

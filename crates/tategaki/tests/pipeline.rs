//! End-to-end pipeline tests: options in, encoded bytes out

// this_file: crates/tategaki/tests/pipeline.rs

use std::path::PathBuf;

use tategaki::{
    error::Result, FontRef, FontResolver, FontSearchPath, OutputFormat, TategakiError,
    VerticalText,
};
use tategaki_core::OutlineSink;
use tategaki_render::BASELINE_RATIO;

/// Resolves every id without touching the filesystem
struct AnyFont;

impl FontResolver for AnyFont {
    fn resolve(&self, font_id: &str) -> Option<PathBuf> {
        Some(PathBuf::from(format!("/virtual/{font_id}.ttf")))
    }
}

/// Inks the left half of the em square for every non-space character
struct HalfFont;

impl FontRef for HalfFont {
    fn name(&self) -> &str {
        "half"
    }

    fn draw_glyph(&self, ch: char, ppem: f32, sink: &mut dyn OutlineSink) -> Result<()> {
        if ch.is_whitespace() {
            return Ok(());
        }
        let top = ppem * BASELINE_RATIO;
        sink.move_to(0.0, top);
        sink.line_to(ppem / 2.0, top);
        sink.line_to(ppem / 2.0, top - ppem);
        sink.line_to(0.0, top - ppem);
        sink.close();
        Ok(())
    }
}

fn text(input: &str, options: &[(&str, &str)]) -> VerticalText {
    VerticalText::new(input, options.iter().copied(), &AnyFont).expect("options should validate")
}

fn rejected_field(options: &[(&str, &str)]) -> Option<String> {
    VerticalText::new("あ", options.iter().copied(), &AnyFont)
        .err()
        .and_then(|e| e.invalid_field().map(str::to_string))
}

#[test]
fn test_png_when_rendered_twice_then_byte_identical() {
    let vt = text("吾輩は猫である。\n名前はまだ無い。", &[("font-size", "24")]);
    let first = vt.render_with(&HalfFont, OutputFormat::Png).unwrap();
    let second = vt.render_with(&HalfFont, OutputFormat::Png).unwrap();
    assert_eq!(first.bytes, second.bytes);
    assert_eq!(first.format, OutputFormat::Png);
}

#[test]
fn test_png_when_decoded_then_matches_computed_size() {
    let vt = text("あいう\nえお", &[("font-size", "30")]);
    let rendered = vt.render_with(&HalfFont, OutputFormat::Png).unwrap();
    assert_eq!((rendered.width, rendered.height), (60, 90));

    let decoded = image::load_from_memory(&rendered.bytes).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (60, 90));
}

#[test]
fn test_png_when_alpha_requested_then_background_translucent() {
    let vt = text("あ", &[("alpha", "127"), ("width", "80"), ("font-size", "40")]);
    let rendered = vt.render_with(&HalfFont, OutputFormat::Png).unwrap();
    let decoded = image::load_from_memory(&rendered.bytes).unwrap().to_rgba8();

    assert_eq!(decoded.get_pixel(5, 5).0[3], 0);
    assert_eq!(decoded.get_pixel(45, 20).0[3], 255);
}

#[test]
fn test_gif_when_alpha_requested_then_output_opaque() {
    let vt = text("あ", &[("alpha", "100"), ("width", "80")]);
    let rendered = vt.render_with(&HalfFont, OutputFormat::Gif).unwrap();
    let decoded = image::load_from_memory(&rendered.bytes).unwrap().to_rgba8();
    assert!(decoded.pixels().all(|p| p.0[3] == 255));
}

#[test]
fn test_jpeg_when_alpha_requested_then_no_alpha_channel() {
    let vt = text("あ", &[("alpha", "100"), ("format", "jpeg")]);
    assert_eq!(vt.style().alpha, 0);

    let rendered = vt.render_with(&HalfFont, OutputFormat::Jpeg).unwrap();
    let decoded = image::load_from_memory(&rendered.bytes).unwrap();
    assert!(!decoded.color().has_alpha());
    assert_eq!(rendered.mime_type(), "image/jpeg");
}

#[test]
fn test_empty_string_when_rendered_then_one_cell_image() {
    let vt = text("", &[("font-size", "40")]);
    let rendered = vt.render_with(&HalfFont, OutputFormat::Png).unwrap();
    assert_eq!((rendered.width, rendered.height), (40, 40));
}

#[test]
fn test_bad_options_when_validating_then_named_field_rejected() {
    assert_eq!(rejected_field(&[("font-size", "abc")]).as_deref(), Some("font-size"));
    assert_eq!(rejected_field(&[("color", "zzzzzz")]).as_deref(), Some("color"));
    assert_eq!(rejected_field(&[("alpha", "200")]).as_deref(), Some("alpha"));
    assert_eq!(rejected_field(&[("align", "up")]).as_deref(), Some("align"));
}

#[test]
fn test_unknown_font_when_validating_then_font_rejected() {
    let fonts = FontSearchPath::new([missing_dir()]);
    let err = VerticalText::new("あ", [("font", "doesnotexist")], &fonts).unwrap_err();
    assert!(matches!(err, TategakiError::InvalidParameter { ref field, .. } if field == "font"));
}

#[test]
fn test_missing_font_file_when_rendering_then_fails_without_image() {
    // Resolves, but nothing exists at the path
    let vt = text("あ", &[]);
    let err = vt.render().unwrap_err();
    assert!(!err.is_invalid_parameter());
    assert!(err.to_string().contains("/virtual/ipam.ttf"));
}

#[test]
fn test_huge_font_size_when_rendering_then_error_not_abort() {
    let vt = text("あ", &[("font-size", "30000"), ("width", "10"), ("height", "10")]);
    let err = vt.render_with(&HalfFont, OutputFormat::Png).unwrap_err();
    assert!(matches!(err, TategakiError::Render(_)), "{err}");

    let vt = text("あ", &[("font-size", "40000")]);
    let err = vt.render_with(&HalfFont, OutputFormat::Png).unwrap_err();
    assert!(err.to_string().contains("Invalid dimensions"));
}

fn missing_dir() -> PathBuf {
    std::env::temp_dir().join("tategaki-no-fonts-here")
}

#[test]
fn test_real_font_when_available_then_renders() {
    let Ok(path) = std::env::var("TATEGAKI_TEST_FONT") else {
        eprintln!("TATEGAKI_TEST_FONT not set, skipping");
        return;
    };
    let path = PathBuf::from(path);
    let (Some(dir), Some(id)) = (path.parent(), path.file_stem().and_then(|s| s.to_str())) else {
        eprintln!("TATEGAKI_TEST_FONT is not a font file path, skipping");
        return;
    };

    let fonts = FontSearchPath::new([dir.to_path_buf()]);
    let rendered = tategaki::render_vertical(
        "縦書き（テスト）。\nｶﾞｷﾞ!",
        [("font", id), ("font-size", "32")],
        &fonts,
    )
    .unwrap();
    assert_eq!((rendered.width, rendered.height), (64, 288));

    let decoded = image::load_from_memory(&rendered.bytes).unwrap().to_rgba8();
    assert!(decoded.pixels().any(|p| p.0[0] < 128));
}

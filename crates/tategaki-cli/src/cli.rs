//! CLI argument definitions using Clap v4

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Tategaki - Japanese text as vertically written images
#[derive(Parser, Debug)]
#[command(name = "tategaki")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Base font directory (default: $TATEGAKI_FONT_DIR, else ./font)
    #[arg(long = "font-dir", global = true)]
    pub font_dir: Option<PathBuf>,

    /// Debug logging (RUST_LOG still takes precedence)
    #[arg(long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render text to an image file
    #[command(alias = "r")]
    Render(RenderArgs),

    /// List the font search path and the fonts found on it
    Fonts(FontsArgs),

    /// Process multiple rendering jobs from a JSONL file
    Batch(BatchArgs),
}

/// Style options, one flag per option key
#[derive(Args, Debug, Default, Clone)]
pub struct StyleArgs {
    /// Font size in pixels per character cell
    #[arg(short = 's', long = "font-size")]
    pub font_size: Option<String>,

    /// Text color (RRGGBB)
    #[arg(short = 'c', long = "color")]
    pub color: Option<String>,

    /// Background color (RRGGBB)
    #[arg(short = 'b', long = "bg-color")]
    pub bg_color: Option<String>,

    /// Background transparency, 0 (opaque) to 127 (transparent); PNG only
    #[arg(short = 'a', long = "alpha")]
    pub alpha: Option<String>,

    /// Canvas width in pixels (default: one column per line)
    #[arg(short = 'W', long = "width")]
    pub width: Option<String>,

    /// Canvas height in pixels (default: longest line)
    #[arg(short = 'H', long = "height")]
    pub height: Option<String>,

    /// Horizontal alignment: right, center, left
    #[arg(long = "align")]
    pub align: Option<String>,

    /// Vertical alignment: top, middle, bottom
    #[arg(long = "valign")]
    pub valign: Option<String>,

    /// Font id, the file stem of a .ttf on the search path
    #[arg(short = 'f', long = "font")]
    pub font: Option<String>,

    /// Output format: png, gif, jpeg
    #[arg(short = 'O', long = "format")]
    pub format: Option<String>,
}

impl StyleArgs {
    /// The flags that were given, as option key/value pairs
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        use tategaki::params::*;

        [
            (FONT_SIZE, &self.font_size),
            (COLOR, &self.color),
            (BG_COLOR, &self.bg_color),
            (ALPHA, &self.alpha),
            (WIDTH, &self.width),
            (HEIGHT, &self.height),
            (ALIGN, &self.align),
            (VALIGN, &self.valign),
            (FONT, &self.font),
            (FORMAT, &self.format),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.clone().map(|v| (key, v)))
        .collect()
    }
}

/// Arguments for the render command
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Input text to render (reads from stdin if omitted)
    pub text: Option<String>,

    /// Read input text from file
    #[arg(short = 'T', long = "text-file", conflicts_with = "text")]
    pub text_file: Option<PathBuf>,

    #[command(flatten)]
    pub style: StyleArgs,

    /// Output file path (stdout if omitted)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Silent mode (no progress info)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

/// Arguments for the fonts command
#[derive(Parser, Debug)]
pub struct FontsArgs {
    /// Print as JSON
    #[arg(long = "json")]
    pub json: bool,
}

/// Arguments for the batch command
#[derive(Parser, Debug)]
pub struct BatchArgs {
    /// Input JSONL file, one job per line (stdin if omitted)
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output directory for rendered files
    #[arg(short = 'o', long = "output-dir", default_value = ".")]
    pub output_dir: PathBuf,

    /// File name for jobs without "output"; {} is the line number
    #[arg(short = 'p', long = "pattern", default_value = "output_{}")]
    pub pattern: String,

    /// Silent mode
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

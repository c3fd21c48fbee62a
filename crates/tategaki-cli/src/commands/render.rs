//! Render command implementation

use std::fs;
use std::io::{self, Read, Write};

use tategaki::{error::Result, FontSearchPath, VerticalText};

use crate::cli::RenderArgs;

pub fn run(args: &RenderArgs, fonts: &FontSearchPath) -> Result<()> {
    let text = get_input_text(args)?;
    let params = args.style.to_params();

    let vertical = VerticalText::new(&text, params, fonts)?;
    log::debug!(
        "{} column(s), font {}",
        vertical.columns().len(),
        vertical.style().font_id
    );
    let rendered = vertical.render()?;

    match &args.output {
        Some(path) => fs::write(path, &rendered.bytes)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&rendered.bytes)?;
            stdout.flush()?;
        }
    }

    if !args.quiet {
        match &args.output {
            Some(path) => eprintln!("Rendered to {}", path.display()),
            None => eprintln!("Rendered to stdout"),
        }
        eprintln!("  Format: {}", rendered.format.as_str().to_uppercase());
        eprintln!(
            "  Size: {}x{} px, {} bytes",
            rendered.width,
            rendered.height,
            rendered.bytes.len()
        );
    }

    Ok(())
}

/// Priority: positional text > --text-file > stdin
fn get_input_text(args: &RenderArgs) -> Result<String> {
    if let Some(ref text) = args.text {
        return Ok(text.clone());
    }

    if let Some(ref path) = args.text_file {
        let text = fs::read_to_string(path)?;
        return Ok(strip_final_newline(&text).to_string());
    }

    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    Ok(strip_final_newline(&text).to_string())
}

/// Files and pipes end with a line break that is not an extra column
fn strip_final_newline(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .or_else(|| text.strip_suffix('\r'))
        .unwrap_or(text)
}

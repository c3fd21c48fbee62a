//! Fonts command implementation
//!
//! Shows where fonts are looked up and which ids resolve.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;
use tategaki::{
    error::{Result, TategakiError},
    FontSearchPath,
};

use crate::cli::FontsArgs;

#[derive(Debug, Serialize)]
struct FontReport {
    search_path: Vec<PathBuf>,
    fonts: BTreeMap<String, PathBuf>,
}

pub fn run(args: &FontsArgs, fonts: &FontSearchPath) -> Result<()> {
    let report = FontReport {
        search_path: fonts.dirs().to_vec(),
        fonts: fonts.available_fonts(),
    };

    if args.json {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| TategakiError::Other(format!("JSON output failed: {}", e)))?;
        println!("{}", json);
        return Ok(());
    }

    println!("Search path:");
    for dir in &report.search_path {
        let marker = if dir.is_dir() { "" } else { " (missing)" };
        println!("  {}{}", dir.display(), marker);
    }
    println!();

    if report.fonts.is_empty() {
        println!("No fonts found");
        return Ok(());
    }
    println!("Fonts:");
    for (id, path) in &report.fonts {
        println!("  {:<16} {}", id, path.display());
    }
    Ok(())
}

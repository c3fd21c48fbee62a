//! Batch command implementation
//!
//! Renders one job per JSONL line. Jobs run in parallel, each on its own
//! canvas; a bad job is reported and counted without stopping the rest.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Deserialize;
use serde_json::Value;
use tategaki::{
    error::{Result, TategakiError},
    FontSearchPath, VerticalText,
};

use crate::cli::BatchArgs;

/// JSONL job specification
#[derive(Debug, Deserialize)]
struct BatchJob {
    /// Text to render
    text: String,
    /// Output file name (relative to the output directory)
    #[serde(default)]
    output: Option<String>,
    /// Option keys as for `render`; numbers are accepted as well as strings
    #[serde(default)]
    options: BTreeMap<String, Value>,
}

impl BatchJob {
    fn params(&self) -> Vec<(&str, String)> {
        self.options
            .iter()
            .map(|(key, value)| {
                let value = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (key.as_str(), value)
            })
            .collect()
    }
}

/// What happened to one line
#[derive(Debug)]
enum Outcome {
    Written(PathBuf),
    Failed(TategakiError),
}

pub fn run(args: &BatchArgs, fonts: &FontSearchPath) -> Result<()> {
    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut lines = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push((index + 1, line));
        }
    }

    if !args.output_dir.exists() {
        fs::create_dir_all(&args.output_dir)?;
    }

    let outcomes: Vec<(usize, Outcome)> = lines
        .par_iter()
        .map(|(line_num, line)| {
            let outcome = match process_line(line, *line_num, args, fonts) {
                Ok(path) => Outcome::Written(path),
                Err(e) => Outcome::Failed(e),
            };
            (*line_num, outcome)
        })
        .collect();

    let mut failed = 0usize;
    for (line_num, outcome) in &outcomes {
        match outcome {
            Outcome::Written(path) => {
                if !args.quiet {
                    eprintln!("line {}: {}", line_num, path.display());
                }
            }
            Outcome::Failed(e) => {
                failed += 1;
                log::warn!("batch job on line {} skipped: {}", line_num, e);
                eprintln!("line {}: {}", line_num, e);
            }
        }
    }

    if !args.quiet {
        eprintln!();
        eprintln!("Batch processing complete:");
        eprintln!("  Total jobs: {}", outcomes.len());
        eprintln!("  Successful: {}", outcomes.len() - failed);
        eprintln!("  Failed: {}", failed);
    }

    if failed > 0 {
        Err(TategakiError::Other(format!(
            "{} of {} jobs failed",
            failed,
            outcomes.len()
        )))
    } else {
        Ok(())
    }
}

fn process_line(
    line: &str,
    line_num: usize,
    args: &BatchArgs,
    fonts: &FontSearchPath,
) -> Result<PathBuf> {
    let job: BatchJob = serde_json::from_str(line)
        .map_err(|e| TategakiError::Other(format!("malformed job: {}", e)))?;

    let vertical = VerticalText::new(&job.text, job.params(), fonts)?;
    let rendered = vertical.render()?;

    let name = match &job.output {
        Some(name) => output_name(name)?,
        None => format!(
            "{}.{}",
            args.pattern.replace("{}", &line_num.to_string()),
            rendered.extension()
        ),
    };
    let path = args.output_dir.join(name);
    fs::write(&path, &rendered.bytes)?;
    Ok(path)
}

/// Job output names stay inside the output directory
fn output_name(name: &str) -> Result<String> {
    let path = Path::new(name);
    let plain = path.components().count() == 1
        && path.file_name().map(|f| f == path.as_os_str()).unwrap_or(false);
    if name.is_empty() || !plain {
        return Err(TategakiError::invalid("output", name));
    }
    Ok(name.to_string())
}

//! Where font ids are looked up
//!
//! The search path is built once at startup and then only read, so one
//! instance can sit behind an `Arc` and serve every render concurrently.

use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};

use tategaki_core::FontResolver;
use walkdir::WalkDir;

/// Base font directory override
pub const FONT_DIR_ENV: &str = "TATEGAKI_FONT_DIR";
/// Extra directories searched after the base, in platform path-list syntax
pub const FONT_PATH_ENV: &str = "TATEGAKI_FONT_PATH";
/// Base directory when nothing else is configured
pub const DEFAULT_FONT_DIR: &str = "font";

const FONT_EXTENSION: &str = "ttf";

/// Ordered list of directories searched for `<id>.ttf`, first match wins
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontSearchPath {
    dirs: Vec<PathBuf>,
}

impl FontSearchPath {
    /// Search exactly `dirs`, in order
    pub fn new(dirs: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            dirs: dirs.into_iter().collect(),
        }
    }

    /// Search a base font directory and its immediate subdirectories
    ///
    /// Subdirectories come first, in reverse lexical order, followed by
    /// the base itself. A missing base is not an error; it simply finds
    /// nothing.
    pub fn from_base_dir(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        let mut subdirs: Vec<PathBuf> = WalkDir::new(base)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    log::warn!("skipping unreadable font directory entry: {}", err);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_dir())
            .map(|entry| entry.into_path())
            .collect();

        if !base.is_dir() {
            log::warn!("font directory {} does not exist", base.display());
        }

        subdirs.reverse();
        subdirs.push(base.to_path_buf());
        Self { dirs: subdirs }
    }

    /// Build from `TATEGAKI_FONT_DIR` (or `./font`) plus `TATEGAKI_FONT_PATH`
    pub fn from_env() -> Self {
        Self::from_env_with_base(None)
    }

    /// Like [`from_env`](Self::from_env), but `base` wins over `TATEGAKI_FONT_DIR`
    pub fn from_env_with_base(base: Option<PathBuf>) -> Self {
        let base = base
            .or_else(|| env::var_os(FONT_DIR_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FONT_DIR));
        let extra = env::var_os(FONT_PATH_ENV)
            .map(|paths| env::split_paths(&paths).collect::<Vec<_>>())
            .unwrap_or_default();

        let search = Self::from_base_dir(base).with_extra_dirs(extra);
        log::debug!("font search path: {:?}", search.dirs);
        search
    }

    /// Append directories searched after the existing ones
    pub fn with_extra_dirs(mut self, dirs: impl IntoIterator<Item = PathBuf>) -> Self {
        self.dirs
            .extend(dirs.into_iter().filter(|d| !d.as_os_str().is_empty()));
        self
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Path of the first `<font_id>.ttf` on the search path
    pub fn find(&self, font_id: &str) -> Option<PathBuf> {
        let file_name = format!("{font_id}.{FONT_EXTENSION}");
        self.dirs
            .iter()
            .map(|dir| dir.join(&file_name))
            .find(|candidate| candidate.is_file())
    }

    /// Every font id reachable on the search path and the file it resolves to
    pub fn available_fonts(&self) -> BTreeMap<String, PathBuf> {
        let mut fonts = BTreeMap::new();
        for dir in &self.dirs {
            let entries = WalkDir::new(dir)
                .min_depth(1)
                .max_depth(1)
                .follow_links(true)
                .into_iter()
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.file_type().is_file());

            for entry in entries {
                let path = entry.path();
                if path.extension().and_then(|e| e.to_str()) != Some(FONT_EXTENSION) {
                    continue;
                }
                if let Some(id) = path.file_stem().and_then(|s| s.to_str()) {
                    fonts
                        .entry(id.to_string())
                        .or_insert_with(|| path.to_path_buf());
                }
            }
        }
        fonts
    }
}

impl FontResolver for FontSearchPath {
    fn resolve(&self, font_id: &str) -> Option<PathBuf> {
        let found = self.find(font_id);
        match &found {
            Some(path) => log::debug!("font '{}' resolved to {}", font_id, path.display()),
            None => log::debug!("font '{}' not found on {} dirs", font_id, self.dirs.len()),
        }
        found
    }
}

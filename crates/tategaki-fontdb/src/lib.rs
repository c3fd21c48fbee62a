//! Finding and loading fonts for Tategaki
//!
//! Two jobs, kept apart because they happen at different times:
//!
//! - [`FontSearchPath`] answers "which file is font `ipam`?" during
//!   validation, without opening anything
//! - [`FontFace`] reads that file when rendering starts and traces glyph
//!   outlines for the renderer

mod face;
mod search_path;

pub use face::FontFace;
pub use search_path::{FontSearchPath, DEFAULT_FONT_DIR, FONT_DIR_ENV, FONT_PATH_ENV};

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tategaki_core::FontResolver;

    #[test]
    fn test_subdirectories_searched_before_base_in_reverse_order() {
        let base = tempfile::tempdir().unwrap();
        fs::create_dir(base.path().join("alpha")).unwrap();
        fs::create_dir(base.path().join("beta")).unwrap();
        fs::write(base.path().join("readme.txt"), "not a dir").unwrap();

        let search = FontSearchPath::from_base_dir(base.path());
        assert_eq!(
            search.dirs(),
            &[
                base.path().join("beta"),
                base.path().join("alpha"),
                base.path().to_path_buf(),
            ]
        );
    }

    #[test]
    fn test_first_match_wins() {
        let base = tempfile::tempdir().unwrap();
        let sub = base.path().join("ipa");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("ipam.ttf"), b"sub").unwrap();
        fs::write(base.path().join("ipam.ttf"), b"base").unwrap();

        let search = FontSearchPath::from_base_dir(base.path());
        assert_eq!(search.resolve("ipam"), Some(sub.join("ipam.ttf")));
    }

    #[test]
    fn test_missing_font_and_directories_resolve_to_none() {
        let base = tempfile::tempdir().unwrap();
        let search = FontSearchPath::from_base_dir(base.path());
        assert_eq!(search.resolve("ipam"), None);

        let nowhere = FontSearchPath::from_base_dir(base.path().join("missing"));
        assert_eq!(nowhere.dirs().len(), 1);
        assert_eq!(nowhere.resolve("ipam"), None);
    }

    #[test]
    fn test_explicit_base_overrides_environment() {
        let base = tempfile::tempdir().unwrap();
        let search = FontSearchPath::from_env_with_base(Some(base.path().to_path_buf()));
        assert_eq!(search.dirs().first(), Some(&base.path().to_path_buf()));
    }

    #[test]
    fn test_extra_dirs_come_last() {
        let base = tempfile::tempdir().unwrap();
        let extra = tempfile::tempdir().unwrap();
        fs::write(extra.path().join("mincho.ttf"), b"x").unwrap();

        let search = FontSearchPath::from_base_dir(base.path())
            .with_extra_dirs([extra.path().to_path_buf()]);
        assert_eq!(search.dirs().last(), Some(&extra.path().to_path_buf()));
        assert_eq!(search.resolve("mincho"), Some(extra.path().join("mincho.ttf")));
    }

    #[test]
    fn test_available_fonts_lists_ttf_stems_once() {
        let base = tempfile::tempdir().unwrap();
        let sub = base.path().join("ipa");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("ipag.ttf"), b"x").unwrap();
        fs::write(base.path().join("ipag.ttf"), b"x").unwrap();
        fs::write(base.path().join("ipam.ttf"), b"x").unwrap();
        fs::write(base.path().join("notes.otf"), b"x").unwrap();

        let fonts = FontSearchPath::from_base_dir(base.path()).available_fonts();
        assert_eq!(fonts.keys().collect::<Vec<_>>(), vec!["ipag", "ipam"]);
        assert_eq!(fonts["ipag"], sub.join("ipag.ttf"));
    }

    #[test]
    fn test_garbage_bytes_are_not_a_font() {
        let err = FontFace::from_data("junk", b"definitely not a font".to_vec())
            .err()
            .map(|e| e.to_string())
            .unwrap_or_default();
        assert!(err.contains("Invalid font data"));
    }

    #[test]
    fn test_font_without_head_table_is_rejected_at_load() {
        // sfnt 1.0 header with an empty table directory
        let empty_sfnt = vec![0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        let err = FontFace::from_data("empty", empty_sfnt)
            .err()
            .map(|e| e.to_string())
            .unwrap_or_default();
        assert!(err.contains("Invalid font data"), "{err}");
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = FontFace::from_file("/nonexistent/ipam.ttf")
            .err()
            .map(|e| e.to_string())
            .unwrap_or_default();
        assert!(err.contains("/nonexistent/ipam.ttf"));
    }
}

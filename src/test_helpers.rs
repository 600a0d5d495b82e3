//! Shared test utilities for the shot-table test suite.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let set = scan(&screenshots_dir(&tmp), &ScanOptions::default()).unwrap();
//!
//! let entry = find_entry(&set, "login_screen.png");
//! assert_eq!(entry.alt_text, "Login screen");
//! ```

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::types::{ImageEntry, ScreenshotSet};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

/// The `screenshots/` folder inside a fixture copy.
pub fn screenshots_dir(tmp: &TempDir) -> PathBuf {
    tmp.path().join("screenshots")
}

/// Create an empty file. Contents never matter to the scanner.
pub fn touch(dir: &Path, name: &str) {
    std::fs::write(dir.join(name), b"").unwrap();
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Lookups — panic with a clear message on miss
// =========================================================================

/// Find an entry by filename. Panics if not found.
pub fn find_entry<'a>(set: &'a ScreenshotSet, file_name: &str) -> &'a ImageEntry {
    set.images
        .iter()
        .find(|e| e.file_name == file_name)
        .unwrap_or_else(|| {
            let names = file_names(set);
            panic!("image '{file_name}' not found. Available: {names:?}")
        })
}

/// All filenames in output order.
pub fn file_names(set: &ScreenshotSet) -> Vec<&str> {
    set.images.iter().map(|e| e.file_name.as_str()).collect()
}

/// Build a set by hand, deriving alt text the same way a scan does.
pub fn make_set(folder: &str, files: &[&str]) -> ScreenshotSet {
    let images = files
        .iter()
        .map(|f| {
            let parsed = crate::naming::parse_image_name(f);
            ImageEntry::new(folder, f.to_string(), parsed.alt_text)
        })
        .collect();
    ScreenshotSet {
        folder_name: folder.to_string(),
        images,
    }
}

//! Directory scanning.
//!
//! Lists the screenshots directory once, keeps the image files, and turns each
//! into an [`ImageEntry`]. The scan is deliberately flat:
//!
//! ```text
//! screenshots/
//! ├── login_screen.png     # kept
//! ├── dark_mode.JPG        # kept (extension match ignores case)
//! ├── notes.txt            # skipped: not an image
//! ├── archive.png/         # skipped: a directory, whatever its name
//! └── old/
//!     └── first_run.png    # never seen: no recursion
//! ```
//!
//! Image files are never opened; only names are read.
//!
//! ## Ordering
//!
//! `read_dir` order is platform-dependent. [`Order::Name`] (the default) sorts
//! by filename so regenerating the table against an unchanged folder gives a
//! byte-identical result. [`Order::Filesystem`] keeps the listing order as-is.

use crate::naming::{self, DEFAULT_EXTENSIONS};
use crate::types::{ImageEntry, ScreenshotSet};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("directory not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("permission denied reading {}", .0.display())]
    PermissionDenied(PathBuf),
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("IO error reading {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

impl ScanError {
    fn from_io(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => ScanError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => {
                ScanError::PermissionDenied(path.to_path_buf())
            }
            _ => ScanError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

/// How discovered images are ordered in the table.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    /// Sorted by filename (byte-wise).
    #[default]
    Name,
    /// Whatever order the operating system lists the directory in.
    Filesystem,
}

/// Knobs for a single scan.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Extensions (no leading dot) that count as images.
    pub extensions: Vec<String>,
    pub order: Order,
    /// Overrides the `<img src>` prefix; defaults to the directory's own name.
    pub folder_name: Option<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            order: Order::default(),
            folder_name: None,
        }
    }
}

/// Scan `dir` for screenshots.
///
/// Fails before producing anything if the directory is missing, unreadable,
/// or not a directory. An empty result is not an error.
pub fn scan(dir: &Path, options: &ScanOptions) -> Result<ScreenshotSet, ScanError> {
    let metadata = fs::metadata(dir).map_err(|e| ScanError::from_io(e, dir))?;
    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }

    let folder_name = match &options.folder_name {
        Some(name) => name.clone(),
        None => folder_name(dir),
    };
    debug!(dir = %dir.display(), folder = %folder_name, "scanning");

    let mut file_names = collect_image_names(dir, &options.extensions)?;
    if options.order == Order::Name {
        file_names.sort();
    }

    let images: Vec<ImageEntry> = file_names
        .into_iter()
        .map(|file_name| {
            let parsed = naming::parse_image_name(&file_name);
            ImageEntry::new(&folder_name, file_name, parsed.alt_text)
        })
        .collect();

    info!(count = images.len(), dir = %dir.display(), "found screenshots");
    Ok(ScreenshotSet {
        folder_name,
        images,
    })
}

fn collect_image_names(dir: &Path, extensions: &[String]) -> Result<Vec<String>, ScanError> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| ScanError::from_io(e, dir))? {
        let path = entry.map_err(|e| ScanError::from_io(e, dir))?.path();
        if !path.is_file() {
            debug!(path = %path.display(), "skipping non-file entry");
            continue;
        }
        if !naming::is_image_file(&path, extensions) {
            debug!(path = %path.display(), "skipping non-image file");
            continue;
        }
        if let Some(name) = path.file_name() {
            names.push(name.to_string_lossy().to_string());
        }
    }
    Ok(names)
}

/// Name of the directory as it should appear in `<img src>` paths.
///
/// Uses the last path segment (`docs/screenshots` → `screenshots`). Paths with
/// no usable final segment (`.`, `..`, `some/dir/..`) are canonicalized first.
/// Returns an empty string for the filesystem root.
pub fn folder_name(dir: &Path) -> String {
    let last = |p: &Path| p.file_name().map(|n| n.to_string_lossy().to_string());
    let ends_in_parent = dir
        .components()
        .next_back()
        .is_some_and(|c| matches!(c, std::path::Component::ParentDir));

    if !ends_in_parent && let Some(name) = last(dir) {
        return name;
    }
    fs::canonicalize(dir)
        .ok()
        .and_then(|p| last(&p))
        .unwrap_or_default()
}

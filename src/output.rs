//! Writing results.
//!
//! Each command has a pure `format_*` function (returns `Vec<String>`) for
//! testability and a writer that does the I/O. The table is always rendered in
//! full before anything is written, so a failed run leaves stdout empty.
//!
//! ## `list --plain`
//!
//! ```text
//! screenshots (2 images)
//!     001 Login screen
//!         Source: login_screen.png
//!     002 Dark mode
//!         Source: dark_mode.jpg
//! ```

use crate::types::ScreenshotSet;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("failed to write {}: {source}", .path.display())]
    File { path: PathBuf, source: io::Error },
    #[error("failed to write to stdout: {0}")]
    Stdout(#[source] io::Error),
}

/// Where the rendered table goes.
#[derive(Debug, Clone, PartialEq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl From<Option<PathBuf>> for Destination {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(Destination::Stdout, Destination::File)
    }
}

/// Write already-rendered text to `dest` in one go.
pub fn write_table(dest: &Destination, text: &str) -> Result<(), OutputError> {
    match dest {
        Destination::Stdout => write_stdout(text),
        Destination::File(path) => {
            fs::write(path, text).map_err(|source| OutputError::File {
                path: path.clone(),
                source,
            })?;
            info!(path = %path.display(), "wrote table");
            Ok(())
        }
    }
}

/// Write `text` to stdout, reporting a closed pipe as an error instead of panicking.
pub fn write_stdout(text: &str) -> Result<(), OutputError> {
    emit(&mut io::stdout().lock(), text)
}

fn emit<W: Write>(out: &mut W, text: &str) -> Result<(), OutputError> {
    out.write_all(text.as_bytes())
        .and_then(|_| out.flush())
        .map_err(OutputError::Stdout)
}

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Human-readable inventory of a scan.
pub fn format_list(set: &ScreenshotSet) -> Vec<String> {
    let noun = if set.len() == 1 { "image" } else { "images" };
    let mut lines = vec![format!("{} ({} {})", set.folder_name, set.len(), noun)];
    for (i, entry) in set.images.iter().enumerate() {
        lines.push(format!(
            "{}{} {}",
            indent(1),
            format_index(i + 1),
            entry.alt_text
        ));
        lines.push(format!("{}Source: {}", indent(2), entry.file_name));
    }
    lines
}

/// Write the `list --plain` inventory to stdout.
pub fn print_list(set: &ScreenshotSet) -> Result<(), OutputError> {
    let mut text = format_list(set).join("\n");
    text.push('\n');
    write_stdout(&text)
}

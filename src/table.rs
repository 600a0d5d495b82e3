//! Markdown table rendering.
//!
//! One column per screenshot, three rows:
//!
//! ```text
//! | Login screen | Dark mode |
//! |--------------|-----------|
//! | <img src="screenshots/login_screen.png" alt="Login screen"/> | <img src="screenshots/dark_mode.jpg" alt="Dark mode"/> |
//! ```
//!
//! Each separator cell is exactly as wide as its header cell including the
//! padding spaces (`chars(alt_text) + 2` dashes). The image row is not padded;
//! Markdown renderers don't need aligned pipes.
//!
//! Row builders are pure; nothing here does I/O.

use crate::scan::{self, ScanError, ScanOptions};
use crate::types::ScreenshotSet;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// What to produce when the folder holds no images.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum EmptyTable {
    /// Write nothing; a warning goes to the log.
    #[default]
    Silent,
    /// Write the three rows anyway: `|  |`, `||`, `|  |`.
    Degenerate,
}

/// `| a | b | c |`
pub fn header_row(set: &ScreenshotSet) -> String {
    padded_row(set.images.iter().map(|e| e.alt_text.as_str()))
}

/// `|---|---|---|`, one dash run of `chars(alt_text) + 2` per column.
pub fn separator_row(set: &ScreenshotSet) -> String {
    let cells: Vec<String> = set
        .images
        .iter()
        .map(|e| "-".repeat(e.alt_text.chars().count() + 2))
        .collect();
    format!("|{}|", cells.join("|"))
}

/// `| <img …/> | <img …/> |`
pub fn image_row(set: &ScreenshotSet) -> String {
    padded_row(set.images.iter().map(|e| e.markup.as_str()))
}

fn padded_row<'a>(cells: impl Iterator<Item = &'a str>) -> String {
    let cells: Vec<&str> = cells.collect();
    format!("| {} |", cells.join(" | "))
}

/// Render the full table, each row newline-terminated.
///
/// Returns `None` for an empty set under [`EmptyTable::Silent`].
pub fn render_table(set: &ScreenshotSet, empty: EmptyTable) -> Option<String> {
    if set.is_empty() {
        warn!(folder = %set.folder_name, "no images found");
        if empty == EmptyTable::Silent {
            return None;
        }
    }
    Some(format!(
        "{}\n{}\n{}\n",
        header_row(set),
        separator_row(set),
        image_row(set)
    ))
}

/// Scan `dir` and render its table in one step.
///
/// Errors surface before any text exists, so callers never hold a partial table.
pub fn generate(
    dir: &Path,
    options: &ScanOptions,
    empty: EmptyTable,
) -> Result<Option<String>, ScanError> {
    let set = scan::scan(dir, options)?;
    Ok(render_table(&set, empty))
}

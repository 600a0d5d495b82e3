//! # shot-table
//!
//! Turns a folder of screenshots into a Markdown table for a README:
//!
//! ```text
//! | Login screen | Dark mode |
//! |--------------|-----------|
//! | <img src="screenshots/login_screen.png" alt="Login screen"/> | <img src="screenshots/dark_mode.jpg" alt="Dark mode"/> |
//! ```
//!
//! The filesystem is the data source. Filenames become captions
//! (`login_screen.png` → "Login screen"), and the folder's own name becomes the
//! `<img src>` prefix, so the table works when pasted into a README that sits
//! next to the folder.
//!
//! # Pipeline
//!
//! ```text
//! 1. Scan     screenshots/  →  ScreenshotSet   (names only, never image bytes)
//! 2. Render   ScreenshotSet →  String          (three newline-terminated rows)
//! 3. Write    String        →  stdout | file   (all at once, or not at all)
//! ```
//!
//! Each stage is a plain function, so the rendering logic is tested without
//! touching the filesystem.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Flat directory listing, extension filter, ordering, folder-name derivation |
//! | [`naming`] | Alt text from filename stems; image extension matching |
//! | [`table`] | Markdown row builders and the empty-folder policy |
//! | [`types`] | [`types::ImageEntry`] and [`types::ScreenshotSet`] |
//! | [`config`] | `shot-table.toml` loading, merging, and validation |
//! | [`output`] | Writing the table to stdout or a file; `list` formatting |
//!
//! # Design Decisions
//!
//! ## Sorted By Default
//!
//! Directory listing order differs between platforms. Columns are sorted by
//! filename unless `order = "filesystem"` is set, so regenerating the table on
//! any machine yields the same bytes and README diffs stay quiet.
//!
//! ## Empty Folders Print Nothing
//!
//! A folder with no images is not an error (exit code 0), but the three rows it
//! would produce (`|  |`, `||`, `|  |`) are not a useful table. By default
//! nothing is written and a warning goes to stderr; `empty = "degenerate"`
//! restores the literal rows.

pub mod config;
pub mod naming;
pub mod output;
pub mod scan;
pub mod table;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;

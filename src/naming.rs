//! Filename-driven text derivation.
//!
//! Screenshot files carry their caption in the filename: underscores separate
//! words, and the first letter is capitalized for display. Everything after the
//! first character is left exactly as written, so acronyms survive:
//!
//! - `login_screen.png` → "Login screen"
//! - `multi_word_name.jpg` → "Multi word name"
//! - `API_keys.png` → "API keys"

use std::path::Path;

/// Extensions recognized as images when no configuration overrides them.
pub const DEFAULT_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

/// Result of parsing an image filename like `dark_mode.jpg`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageName {
    /// Filename without its final extension (`dark_mode`).
    pub stem: String,
    /// Display text: underscores → spaces, first character uppercased.
    pub alt_text: String,
}

/// Parse an image filename into its stem and display text.
///
/// Only the final extension is stripped: `shot.v2.png` → stem `shot.v2`.
pub fn parse_image_name(file_name: &str) -> ImageName {
    let stem = Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    let alt_text = alt_text(&stem);
    ImageName { stem, alt_text }
}

/// Derive alt text from a filename stem.
///
/// - `"my_screenshot"` → `"My screenshot"`
/// - `"ALREADY_CAPS"` → `"ALREADY CAPS"`
/// - `""` → `""`
pub fn alt_text(stem: &str) -> String {
    let spaced = stem.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Whether `path` has one of `extensions` (compared ASCII case-insensitively).
///
/// Extensions are given without the leading dot. Files without an extension,
/// including dotfiles like `.png`, never match.
pub fn is_image_file<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    let Some(ext) = path.extension() else {
        return false;
    };
    let ext = ext.to_string_lossy();
    extensions
        .iter()
        .any(|candidate| ext.eq_ignore_ascii_case(candidate.as_ref()))
}

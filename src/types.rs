//! Types shared between scanning, rendering, and output.
//!
//! Both serialize to JSON for the `list` command.

use serde::Serialize;

/// One screenshot discovered in the target directory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageEntry {
    /// Filename as stored on disk (`login_screen.png`).
    pub file_name: String,
    /// Display text derived from the stem (`Login screen`).
    pub alt_text: String,
    /// Embeddable `<img>` tag pointing at `<folder>/<file_name>`.
    pub markup: String,
}

impl ImageEntry {
    /// Build an entry, deriving the `<img>` markup from the folder prefix.
    ///
    /// An empty `folder_name` yields a bare `src="<file_name>"`. Attribute
    /// values are escaped; the `alt_text` field itself stays raw for the
    /// Markdown header row.
    pub fn new(folder_name: &str, file_name: String, alt_text: String) -> Self {
        let src = if folder_name.is_empty() {
            file_name.clone()
        } else {
            format!("{folder_name}/{file_name}")
        };
        let markup = format!(
            r#"<img src="{}" alt="{}"/>"#,
            escape_attr(&src),
            escape_attr(&alt_text)
        );
        Self {
            file_name,
            alt_text,
            markup,
        }
    }
}

/// Escape `&` and `"` for a double-quoted HTML attribute.
fn escape_attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}

/// Everything one run discovered, in output order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenshotSet {
    /// Prefix used in every `<img src>`.
    pub folder_name: String,
    pub images: Vec<ImageEntry>,
}

impl ScreenshotSet {
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }
}

//! Configuration loading.
//!
//! Settings come from three layers, later ones winning:
//!
//! 1. Stock defaults ([`Config::default`])
//! 2. `shot-table.toml` in the working directory, or the file named by `--config`
//! 3. Command-line flags (applied by the binary)
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! directory = "screenshots"                   # Folder to scan
//! extensions = ["png", "jpg", "jpeg", "gif"]  # Matched case-insensitively
//! order = "name"                              # "name" or "filesystem"
//! empty = "silent"                            # "silent" or "degenerate"
//! # folder_name = "screenshots"               # <img src> prefix (default: directory name)
//! ```
//!
//! Config files are sparse; set only what differs from the defaults. Unknown
//! keys are rejected to catch typos early.

use crate::naming::DEFAULT_EXTENSIONS;
use crate::scan::{Order, ScanOptions};
use crate::table::EmptyTable;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE: &str = "shot-table.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Settings for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Folder holding the screenshots.
    pub directory: PathBuf,
    /// Extensions (without the dot) treated as images.
    pub extensions: Vec<String>,
    /// Column order.
    pub order: Order,
    /// Behavior when no images are found.
    pub empty: EmptyTable,
    /// Prefix for `<img src>`; the directory's own name when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_name: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("screenshots"),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            order: Order::default(),
            empty: EmptyTable::default(),
            folder_name: None,
        }
    }
}

impl Config {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extensions.is_empty() {
            return Err(ConfigError::Validation(
                "extensions must not be empty".into(),
            ));
        }
        if let Some(ext) = self.extensions.iter().find(|e| e.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "extensions must not contain blank entries (got {ext:?})"
            )));
        }
        if let Some(ext) = self.extensions.iter().find(|e| e.starts_with('.')) {
            return Err(ConfigError::Validation(format!(
                "extensions are written without a dot: use {:?}, not {ext:?}",
                ext.trim_start_matches('.')
            )));
        }
        Ok(())
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            extensions: self.extensions.clone(),
            order: self.order,
            folder_name: self.folder_name.clone(),
        }
    }
}

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(Config::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key-by-key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<Config, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: Config = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load configuration.
///
/// With `explicit = Some(path)` the file must exist. Otherwise
/// [`CONFIG_FILE`] in the working directory is used if present, and stock
/// defaults if not.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    let overlay = match explicit {
        Some(path) => {
            let value = load_raw_config(path)?
                .ok_or_else(|| ConfigError::NotFound(path.to_path_buf()))?;
            debug!(path = %path.display(), "loaded config");
            Some(value)
        }
        None => {
            let value = load_raw_config(Path::new(CONFIG_FILE))?;
            if value.is_some() {
                debug!(path = CONFIG_FILE, "loaded config");
            }
            value
        }
    };
    resolve_config(stock_defaults_value(), overlay)
}

/// Returns a fully-commented stock `shot-table.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# shot-table configuration
# ========================
# All settings are optional. Values shown below are the defaults.
# Command-line flags override anything set here.
# Unknown keys will cause an error.

# Folder to scan for screenshots (not recursive).
# Also settable with --dir or the SHOT_TABLE_DIR environment variable.
directory = "screenshots"

# File extensions treated as images, without the leading dot.
# Matching ignores case, so "png" also matches "Shot.PNG".
extensions = ["png", "jpg", "jpeg", "gif"]

# Column order:
#   "name"       - sorted by filename, stable across machines
#   "filesystem" - whatever order the OS lists the directory in
order = "name"

# What to print when the folder holds no images:
#   "silent"     - print nothing (a warning goes to stderr)
#   "degenerate" - print the three empty rows anyway
empty = "silent"

# Path prefix used in <img src="...">. Defaults to the scanned folder's name,
# which is right when the README sits next to that folder.
# folder_name = "screenshots"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.directory, PathBuf::from("screenshots"));
        assert_eq!(config.extensions, vec!["png", "jpg", "jpeg", "gif"]);
        assert_eq!(config.order, Order::Name);
        assert_eq!(config.empty, EmptyTable::Silent);
        assert_eq!(config.folder_name, None);
    }

    #[test]
    fn parse_partial_config() {
        let config: Config = toml::from_str(r#"order = "filesystem""#).unwrap();
        assert_eq!(config.order, Order::Filesystem);
        // Unspecified values keep defaults
        assert_eq!(config.extensions, vec!["png", "jpg", "jpeg", "gif"]);
        assert_eq!(config.empty, EmptyTable::Silent);
    }

    #[test]
    fn unknown_keys_rejected() {
        let result: Result<Config, _> = toml::from_str(r#"extentions = ["png"]"#);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_enum_value_rejected() {
        let result: Result<Config, _> = toml::from_str(r#"order = "random""#);
        assert!(result.is_err());
    }

    #[test]
    fn merge_overlay_replaces_arrays() {
        let overlay: toml::Value = toml::from_str(r#"extensions = ["webp"]"#).unwrap();
        let config = resolve_config(stock_defaults_value(), Some(overlay)).unwrap();
        assert_eq!(config.extensions, vec!["webp"]);
        assert_eq!(config.directory, PathBuf::from("screenshots"));
    }

    #[test]
    fn merge_toml_keeps_base_keys() {
        let base: toml::Value = toml::from_str("a = 1\nb = 2").unwrap();
        let overlay: toml::Value = toml::from_str("b = 3\nc = 4").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["a"].as_integer(), Some(1));
        assert_eq!(merged["b"].as_integer(), Some(3));
        assert_eq!(merged["c"].as_integer(), Some(4));
    }

    #[test]
    fn validate_rejects_empty_extensions() {
        let config = Config {
            extensions: vec![],
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_rejects_dotted_extensions() {
        let config = Config {
            extensions: vec![".png".to_string()],
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains(r#"use "png""#));
    }

    #[test]
    fn validate_rejects_blank_extension() {
        let config = Config {
            extensions: vec!["png".to_string(), " ".to_string()],
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_explicit_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("custom.toml");
        fs::write(
            &path,
            r#"
directory = "docs/shots"
empty = "degenerate"
folder_name = "img"
"#,
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.directory, PathBuf::from("docs/shots"));
        assert_eq!(config.empty, EmptyTable::Degenerate);
        assert_eq!(config.folder_name.as_deref(), Some("img"));
        assert_eq!(config.order, Order::Name);
    }

    #[test]
    fn load_explicit_missing_file_fails() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("absent.toml");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn load_invalid_toml_fails() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "order = ").unwrap();
        assert!(matches!(
            load_config(Some(&path)),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn load_raw_config_missing_is_none() {
        let tmp = TempDir::new().unwrap();
        assert!(load_raw_config(&tmp.path().join(CONFIG_FILE)).unwrap().is_none());
    }

    #[test]
    fn scan_options_mirror_config() {
        let config = Config {
            order: Order::Filesystem,
            folder_name: Some("pics".to_string()),
            ..Config::default()
        };
        let options = config.scan_options();
        assert_eq!(options.order, Order::Filesystem);
        assert_eq!(options.folder_name.as_deref(), Some("pics"));
        assert_eq!(options.extensions, config.extensions);
    }

    #[test]
    fn stock_config_parses_to_defaults() {
        let config: Config = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config, Config::default());
    }
}

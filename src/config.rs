//! Navigation configuration module.
//!
//! Handles loading, validating, and merging `nav.toml`. Stock defaults are
//! the base layer; a user file overrides only the keys it sets.
//!
//! ## Config File Location
//!
//! Place `nav.toml` in the directory passed as `--source`:
//!
//! ```text
//! docs/
//! ├── nav.toml
//! └── ...
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [hrefs]
//! mode = "normalize"              # "normalize" or "concat"
//!
//! [validation]
//! dead_groups = "error"           # noLink node without items
//! missing_leading_slash = "warn"  # href segment not starting with '/'
//! duplicate_hrefs = "warn"        # two pages resolving to the same href
//!
//! [[routes]]
//! title = "Getting Started"
//! href = "/getting-started"
//!
//! [[routes.items]]
//! title = "Introduction"
//! href = "/introduction"
//! ```
//!
//! Without any `[[routes]]` the built-in tree from [`crate::routes`] is used.
//! Arrays are replaced wholesale on merge, never appended.
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::href::HrefMode;
use crate::types::RouteNode;

/// Name of the config file looked up in the source directory.
pub const CONFIG_FILE: &str = "nav.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Navigation configuration loaded from `nav.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavConfig {
    /// How child href segments are joined onto their parents.
    pub hrefs: HrefsConfig,
    /// Severity of the configurable tree checks.
    pub validation: ValidationConfig,
    /// Root route nodes, in sidebar order. Empty means the built-in tree.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<RouteNode>,
}

impl NavConfig {
    /// Shallow checks on the config itself.
    ///
    /// Per-node tree checks live in [`crate::validate`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(root) = self.routes.iter().find(|r| r.href.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "routes: root \"{}\" must have a non-empty href",
                root.title
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HrefsConfig {
    pub mode: HrefMode,
}

/// How a tree check is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Not reported
    Allow,
    /// Logged, navigation still builds
    Warn,
    /// Navigation fails to build
    Error,
}

/// Levels for the configurable checks in [`crate::validate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    pub dead_groups: Level,
    pub missing_leading_slash: Level,
    pub duplicate_hrefs: Level,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            dead_groups: Level::Error,
            missing_leading_slash: Level::Warn,
            duplicate_hrefs: Level::Warn,
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(NavConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay, arrays included, replace base values.
/// - Keys in base that are not in overlay are preserved.
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

/// Load `nav.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<NavConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: NavConfig = merged.try_into()?;
    config.validate()?;
    debug!(
        mode = ?config.hrefs.mode,
        roots = config.routes.len(),
        "resolved nav config"
    );
    Ok(config)
}

/// Load config from `nav.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(dir: &Path) -> Result<NavConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(dir)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `nav.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Docs Nav Configuration
# ======================
# Place this file as nav.toml in the directory passed to --source.
# All options are optional; values below are the defaults.
# Unknown keys are rejected.

# ---------------------------------------------------------------------------
# Href resolution
# ---------------------------------------------------------------------------
[hrefs]
# "normalize": join segments with exactly one '/', add a leading '/',
#              drop repeated and trailing slashes.
# "concat":    append each child's href to its parent's verbatim.
mode = "normalize"

# ---------------------------------------------------------------------------
# Tree checks: "allow", "warn" or "error"
# ---------------------------------------------------------------------------
# Empty titles and empty hrefs are always errors.
[validation]
# A noLink group without items produces no pages.
dead_groups = "error"
# An href segment that does not start with '/'.
missing_leading_slash = "warn"
# Two pages resolving to the same href.
duplicate_hrefs = "warn"

# ---------------------------------------------------------------------------
# Routes
# ---------------------------------------------------------------------------
# Without any [[routes]] the built-in documentation tree is used.
# Each href is relative to its parent. noLink marks a grouping header that
# is not itself a page.
#
# [[routes]]
# title = "Dashboard App"
# href = "/dashboard-app"
# noLink = true
#
# [[routes.items]]
# title = "Port Notes"
# href = "/port-notes"
#
# [[routes.items.items]]
# title = "Routing"
# href = "/routing"
"##
}

//! Build configuration module.
//!
//! Handles loading and validating `routemap.toml`, and converting explicit
//! route declarations into the route table shape.
//!
//! ## Config File Location
//!
//! Place `routemap.toml` in the project root (the directory resolution runs
//! from). Everything is optional; with no file at all the stock defaults
//! apply and routes come from scanning the pages directory.
//!
//! ## Configuration Options
//!
//! ```toml
//! # Pages directory, relative to the project root.
//! pages_dir = "src/pages"
//!
//! # Explicit routes. When present, the pages directory is never scanned
//! # and this table is used verbatim (after validation).
//! [[routes]]
//! path = "/"
//! component = "./pages/a"
//!
//! [[routes]]
//! path = "/list"
//! component = "./pages/b"
//!
//! # Static export. Presence of this section enables export mode.
//! [export_static]
//! html_suffix = true     # also register /detail.html style paths
//! allow_dynamic = false  # reject :param routes (default)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::types::{RouteEntry, RouteTable};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
    #[error("Invalid route config: {0}")]
    InvalidRoute(String),
}

/// Build configuration loaded from `routemap.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Pages directory, relative to the project root.
    #[serde(default = "default_pages_dir")]
    pub pages_dir: String,
    /// Explicit route declarations. When present, filesystem scanning is
    /// bypassed entirely and this table is used verbatim after validation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routes: Option<Vec<ConfigRoute>>,
    /// Static export settings. Presence enables export mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_static: Option<ExportStatic>,
}

fn default_pages_dir() -> String {
    "src/pages".to_string()
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            pages_dir: default_pages_dir(),
            routes: None,
            export_static: None,
        }
    }
}

impl BuildConfig {
    /// Validate config values beyond what deserialization enforces.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pages_dir.is_empty() {
            return Err(ConfigError::Validation(
                "pages_dir must not be empty".into(),
            ));
        }
        if Path::new(&self.pages_dir).is_absolute() {
            return Err(ConfigError::Validation(
                "pages_dir must be relative to the project root".into(),
            ));
        }
        // An explicitly empty route table would silently drop every page.
        if self.routes.as_ref().is_some_and(|r| r.is_empty()) {
            return Err(ConfigError::Validation(
                "routes must not be an empty array; omit it to scan pages".into(),
            ));
        }
        Ok(())
    }
}

/// Static export settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportStatic {
    /// Register an additional `.html`-suffixed sibling for every leaf.
    pub html_suffix: bool,
    /// Permit `:param` routes in export mode (off by default — a static
    /// file cannot represent a parameterized route).
    pub allow_dynamic: bool,
}

/// One explicitly declared route.
///
/// Fields mirror [`RouteEntry`] but are all optional so that missing
/// required fields surface as a structured [`ConfigError::InvalidRoute`]
/// instead of a parse failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigRoute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exact: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routes: Option<Vec<ConfigRoute>>,
}

/// Validate explicit route declarations into a route table.
///
/// Each entry must carry `path` and `component`; nested `routes` are
/// validated recursively. `exact` defaults to true for leaves and false for
/// entries with children.
pub fn validate_routes(routes: &[ConfigRoute]) -> Result<RouteTable, ConfigError> {
    routes.iter().map(validate_route).collect()
}

fn validate_route(route: &ConfigRoute) -> Result<RouteEntry, ConfigError> {
    let path = route.path.clone().ok_or_else(|| {
        ConfigError::InvalidRoute(format!(
            "route entry {} is missing `path`",
            route
                .component
                .as_deref()
                .map(|c| format!("for `{c}`"))
                .unwrap_or_else(|| "(unnamed)".to_string())
        ))
    })?;
    let component = route.component.clone().ok_or_else(|| {
        ConfigError::InvalidRoute(format!("route `{path}` is missing `component`"))
    })?;
    let children = match &route.routes {
        Some(nested) => validate_routes(nested)?,
        None => Vec::new(),
    };
    let exact = route.exact.unwrap_or(children.is_empty());
    Ok(RouteEntry {
        path,
        exact,
        component,
        routes: children,
    })
}

// =============================================================================
// Config loading and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(BuildConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
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

/// Load a `routemap.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `routemap.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join("routemap.toml");
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
) -> Result<BuildConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: BuildConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `routemap.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(dir: &Path) -> Result<BuildConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(dir)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `routemap.toml` with all keys explained.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# routemap Configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Pages directory, relative to the project root. Page files in this tree
# become routes by convention:
#   index.js          -> /
#   users/list.js     -> /users/list
#   detail/page.js    -> /detail
#   $userId/page.js   -> /:userId
#   list/_layout.js   -> layout wrapping every page under /list
pages_dir = "src/pages"

# ---------------------------------------------------------------------------
# Explicit routes
# ---------------------------------------------------------------------------
# When any [[routes]] entries are present the pages directory is never
# scanned and this table is used verbatim (after validation). Each entry
# requires `path` and `component`; `exact` defaults to true for leaves and
# false for entries with nested routes.
#
# [[routes]]
# path = "/"
# component = "./pages/a"
#
# [[routes]]
# path = "/list"
# component = "./pages/list/_layout"
#
# [[routes.routes]]
# path = "/list/b"
# component = "./pages/list/b"

# ---------------------------------------------------------------------------
# Static export
# ---------------------------------------------------------------------------
# Presence of this section enables static export mode.
#
# [export_static]
# Register an additional .html-suffixed sibling for every leaf route
# (/detail also becomes /detail.html, / becomes /index.html).
# html_suffix = false
#
# Permit :param routes in export mode. Off by default: a static file
# cannot represent a parameterized route.
# allow_dynamic = false
"##
}

//! Route resolution entry point.
//!
//! Resolution is a pure function of (config snapshot, filesystem snapshot):
//! it owns no state between invocations, and the build orchestrator simply
//! re-invokes it wholesale in watch mode. Exactly one of two sources feeds
//! a resolution — explicit config routes or the scanned pages tree — never
//! a merge of both. Any error aborts the whole call with no partial table,
//! leaving whatever table the caller already holds untouched.

use crate::assemble;
use crate::config::{self, BuildConfig, ConfigError, ConfigRoute};
use crate::conflict::{self, RouteConflict};
use crate::export::{self, ExportError};
use crate::scan::{self, ScanError};
use crate::types::RouteTable;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Conflict(#[from] RouteConflict),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Where resolution runs: the project root and an optional pages override.
#[derive(Debug, Clone)]
pub struct ResolveContext {
    /// Project root; component references are made relative to it.
    pub cwd: PathBuf,
    /// Pages directory override. Defaults to `<cwd>/<pages_dir>` from config.
    pub pages_path: Option<PathBuf>,
}

impl ResolveContext {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            pages_path: None,
        }
    }

    pub fn with_pages_path(mut self, pages_path: impl Into<PathBuf>) -> Self {
        self.pages_path = Some(pages_path.into());
        self
    }

    fn pages_path(&self, config: &BuildConfig) -> PathBuf {
        self.pages_path
            .clone()
            .unwrap_or_else(|| self.cwd.join(&config.pages_dir))
    }
}

/// The one-of-two route source for a resolution.
///
/// Modeling this as a union (rather than an implicit precedence check at
/// each stage) guarantees the explicit and scanned pipelines can never be
/// accidentally combined.
enum RouteSource<'a> {
    Explicit(&'a [ConfigRoute]),
    Scanned(PathBuf),
}

fn route_source<'a>(ctx: &ResolveContext, config: &'a BuildConfig) -> RouteSource<'a> {
    match &config.routes {
        Some(routes) => RouteSource::Explicit(routes),
        None => RouteSource::Scanned(ctx.pages_path(config)),
    }
}

/// Resolve the route table from config or pages-directory convention.
///
/// Explicit config routes short-circuit the entire pipeline: no scanning,
/// no conflict detection, no export rewriting. Otherwise the scanned
/// pipeline runs: scan → conflict check → assemble → optional static-export
/// rewrite.
pub fn resolve_routes(
    ctx: &ResolveContext,
    config: &BuildConfig,
) -> Result<RouteTable, ResolveError> {
    match route_source(ctx, config) {
        RouteSource::Explicit(routes) => Ok(config::validate_routes(routes)?),
        RouteSource::Scanned(pages_root) => {
            let entries = scan::scan(&pages_root, &ctx.cwd)?;
            conflict::check(&entries)?;
            let table = assemble::assemble(&entries);
            match &config.export_static {
                Some(opts) => Ok(export::rewrite(table, opts)?),
                None => Ok(table),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExportStatic;
    use crate::test_helpers::{route_paths, write_pages};

    fn resolve(tmp: &tempfile::TempDir, config: &BuildConfig) -> RouteTable {
        let ctx = ResolveContext::new(tmp.path()).with_pages_path(tmp.path());
        resolve_routes(&ctx, config).unwrap()
    }

    #[test]
    fn scanned_branch_resolves_pages() {
        let tmp = write_pages(&["index.js", "users/list.js"]);
        let table = resolve(&tmp, &BuildConfig::default());
        assert_eq!(route_paths(&table), vec!["/", "/users/list"]);
    }

    #[test]
    fn pages_path_defaults_under_cwd() {
        let tmp = write_pages(&["src/pages/index.js"]);
        let ctx = ResolveContext::new(tmp.path());
        let table = resolve_routes(&ctx, &BuildConfig::default()).unwrap();
        assert_eq!(route_paths(&table), vec!["/"]);
        assert_eq!(table[0].component, "./src/pages/index.js");
    }

    #[test]
    fn explicit_routes_bypass_scanning_entirely() {
        // The pages tree would conflict; explicit routes must never see it.
        let tmp = write_pages(&["a.js", "a/index.js"]);
        let config = BuildConfig {
            routes: Some(vec![ConfigRoute {
                path: Some("/only".into()),
                component: Some("./pages/only".into()),
                exact: None,
                routes: None,
            }]),
            ..BuildConfig::default()
        };
        let table = resolve(&tmp, &config);
        assert_eq!(route_paths(&table), vec!["/only"]);
    }

    #[test]
    fn explicit_routes_skip_export_rewriting() {
        let tmp = write_pages(&[]);
        let config = BuildConfig {
            routes: Some(vec![ConfigRoute {
                path: Some("/:id".into()),
                component: Some("./pages/id".into()),
                exact: None,
                routes: None,
            }]),
            export_static: Some(ExportStatic {
                html_suffix: true,
                allow_dynamic: false,
            }),
            ..BuildConfig::default()
        };
        // A dynamic explicit route passes because the rewriter never runs.
        let table = resolve(&tmp, &config);
        assert_eq!(route_paths(&table), vec!["/:id"]);
    }

    #[test]
    fn conflicts_abort_with_no_table() {
        let tmp = write_pages(&["a.js", "a/index.js"]);
        let ctx = ResolveContext::new(tmp.path()).with_pages_path(tmp.path());
        let err = resolve_routes(&ctx, &BuildConfig::default()).unwrap_err();
        assert!(matches!(err, ResolveError::Conflict(_)));
    }

    #[test]
    fn export_rewrite_runs_on_scanned_branch() {
        let tmp = write_pages(&["index.js"]);
        let config = BuildConfig {
            export_static: Some(ExportStatic {
                html_suffix: true,
                allow_dynamic: false,
            }),
            ..BuildConfig::default()
        };
        let table = resolve(&tmp, &config);
        assert_eq!(route_paths(&table), vec!["/", "/index.html"]);
    }

    #[test]
    fn resolution_is_idempotent() {
        let tmp = write_pages(&[
            "detail/page.js",
            "index.js",
            "list/_layout.js",
            "list/b.js",
            "users/list.js",
        ]);
        let first = resolve(&tmp, &BuildConfig::default());
        let second = resolve(&tmp, &BuildConfig::default());
        assert_eq!(first, second);
        let json_first = serde_json::to_string(&first).unwrap();
        let json_second = serde_json::to_string(&second).unwrap();
        assert_eq!(json_first, json_second);
    }
}

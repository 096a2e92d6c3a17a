//! Static-export path rewriting.
//!
//! When `[export_static]` is configured the route table is post-processed
//! for one-file-per-route output. With `html_suffix` enabled, every leaf
//! gains a synthetic sibling whose path carries an explicit `.html` file
//! name, appended immediately after the original. The clean path stays
//! registered so the client router keeps matching directory-form URLs while
//! the suffixed form is reachable during static generation.
//!
//! Dynamic segments have no static file representation, so any `:param`
//! route aborts the export unless the config explicitly allows it.

use crate::config::ExportStatic;
use crate::types::{RouteEntry, RouteTable};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("dynamic routes cannot be exported statically: {}", .0.join(", "))]
    DynamicRoutes(Vec<String>),
}

/// Apply static-export rewriting to a resolved route table.
pub fn rewrite(table: RouteTable, opts: &ExportStatic) -> Result<RouteTable, ExportError> {
    if !opts.allow_dynamic {
        let mut dynamic = Vec::new();
        collect_dynamic_paths(&table, &mut dynamic);
        if !dynamic.is_empty() {
            return Err(ExportError::DynamicRoutes(dynamic));
        }
    }
    if !opts.html_suffix {
        return Ok(table);
    }
    Ok(add_suffix_siblings(table))
}

fn collect_dynamic_paths(routes: &[RouteEntry], out: &mut Vec<String>) {
    for route in routes {
        if route.path.split('/').any(|seg| seg.starts_with(':')) {
            out.push(route.path.clone());
        }
        collect_dynamic_paths(&route.routes, out);
    }
}

fn add_suffix_siblings(routes: Vec<RouteEntry>) -> Vec<RouteEntry> {
    let mut out = Vec::with_capacity(routes.len() * 2);
    for mut route in routes {
        if route.routes.is_empty() {
            let suffixed = RouteEntry::leaf(html_path(&route.path), route.component.clone());
            out.push(route);
            out.push(suffixed);
        } else {
            route.routes = add_suffix_siblings(std::mem::take(&mut route.routes));
            out.push(route);
        }
    }
    out
}

/// `/` → `/index.html`, `/list/` → `/list/index.html`, `/detail` → `/detail.html`.
fn html_path(path: &str) -> String {
    if path.ends_with('/') {
        format!("{path}index.html")
    } else {
        format!("{path}.html")
    }
}

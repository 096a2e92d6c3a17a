//! Route conflict detection.
//!
//! Runs between scanning and assembly. Two page files that normalize to the
//! same URL path would make one of them unreachable at runtime, so the whole
//! resolution aborts with every offending file listed — nothing partial is
//! ever returned.
//!
//! Dynamic segments are compared by shape: `/a` and `/:id` coexist (a
//! literal wins over a parameter at match time), but two parameters with
//! different names at the same position are ambiguous and conflict.

use crate::scan::PageEntry;
use std::collections::BTreeMap;
use thiserror::Error;

/// One set of sources claiming the same route path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictGroup {
    /// The contested route path (as normalized from the first offender).
    pub path: String,
    /// Every source file claiming it, in scan order.
    pub sources: Vec<String>,
}

#[derive(Error, Debug)]
#[error("{}", describe(.groups))]
pub struct RouteConflict {
    pub groups: Vec<ConflictGroup>,
}

/// Check a scanned entry list for conflicting routes.
///
/// Layout files are exempt from path grouping — a layout legitimately
/// shares its path with its directory's index page — but two layout files
/// in the same directory are themselves reported as a conflict.
pub fn check(entries: &[PageEntry]) -> Result<(), RouteConflict> {
    let mut groups = Vec::new();

    let mut by_shape: BTreeMap<String, Vec<&PageEntry>> = BTreeMap::new();
    for entry in entries.iter().filter(|e| !e.is_layout) {
        by_shape
            .entry(shape_key(&entry.route_path))
            .or_default()
            .push(entry);
    }
    for group in by_shape.into_values().filter(|g| g.len() > 1) {
        groups.push(ConflictGroup {
            path: group[0].route_path.clone(),
            sources: group.iter().map(|e| e.source.clone()).collect(),
        });
    }

    let mut layouts: BTreeMap<&str, Vec<&PageEntry>> = BTreeMap::new();
    for entry in entries.iter().filter(|e| e.is_layout) {
        layouts.entry(entry.source_dir()).or_default().push(entry);
    }
    for group in layouts.into_values().filter(|g| g.len() > 1) {
        groups.push(ConflictGroup {
            path: group[0].route_path.clone(),
            sources: group.iter().map(|e| e.source.clone()).collect(),
        });
    }

    if groups.is_empty() {
        Ok(())
    } else {
        Err(RouteConflict { groups })
    }
}

/// Grouping key: every parameter segment reduced to a bare `:`.
///
/// `/:userId` and `/:uid` share a key; `/a` keeps its own.
fn shape_key(path: &str) -> String {
    path.split('/')
        .map(|seg| if seg.starts_with(':') { ":" } else { seg })
        .collect::<Vec<_>>()
        .join("/")
}

fn describe(groups: &[ConflictGroup]) -> String {
    let mut out = String::from("conflicting routes detected:");
    for group in groups {
        out.push_str(&format!(
            "\n  {} is claimed by: {}",
            group.path,
            group.sources.join(", ")
        ));
    }
    out
}

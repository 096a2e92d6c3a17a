//! Shared test utilities for the routemap test suite.
//!
//! Provides a fixture-tree builder plus lookup and shape-assertion helpers
//! for resolved route tables.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = write_pages(&["index.js", "list/_layout.js", "list/b.js"]);
//! let entries = scan(tmp.path(), tmp.path()).unwrap();
//! let table = assemble(&entries);
//!
//! assert_table_shape(&table, &[
//!     ("/", true, &[]),
//!     ("/list", false, &["/list/b"]),
//! ]);
//! ```

use std::fs;
use tempfile::TempDir;

use crate::types::{RouteEntry, RouteTable};

// =========================================================================
// Fixture setup
// =========================================================================

/// Create a temp directory containing the given page files.
///
/// Paths are relative (`"list/_layout.js"`); parent directories are created
/// as needed. File contents are a stub component — resolution only ever
/// inspects names.
pub fn write_pages(files: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for rel in files {
        let path = tmp.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, "export default () => null;\n").unwrap();
    }
    tmp
}

// =========================================================================
// Route table lookups — panics with a clear message on miss
// =========================================================================

/// Find a top-level route by path. Panics if not found.
pub fn find_route<'a>(table: &'a RouteTable, path: &str) -> &'a RouteEntry {
    table.iter().find(|r| r.path == path).unwrap_or_else(|| {
        let paths: Vec<&str> = table.iter().map(|r| r.path.as_str()).collect();
        panic!("route '{path}' not found. Available: {paths:?}")
    })
}

/// All top-level route paths in table order.
pub fn route_paths(table: &[RouteEntry]) -> Vec<&str> {
    table.iter().map(|r| r.path.as_str()).collect()
}

// =========================================================================
// Shape assertion
// =========================================================================

/// Assert that the route table matches an expected shape.
///
/// Each entry is `(path, exact, child paths)`. Use `&[]` for leaf routes.
///
/// ```rust
/// assert_table_shape(&table, &[
///     ("/a", true, &[]),
///     ("/list", false, &["/list/b", "/list/"]),
/// ]);
/// ```
pub fn assert_table_shape(table: &RouteTable, expected: &[(&str, bool, &[&str])]) {
    let actual = route_paths(table);
    let expected_paths: Vec<&str> = expected.iter().map(|(p, _, _)| *p).collect();
    assert_eq!(actual, expected_paths, "top-level route paths mismatch");

    for (path, exact, children) in expected {
        let route = find_route(table, path);
        assert_eq!(route.exact, *exact, "exactness of '{path}' mismatch");
        let actual_children = route_paths(&route.routes);
        assert_eq!(
            actual_children,
            children.to_vec(),
            "children of '{path}' mismatch"
        );
    }
}

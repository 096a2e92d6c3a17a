//! CLI output formatting.
//!
//! Route tables are displayed as an indented tree mirroring the nesting in
//! the resolved table, with positional indices per sibling level:
//!
//! ```text
//! Routes
//! 001 /            -> ./src/pages/index.js
//! 002 /detail      -> ./src/pages/detail/page.js
//! 003 /list        -> ./src/pages/list/_layout.js (layout)
//!     001 /list/b  -> ./src/pages/list/b.js
//!     002 /list/   -> ./src/pages/list/index.js
//!
//! Resolved 5 routes (4 pages, 1 layout)
//! ```
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::types::{RouteEntry, RouteTable};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// One formatted route line: index, path, component, layout marker.
fn route_line(pos: usize, route: &RouteEntry) -> String {
    let marker = if route.routes.is_empty() { "" } else { " (layout)" };
    format!(
        "{} {} -> {}{}",
        format_index(pos),
        route.path,
        route.component,
        marker
    )
}

fn push_routes(routes: &[RouteEntry], depth: usize, lines: &mut Vec<String>) {
    for (i, route) in routes.iter().enumerate() {
        lines.push(format!("{}{}", indent(depth), route_line(i + 1, route)));
        push_routes(&route.routes, depth + 1, lines);
    }
}

/// Count (leaf, layout) entries across the whole table.
fn count_routes(routes: &[RouteEntry]) -> (usize, usize) {
    let mut leaves = 0;
    let mut layouts = 0;
    for route in routes {
        if route.routes.is_empty() {
            leaves += 1;
        } else {
            layouts += 1;
            let (l, p) = count_routes(&route.routes);
            leaves += l;
            layouts += p;
        }
    }
    (leaves, layouts)
}

/// Format the resolved route table for the `resolve` and `check` commands.
pub fn format_route_table(table: &RouteTable) -> Vec<String> {
    let mut lines = vec!["Routes".to_string()];
    if table.is_empty() {
        lines.push("    (no routes)".to_string());
        return lines;
    }
    push_routes(table, 0, &mut lines);

    let (leaves, layouts) = count_routes(table);
    lines.push(String::new());
    lines.push(format!(
        "Resolved {} route{} ({} page{}, {} layout{})",
        leaves + layouts,
        plural(leaves + layouts),
        leaves,
        plural(leaves),
        layouts,
        plural(layouts)
    ));
    lines
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Print resolve output to stdout.
pub fn print_route_table(table: &RouteTable) {
    for line in format_route_table(table) {
        println!("{}", line);
    }
}

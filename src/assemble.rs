//! Route table assembly.
//!
//! Turns the scanner's flat, ordered entry list into the nested route
//! table. Every layout becomes a parent route owning the entries beneath
//! its directory (recursively, for deeper layouts); everything else stays a
//! flat sibling. The scan order survives assembly: a layout occupies the
//! position of its `_layout` file, and owned entries keep their relative
//! order inside `routes`.

use crate::scan::PageEntry;
use crate::types::{RouteEntry, RouteTable};

/// Assemble a validated entry list into the final route table.
pub fn assemble(entries: &[PageEntry]) -> RouteTable {
    build_level(entries)
}

fn build_level(entries: &[PageEntry]) -> Vec<RouteEntry> {
    // Outermost layouts at this level: not inside another layout's directory.
    let outer: Vec<usize> = (0..entries.len())
        .filter(|&i| {
            entries[i].is_layout
                && !(0..entries.len()).any(|j| {
                    j != i
                        && entries[j].is_layout
                        && dir_strictly_under(
                            entries[i].source_dir(),
                            entries[j].source_dir(),
                        )
                })
        })
        .collect();

    let mut owner: Vec<Option<usize>> = vec![None; entries.len()];
    for &li in &outer {
        let dir = entries[li].source_dir();
        for (j, entry) in entries.iter().enumerate() {
            if j != li && owner[j].is_none() && dir_within(entry.source_dir(), dir) {
                owner[j] = Some(li);
            }
        }
    }

    let mut routes = Vec::new();
    for (i, entry) in entries.iter().enumerate() {
        if owner[i].is_some() {
            continue;
        }
        if entry.is_layout {
            let owned: Vec<PageEntry> = (0..entries.len())
                .filter(|&j| owner[j] == Some(i))
                .map(|j| entries[j].clone())
                .collect();
            let mut children = build_level(&owned);
            for child in &mut children {
                // A directory index normalizes to the layout's own path;
                // the trailing slash keeps it a distinct exact leaf.
                if child.routes.is_empty() && child.path == entry.route_path {
                    child.path = index_child_path(&entry.route_path);
                }
            }
            routes.push(RouteEntry::layout(
                entry.route_path.clone(),
                entry.component.clone(),
                children,
            ));
        } else {
            routes.push(RouteEntry::leaf(
                entry.route_path.clone(),
                entry.component.clone(),
            ));
        }
    }
    routes
}

/// `/list` → `/list/`; the root layout keeps `/`.
fn index_child_path(layout_path: &str) -> String {
    format!("{}/", layout_path.trim_end_matches('/'))
}

fn dir_strictly_under(child: &str, parent: &str) -> bool {
    if parent.is_empty() {
        !child.is_empty()
    } else {
        child.len() > parent.len()
            && child.starts_with(parent)
            && child.as_bytes()[parent.len()] == b'/'
    }
}

fn dir_within(child: &str, parent: &str) -> bool {
    child == parent || dir_strictly_under(child, parent)
}

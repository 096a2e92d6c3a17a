//! Shared types for the route resolution pipeline.
//!
//! The route table is serialized to JSON (`routes.json`) for consumption by
//! the bundler's route-registration generator and the static-export walker,
//! so these types must stay stable across both consumers.

use serde::{Deserialize, Serialize};

/// A single resolved route.
///
/// Leaf routes (no `routes`) always match exactly. Layout routes wrap an
/// ordered list of child routes and match as a prefix (`exact: false`);
/// their `component` is the layout wrapper around whichever child matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// URL path with a leading slash and no trailing slash, except the
    /// root `/` and directory-index children of a layout (`/list/`).
    pub path: String,
    /// Whether the router should match this path exactly.
    pub exact: bool,
    /// Module reference relative to the project root, e.g. `./src/pages/a.js`.
    pub component: String,
    /// Child routes, in resolution order. Empty for leaf routes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<RouteEntry>,
}

/// The complete resolved route table, in resolution order.
///
/// Order is significant: the first registered route wins on ambiguous
/// prefix matches at runtime, and identical input must always produce the
/// identical table.
pub type RouteTable = Vec<RouteEntry>;

impl RouteEntry {
    /// An exact-match leaf route.
    pub fn leaf(path: impl Into<String>, component: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            exact: true,
            component: component.into(),
            routes: Vec::new(),
        }
    }

    /// A layout route owning an ordered list of children.
    pub fn layout(
        path: impl Into<String>,
        component: impl Into<String>,
        routes: Vec<RouteEntry>,
    ) -> Self {
        Self {
            path: path.into(),
            exact: false,
            component: component.into(),
            routes,
        }
    }
}

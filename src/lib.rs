//! # routemap
//!
//! Convention-based route table resolver for web-application build
//! pipelines. Your filesystem is the route source: page files become
//! routes, `_layout` files become nested wrappers, and `$name` segments
//! become URL parameters — or an explicit `routes` table in `routemap.toml`
//! replaces scanning entirely.
//!
//! # Architecture: Resolution Pipeline
//!
//! Resolution is one pure pass from (config, pages tree) to an ordered
//! route table, consumed by a route-registration generator and a static
//! export walker:
//!
//! ```text
//! explicit routes in config ──────────────────────────┐
//!                                                     ▼
//! scan pages/ → detect conflicts → assemble nesting → RouteTable
//!                                       │
//!                 (optional) static-export rewriting ──┘
//! ```
//!
//! The two sources are a hard either/or: explicit config routes
//! short-circuit the whole scanned pipeline, so precedence bugs between the
//! two can't exist. Errors abort the entire call with no partial table — a
//! broken route table would silently drop pages at runtime, which is worse
//! than failing the build.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`resolve`] | Entry point — picks the route source and runs the pipeline |
//! | [`scan`] | Walks the pages directory into a flat, deterministically ordered entry list |
//! | [`normalize`] | File-path-to-URL convention parser used by the scanner |
//! | [`conflict`] | Rejects page files that claim the same URL path |
//! | [`assemble`] | Nests entries under their `_layout` parents, decides exactness |
//! | [`export`] | Static-export rewriting: `.html` suffix siblings, dynamic-route rejection |
//! | [`config`] | `routemap.toml` loading, validation, and explicit route declarations |
//! | [`types`] | `RouteEntry`/`RouteTable` shared with downstream consumers |
//! | [`output`] | CLI output formatting — tree display of resolved tables |
//!
//! # Design Decisions
//!
//! ## Deterministic Ordering Over Cleverness
//!
//! The route table's order decides which route wins an ambiguous prefix
//! match, so it must be reproducible byte-for-byte. The scanner walks with
//! directory entries sorted by file name, depth-first; no priority rules,
//! no registration hooks. The same tree always produces the same table.
//!
//! ## Conflicts Are Build Failures
//!
//! Two files normalizing to the same path (`a.js` and `a/index.js`) make
//! one unreachable. Rather than pick a winner, resolution fails and names
//! every offending file. Dynamic segments are compared by shape so `/a` and
//! `/:id` coexist while `/:userId` and `/:uid` collide.
//!
//! ## Pure Core, Injected Listing
//!
//! The only filesystem access is the directory walk itself. Everything
//! downstream operates on a plain listing of relative paths, so the full
//! pipeline is testable against synthetic trees without touching disk.
//!
//! ## Config Is TOML With Strict Keys
//!
//! `routemap.toml` is deserialized with unknown keys rejected, stock
//! defaults merged underneath, and validation after parse. A typo fails the
//! build instead of silently resolving with defaults.

pub mod assemble;
pub mod config;
pub mod conflict;
pub mod export;
pub mod normalize;
pub mod output;
pub mod resolve;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;

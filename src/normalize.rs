//! Centralized path-to-URL convention parsing.
//!
//! Every page file follows the same naming conventions, parsed in one place
//! so the scanner, conflict detector, and assembler agree on what a path
//! means:
//!
//! - `index` and `page` stems collapse into the directory path:
//!   `index.js` → `/`, `detail/page.js` → `/detail`, `index/page.js` → `/`
//! - `$name` or `:name` segments become URL parameters:
//!   `$userId/page.js` → `/:userId`
//! - `_`-prefixed stems are layout files wrapping their directory:
//!   `list/_layout.js` → layout for `/list`
//! - everything else maps segment-for-segment: `users/list.js` → `/users/list`

use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("empty path segment in `{0}`")]
    EmptySegment(String),
    #[error("unsupported characters in segment `{0}` of `{1}`")]
    InvalidSegment(String, String),
    #[error("dynamic segment `{0}` in `{1}` has no valid parameter name")]
    InvalidParamName(String, String),
}

/// What kind of route a page file produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// A leaf route matching its path exactly.
    Page,
    /// A layout wrapping every page beneath its directory.
    Layout,
}

/// Result of normalizing a page file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPage {
    /// URL path with a leading slash and no trailing slash (root is `/`).
    pub route_path: String,
    pub kind: PageKind,
}

/// Normalize a page file path (relative to the pages root) into a URL path.
///
/// The extension must already be stripped-or-recognized by the caller; this
/// function only looks at the final `.`-separated extension.
pub fn normalize_page_path(rel: &Path) -> Result<NormalizedPage, NormalizeError> {
    let display = slash_join(rel);
    let components: Vec<&str> = rel
        .components()
        .map(|c| c.as_os_str().to_str().unwrap_or(""))
        .collect();

    let (file, dirs) = match components.split_last() {
        Some(split) => split,
        None => return Err(NormalizeError::EmptySegment(display)),
    };

    let mut segments = Vec::with_capacity(components.len());
    for dir in dirs {
        segments.push(normalize_segment(dir, &display)?);
    }

    let stem = file.rsplit_once('.').map(|(s, _)| s).unwrap_or(file);

    if let Some(name) = stem.strip_prefix('_') {
        if name.is_empty() {
            return Err(NormalizeError::EmptySegment(display));
        }
        return Ok(NormalizedPage {
            route_path: join_segments(&segments),
            kind: PageKind::Layout,
        });
    }

    if stem == "index" || stem == "page" {
        // An `index`-named directory itself collapses: `index/page.js` → `/`.
        while segments.last().is_some_and(|s| s == "index") {
            segments.pop();
        }
    } else {
        segments.push(normalize_segment(stem, &display)?);
    }

    Ok(NormalizedPage {
        route_path: join_segments(&segments),
        kind: PageKind::Page,
    })
}

/// Normalize one path segment: `$name`/`:name` → `:name`, literals validated.
pub fn normalize_segment(seg: &str, path: &str) -> Result<String, NormalizeError> {
    if seg.is_empty() {
        return Err(NormalizeError::EmptySegment(path.to_string()));
    }
    if let Some(name) = seg.strip_prefix('$').or_else(|| seg.strip_prefix(':')) {
        if !is_valid_param_name(name) {
            return Err(NormalizeError::InvalidParamName(
                seg.to_string(),
                path.to_string(),
            ));
        }
        return Ok(format!(":{name}"));
    }
    if !seg.chars().all(is_literal_char) {
        return Err(NormalizeError::InvalidSegment(
            seg.to_string(),
            path.to_string(),
        ));
    }
    Ok(seg.to_string())
}

fn join_segments(segments: &[String]) -> String {
    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}

/// Join path components with `/` regardless of platform separator.
pub fn slash_join(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn is_literal_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~')
}

fn is_valid_param_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn page(rel: &str) -> NormalizedPage {
        normalize_page_path(&PathBuf::from(rel)).unwrap()
    }

    #[test]
    fn plain_file_maps_to_its_stem() {
        let p = page("a.js");
        assert_eq!(p.route_path, "/a");
        assert_eq!(p.kind, PageKind::Page);
    }

    #[test]
    fn nested_file_keeps_directory_segments() {
        assert_eq!(page("users/list.js").route_path, "/users/list");
    }

    #[test]
    fn root_index_maps_to_slash() {
        assert_eq!(page("index.js").route_path, "/");
    }

    #[test]
    fn directory_page_maps_to_directory_path() {
        assert_eq!(page("detail/page.js").route_path, "/detail");
    }

    #[test]
    fn index_directory_collapses() {
        assert_eq!(page("index/page.js").route_path, "/");
    }

    #[test]
    fn directory_index_maps_to_directory_path() {
        assert_eq!(page("list/index.js").route_path, "/list");
    }

    #[test]
    fn dollar_stem_becomes_param() {
        assert_eq!(page("$userId.js").route_path, "/:userId");
    }

    #[test]
    fn dollar_directory_becomes_param() {
        assert_eq!(page("$userId/page.js").route_path, "/:userId");
    }

    #[test]
    fn colon_prefix_also_accepted() {
        assert_eq!(page(":postId/edit.js").route_path, "/:postId/edit");
    }

    #[test]
    fn layout_file_detected() {
        let p = page("list/_layout.js");
        assert_eq!(p.route_path, "/list");
        assert_eq!(p.kind, PageKind::Layout);
    }

    #[test]
    fn root_layout_maps_to_slash() {
        let p = page("_layout.js");
        assert_eq!(p.route_path, "/");
        assert_eq!(p.kind, PageKind::Layout);
    }

    #[test]
    fn tsx_extension_stripped() {
        assert_eq!(page("about.tsx").route_path, "/about");
    }

    #[test]
    fn param_without_name_rejected() {
        let err = normalize_page_path(&PathBuf::from("$/page.js")).unwrap_err();
        assert!(matches!(err, NormalizeError::InvalidParamName(..)));
    }

    #[test]
    fn param_name_must_not_start_with_digit() {
        let err = normalize_page_path(&PathBuf::from("$1user/page.js")).unwrap_err();
        assert!(matches!(err, NormalizeError::InvalidParamName(..)));
    }

    #[test]
    fn whitespace_in_segment_rejected() {
        let err = normalize_page_path(&PathBuf::from("bad name.js")).unwrap_err();
        assert!(matches!(err, NormalizeError::InvalidSegment(..)));
    }

    #[test]
    fn bare_underscore_stem_rejected() {
        let err = normalize_page_path(&PathBuf::from("_.js")).unwrap_err();
        assert!(matches!(err, NormalizeError::EmptySegment(..)));
    }

    #[test]
    fn dashes_and_dots_allowed_in_literals() {
        assert_eq!(page("my-page.v2.js").route_path, "/my-page.v2");
    }
}

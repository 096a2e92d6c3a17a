//! Page tree scanning.
//!
//! Stage 1 of route resolution. Walks the pages directory and produces a
//! flat, deterministically ordered list of page entries that the conflict
//! detector and assembler consume.
//!
//! ## Directory Structure
//!
//! The scanner expects a conventional pages layout:
//!
//! ```text
//! src/pages/
//! ├── index.js                 # → /
//! ├── detail/
//! │   └── page.js              # → /detail  (directory's own page)
//! ├── users/
//! │   └── list.js              # → /users/list
//! ├── $userId/
//! │   └── page.js              # → /:userId (dynamic segment)
//! └── list/
//!     ├── _layout.js           # layout wrapping everything under /list
//!     ├── b.js                 # → /list/b
//!     └── index.js             # → /list/  (index child of the layout)
//! ```
//!
//! ## Ordering
//!
//! The walk is depth-first with directory entries sorted by file name, so a
//! directory's pages enumerate at the directory's lexicographic position.
//! This makes the final route table deterministic: the same tree always
//! yields the same order, and first-registered routes win ambiguous prefix
//! matches at runtime.
//!
//! ## Ignore Rules
//!
//! Dot files and dot directories are skipped entirely, as are test files
//! (`*.test.*`, `*.spec.*`), TypeScript declarations (`*.d.ts`), and any
//! file without a recognized page extension.
//!
//! The walk itself is the only filesystem access; everything downstream of
//! [`scan_listing`] is a pure function over the listing, so tests can feed
//! synthetic listings without touching disk.

use crate::normalize::{self, NormalizeError, PageKind};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
    #[error("pages directory not found: {0}")]
    MissingPagesDir(PathBuf),
}

/// File extensions recognized as page components.
pub const PAGE_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx"];

/// One scanned page file, normalized and ready for assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageEntry {
    /// Normalized URL path (`/users/list`, `/:userId`, ...).
    pub route_path: String,
    /// Module reference relative to the project root (`./src/pages/a.js`).
    pub component: String,
    /// True for `_layout` files; these become parent routes.
    pub is_layout: bool,
    /// Directory nesting count below the pages root.
    pub depth: usize,
    /// Source path relative to the pages root, `/`-separated.
    pub source: String,
}

impl PageEntry {
    /// Directory portion of [`source`](Self::source); empty at the root.
    pub fn source_dir(&self) -> &str {
        self.source.rsplit_once('/').map(|(dir, _)| dir).unwrap_or("")
    }
}

/// Scan a pages directory into an ordered entry list.
pub fn scan(pages_root: &Path, cwd: &Path) -> Result<Vec<PageEntry>, ScanError> {
    if !pages_root.is_dir() {
        return Err(ScanError::MissingPagesDir(pages_root.to_path_buf()));
    }
    let listing = list_page_files(pages_root)?;
    scan_listing(&listing, pages_root, cwd)
}

/// Produce the deterministic page-file listing for a directory tree.
///
/// Returns paths relative to `root`, in sorted depth-first walk order.
pub fn list_page_files(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut files = Vec::new();
    let walker = WalkDir::new(root).sort_by_file_name().into_iter();
    for entry in walker.filter_entry(|e| !is_hidden(e)) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry.path().strip_prefix(root).unwrap();
        if is_page_file(rel) {
            files.push(rel.to_path_buf());
        }
    }
    Ok(files)
}

/// Normalize a pre-computed listing into page entries.
///
/// Pure: no filesystem access. The listing's order is preserved, so callers
/// control final route ordering entirely through it.
pub fn scan_listing(
    files: &[PathBuf],
    pages_root: &Path,
    cwd: &Path,
) -> Result<Vec<PageEntry>, ScanError> {
    let base = component_prefix(pages_root, cwd);
    let mut entries = Vec::with_capacity(files.len());
    for rel in files {
        let normalized = normalize::normalize_page_path(rel)?;
        let source = normalize::slash_join(rel);
        entries.push(PageEntry {
            route_path: normalized.route_path,
            component: format!("{base}/{source}"),
            is_layout: normalized.kind == PageKind::Layout,
            depth: source.matches('/').count(),
            source,
        });
    }
    Ok(entries)
}

/// Component path prefix for files under the pages root.
///
/// `./src/pages` when the pages root sits under the project root, `.` when
/// they coincide, and the absolute pages path otherwise.
fn component_prefix(pages_root: &Path, cwd: &Path) -> String {
    match pages_root.strip_prefix(cwd) {
        Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Ok(rel) => format!("./{}", normalize::slash_join(rel)),
        Err(_) => pages_root.to_string_lossy().into_owned(),
    }
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

/// Whether a relative path names a page component file.
fn is_page_file(rel: &Path) -> bool {
    let Some(ext) = rel.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    if !PAGE_EXTENSIONS.contains(&ext) {
        return false;
    }
    let Some(stem) = rel.file_stem().and_then(|s| s.to_str()) else {
        return false;
    };
    !(stem.ends_with(".test") || stem.ends_with(".spec") || stem.ends_with(".d"))
}

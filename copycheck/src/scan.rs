//! Working-tree scan for license and copyright markers.

use anyhow::Result;
use ignore::WalkBuilder;
use regex::Regex;
use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

static RE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)copyright|license").unwrap());

pub struct ScanResult {
    /// Every tracked file, repository-relative.
    pub all_files: BTreeSet<String>,
    /// Files whose content carries a license or copyright marker.
    pub marked: HashSet<String>,
}

/// Walk the tree once (gitignore-respecting, hidden files skipped) and
/// classify every file.
///
/// Translation catalogs (any path containing `.po`) and files carrying the
/// first-party attribution marker never count as marked. Binary content
/// (NUL byte or invalid UTF-8) is listed but never marked.
pub fn scan_tree(root: &Path, attribution_marker: &str) -> Result<ScanResult> {
    let mut all_files = BTreeSet::new();
    let mut marked = HashSet::new();

    for entry in WalkBuilder::new(root).build() {
        let entry = entry?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .to_string_lossy()
            .into_owned();
        if is_marked(entry.path(), &rel, attribution_marker) {
            marked.insert(rel.clone());
        }
        all_files.insert(rel);
    }

    Ok(ScanResult { all_files, marked })
}

fn is_marked(path: &Path, rel: &str, attribution_marker: &str) -> bool {
    if rel.contains(".po") {
        return false;
    }
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(_) => return false,
    };
    if bytes.contains(&0) {
        return false;
    }
    let Ok(content) = std::str::from_utf8(&bytes) else {
        return false;
    };
    RE_MARKER.is_match(content) && !content.contains(attribution_marker)
}

//! Run configuration: paths, the review baseline, and the two maintainer
//! whitelists.

use std::collections::HashSet;
use std::path::PathBuf;

/// Commit of the last manual license review. Update this once you have
/// checked that the changes since then do not affect copyright.txt.
pub const LAST_CHECKED_COMMIT: &str = "4f3c2f4bafad4ea4edd5aeb3bd3871e28a2f0a64";

/// First-party attribution marker. Files carrying it fall under the project
/// license and are never treated as marker hits.
pub const ATTRIBUTION_MARKER: &str = "@author Penna";

/// Everything one audit run needs, assembled once at startup.
pub struct AuditConfig {
    pub root: PathBuf,
    /// Manifest path relative to `root`.
    pub manifest: String,
    pub baseline: String,
    pub attribution_marker: String,
    /// Files the scan flags but which are intentionally not in the manifest.
    pub whitelist_not_listed: HashSet<String>,
    /// Manifest entries (including opaque wildcards) with no marker of their
    /// own.
    pub whitelist_not_found: HashSet<String>,
}

impl AuditConfig {
    pub fn new(root: PathBuf, manifest: String, baseline: String) -> Self {
        Self {
            root,
            manifest,
            baseline,
            attribution_marker: ATTRIBUTION_MARKER.to_string(),
            whitelist_not_listed: whitelist_not_listed(),
            whitelist_not_found: whitelist_not_found(),
        }
    }
}

/// Files that contain one of the scanned substrings but are covered by the
/// project-wide license. Add an entry here with a short note when the scan
/// reports a new false positive.
fn whitelist_not_listed() -> HashSet<String> {
    [
        "ABOUT-NLS",               // gettext boilerplate
        "copyright.txt",           // the manifest itself
        "CMakeLists.txt",          // build option names, false positive
        "LICENSE",                 // main license file
        "rpm/fedora/penna.spec",   // packaging summary, false positive
        "windows-setup/penna.nsi", // installer branding, false positive
        "ui/about.glade",          // about dialog text, false positive
        "src/win32/penna.rc.in",   // resource template, false positive
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// Manifest entries that carry no marker themselves, for example binary
/// artwork covered by a wildcard declaration. The rationale for each entry
/// belongs in copyright.txt, not here.
fn whitelist_not_found() -> HashSet<String> {
    [
        "*",
        "debian/changelog",
        "debian/compat",
        "debian/control",
        "debian/docs",
        "debian/rules",
        "debian/source/format",
        "ui/pixmaps/application-x-penna.png",
        "ui/pixmaps/application-x-penna.svg",
        "ui/pixmaps/gnome-mime-application-x-penna.svg",
        "ui/iconsColor-dark/*",
        "ui/iconsColor-light/*",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

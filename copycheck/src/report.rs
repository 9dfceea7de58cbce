//! Classification and report rendering.
//!
//! The whole audit is order-independent set algebra over four inputs: the
//! declared set from the manifest, the marked set from the content scan, the
//! full file list, and the changed-since-baseline set.

use crate::config::AuditConfig;
use std::collections::{BTreeSet, HashSet};

pub struct AuditReport {
    /// Files both declared and detected, informational only.
    pub found: usize,
    /// Marker found in the tree, but not declared and not whitelisted.
    pub not_listed: Vec<String>,
    /// Declared in the manifest, but no marker found and not whitelisted.
    pub not_found: Vec<String>,
    /// Whitelisted or declared files that changed since the last review.
    pub out_of_date: Vec<String>,
    /// `.cpp` files without a marker whose `.h` sibling has one.
    pub missing_source_license: Vec<String>,
}

pub fn classify(
    declared: &HashSet<String>,
    marked: &HashSet<String>,
    all_files: &BTreeSet<String>,
    changed: &HashSet<String>,
    config: &AuditConfig,
) -> AuditReport {
    let found = declared.intersection(marked).count();

    let not_listed = sorted(marked.iter().filter(|file| {
        !declared.contains(*file) && !config.whitelist_not_listed.contains(*file)
    }));
    let not_found = sorted(declared.iter().filter(|file| {
        !marked.contains(*file) && !config.whitelist_not_found.contains(*file)
    }));

    // The manifest legitimately changes together with the fix, so it never
    // counts as out of date on its own.
    let mut watched: HashSet<String> = config
        .whitelist_not_listed
        .union(&config.whitelist_not_found)
        .cloned()
        .collect();
    watched.remove(&config.manifest);
    watched.extend(declared.iter().cloned());
    let out_of_date = sorted(watched.intersection(changed));

    let mut missing_source_license = Vec::new();
    for file in marked {
        if let Some(stem) = file.strip_suffix(".h") {
            let source = format!("{stem}.cpp");
            if all_files.contains(&source) && !marked.contains(&source) {
                missing_source_license.push(source);
            }
        }
    }
    missing_source_license.sort();

    AuditReport {
        found,
        not_listed,
        not_found,
        out_of_date,
        missing_source_license,
    }
}

fn sorted<'a>(iter: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut items: Vec<String> = iter.cloned().collect();
    items.sort();
    items
}

impl AuditReport {
    pub fn render(&self) -> String {
        let mut out = format!(
            "Found license/copyright in both the manifest and the tree: {}\n",
            self.found
        );
        section(
            &mut out,
            &self.not_listed,
            "Not listed in the manifest (but a marker was found in the tree):",
            Some("- all automatically detected files are listed or whitelisted"),
        );
        section(
            &mut out,
            &self.not_found,
            "No marker found in the tree (but listed in the manifest):",
            Some("- all listed files were automatically detected or whitelisted"),
        );
        section(
            &mut out,
            &self.out_of_date,
            "Whitelisted or listed in the manifest, but changed since the last review:",
            Some("- no listed file changed since the last review"),
        );
        section(
            &mut out,
            &self.missing_source_license,
            "These .cpp files carry no license even though their .h file does:",
            None,
        );
        out.push('\n');
        out.push_str(self.status());
        out.push('\n');
        out
    }

    pub fn exit_code(&self) -> i32 {
        if self.status() == "all clear" {
            0
        } else {
            1
        }
    }

    fn status(&self) -> &'static str {
        if !self.not_listed.is_empty() || !self.not_found.is_empty() {
            "update required"
        } else if !self.out_of_date.is_empty() {
            "recheck required"
        } else if !self.missing_source_license.is_empty() {
            "license header required"
        } else {
            "all clear"
        }
    }
}

fn section(out: &mut String, items: &[String], header: &str, empty_note: Option<&str>) {
    if items.is_empty() {
        if let Some(note) = empty_note {
            out.push_str(note);
            out.push('\n');
        }
        return;
    }
    out.push('\n');
    out.push_str(header);
    out.push('\n');
    for item in items {
        out.push_str("  ");
        out.push_str(item);
        out.push('\n');
    }
}

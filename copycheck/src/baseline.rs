//! Changed-file set against the pinned review baseline.

use std::collections::HashSet;
use std::path::Path;
use std::process::Command;

/// Files that differ between `baseline` and the current checkout.
///
/// A missing `git` or a failing diff degrades to the empty set with a
/// warning; classification proceeds without change tracking.
pub fn changed_since(root: &Path, baseline: &str) -> HashSet<String> {
    let output = Command::new("git")
        .arg("-C")
        .arg(root)
        .args(["diff", baseline, "HEAD", "--name-only"])
        .output()
        .ok()
        .filter(|o| o.status.success());

    match output {
        Some(output) => String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect(),
        None => {
            eprintln!("warning: git diff against {baseline} failed; change tracking skipped");
            HashSet::new()
        }
    }
}

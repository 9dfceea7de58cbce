//! Parser for the Debian copyright-format manifest.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// A declaration is either the payload of a `Files: ` field or a
/// continuation line indented by exactly seven spaces.
static RE_DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Files: |^ {7}[A-Za-z0-9/_.*-]* *$").unwrap());

/// Collect every path declared in a `Files:` block of the manifest.
///
/// Wildcard entries such as `*` stay opaque literal tokens. They are never
/// expanded or matched against file paths; only the whitelist can excuse
/// them.
pub fn declared_files(content: &str) -> HashSet<String> {
    let mut files = HashSet::new();
    for line in content.lines() {
        if RE_DECLARATION.is_match(line) {
            for token in line.get(7..).unwrap_or("").split_whitespace() {
                files.insert(token.to_string());
            }
        }
    }
    files
}

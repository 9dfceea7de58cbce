//! Enum and action-name extraction from the application headers.

use anyhow::{bail, Result};
use regex::Regex;
use std::sync::LazyLock;

static RE_STRING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""([^"]*)""#).unwrap());

/// Opening line of the generated action-name array.
static RE_ACTIONS_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^constexpr\s+const\s+char\*\s+ACTION_NAMES\[\]\s*=\s*\{").unwrap()
});

/// Extract the quoted literals of the array `name` and render one
/// zero-indexed `<prefix>_<literal> = <index>` constant per entry.
///
/// Matches both `name{"a", "b"};` and `name = { "a", "b" };`, with the body
/// possibly spanning several lines. A missing array is a structural failure.
pub fn enum_values(content: &str, name: &str, prefix: &str) -> Result<Vec<String>> {
    let pattern = format!(r"\b{}\s*(=\s*)?\{{([^}}]*)\}}\s*;", regex::escape(name));
    let re = Regex::new(&pattern)?;
    let Some(caps) = re.captures(content) else {
        bail!("enum {name} not found");
    };
    let body = caps.get(2).map_or("", |m| m.as_str());
    Ok(RE_STRING
        .captures_iter(body)
        .enumerate()
        .map(|(index, caps)| format!("    {prefix}_{} = {index},", &caps[1]))
        .collect())
}

/// Collect the action-name literals, one `---| "<name>"` alias line each.
///
/// Capture starts at the array marker and stops at the first line containing
/// a closing brace, whose pre-brace literal (if any) still counts. An absent
/// marker yields an empty list; unlike the named enums this is not an error.
pub fn action_names(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut inside = false;
    for line in content.lines() {
        let line = line.trim();
        if !inside {
            inside = RE_ACTIONS_MARKER.is_match(line);
        } else if let Some(pos) = line.find('}') {
            if let Some(caps) = RE_STRING.captures(&line[..pos]) {
                lines.push(format!("---| {}", &caps[0]));
            }
            break;
        } else if let Some(caps) = RE_STRING.captures(line) {
            lines.push(format!("---| {}", &caps[0]));
        }
    }
    lines
}

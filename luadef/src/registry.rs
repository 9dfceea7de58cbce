//! Registration-table scan: which functions the extension exposes.

use crate::model::ApiFunction;
use anyhow::{bail, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Opening of the Lua registration table. The table entries may start on
/// this very line.
const TABLE_MARKER: &str = "static const luaL_Reg applib[] = {";

static RE_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*\{"(.*)",\s*(applib_\w+)\},"#).unwrap());

/// Scan `source` for the registration table and collect every entry.
///
/// Capture starts at the table marker and only ends at end of input;
/// non-matching lines inside the table (comments, the nullptr sentinel) are
/// ignored. A missing marker means the file does not define the Lua API at
/// all.
pub fn scan_registrations(source: &str, path: &str) -> Result<Vec<ApiFunction>> {
    let mut capture = false;
    let mut functions = Vec::new();
    for mut line in source.lines() {
        if !capture {
            if let Some(rest) = line.strip_prefix(TABLE_MARKER) {
                capture = true;
                line = rest;
            }
        }
        if capture {
            if let Some(caps) = RE_ENTRY.captures(line) {
                functions.push(ApiFunction {
                    internal: caps[2].to_string(),
                    exposed: caps[1].to_string(),
                });
            }
        }
    }
    if !capture {
        bail!("luaL_Reg applib not found: {path} does not define the Lua API");
    }
    Ok(functions)
}

//! LuaLS stub rendering.

use crate::model::FunctionStub;

/// Render the complete `.def.lua` stub file: the meta header, one block per
/// API function, the action-name alias, and the concatenated constant
/// tables.
pub fn render(stubs: &[FunctionStub], actions: &[String], constants: &[String]) -> String {
    let mut out = String::new();
    out.push_str("---@meta\n");
    out.push_str("app = {}\n");
    for stub in stubs {
        for line in &stub.comments {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str(&format!(
            "function app.{}({}) end\n\n",
            stub.exposed,
            stub.params.join(", ")
        ));
    }
    out.push_str("---@alias Action\n");
    for line in actions {
        out.push_str(line);
        out.push('\n');
    }
    out.push('\n');
    out.push_str("---@enum\n");
    out.push_str("app.C = {\n");
    for line in constants {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str("}\n");
    out
}

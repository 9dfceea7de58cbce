use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

const SOURCE: &str = "src/core/plugin/luapi_application.h";
const ACTIONS_HEADER: &str = "src/core/enums/generated/Action.NameMap.generated.h";
const TOOLS_HEADER: &str = "src/core/control/ToolEnums.h";

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_luadef")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn copy_tree(from: &Path, to: &Path) {
    for entry in fs::read_dir(from).unwrap() {
        let entry = entry.unwrap();
        let target = to.join(entry.file_name());
        if entry.file_type().unwrap().is_dir() {
            fs::create_dir_all(&target).unwrap();
            copy_tree(&entry.path(), &target);
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
}

/// Copy the fixture project into a fresh tempdir, with an empty plugins/
/// directory for the default output path.
fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    copy_tree(Path::new(&fixture_path("penna")), dir.path());
    fs::create_dir_all(dir.path().join("plugins")).unwrap();
    dir
}

fn expected_stub() -> String {
    fs::read_to_string(fixture_path("luapi_application.def.lua")).unwrap()
}

// -- default invocation --

#[test]
fn no_arguments_writes_golden_stub() {
    let dir = project();

    cmd().current_dir(dir.path()).assert().success();

    let output = fs::read_to_string(dir.path().join("plugins/luapi_application.def.lua")).unwrap();
    assert_eq!(output, expected_stub());
}

#[test]
fn explicit_output_path_is_honored() {
    let dir = project();

    cmd()
        .current_dir(dir.path())
        .args([SOURCE, "out.lua"])
        .assert()
        .success();

    let output = fs::read_to_string(dir.path().join("out.lua")).unwrap();
    assert_eq!(output, expected_stub());
}

// -- CLI quirks --

#[test]
fn third_positional_is_ignored() {
    let dir = project();

    cmd()
        .current_dir(dir.path())
        .args([SOURCE, "out.lua", "extra"])
        .assert()
        .success();

    assert!(dir.path().join("out.lua").exists());
}

#[test]
fn four_positionals_print_usage() {
    cmd()
        .args(["a.h", "b", "c", "d"])
        .assert()
        .code(255)
        .stdout(predicate::str::contains("Usage: luadef"));
}

#[test]
fn hpp_suffix_is_rejected() {
    cmd()
        .arg("src/core/plugin/luapi_application.hpp")
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected a .h or cpp suffix"));
}

#[test]
fn literal_cpp_suffix_is_accepted() {
    let dir = project();
    let source = fs::read_to_string(dir.path().join(SOURCE)).unwrap();
    fs::write(dir.path().join("apicpp"), source).unwrap();

    cmd()
        .current_dir(dir.path())
        .args(["apicpp", "api.lua"])
        .assert()
        .success();

    let output = fs::read_to_string(dir.path().join("api.lua")).unwrap();
    assert_eq!(output, expected_stub());
}

// -- failure modes --

#[test]
fn missing_registration_table_leaves_no_output() {
    let dir = project();
    fs::write(dir.path().join(SOURCE), "#pragma once\nint x;\n").unwrap();

    cmd()
        .current_dir(dir.path())
        .args([SOURCE, "out.lua"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not define the Lua API"));

    assert!(!dir.path().join("out.lua").exists());
}

#[test]
fn missing_doc_comment_emits_stub_and_fails() {
    let dir = project();
    let source = "\
/**
 * Repaints the current page.
 */
static int applib_refresh(lua_State* L) {
    return 0;
}

static int applib_msgbox(lua_State* L) {
    return 1;
}

static const luaL_Reg applib[] = {{\"refresh\", applib_refresh},
                                  {\"msgbox\", applib_msgbox},
                                  {nullptr, nullptr}};
";
    fs::write(dir.path().join(SOURCE), source).unwrap();

    cmd()
        .current_dir(dir.path())
        .args([SOURCE, "out.lua"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "warning: no doc comment found for API function msgbox",
        ))
        .stderr(predicate::str::contains(
            "doc strings for functions [msgbox] missing",
        ));

    // The stub file is still complete: every registered function appears
    // exactly once, undocumented ones with an empty parameter list.
    let output = fs::read_to_string(dir.path().join("out.lua")).unwrap();
    assert!(output.contains("function app.refresh() end"));
    assert!(output.contains("function app.msgbox() end"));
}

#[test]
fn absent_action_names_marker_is_not_fatal() {
    let dir = project();
    fs::write(dir.path().join(ACTIONS_HEADER), "#pragma once\n").unwrap();

    cmd()
        .current_dir(dir.path())
        .args([SOURCE, "out.lua"])
        .assert()
        .success();

    let output = fs::read_to_string(dir.path().join("out.lua")).unwrap();
    assert!(output.contains("---@alias Action\n\n---@enum"));
}

#[test]
fn missing_enum_array_leaves_no_output() {
    let dir = project();
    fs::write(dir.path().join(TOOLS_HEADER), "#pragma once\n").unwrap();

    cmd()
        .current_dir(dir.path())
        .args([SOURCE, "out.lua"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("enum toolSizeNames not found"));

    assert!(!dir.path().join("out.lua").exists());
}

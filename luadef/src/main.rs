//! luadef — generate the LuaLS completion stub for the plugin API.
//!
//! Scans the native extension header for the `applib` registration table and
//! the doc comment in front of each registered function, then appends the
//! action-name alias and the numeric constant tables scraped from the
//! application headers. The result is a declarations-only `.def.lua` file
//! consumed by the Lua language server for editor completion.
//!
//! The whole output is buffered in memory and only written once every scan
//! has succeeded, so a structural failure leaves no half-written stub file.

mod docs;
mod emit;
mod enums;
mod model;
mod registry;

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_SOURCE: &str = "src/core/plugin/luapi_application.h";
const DEFAULT_OUTPUT: &str = "plugins/luapi_application.def.lua";

const ACTIONS_HEADER: &str = "src/core/enums/generated/Action.NameMap.generated.h";
const TOOLS_HEADER: &str = "src/core/control/ToolEnums.h";
const SELECTION_HEADER: &str = "src/core/control/tools/EditSelection.h";

#[derive(Parser)]
#[command(
    name = "luadef",
    about = "Generate the LuaLS stub file for the plugin API"
)]
struct Cli {
    /// [path to the file to inspect] [output path]
    args: Vec<String>,
}

/// Resolved paths for one generator run.
#[derive(Debug)]
struct GenConfig {
    source: PathBuf,
    output: PathBuf,
    actions_header: PathBuf,
    tools_header: PathBuf,
    selection_header: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    // Historical threshold: a third positional is accepted and ignored.
    if cli.args.len() > 3 {
        println!("Usage: luadef [path to the file to inspect] [output path]");
        std::process::exit(-1);
    }
    let config = resolve_config(&cli.args)?;
    run(&config)
}

fn resolve_config(args: &[String]) -> Result<GenConfig> {
    let source = args.first().map_or(DEFAULT_SOURCE, String::as_str);
    // Literal suffix check, no leading-dot normalization: `apicpp` passes,
    // `api.hpp` does not.
    if !source.ends_with(".h") && !source.ends_with("cpp") {
        bail!("unsupported source file {source}: expected a .h or cpp suffix");
    }
    let output = match args.get(1) {
        Some(path) => PathBuf::from(path),
        None if source == DEFAULT_SOURCE => PathBuf::from(DEFAULT_OUTPUT),
        None => Path::new(source).with_extension("def.lua"),
    };
    Ok(GenConfig {
        source: PathBuf::from(source),
        output,
        actions_header: PathBuf::from(ACTIONS_HEADER),
        tools_header: PathBuf::from(TOOLS_HEADER),
        selection_header: PathBuf::from(SELECTION_HEADER),
    })
}

fn run(config: &GenConfig) -> Result<()> {
    let source = read(&config.source)?;
    let source_name = config.source.display().to_string();

    let registrations = registry::scan_registrations(&source, &source_name)?;
    let mut pending: HashMap<String, String> = registrations
        .into_iter()
        .map(|f| (f.internal, f.exposed))
        .collect();

    let mut stubs = docs::scan_docs(&source, &mut pending);

    // Undocumented functions still get a stub so that every registered
    // function appears exactly once in the output; the run fails afterwards
    // regardless.
    let mut missing: Vec<(String, String)> = pending.drain().collect();
    missing.sort();
    let missing_exposed: Vec<String> = missing.iter().map(|(_, exposed)| exposed.clone()).collect();
    for (_, exposed) in missing {
        eprintln!("warning: no doc comment found for API function {exposed}");
        stubs.push(model::FunctionStub {
            exposed,
            ..Default::default()
        });
    }

    let actions = enums::action_names(&read(&config.actions_header)?);

    let tools = read(&config.tools_header)?;
    let selection = read(&config.selection_header)?;
    let mut constants = Vec::new();
    constants.extend(enums::enum_values(&tools, "toolSizeNames", "ToolSize")?);
    constants.extend(enums::enum_values(&tools, "toolNames", "Tool")?);
    constants.extend(enums::enum_values(&tools, "eraserTypeNames", "EraserType")?);
    constants.extend(enums::enum_values(&selection, "orderChangeNames", "OrderChange")?);

    fs::write(&config.output, emit::render(&stubs, &actions, &constants))
        .with_context(|| format!("failed to write {}", config.output.display()))?;

    if !missing_exposed.is_empty() {
        bail!(
            "doc strings for functions [{}] missing",
            missing_exposed.join(", ")
        );
    }
    Ok(())
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

//! copycheck — cross-check the copyright manifest against the source tree.
//!
//! Run from the repository root with no arguments. The tool reads
//! `copyright.txt`, scans the working tree for license and copyright markers,
//! diffs the checkout against the last manually reviewed commit, and prints a
//! labeled report of every file where the two sides disagree.
//!
//! Exit status is 1 on any mismatch, 0 when everything is declared,
//! detected, or whitelisted.

mod baseline;
mod config;
mod manifest;
mod report;
mod scan;

use anyhow::{Context, Result};
use clap::Parser;
use config::AuditConfig;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "copycheck",
    about = "Audit the copyright manifest against the source tree"
)]
struct Cli {
    /// Repository root to audit
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Manifest path, relative to the root
    #[arg(long, default_value = "copyright.txt")]
    manifest: String,

    /// Revision of the last manual license review
    #[arg(long, default_value = config::LAST_CHECKED_COMMIT)]
    baseline: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AuditConfig::new(cli.root, cli.manifest, cli.baseline);
    let report = run(&config)?;
    print!("{}", report.render());
    std::process::exit(report.exit_code());
}

fn run(config: &AuditConfig) -> Result<report::AuditReport> {
    let manifest_path = config.root.join(&config.manifest);
    let content = fs::read_to_string(&manifest_path)
        .with_context(|| format!("failed to read {}", manifest_path.display()))?;
    let declared = manifest::declared_files(&content);

    let scanned = scan::scan_tree(&config.root, &config.attribution_marker)?;
    let changed = baseline::changed_since(&config.root, &config.baseline);

    Ok(report::classify(
        &declared,
        &scanned.marked,
        &scanned.all_files,
        &changed,
        config,
    ))
}

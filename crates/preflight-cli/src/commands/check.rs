//! Check command implementation.

use anyhow::{bail, Context, Result};
use preflight_checks::{select_checks, Preset};
use preflight_core::Runner;
use std::path::Path;

use crate::config_resolver;
use crate::OutputFormat;

/// Runs the check command.
///
/// Exits the process with status 1 when any check fails.
pub fn run(
    path: &Path,
    format: OutputFormat,
    checks_filter: Option<String>,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = config_resolver::load(path, config_path)?;

    let checks = if let Some(filter) = checks_filter {
        let names: Vec<&str> = filter
            .split(',')
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .collect();
        select_checks(&names, &config)
    } else {
        Preset::Preflight.checks(&config)
    }
    .context("Failed to build checks")?;

    if checks.is_empty() {
        bail!("No checks selected");
    }

    let mut builder = Runner::builder().root(path).config(config);
    for check in checks {
        builder = builder.check_box(check);
    }

    let runner = builder.build().context("Failed to build runner")?;

    tracing::info!("Checking {:?} with {} checks", path, runner.check_count());

    let report = runner.run();

    super::output::print(&report, format)?;

    if !report.passed() {
        std::process::exit(1);
    }

    Ok(())
}

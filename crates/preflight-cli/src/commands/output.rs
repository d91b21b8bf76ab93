//! Shared output formatting for check reports.

use anyhow::Result;
use preflight_core::{Report, Severity};
use serde::Serialize;

use crate::OutputFormat;

/// Print a report in the specified format.
pub fn print(report: &Report, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(report),
        OutputFormat::Json => return print_json(report),
        OutputFormat::Compact => print_compact(report),
    }
    Ok(())
}

fn print_text(report: &Report) {
    println!("--- App Runner Pre-Flight Check ---\n");

    for outcome in &report.outcomes {
        println!("Checking {}...", outcome.title);
        for finding in &outcome.findings {
            let status = match finding.severity {
                Severity::Error => "\x1b[31merror\x1b[0m",
                Severity::Warning => "\x1b[33mwarning\x1b[0m",
                Severity::Info => "\x1b[32mok\x1b[0m",
            };
            println!("  {}: {}", status, finding.message);
            if let Some(suggestion) = &finding.suggestion {
                println!("    = help: {suggestion}");
            }
        }
        println!();
    }

    if report.passed() {
        println!("\x1b[32mREADY FOR TAKEOFF! You can push to Git.\x1b[0m");
    } else {
        println!("\x1b[31mFIX ERRORS BEFORE PUSHING.\x1b[0m");
    }
}

/// JSON shape: the report plus the overall verdict.
#[derive(Serialize)]
struct JsonReport<'a> {
    passed: bool,
    #[serde(flatten)]
    report: &'a Report,
}

fn print_json(report: &Report) -> Result<()> {
    let json = serde_json::to_string_pretty(&JsonReport {
        passed: report.passed(),
        report,
    })?;
    println!("{json}");
    Ok(())
}

fn print_compact(report: &Report) {
    for finding in report
        .outcomes
        .iter()
        .flat_map(|o| &o.findings)
        .filter(|f| f.severity >= Severity::Warning)
    {
        println!("{finding}");
    }
}

//! Shared file loading for text-based checks.

use preflight_core::{Check, FileText, Finding, Location, ProjectContext, Severity};
use std::path::Path;

/// Reads `path`, or returns the error finding that fails the check instead.
pub(crate) fn read_or_report<C: Check + ?Sized>(
    check: &C,
    ctx: &ProjectContext,
    path: &Path,
    kind: &str,
) -> Result<String, Finding> {
    match ctx.read_text(path) {
        FileText::Present(text) => Ok(text),
        FileText::Missing => Err(check
            .finding(
                Severity::Error,
                format!("{kind} not found: {}", path.display()),
            )
            .at(Location::file(path))),
        FileText::Unreadable(reason) => Err(check
            .finding(
                Severity::Error,
                format!("{kind} could not be read: {} ({reason})", path.display()),
            )
            .at(Location::file(path))),
    }
}

//! Check trait for defining preflight checks.

use crate::context::ProjectContext;
use crate::types::{CheckOutcome, Finding, Severity};

/// A project-wide preflight check.
///
/// Implement this trait to validate some part of a project before deploying.
/// Checks never fail the run itself: missing or unreadable files are reported
/// as error findings on the returned outcome.
///
/// # Example
///
/// ```ignore
/// use preflight_core::{Check, Finding, ProjectContext, Severity};
///
/// pub struct RequireProcfile;
///
/// impl Check for RequireProcfile {
///     fn name(&self) -> &'static str { "require-procfile" }
///     fn code(&self) -> &'static str { "PF100" }
///     fn title(&self) -> &'static str { "Procfile" }
///
///     fn run(&self, ctx: &ProjectContext) -> Vec<Finding> {
///         if ctx.exists("Procfile") {
///             vec![]
///         } else {
///             vec![Finding::new(self.code(), self.name(), Severity::Error, "missing: Procfile")]
///         }
///     }
/// }
/// ```
pub trait Check: Send + Sync {
    /// Returns the kebab-case name of this check (e.g., "required-files").
    fn name(&self) -> &'static str;

    /// Returns the check code (e.g., "PF001").
    fn code(&self) -> &'static str;

    /// Returns the section title printed before this check's findings.
    fn title(&self) -> &'static str;

    /// Returns a brief description of what this check validates.
    fn description(&self) -> &'static str {
        ""
    }

    /// Runs the check against the project and returns its findings in order.
    fn run(&self, ctx: &ProjectContext) -> Vec<Finding>;

    /// Creates a finding attributed to this check.
    fn finding(&self, severity: Severity, message: String) -> Finding {
        Finding::new(self.code(), self.name(), severity, message)
    }

    /// Runs the check and wraps its findings into an outcome.
    fn evaluate(&self, ctx: &ProjectContext) -> CheckOutcome {
        let mut outcome = CheckOutcome::new(self.code(), self.name(), self.title());
        outcome.findings = self.run(ctx);
        outcome
    }
}

/// Type alias for boxed Check trait objects.
pub type CheckBox = Box<dyn Check>;

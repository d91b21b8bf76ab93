//! Check for App Runner descriptor syntax.
//!
//! # Rationale
//!
//! The managed Python 3.11 runtime only accepts the `python311` runtime
//! identifier and ships `pip3` rather than `pip`. A build that never runs
//! `collectstatic` deploys without static files.
//!
//! # Detected Patterns
//!
//! - `runtime: python311` missing
//! - `pip install` present (`pip3 install` is fine)
//! - `collectstatic` missing
//!
//! The descriptor is matched as flat text; it is never parsed as YAML.

use crate::source::read_or_report;
use preflight_core::{Check, DescriptorConfig, Finding, Location, ProjectContext, Severity};

/// Check code for descriptor-syntax.
pub const CODE: &str = "PF002";

/// Check name for descriptor-syntax.
pub const NAME: &str = "descriptor-syntax";

/// Validates required and forbidden substrings in the deployment descriptor.
#[derive(Debug, Clone, Default)]
pub struct DescriptorSyntax {
    config: DescriptorConfig,
}

impl DescriptorSyntax {
    /// Creates the check with the default App Runner rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the check from the `[descriptor]` config section.
    #[must_use]
    pub fn from_config(config: &DescriptorConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Returns one message per violated rule, evaluating all of them.
    #[must_use]
    pub fn violations(&self, content: &str) -> Vec<String> {
        let c = &self.config;
        let mut errors = Vec::new();

        if !content.contains(&c.required_runtime) {
            errors.push(format!(
                "Runtime must be '{}' (found something else)",
                runtime_id(&c.required_runtime)
            ));
        }

        if content.contains(&c.forbidden_command) {
            errors.push(format!(
                "Build command uses '{}'. Must use '{}'",
                c.forbidden_command, c.preferred_command
            ));
        }

        if !content.contains(&c.required_command) {
            errors.push(format!("Missing '{}' command", c.required_command));
        }

        errors
    }
}

/// `runtime: python311` -> `python311`.
fn runtime_id(declaration: &str) -> &str {
    declaration
        .split_once(':')
        .map_or(declaration, |(_, id)| id.trim())
}

impl Check for DescriptorSyntax {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn title(&self) -> &'static str {
        "App Runner Config"
    }

    fn description(&self) -> &'static str {
        "Validates runtime, build command, and collectstatic in apprunner.yaml"
    }

    fn run(&self, ctx: &ProjectContext) -> Vec<Finding> {
        let path = &self.config.path;
        let content = match read_or_report(self, ctx, path, "descriptor") {
            Ok(content) => content,
            Err(finding) => return vec![finding],
        };

        let errors = self.violations(&content);
        if errors.is_empty() {
            return vec![self
                .finding(
                    Severity::Info,
                    format!(
                        "valid: {} ({} syntax correct)",
                        path.display(),
                        runtime_id(&self.config.required_runtime)
                    ),
                )
                .at(Location::file(path))];
        }

        errors
            .into_iter()
            .map(|message| {
                self.finding(Severity::Error, message)
                    .at(Location::file(path))
            })
            .collect()
    }
}

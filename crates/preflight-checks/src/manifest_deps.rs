//! Check for forbidden, required, and discouraged dependencies.
//!
//! Names are matched as substrings of the whole manifest, so `psycopg[binary]`
//! satisfies a `psycopg` requirement.

use crate::source::read_or_report;
use preflight_core::{
    Check, DiscouragedSpelling, Finding, Location, ManifestConfig, ProjectContext, Severity,
};

/// Check code for manifest-deps.
pub const CODE: &str = "PF003";

/// Check name for manifest-deps.
pub const NAME: &str = "manifest-deps";

/// Scans the dependency manifest for dependency names.
#[derive(Debug, Clone, Default)]
pub struct ManifestDeps {
    config: ManifestConfig,
}

impl ManifestDeps {
    /// Creates the check with the default App Runner rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the check from the `[manifest]` config section.
    #[must_use]
    pub fn from_config(config: &ManifestConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Sets the forbidden dependency names.
    #[must_use]
    pub fn forbid(mut self, names: &[&str]) -> Self {
        self.config.forbidden = names.iter().map(|s| (*s).to_string()).collect();
        self
    }

    /// Sets the required dependency names.
    #[must_use]
    pub fn require(mut self, names: &[&str]) -> Self {
        self.config.required = names.iter().map(|s| (*s).to_string()).collect();
        self
    }

    /// Adds a spelling that only warns.
    #[must_use]
    pub fn discourage(mut self, spelling: &str, preferred: &str) -> Self {
        self.config.discouraged.push(DiscouragedSpelling {
            spelling: spelling.to_string(),
            preferred: preferred.to_string(),
        });
        self
    }

    fn scan(&self, content: &str) -> Vec<Finding> {
        let c = &self.config;
        let path = c.path.display();
        let mut findings = Vec::new();

        for dep in c.forbidden.iter().filter(|d| content.contains(d.as_str())) {
            findings.push(
                self.finding(
                    Severity::Error,
                    format!("dangerous: {dep} found in {path}. Remove it!"),
                )
                .at(locate(&c.path, content, dep)),
            );
        }

        for dep in c.required.iter().filter(|d| !content.contains(d.as_str())) {
            findings.push(self.finding(
                Severity::Error,
                format!("missing: {dep} not found in {path}"),
            ));
        }

        for d in c
            .discouraged
            .iter()
            .filter(|d| content.contains(d.spelling.as_str()))
        {
            findings.push(
                self.finding(Severity::Warning, format!("'{}' found", d.spelling))
                    .at(locate(&c.path, content, &d.spelling))
                    .with_suggestion(format!(
                        "Use '{}' for better prod stability",
                        d.preferred
                    )),
            );
        }

        if !findings.iter().any(Finding::is_failure) {
            findings.insert(
                0,
                self.finding(Severity::Info, format!("valid: {path}"))
                    .at(Location::file(&c.path)),
            );
        }

        findings
    }
}

fn locate(path: &std::path::Path, content: &str, needle: &str) -> Location {
    content.find(needle).map_or_else(
        || Location::file(path),
        |offset| Location::from_offset(path, content, offset),
    )
}

impl Check for ManifestDeps {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn title(&self) -> &'static str {
        "Dependencies"
    }

    fn description(&self) -> &'static str {
        "Scans requirements/base.txt for forbidden and missing dependencies"
    }

    fn run(&self, ctx: &ProjectContext) -> Vec<Finding> {
        match read_or_report(self, ctx, &self.config.path, "manifest") {
            Ok(content) => self.scan(&content),
            Err(finding) => vec![finding],
        }
    }
}

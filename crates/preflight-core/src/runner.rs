//! Runner for orchestrating preflight checks.

use crate::check::{Check, CheckBox};
use crate::config::Config;
use crate::context::ProjectContext;
use crate::types::{CheckOutcome, Report, Severity};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while setting up a run.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// The project root is not a directory.
    #[error("Project root not found: {}", .0.display())]
    RootNotFound(PathBuf),
}

/// Builder for configuring a [`Runner`].
#[derive(Default)]
pub struct RunnerBuilder {
    root: Option<PathBuf>,
    checks: Vec<CheckBox>,
    config: Option<Config>,
}

impl RunnerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the project root directory.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds a check to the runner.
    #[must_use]
    pub fn check<C: Check + 'static>(mut self, check: C) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Adds a boxed check to the runner.
    #[must_use]
    pub fn check_box(mut self, check: CheckBox) -> Self {
        self.checks.push(check);
        self
    }

    /// Sets the configuration used for per-check switches.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the runner.
    ///
    /// # Errors
    ///
    /// Returns an error if the root is not an existing directory.
    pub fn build(self) -> Result<Runner, RunnerError> {
        let root = self.root.unwrap_or_else(|| PathBuf::from("."));
        if !root.is_dir() {
            return Err(RunnerError::RootNotFound(root));
        }

        Ok(Runner {
            root,
            checks: self.checks,
            config: self.config.unwrap_or_default(),
        })
    }
}

/// Runs checks in registration order and aggregates their outcomes.
///
/// Use [`Runner::builder()`] to construct an instance.
pub struct Runner {
    root: PathBuf,
    checks: Vec<CheckBox>,
    config: Config,
}

impl Runner {
    /// Creates a new builder for configuring a runner.
    #[must_use]
    pub fn builder() -> RunnerBuilder {
        RunnerBuilder::new()
    }

    /// Returns the project root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the number of registered checks.
    #[must_use]
    pub fn check_count(&self) -> usize {
        self.checks.len()
    }

    /// Runs every enabled check.
    ///
    /// All checks run regardless of earlier failures, so one report surfaces
    /// every problem.
    #[must_use]
    pub fn run(&self) -> Report {
        info!("Running {} checks at {:?}", self.checks.len(), self.root);

        let ctx = ProjectContext::new(&self.root);
        let mut report = Report::new(&self.root);

        for check in &self.checks {
            if !self.config.is_check_enabled(check.name()) {
                debug!("Skipping disabled check: {}", check.name());
                continue;
            }

            let outcome = check.evaluate(&ctx);
            let outcome = self.apply_severity_override(outcome);
            debug!(
                "{} [{}]: {}",
                outcome.name,
                outcome.code,
                if outcome.passed() { "passed" } else { "failed" }
            );
            report.outcomes.push(outcome);
        }

        info!(
            "Run complete: {} of {} checks failed",
            report.failed_checks().len(),
            report.outcomes.len()
        );

        report
    }

    /// Applies severity overrides from configuration.
    ///
    /// Only failures are rewritten; info lines stay informational. An `info`
    /// override is ignored so a failure never reads as a pass.
    fn apply_severity_override(&self, mut outcome: CheckOutcome) -> CheckOutcome {
        if let Some(severity) = self.config.check_severity(&outcome.name) {
            if severity == Severity::Info {
                warn!("Ignoring info severity override for {}", outcome.name);
                return outcome;
            }
            for f in &mut outcome.findings {
                if f.severity == Severity::Error {
                    f.severity = severity;
                }
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CheckConfig;
    use crate::types::Finding;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Fixed {
        name: &'static str,
        severity: Severity,
        calls: Arc<AtomicUsize>,
    }

    impl Fixed {
        fn new(name: &'static str, severity: Severity) -> Self {
            Self {
                name,
                severity,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    impl Check for Fixed {
        fn name(&self) -> &'static str {
            self.name
        }
        fn code(&self) -> &'static str {
            "TEST"
        }
        fn title(&self) -> &'static str {
            "Fixed"
        }
        fn run(&self, _ctx: &ProjectContext) -> Vec<Finding> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            vec![
                self.finding(Severity::Info, "checked".to_string()),
                self.finding(self.severity, self.name.to_string()),
            ]
        }
    }

    #[test]
    fn test_builder_rejects_missing_root() {
        let result = Runner::builder().root("/nonexistent/project").build();
        assert!(matches!(result, Err(RunnerError::RootNotFound(_))));
    }

    #[test]
    fn test_builder_defaults_to_current_dir() {
        let runner = Runner::builder().build().expect("Failed to build runner");
        assert_eq!(runner.root(), Path::new("."));
        assert_eq!(runner.check_count(), 0);
    }

    #[test]
    fn runs_all_checks_in_order_without_short_circuit() {
        let second = Fixed::new("second", Severity::Info);
        let calls = Arc::clone(&second.calls);

        let report = Runner::builder()
            .check(Fixed::new("first", Severity::Error))
            .check(second)
            .check(Fixed::new("third", Severity::Warning))
            .build()
            .unwrap()
            .run();

        let names: Vec<&str> = report.outcomes.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(!report.passed());
        assert_eq!(report.failed_checks().len(), 1);
    }

    #[test]
    fn disabled_check_is_skipped() {
        let mut config = Config::default();
        config.checks.insert(
            "first".to_string(),
            CheckConfig {
                enabled: Some(false),
                severity: None,
            },
        );

        let report = Runner::builder()
            .config(config)
            .check(Fixed::new("first", Severity::Error))
            .build()
            .unwrap()
            .run();

        assert!(report.outcomes.is_empty());
        assert!(report.passed());
    }

    #[test]
    fn severity_override_downgrades_failures_only() {
        let mut config = Config::default();
        config.checks.insert(
            "first".to_string(),
            CheckConfig {
                enabled: None,
                severity: Some(Severity::Warning),
            },
        );

        let report = Runner::builder()
            .config(config)
            .check(Fixed::new("first", Severity::Error))
            .build()
            .unwrap()
            .run();

        let outcome = report.outcome("first").unwrap();
        assert!(outcome.passed());
        assert_eq!(outcome.findings[0].severity, Severity::Info);
        assert_eq!(outcome.findings[1].severity, Severity::Warning);
    }

    #[test]
    fn info_override_keeps_failures() {
        let mut config = Config::default();
        config.checks.insert(
            "first".to_string(),
            CheckConfig {
                enabled: None,
                severity: Some(Severity::Info),
            },
        );

        let report = Runner::builder()
            .config(config)
            .check(Fixed::new("first", Severity::Error))
            .build()
            .unwrap()
            .run();

        assert!(!report.passed());
        let outcome = report.outcome("first").unwrap();
        assert_eq!(outcome.findings[1].severity, Severity::Error);
    }
}

//! Core types for check findings, outcomes, and reports.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level for check findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational status line, records a passing condition.
    Info,
    /// Advice that should be addressed but does not fail the check.
    Warning,
    /// Failure that must be fixed before deploying.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Position inside a checked file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File path relative to the project root.
    pub file: PathBuf,
    /// Line number (1-indexed, 0 when the finding concerns the whole file).
    pub line: usize,
    /// Column number (1-indexed, 0 when the finding concerns the whole file).
    pub column: usize,
}

impl Location {
    /// Creates a location with explicit values.
    #[must_use]
    pub fn new(file: impl Into<PathBuf>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }

    /// Creates a location pointing at a whole file.
    #[must_use]
    pub fn file(file: impl Into<PathBuf>) -> Self {
        Self::new(file, 0, 0)
    }

    /// Creates a location from a byte offset into `content`.
    ///
    /// Offsets past the end of `content` are clamped to the last position.
    #[must_use]
    pub fn from_offset(file: impl Into<PathBuf>, content: &str, offset: usize) -> Self {
        let offset = offset.min(content.len());
        let before = content.get(..offset).unwrap_or(content);
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        Self::new(file, line, column)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.line == 0 {
            write!(f, "{}", self.file.display())
        } else {
            write!(f, "{}:{}:{}", self.file.display(), self.line, self.column)
        }
    }
}

/// One reported status line of a check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// Check code (e.g., "PF001").
    pub code: String,
    /// Check name (e.g., "required-files").
    pub check: String,
    /// Severity of this finding.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Where the finding points, if anywhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Suggested fix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Finding {
    /// Creates a new finding.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        check: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            check: check.into(),
            severity,
            message: message.into(),
            location: None,
            suggestion: None,
        }
    }

    /// Attaches a location to this finding.
    #[must_use]
    pub fn at(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Adds a suggestion to this finding.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Returns true if this finding fails its check.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Formats the finding for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let mut output = format!("{}: {}", self.severity, self.message);
        if let Some(location) = &self.location {
            let _ = write!(output, " ({location})");
        }
        if let Some(suggestion) = &self.suggestion {
            let _ = write!(output, "\n  = help: {suggestion}");
        }
        output
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.location {
            Some(location) => write!(
                f,
                "{location}: {} [{}] {}",
                self.severity, self.code, self.message
            ),
            None => write!(f, "{} [{}] {}", self.severity, self.code, self.message),
        }
    }
}

/// Result of running a single check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// Check code.
    pub code: String,
    /// Check name.
    pub name: String,
    /// Section title shown before the findings.
    pub title: String,
    /// All findings in the order they were produced.
    pub findings: Vec<Finding>,
}

impl CheckOutcome {
    /// Creates an outcome with no findings.
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            title: title.into(),
            findings: Vec::new(),
        }
    }

    /// Returns true if no finding is an error.
    #[must_use]
    pub fn passed(&self) -> bool {
        !self.findings.iter().any(Finding::is_failure)
    }

    /// Returns findings filtered by severity.
    #[must_use]
    pub fn by_severity(&self, severity: Severity) -> Vec<&Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .collect()
    }
}

/// Aggregated result of a preflight run.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Report {
    /// Project root the checks ran against.
    pub root: PathBuf,
    /// One outcome per check, in run order.
    pub outcomes: Vec<CheckOutcome>,
}

impl Report {
    /// Creates an empty report for `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            outcomes: Vec::new(),
        }
    }

    /// Returns true if every check passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(CheckOutcome::passed)
    }

    /// Returns the outcomes that failed.
    #[must_use]
    pub fn failed_checks(&self) -> Vec<&CheckOutcome> {
        self.outcomes.iter().filter(|o| !o.passed()).collect()
    }

    /// Looks up an outcome by check name.
    #[must_use]
    pub fn outcome(&self, name: &str) -> Option<&CheckOutcome> {
        self.outcomes.iter().find(|o| o.name == name)
    }

    /// Counts findings by severity as `(errors, warnings, infos)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let count = |severity: Severity| {
            self.outcomes
                .iter()
                .flat_map(|o| &o.findings)
                .filter(|f| f.severity == severity)
                .count()
        };
        (
            count(Severity::Error),
            count(Severity::Warning),
            count(Severity::Info),
        )
    }

    /// Formats failing findings as a test failure report.
    ///
    /// Produces a human-readable multi-line report suitable for `panic!()` messages
    /// in `cargo test` integration.
    #[must_use]
    pub fn format_test_report(&self) -> String {
        use std::fmt::Write;

        let failing: Vec<&Finding> = self
            .outcomes
            .iter()
            .flat_map(|o| &o.findings)
            .filter(|f| f.is_failure())
            .collect();

        let mut report = String::new();
        let _ = writeln!(
            report,
            "\n=== preflight: {} failure(s) in {} ===\n",
            failing.len(),
            self.root.display()
        );

        for f in &failing {
            let _ = writeln!(report, "{} [{}]", f.check, f.code);
            let _ = writeln!(report, "  {}", f.format());
            let _ = writeln!(report);
        }

        let (errors, warnings, infos) = self.count_by_severity();
        let _ = writeln!(
            report,
            "Total: {} error(s), {} warning(s), {} info(s) across {} check(s)",
            errors,
            warnings,
            infos,
            self.outcomes.len()
        );

        report
    }
}

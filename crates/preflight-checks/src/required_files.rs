//! Check that required project files exist.
//!
//! Every path is queried, in the configured order, even after a miss, so one
//! run lists every missing file.

use preflight_core::{Check, FilesConfig, Finding, Location, ProjectContext, Severity};
use std::path::PathBuf;

/// Check code for required-files.
pub const CODE: &str = "PF001";

/// Check name for required-files.
pub const NAME: &str = "required-files";

/// Requires a fixed list of project-relative paths to exist.
#[derive(Debug, Clone)]
pub struct RequiredFiles {
    paths: Vec<PathBuf>,
}

impl RequiredFiles {
    /// Creates the check for the given paths.
    #[must_use]
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates the check from the `[files]` config section.
    #[must_use]
    pub fn from_config(config: &FilesConfig) -> Self {
        Self::new(config.required.iter().cloned())
    }

    /// Returns the paths in reporting order.
    #[must_use]
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}

impl Default for RequiredFiles {
    fn default() -> Self {
        Self::from_config(&FilesConfig::default())
    }
}

impl Check for RequiredFiles {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn title(&self) -> &'static str {
        "File Structure"
    }

    fn description(&self) -> &'static str {
        "Requires deployment files such as apprunner.yaml and manage.py to exist"
    }

    fn run(&self, ctx: &ProjectContext) -> Vec<Finding> {
        self.paths
            .iter()
            .map(|path| {
                let (severity, status) = if ctx.exists(path) {
                    (Severity::Info, "found")
                } else {
                    (Severity::Error, "missing")
                };
                self.finding(severity, format!("{status}: {}", path.display()))
                    .at(Location::file(path))
            })
            .collect()
    }
}

//! # preflight-checks
//!
//! Built-in preflight checks for App Runner deployments.
//!
//! ## Available Checks
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | PF001 | `required-files` | Requires deployment files to exist |
//! | PF002 | `descriptor-syntax` | Validates runtime, build command, and `collectstatic` in `apprunner.yaml` |
//! | PF003 | `manifest-deps` | Forbids and requires dependency names in `requirements/base.txt` |
//! | PF004 | `port-binding` | Requires the server `--bind` port and the declared network port to agree |
//!
//! All checks match file contents as flat text. None of them parse YAML or
//! resolve dependencies.
//!
//! ## Usage
//!
//! ```ignore
//! use preflight_checks::preflight_checks;
//! use preflight_core::{Config, Runner};
//!
//! let config = Config::default();
//! let mut builder = Runner::builder().root(".");
//! for check in preflight_checks(&config) {
//!     builder = builder.check_box(check);
//! }
//! let report = builder.build()?.run();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod descriptor_syntax;
mod manifest_deps;
mod port_binding;
mod presets;
mod required_files;
mod source;

pub use descriptor_syntax::DescriptorSyntax;
pub use manifest_deps::ManifestDeps;
pub use port_binding::PortBinding;
pub use presets::{all_checks, preflight_checks, select_checks, Preset};
pub use required_files::RequiredFiles;

/// Re-export core types for convenience.
pub use preflight_core::{Check, Finding, Severity};

/// Errors building a check from configuration.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// A configured value produced a pattern that does not compile.
    #[error("Invalid pattern for {check}: {source}")]
    Pattern {
        /// Name of the check being built.
        check: &'static str,
        /// Underlying regex error.
        source: regex::Error,
    },

    /// A selected name matches no check name or code.
    #[error("Unknown check: {0} (run `preflight list-checks` for valid names)")]
    UnknownCheck(String),
}

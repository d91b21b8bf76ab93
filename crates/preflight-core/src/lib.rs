//! # preflight-core
//!
//! Core framework for deployment preflight checks.
//!
//! This crate provides the foundational traits and types for building
//! preflight checks. It includes:
//!
//! - [`Check`] trait for project-wide checks
//! - [`ProjectContext`] for file access where a missing file is a value
//! - [`Runner`] for running checks in order and aggregating the result
//! - [`Finding`], [`CheckOutcome`] and [`Report`] for reporting
//! - [`Config`] for the rule sets the built-in checks use
//!
//! ## Example
//!
//! ```ignore
//! use preflight_core::Runner;
//!
//! let runner = Runner::builder()
//!     .root(".")
//!     .check(MyCheck::new())
//!     .build()?;
//!
//! let report = runner.run();
//! std::process::exit(if report.passed() { 0 } else { 1 });
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod check;
mod config;
mod context;
mod runner;
mod types;

pub use check::{Check, CheckBox};
pub use config::{
    CheckConfig, Config, ConfigError, DescriptorConfig, DiscouragedSpelling, FilesConfig,
    ManifestConfig, PortBindingConfig,
};
pub use context::{FileText, ProjectContext};
pub use runner::{Runner, RunnerBuilder, RunnerError};
pub use types::{CheckOutcome, Finding, Location, Report, Severity};

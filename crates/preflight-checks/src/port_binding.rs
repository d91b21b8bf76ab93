//! Check that the application server and the network port agree.
//!
//! # Detected Patterns
//!
//! Two independent matches over the descriptor text, both required:
//!
//! - `<server> ... --bind <host>:<port>` on one line
//! - `port: <port>`
//!
//! The defaults are `gunicorn` and 8000. A port followed by more digits
//! (`80001` for 8000) does not count as a match.

use crate::source::read_or_report;
use crate::BuildError;
use preflight_core::{Check, Finding, Location, PortBindingConfig, ProjectContext, Severity};
use regex::Regex;
use std::path::PathBuf;

/// Check code for port-binding.
pub const CODE: &str = "PF004";

/// Check name for port-binding.
pub const NAME: &str = "port-binding";

/// Asserts the server bind address and the declared port use the same port.
#[derive(Debug, Clone)]
pub struct PortBinding {
    descriptor: PathBuf,
    server: String,
    port: u16,
    bind_pattern: Regex,
    port_pattern: Regex,
}

impl PortBinding {
    /// Creates the check for `server` bound to `port`, reading `descriptor`.
    ///
    /// # Errors
    ///
    /// Returns an error if the derived patterns fail to compile.
    pub fn new(
        descriptor: impl Into<PathBuf>,
        server: &str,
        port: u16,
    ) -> Result<Self, BuildError> {
        let compile = |pattern: String| {
            Regex::new(&pattern).map_err(|source| BuildError::Pattern {
                check: NAME,
                source,
            })
        };

        Ok(Self {
            descriptor: descriptor.into(),
            server: server.to_string(),
            port,
            bind_pattern: compile(format!(
                r"{}.*--bind\s+\S+:{port}\b",
                regex::escape(server)
            ))?,
            port_pattern: compile(format!(r"port:\s*{port}\b"))?,
        })
    }

    /// Creates the check from the `[port_binding]` config section.
    ///
    /// # Errors
    ///
    /// Returns an error if the derived patterns fail to compile.
    pub fn from_config(config: &PortBindingConfig) -> Result<Self, BuildError> {
        Self::new(config.descriptor.clone(), &config.server, config.port)
    }

    fn expect_match(&self, content: &str, pattern: &Regex, met: String, unmet: String) -> Finding {
        match pattern.find(content) {
            Some(m) => self
                .finding(Severity::Info, met)
                .at(Location::from_offset(&self.descriptor, content, m.start())),
            None => self
                .finding(Severity::Error, unmet)
                .at(Location::file(&self.descriptor)),
        }
    }

    fn scan(&self, content: &str) -> Vec<Finding> {
        let port = self.port;
        vec![
            self.expect_match(
                content,
                &self.bind_pattern,
                format!("{} binds to port {port}", self.server),
                format!("{} should be configured to bind to port {port}", self.server),
            ),
            self.expect_match(
                content,
                &self.port_pattern,
                format!("network port is {port}"),
                format!(
                    "Network port should be configured as {port} in {}",
                    self.descriptor.display()
                ),
            ),
        ]
    }
}

impl Check for PortBinding {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn title(&self) -> &'static str {
        "Port Binding"
    }

    fn description(&self) -> &'static str {
        "Requires the server --bind port and the declared network port to match the configured port"
    }

    fn run(&self, ctx: &ProjectContext) -> Vec<Finding> {
        match read_or_report(self, ctx, &self.descriptor, "descriptor") {
            Ok(content) => self.scan(&content),
            Err(finding) => vec![finding],
        }
    }
}

//! Configuration types for preflight.
//!
//! Every section falls back to the built-in App Runner rule set, so a config
//! file only needs to name what it changes.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Top-level configuration for preflight.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Required project files.
    #[serde(default)]
    pub files: FilesConfig,

    /// Deployment descriptor rules.
    #[serde(default)]
    pub descriptor: DescriptorConfig,

    /// Dependency manifest rules.
    #[serde(default)]
    pub manifest: ManifestConfig,

    /// Server port binding rules.
    #[serde(default)]
    pub port_binding: PortBindingConfig,

    /// Per-check switches.
    #[serde(default)]
    pub checks: HashMap<String, CheckConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or fails [`Config::validate`].
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the substring checks cannot use.
    ///
    /// An empty pattern is contained in every file, so it would always fail a
    /// forbidden rule and always satisfy a required one. Severity overrides
    /// must stay at `warning` or above so failures never print as passes.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let d = &self.descriptor;
        non_empty("descriptor.required_runtime", &d.required_runtime)?;
        non_empty("descriptor.forbidden_command", &d.forbidden_command)?;
        non_empty("descriptor.required_command", &d.required_command)?;

        let m = &self.manifest;
        for dep in &m.forbidden {
            non_empty("manifest.forbidden", dep)?;
        }
        for dep in &m.required {
            non_empty("manifest.required", dep)?;
        }
        for d in &m.discouraged {
            non_empty("manifest.discouraged.spelling", &d.spelling)?;
        }

        non_empty("port_binding.server", &self.port_binding.server)?;

        for (name, check) in &self.checks {
            if check.severity == Some(crate::Severity::Info) {
                return Err(ConfigError::Invalid {
                    field: format!("checks.{name}.severity"),
                    message: "must be \"warning\" or \"error\"".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Checks if a check is enabled.
    #[must_use]
    pub fn is_check_enabled(&self, check_name: &str) -> bool {
        self.checks
            .get(check_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the severity override for a check.
    #[must_use]
    pub fn check_severity(&self, check_name: &str) -> Option<crate::Severity> {
        self.checks.get(check_name).and_then(|c| c.severity)
    }
}

/// Files that must exist in the project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilesConfig {
    /// Project-relative paths, reported in this order.
    #[serde(default = "default_required_files")]
    pub required: Vec<PathBuf>,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            required: default_required_files(),
        }
    }
}

fn default_required_files() -> Vec<PathBuf> {
    [
        "apprunner.yaml",
        "manage.py",
        "requirements/base.txt",
        "requirements/dev.txt",
        "config/settings.py",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

/// Substring rules for the deployment descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DescriptorConfig {
    /// Project-relative descriptor path.
    pub path: PathBuf,
    /// Runtime declaration that must be present.
    pub required_runtime: String,
    /// Legacy build invocation that must be absent.
    pub forbidden_command: String,
    /// Invocation to use instead of `forbidden_command`.
    pub preferred_command: String,
    /// Post-build command that must be present.
    pub required_command: String,
}

impl Default for DescriptorConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("apprunner.yaml"),
            required_runtime: "runtime: python311".to_string(),
            forbidden_command: "pip install".to_string(),
            preferred_command: "pip3 install".to_string(),
            required_command: "collectstatic".to_string(),
        }
    }
}

/// Substring rules for the dependency manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestConfig {
    /// Project-relative manifest path.
    pub path: PathBuf,
    /// Dependency names that must not appear.
    pub forbidden: Vec<String>,
    /// Dependency names that must appear.
    pub required: Vec<String>,
    /// Spellings that produce a warning only.
    pub discouraged: Vec<DiscouragedSpelling>,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("requirements/base.txt"),
            forbidden: to_strings(&["paypalrestsdk", "django-debug-toolbar"]),
            required: to_strings(&[
                "psycopg",
                "gunicorn",
                "whitenoise",
                "django-environ",
                "paypal-server-sdk",
            ]),
            discouraged: vec![DiscouragedSpelling {
                spelling: "psycopg[binary]".to_string(),
                preferred: "psycopg".to_string(),
            }],
        }
    }
}

/// A dependency spelling that works but has a preferred alternative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscouragedSpelling {
    /// Spelling to warn about.
    pub spelling: String,
    /// Spelling to suggest instead.
    pub preferred: String,
}

/// Server launch and network port expectations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortBindingConfig {
    /// Project-relative descriptor path.
    pub descriptor: PathBuf,
    /// Application server command name.
    pub server: String,
    /// Port that both the bind argument and the port declaration must use.
    pub port: u16,
}

impl Default for PortBindingConfig {
    fn default() -> Self {
        Self {
            descriptor: PathBuf::from("apprunner.yaml"),
            server: "gunicorn".to_string(),
            port: 8000,
        }
    }
}

/// Per-check configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Whether this check runs.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this check's failures.
    #[serde(default)]
    pub severity: Option<crate::Severity>,
}

fn non_empty(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Invalid {
            field: field.to_string(),
            message: "must not be empty".to_string(),
        });
    }
    Ok(())
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// A value parsed but cannot be used.
    #[error("Invalid config value for {field}: {message}")]
    Invalid {
        /// Dotted path of the offending field.
        field: String,
        /// What is wrong with it.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Severity;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.files.required.len(), 5);
        assert_eq!(config.files.required[0], PathBuf::from("apprunner.yaml"));
        assert_eq!(config.descriptor.required_runtime, "runtime: python311");
        assert_eq!(config.manifest.forbidden[0], "paypalrestsdk");
        assert_eq!(config.port_binding.port, 8000);
        assert!(config.checks.is_empty());
    }

    #[test]
    fn empty_toml_is_default() {
        let config = Config::parse("").expect("Failed to parse");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_partial_sections() {
        let toml = r#"
[manifest]
path = "requirements.txt"
required = ["gunicorn"]

[port_binding]
port = 8080

[checks.required-files]
enabled = false

[checks.manifest-deps]
severity = "warning"
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.manifest.path, PathBuf::from("requirements.txt"));
        assert_eq!(config.manifest.required, vec!["gunicorn".to_string()]);
        // Unnamed fields keep their defaults
        assert_eq!(config.manifest.forbidden.len(), 2);
        assert_eq!(config.port_binding.port, 8080);
        assert_eq!(config.port_binding.server, "gunicorn");
        assert_eq!(config.descriptor, DescriptorConfig::default());

        assert!(!config.is_check_enabled("required-files"));
        assert!(config.is_check_enabled("descriptor-syntax"));
        assert_eq!(
            config.check_severity("manifest-deps"),
            Some(Severity::Warning)
        );
    }

    #[test]
    fn test_parse_error() {
        let err = Config::parse("[files]\nrequired = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn empty_forbidden_command_is_rejected() {
        let err = Config::parse("[descriptor]\nforbidden_command = \"\"").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { ref field, .. } if field == "descriptor.forbidden_command"
        ));
    }

    #[test]
    fn empty_manifest_entry_is_rejected() {
        let err = Config::parse("[manifest]\nforbidden = [\"paypalrestsdk\", \"  \"]").unwrap_err();
        assert!(err.to_string().contains("manifest.forbidden"));

        let err = Config::parse("[manifest]\nrequired = [\"\"]").unwrap_err();
        assert!(err.to_string().contains("manifest.required"));
    }

    #[test]
    fn info_severity_override_is_rejected() {
        let err = Config::parse("[checks.required-files]\nseverity = \"info\"").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid config value for checks.required-files.severity: must be \"warning\" or \"error\""
        );
    }

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_from_file_missing() {
        let err = Config::from_file(std::path::Path::new("/nonexistent/preflight.toml"))
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/preflight.toml"));
    }
}

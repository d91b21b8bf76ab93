//! Check presets built from configuration.

use crate::{BuildError, DescriptorSyntax, ManifestDeps, PortBinding, RequiredFiles};
use preflight_core::{CheckBox, Config};

/// Preset check lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// File structure, descriptor syntax, and dependencies, in that order.
    Preflight,
    /// Every built-in check, including port binding.
    All,
}

impl Preset {
    /// Returns the checks for this preset.
    ///
    /// # Errors
    ///
    /// Returns an error if a check cannot be built from `config`.
    pub fn checks(self, config: &Config) -> Result<Vec<CheckBox>, BuildError> {
        match self {
            Self::Preflight => Ok(preflight_checks(config)),
            Self::All => all_checks(config),
        }
    }
}

/// Returns the pre-push preflight checks.
///
/// Includes, in run order:
/// - `required-files` (PF001)
/// - `descriptor-syntax` (PF002)
/// - `manifest-deps` (PF003)
#[must_use]
pub fn preflight_checks(config: &Config) -> Vec<CheckBox> {
    vec![
        Box::new(RequiredFiles::from_config(&config.files)),
        Box::new(DescriptorSyntax::from_config(&config.descriptor)),
        Box::new(ManifestDeps::from_config(&config.manifest)),
    ]
}

/// Returns all available checks.
///
/// # Errors
///
/// Returns an error if the port-binding patterns fail to compile.
pub fn all_checks(config: &Config) -> Result<Vec<CheckBox>, BuildError> {
    let mut checks = preflight_checks(config);
    checks.push(Box::new(PortBinding::from_config(&config.port_binding)?));
    Ok(checks)
}

/// Selects checks by name or code, in the order given.
///
/// # Errors
///
/// Returns [`BuildError::UnknownCheck`] for a name that matches no check, or
/// an error if a selected check cannot be built from `config`.
pub fn select_checks(names: &[&str], config: &Config) -> Result<Vec<CheckBox>, BuildError> {
    let mut checks: Vec<CheckBox> = Vec::new();

    for name in names {
        match *name {
            "required-files" | "PF001" => {
                checks.push(Box::new(RequiredFiles::from_config(&config.files)));
            }
            "descriptor-syntax" | "PF002" => {
                checks.push(Box::new(DescriptorSyntax::from_config(&config.descriptor)));
            }
            "manifest-deps" | "PF003" => {
                checks.push(Box::new(ManifestDeps::from_config(&config.manifest)));
            }
            "port-binding" | "PF004" => {
                checks.push(Box::new(PortBinding::from_config(&config.port_binding)?));
            }
            _ => return Err(BuildError::UnknownCheck((*name).to_string())),
        }
    }

    tracing::debug!("Selected checks: {}", names.join(", "));
    Ok(checks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(checks: &[CheckBox]) -> Vec<&'static str> {
        checks.iter().map(|c| c.name()).collect()
    }

    #[test]
    fn preflight_order_is_files_descriptor_manifest() {
        let checks = Preset::Preflight.checks(&Config::default()).unwrap();
        assert_eq!(
            names(&checks),
            ["required-files", "descriptor-syntax", "manifest-deps"]
        );
    }

    #[test]
    fn all_adds_port_binding() {
        let checks = Preset::All.checks(&Config::default()).unwrap();
        assert_eq!(checks.len(), 4);
        assert_eq!(checks[3].code(), "PF004");
    }

    #[test]
    fn select_by_name_or_code() {
        let checks = select_checks(&["PF004", "required-files"], &Config::default()).unwrap();
        assert_eq!(names(&checks), ["port-binding", "required-files"]);
    }

    #[test]
    fn select_unknown_name_is_an_error() {
        let err = select_checks(&["PF004", "port-bindng"], &Config::default())
            .err()
            .unwrap();
        assert!(matches!(err, BuildError::UnknownCheck(ref name) if name == "port-bindng"));
    }
}

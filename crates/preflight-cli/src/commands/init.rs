//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

/// Commented config matching the built-in defaults.
pub const DEFAULT_CONFIG: &str = r#"# preflight configuration
# Every value below is the built-in default; delete what you don't change.

[files]
# Paths that must exist, reported in this order
required = [
    "apprunner.yaml",
    "manage.py",
    "requirements/base.txt",
    "requirements/dev.txt",
    "config/settings.py",
]

[descriptor]
path = "apprunner.yaml"
required_runtime = "runtime: python311"
forbidden_command = "pip install"
preferred_command = "pip3 install"
required_command = "collectstatic"

[manifest]
path = "requirements/base.txt"
forbidden = ["paypalrestsdk", "django-debug-toolbar"]
required = ["psycopg", "gunicorn", "whitenoise", "django-environ", "paypal-server-sdk"]

[[manifest.discouraged]]
spelling = "psycopg[binary]"
preferred = "psycopg"

[port_binding]
descriptor = "apprunner.yaml"
server = "gunicorn"
port = 8000

# Per-check switches
# [checks.required-files]
# enabled = false
#
# [checks.manifest-deps]
# severity = "warning"  # Report failures without failing the run
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("preflight.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created preflight.toml");
    println!("\nNext steps:");
    println!("  1. Edit preflight.toml to match your project layout");
    println!("  2. Run: preflight check");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use preflight_core::Config;

    #[test]
    fn default_config_template_matches_builtin_defaults() {
        let parsed = Config::parse(DEFAULT_CONFIG).expect("template should parse");
        assert_eq!(parsed, Config::default());
    }
}

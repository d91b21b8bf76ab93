//! List checks command implementation.

use preflight_checks::Preset;
use preflight_core::Config;

/// Runs the list-checks command.
pub fn run() {
    println!("Available checks:\n");
    println!("{:<10} {:<20} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    // Default patterns always compile
    let checks = Preset::All.checks(&Config::default()).unwrap_or_default();
    for check in &checks {
        println!(
            "{:<10} {:<20} {}",
            check.code(),
            check.name(),
            check.description()
        );
    }

    println!("\nPresets:");
    println!("  preflight  - PF001, PF002, PF003 (default)");
    println!("  all        - PF001 through PF004");

    println!("\nUse --checks to select specific checks, e.g.:");
    println!("  preflight check --checks port-binding");
    println!("  preflight check --checks PF001,PF004");
}

//! Integration test: the preflight preset end-to-end via Runner.
//!
//! Builds a complete App Runner project in a temp dir, verifies it passes,
//! then breaks one condition at a time and verifies the run fails.

use preflight_checks::preflight_checks;
use preflight_core::{Config, Report, Runner, Severity};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const DESCRIPTOR: &str = "\
version: 1.0
runtime: python311
build:
  commands:
    build:
      - pip3 install -r requirements/base.txt
run:
  pre-run:
    - python3 manage.py collectstatic --noinput
  command: gunicorn config.wsgi --bind 0.0.0.0:8000
  network:
    port: 8000
";

const MANIFEST: &str = "\
Django>=5.0
psycopg>=3.1
gunicorn
whitenoise
django-environ
paypal-server-sdk
";

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn good_project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();
    write(root, "apprunner.yaml", DESCRIPTOR);
    write(root, "manage.py", "#!/usr/bin/env python\n");
    write(root, "requirements/base.txt", MANIFEST);
    write(root, "requirements/dev.txt", "-r base.txt\npytest\n");
    write(root, "config/settings.py", "DEBUG = False\n");
    tmp
}

fn run(root: &Path) -> Report {
    let config = Config::default();
    let mut builder = Runner::builder().root(root).config(config.clone());
    for check in preflight_checks(&config) {
        builder = builder.check_box(check);
    }
    builder.build().expect("runner should build").run()
}

fn failed_names(report: &Report) -> Vec<&str> {
    report
        .failed_checks()
        .iter()
        .map(|o| o.name.as_str())
        .collect()
}

// ── Happy path ──

#[test]
fn complete_project_passes() {
    let tmp = good_project();
    let report = run(tmp.path());

    assert!(report.passed(), "{}", report.format_test_report());
    assert_eq!(report.outcomes.len(), 3);
    let (errors, warnings, _) = report.count_by_severity();
    assert_eq!((errors, warnings), (0, 0));
}

#[test]
fn binary_psycopg_passes_with_warning() {
    let tmp = good_project();
    write(
        tmp.path(),
        "requirements/base.txt",
        &MANIFEST.replace("psycopg>=3.1", "psycopg[binary]>=3.1"),
    );

    let report = run(tmp.path());
    assert!(report.passed());
    let manifest = report.outcome("manifest-deps").unwrap();
    assert_eq!(manifest.by_severity(Severity::Warning).len(), 1);
}

// ── Each broken condition flips the result ──

#[test]
fn missing_required_file_fails() {
    for rel in ["manage.py", "requirements/dev.txt", "config/settings.py"] {
        let tmp = good_project();
        fs::remove_file(tmp.path().join(rel)).unwrap();

        let report = run(tmp.path());
        assert_eq!(failed_names(&report), ["required-files"], "removed {rel}");
        let files = report.outcome("required-files").unwrap();
        assert!(files
            .by_severity(Severity::Error)
            .iter()
            .any(|f| f.message == format!("missing: {rel}")));
    }
}

#[test]
fn missing_descriptor_fails_files_and_descriptor_checks() {
    let tmp = good_project();
    fs::remove_file(tmp.path().join("apprunner.yaml")).unwrap();

    let report = run(tmp.path());
    assert_eq!(
        failed_names(&report),
        ["required-files", "descriptor-syntax"]
    );
}

#[test]
fn descriptor_violations_fail() {
    let cases = [
        ("runtime: python311", "runtime: python39"),
        ("pip3 install", "pip install"),
        ("collectstatic", "migrate"),
    ];

    for (from, to) in cases {
        let tmp = good_project();
        write(tmp.path(), "apprunner.yaml", &DESCRIPTOR.replace(from, to));

        let report = run(tmp.path());
        assert_eq!(failed_names(&report), ["descriptor-syntax"], "{from} -> {to}");
        let outcome = report.outcome("descriptor-syntax").unwrap();
        assert_eq!(outcome.by_severity(Severity::Error).len(), 1);
    }
}

#[test]
fn manifest_violations_fail() {
    let cases = [
        MANIFEST.replace("whitenoise\n", ""),
        format!("{MANIFEST}django-debug-toolbar\n"),
        format!("{MANIFEST}paypalrestsdk\n"),
    ];

    for manifest in cases {
        let tmp = good_project();
        write(tmp.path(), "requirements/base.txt", &manifest);

        let report = run(tmp.path());
        assert_eq!(failed_names(&report), ["manifest-deps"]);
    }
}

#[test]
fn every_check_runs_even_when_all_fail() {
    let tmp = TempDir::new().unwrap();
    let report = run(tmp.path());

    assert_eq!(
        failed_names(&report),
        ["required-files", "descriptor-syntax", "manifest-deps"]
    );
    // One line per required path, nothing skipped
    assert_eq!(report.outcome("required-files").unwrap().findings.len(), 5);
}

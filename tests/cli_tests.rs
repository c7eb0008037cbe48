//! Command line behavior of the `company-manager` binary.

use assert_cmd::prelude::*;
use predicates::prelude::PredicateBooleanExt;
use predicates::str;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn company_manager(workdir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_company-manager"));
    cmd.current_dir(workdir)
        .env_remove("COMPANY_MANAGER_ENDPOINT")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn write_config(dir: &TempDir, name: &str, yaml: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, yaml).unwrap();
    path
}

#[test]
fn validate_accepts_a_good_file() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(&tmp, "ok.yaml", "navigation:\n  default_section: ROLES\n");

    company_manager(tmp.path())
        .arg("--config")
        .arg(&path)
        .args(["config", "validate"])
        .assert()
        .success()
        .stderr(str::contains("Configuration OK"));
}

#[test]
fn validate_rejects_unknown_section() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(&tmp, "bad.yaml", "navigation:\n  default_section: finance\n");

    company_manager(tmp.path())
        .arg("--config")
        .arg(&path)
        .args(["config", "validate"])
        .assert()
        .code(1)
        .stderr(str::contains("finance"))
        .stderr(str::contains("Configuration OK").not());
}

#[test]
fn validate_rejects_missing_explicit_file() {
    let tmp = TempDir::new().unwrap();

    company_manager(tmp.path())
        .args(["--config", "typo.yaml", "config", "validate"])
        .assert()
        .code(1)
        .stderr(str::contains("not found"));
}

#[test]
fn tui_refuses_unusable_config_before_drawing() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(&tmp, "bad.yaml", "navigation:\n  default_section: finance\n");

    company_manager(tmp.path())
        .arg("--config")
        .arg(&path)
        .arg("tui")
        .assert()
        .code(1)
        .stderr(str::contains("config error"));
}

#[test]
fn endpoint_from_env_applies_without_subcommand_flag() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(&tmp, "ok.yaml", "navigation:\n  default_section: teams\n");

    company_manager(tmp.path())
        .arg("--config")
        .arg(&path)
        .env("COMPANY_MANAGER_ENDPOINT", "ftp://example.com")
        .args(["config", "validate"])
        .assert()
        .code(1)
        .stderr(str::contains("endpoint"));

    company_manager(tmp.path())
        .arg("--config")
        .arg(&path)
        .args(["--endpoint", "ftp://example.com"])
        .assert()
        .code(1)
        .stderr(str::contains("config error"));
}

#[test]
fn sections_lists_menu_order() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(&tmp, "ok.yaml", "navigation:\n  default_section: people\n");

    company_manager(tmp.path())
        .arg("--config")
        .arg(&path)
        .arg("sections")
        .assert()
        .success()
        .stdout(str::contains("  1  Roles\n  2  Teams\n* 3  People\n"));
}

//! Tests for error handling, exit codes and suggestions.

mod common;

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use common::{abpgen, touch};

const ORDER_ARGS: &[&str] = &[
    "business",
    "Order",
    "--service-folder",
    "Orders",
    "--view-folder",
    "App/Main/views",
    "--yes",
];

#[test]
fn test_missing_web_project_exits_not_found() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "Acme.sln");
    touch(dir.path(), "Acme.Application/Acme.Application.csproj");
    touch(dir.path(), "Acme.WebApi/Acme.WebApi.csproj");

    abpgen(dir.path())
        .args(ORDER_ARGS)
        .assert()
        .code(3)
        .stdout(predicate::str::contains(
            "Cannot find the Web project. Please ensure that you are in the ABP solution.",
        ))
        .stderr(predicate::str::contains("Nothing was generated"))
        .stderr(predicate::str::contains("abpgen check"));

    assert!(!dir.path().join("Acme.Application/Orders").exists());
}

#[test]
fn test_missing_application_project_exits_not_found() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "Acme.Web/Acme.Web.csproj");

    abpgen(dir.path())
        .args(ORDER_ARGS)
        .assert()
        .code(3)
        .stdout(predicate::str::contains(
            "Cannot find the Application project.",
        ));
}

#[test]
fn test_check_without_projects_fails() {
    let dir = TempDir::new().unwrap();
    abpgen(dir.path())
        .arg("check")
        .assert()
        .code(3)
        .stdout(predicate::str::contains("Application project not found"));
}

#[test]
fn test_missing_solution_dir() {
    let dir = TempDir::new().unwrap();
    abpgen(dir.path())
        .args(ORDER_ARGS)
        .args(["--solution", "does-not-exist"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Solution directory not found"))
        .stderr(predicate::str::contains("--solution"));
}

#[test]
fn test_invalid_folder_is_user_error() {
    let dir = TempDir::new().unwrap();
    abpgen(dir.path())
        .args([
            "business",
            "Order",
            "--service-folder",
            r"Orders\..\Secrets",
            "--view-folder",
            "App",
            "--yes",
        ])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_view_kind_rejected_by_parser() {
    let dir = TempDir::new().unwrap();
    abpgen(dir.path())
        .args(ORDER_ARGS)
        .args(["--view", "edit:dialog"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown view kind"));
}

#[test]
fn test_missing_explicit_config_file() {
    let dir = TempDir::new().unwrap();
    abpgen(dir.path())
        .args(["--config", "missing.toml", "config", "show"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_broken_template_override_is_configuration_error() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "Acme.sln");
    touch(dir.path(), "Acme.Application/Acme.Application.csproj");
    touch(dir.path(), "Acme.Web/Acme.Web.csproj");
    touch(dir.path(), "tpl/view.js.j2");
    fs::write(dir.path().join("tpl/view.js.j2"), "{{ no_such_field }}").unwrap();
    fs::write(dir.path().join("abpgen.toml"), "[templates]\ndir = \"tpl\"\n").unwrap();

    abpgen(dir.path())
        .args(ORDER_ARGS)
        .assert()
        .code(4)
        .stdout(predicate::str::contains("Generation failed.").count(1))
        .stderr(predicate::str::contains("Scaffolding failed").not())
        .stderr(predicate::str::contains("Generation failed").not());

    // Files generated before the failure are kept.
    assert!(dir.path().join("Acme.Application/Orders/OrderAppService.cs").is_file());
}

#[test]
fn test_quiet_run_still_reports_generation_failure() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "Acme.sln");
    touch(dir.path(), "Acme.Application/Acme.Application.csproj");
    touch(dir.path(), "Acme.Web/Acme.Web.csproj");
    fs::create_dir_all(dir.path().join("tpl")).unwrap();
    fs::write(dir.path().join("tpl/view.js.j2"), "{{ no_such_field }}").unwrap();
    fs::write(dir.path().join("abpgen.toml"), "[templates]\ndir = \"tpl\"\n").unwrap();

    abpgen(dir.path())
        .arg("--quiet")
        .args(ORDER_ARGS)
        .assert()
        .code(4)
        .stdout(predicate::str::contains("Generation failed").not())
        .stderr(predicate::str::contains("Scaffolding failed"));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("abpgen.toml"), "").unwrap();
    abpgen(dir.path())
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));
}

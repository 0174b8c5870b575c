//! Integration tests for the abpgen binary.

mod common;

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use common::{abpgen, acme_solution, touch};

const ORDER_ARGS: &[&str] = &[
    "business",
    "Order",
    "--service-folder",
    "Orders",
    "--view-folder",
    "App/Main/views/order",
    "--view",
    "index",
    "--view",
    "createModal:popup",
    "--yes",
];

#[test]
fn test_help_flag() {
    let dir = TempDir::new().unwrap();
    abpgen(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("business"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn test_version_flag() {
    let dir = TempDir::new().unwrap();
    abpgen(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_business_command_help() {
    let dir = TempDir::new().unwrap();
    abpgen(dir.path())
        .args(["business", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--service-folder"))
        .stdout(predicate::str::contains("--view-folder"))
        .stdout(predicate::str::contains("NAME:popup"));
}

#[test]
fn test_business_creates_files() {
    let sln = acme_solution();
    abpgen(sln.path())
        .args(ORDER_ARGS)
        .assert()
        .success()
        .stdout(predicate::str::contains("Done!"))
        .stdout(predicate::str::contains("6 file(s) created, 0 already present"));

    let app = sln.path().join("src/Acme.Application/Orders");
    assert!(app.join("Dto").is_dir());
    let service = fs::read_to_string(app.join("OrderAppService.cs")).unwrap();
    assert!(service.contains("namespace Acme.Orders"));
    assert!(service.contains("IOrderAppService"));
    assert!(app.join("IOrderAppService.cs").is_file());

    let views = sln.path().join("src/Acme.Web/App/Main/views/order");
    for file in ["index.cshtml", "index.js", "createModal.cshtml", "createModal.js"] {
        assert!(views.join(file).is_file(), "missing {file}");
    }
}

#[test]
fn test_business_rerun_keeps_edits() {
    let sln = acme_solution();
    abpgen(sln.path()).args(ORDER_ARGS).assert().success();

    let service = sln
        .path()
        .join("src/Acme.Application/Orders/OrderAppService.cs");
    fs::write(&service, "// edited").unwrap();

    abpgen(sln.path())
        .args(ORDER_ARGS)
        .assert()
        .success()
        .stdout(predicate::str::contains("0 file(s) created, 6 already present"));
    assert_eq!(fs::read_to_string(service).unwrap(), "// edited");
}

#[test]
fn test_business_defaults_from_business_name() {
    let sln = acme_solution();
    abpgen(sln.path())
        .args([
            "business",
            "Invoice",
            "-s",
            r"Billing\Invoices",
            "-w",
            r"App\Main\views\invoice",
            "-y",
        ])
        .assert()
        .success();

    let app = sln.path().join("src/Acme.Application/Billing/Invoices");
    assert!(app.join("InvoiceAppService.cs").is_file());
    assert!(app.join("IInvoiceAppService.cs").is_file());
    let views = sln.path().join("src/Acme.Web/App/Main/views/invoice");
    assert!(views.join("Invoice.cshtml").is_file());
    assert!(views.join("Invoice.js").is_file());
}

#[test]
fn test_business_with_solution_flag() {
    let sln = acme_solution();
    let elsewhere = TempDir::new().unwrap();
    abpgen(elsewhere.path())
        .args(ORDER_ARGS)
        .arg("--solution")
        .arg(sln.path())
        .assert()
        .success();
    assert!(
        sln.path()
            .join("src/Acme.Application/Orders/OrderAppService.cs")
            .is_file()
    );
}

#[test]
fn test_business_json_report() {
    let sln = acme_solution();
    let output = abpgen(sln.path())
        .args(["--output-format", "json"])
        .args(ORDER_ARGS)
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["steps"], 6);
    assert_eq!(report["total_steps"], 6);
    let files = report["files"].as_array().unwrap();
    assert_eq!(files.len(), 6);
    assert!(files.iter().all(|f| f["outcome"] == "created"));
}

#[test]
fn test_legacy_package_targets_views_folder() {
    let sln = acme_solution();
    fs::create_dir_all(sln.path().join("packages/Abp.1.0.1.5")).unwrap();

    abpgen(sln.path()).args(ORDER_ARGS).assert().success();

    let views = sln.path().join("src/Acme.Web/App/Main/Views/order");
    assert!(views.join("index.cshtml").is_file());
}

#[test]
fn test_template_override_from_config() {
    let sln = acme_solution();
    touch(sln.path(), "tpl/service.cs.j2");
    fs::write(
        sln.path().join("tpl/service.cs.j2"),
        "// custom {{ service_name }}\n",
    )
    .unwrap();
    fs::write(
        sln.path().join("abpgen.toml"),
        "[templates]\ndir = \"tpl\"\n",
    )
    .unwrap();

    abpgen(sln.path()).args(ORDER_ARGS).assert().success();

    let service = fs::read_to_string(
        sln.path()
            .join("src/Acme.Application/Orders/OrderAppService.cs"),
    )
    .unwrap();
    assert_eq!(service, "// custom OrderAppService\n");
}

#[test]
fn test_check_reports_projects() {
    let sln = acme_solution();
    fs::create_dir_all(sln.path().join("packages/Abp.1.0.1.5")).unwrap();

    abpgen(sln.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Application project: Acme.Application"))
        .stdout(predicate::str::contains("Web project: Acme.Web"))
        .stdout(predicate::str::contains("Acme"))
        .stdout(predicate::str::contains("Legacy Abp package"));
}

#[test]
fn test_check_json() {
    let sln = acme_solution();
    let output = abpgen(sln.path())
        .args(["--output-format", "json", "check"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let findings: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(findings["solution_name"], "Acme");
    assert_eq!(findings["application_project"]["name"], "Acme.Application");
    assert_eq!(findings["web_project"]["name"], "Acme.Web");
    assert_eq!(findings["legacy_views_casing"], false);
    assert_eq!(findings["ready"], true);
}

#[test]
fn test_config_show_defaults() {
    let dir = TempDir::new().unwrap();
    abpgen(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("progress = true"));
}

#[test]
fn test_config_env_override() {
    let dir = TempDir::new().unwrap();
    abpgen(dir.path())
        .env("ABPGEN__OUTPUT__PROGRESS", "false")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("progress = false"));
}

#[test]
fn test_config_path_prefers_local_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("abpgen.toml"), "").unwrap();
    abpgen(dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("abpgen.toml"))
        .stdout(predicate::str::contains("not created yet").not());
}

#[test]
fn test_init_writes_local_config() {
    let dir = TempDir::new().unwrap();
    abpgen(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"));

    let written = fs::read_to_string(dir.path().join("abpgen.toml")).unwrap();
    assert!(written.contains("[output]"));

    abpgen(dir.path()).args(["init", "--force"]).assert().success();
}

#[test]
fn test_completions_bash() {
    let dir = TempDir::new().unwrap();
    abpgen(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("abpgen"));
}

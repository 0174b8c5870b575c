//! Helpers shared by the CLI binary tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo;
use tempfile::TempDir;

/// `abpgen` running in `cwd` with configuration isolated from the host.
pub fn abpgen(cwd: &Path) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("abpgen");
    cmd.current_dir(cwd)
        .env("HOME", cwd)
        .env("XDG_CONFIG_HOME", cwd.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

pub fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "").unwrap();
}

/// `Acme.sln` with application and web projects under `src/`.
pub fn acme_solution() -> TempDir {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "Acme.sln");
    touch(dir.path(), "src/Acme.Application/Acme.Application.csproj");
    touch(dir.path(), "src/Acme.Web/Acme.Web.csproj");
    dir
}

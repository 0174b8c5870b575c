//! Command handlers, one module per subcommand.

pub mod business;
pub mod check;
pub mod completions;
pub mod config;
pub mod init;

use std::path::{Path, PathBuf};

use tracing::debug;

use abpgen_adapters::{PackagesDirInspector, SolutionScanner, dependency::PACKAGES_DIR};

use crate::{config::AppConfig, error::CliResult};

/// Solution directory: the flag, then `solution.dir`, then the CWD.
pub(crate) fn solution_dir(flag: Option<&PathBuf>, config: &AppConfig) -> CliResult<PathBuf> {
    match flag.or(config.solution.dir.as_ref()) {
        Some(dir) => Ok(dir.clone()),
        None => Ok(std::env::current_dir()?),
    }
}

/// Scan `dir`, applying the configured application name.
pub(crate) fn scan_solution(dir: &Path, config: &AppConfig) -> CliResult<SolutionScanner> {
    let mut scanner = SolutionScanner::scan(dir)?;
    if let Some(name) = &config.solution.app_name {
        scanner = scanner.with_app_name(name.clone());
    }
    debug!(
        root = %scanner.root().display(),
        projects = scanner.projects().len(),
        "solution scanned"
    );
    Ok(scanner)
}

/// The NuGet packages folder of the scanned solution.
pub(crate) fn packages_inspector(scanner: &SolutionScanner) -> PackagesDirInspector {
    PackagesDirInspector::at(scanner.root().join(PACKAGES_DIR))
}

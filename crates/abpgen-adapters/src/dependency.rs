//! Installed-package inspection.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::debug;

use abpgen_core::{
    application::{
        ApplicationError,
        ports::{DependencyInspector, Project},
    },
    error::AbpgenResult,
};

/// Name of the NuGet packages folder of a classic solution.
pub const PACKAGES_DIR: &str = "packages";

/// Lists the directories of the solution's `packages` folder.
///
/// Each restored package lives in a `<Id>.<Version>` directory, e.g.
/// `Abp.1.0.1.5`. By default the folder is looked up next to the web
/// project's directory.
#[derive(Debug, Clone, Default)]
pub struct PackagesDirInspector {
    packages_dir: Option<PathBuf>,
}

impl PackagesDirInspector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Always read `dir` regardless of the project being inspected.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self {
            packages_dir: Some(dir.into()),
        }
    }

    fn packages_dir_for(&self, web_project: &Project) -> Option<PathBuf> {
        match &self.packages_dir {
            Some(dir) => Some(dir.clone()),
            None => web_project
                .root
                .location()
                .parent()
                .map(|solution| solution.join(PACKAGES_DIR)),
        }
    }
}

impl DependencyInspector for PackagesDirInspector {
    fn installed_package_names(&self, web_project: &Project) -> AbpgenResult<Vec<String>> {
        let Some(dir) = self.packages_dir_for(web_project) else {
            return Ok(Vec::new());
        };
        list_directory_names(&dir)
    }
}

fn list_directory_names(dir: &Path) -> AbpgenResult<Vec<String>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(dir = %dir.display(), "no packages folder");
            return Ok(Vec::new());
        }
        Err(e) => {
            return Err(ApplicationError::io(dir, format!("Failed to list packages: {e}")).into());
        }
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry =
            entry.map_err(|e| ApplicationError::io(dir, format!("Failed to list packages: {e}")))?;
        if !entry.path().is_dir() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }
    names.sort();

    debug!(dir = %dir.display(), packages = names.len(), "packages listed");
    Ok(names)
}

/// Fixed package list.
#[derive(Debug, Clone, Default)]
pub struct StaticPackages(Vec<String>);

impl StaticPackages {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }
}

impl DependencyInspector for StaticPackages {
    fn installed_package_names(&self, _web_project: &Project) -> AbpgenResult<Vec<String>> {
        Ok(self.0.clone())
    }
}

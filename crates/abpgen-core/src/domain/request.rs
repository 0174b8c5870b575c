//! The input of one scaffold run.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::{error::DomainError, folder_path::FolderPath};

/// One view to generate: a markup file and its companion script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewFileSpec {
    /// File name without extension.
    pub file_name: String,
    /// Whether the view is a modal popup rather than a routed page.
    pub is_popup: bool,
}

impl ViewFileSpec {
    pub fn new(file_name: impl Into<String>, is_popup: bool) -> Self {
        Self {
            file_name: file_name.into(),
            is_popup,
        }
    }

    /// A routed (non-popup) view.
    pub fn page(file_name: impl Into<String>) -> Self {
        Self::new(file_name, false)
    }

    /// A modal popup view.
    pub fn popup(file_name: impl Into<String>) -> Self {
        Self::new(file_name, true)
    }
}

/// Immutable description of a business area to scaffold.
///
/// Construct through [`ScaffoldRequest::builder`]; `build()` enforces the
/// request invariants so a value of this type is always valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    business_name: String,
    service_name: String,
    service_interface_name: String,
    service_folder: FolderPath,
    view_folder: FolderPath,
    view_files: Vec<ViewFileSpec>,
}

impl ScaffoldRequest {
    pub fn builder() -> ScaffoldRequestBuilder {
        ScaffoldRequestBuilder::default()
    }

    pub fn business_name(&self) -> &str {
        &self.business_name
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn service_interface_name(&self) -> &str {
        &self.service_interface_name
    }

    pub fn service_folder(&self) -> &FolderPath {
        &self.service_folder
    }

    pub fn view_folder(&self) -> &FolderPath {
        &self.view_folder
    }

    pub fn view_files(&self) -> &[ViewFileSpec] {
        &self.view_files
    }

    /// Re-check every invariant.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.business_name.trim().is_empty() {
            return Err(DomainError::InvalidRequest(
                "business name cannot be empty".into(),
            ));
        }
        validate_type_name("service name", &self.service_name)?;
        validate_type_name("service interface name", &self.service_interface_name)?;

        if self.service_name == self.service_interface_name {
            return Err(DomainError::InvalidRequest(format!(
                "service name and interface name must differ (both are '{}')",
                self.service_name
            )));
        }

        let mut seen = HashSet::new();
        for view in &self.view_files {
            validate_file_name(&view.file_name)?;
            if !seen.insert(view.file_name.as_str()) {
                return Err(DomainError::InvalidRequest(format!(
                    "duplicate view file name '{}'",
                    view.file_name
                )));
            }
        }

        Ok(())
    }
}

fn validate_type_name(what: &str, name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidRequest(format!("{what} cannot be empty")));
    }
    validate_file_name(name)
}

fn validate_file_name(name: &str) -> Result<(), DomainError> {
    if name.trim().is_empty() {
        return Err(DomainError::InvalidRequest(
            "view file name cannot be empty".into(),
        ));
    }
    if name.contains(['\\', '/']) {
        return Err(DomainError::InvalidRequest(format!(
            "'{name}' must not contain path separators"
        )));
    }
    Ok(())
}

/// Builder for [`ScaffoldRequest`].
#[derive(Debug, Default, Clone)]
pub struct ScaffoldRequestBuilder {
    business_name: Option<String>,
    service_name: Option<String>,
    service_interface_name: Option<String>,
    service_folder: Option<String>,
    view_folder: Option<String>,
    view_files: Vec<ViewFileSpec>,
}

impl ScaffoldRequestBuilder {
    pub fn business_name(mut self, name: impl Into<String>) -> Self {
        self.business_name = Some(name.into());
        self
    }

    pub fn service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = Some(name.into());
        self
    }

    pub fn service_interface_name(mut self, name: impl Into<String>) -> Self {
        self.service_interface_name = Some(name.into());
        self
    }

    pub fn service_folder(mut self, path: impl Into<String>) -> Self {
        self.service_folder = Some(path.into());
        self
    }

    pub fn view_folder(mut self, path: impl Into<String>) -> Self {
        self.view_folder = Some(path.into());
        self
    }

    pub fn add_view(mut self, view: ViewFileSpec) -> Self {
        self.view_files.push(view);
        self
    }

    pub fn view_files(mut self, views: impl IntoIterator<Item = ViewFileSpec>) -> Self {
        self.view_files.extend(views);
        self
    }

    pub fn build(self) -> Result<ScaffoldRequest, DomainError> {
        let request = ScaffoldRequest {
            business_name: self.business_name.ok_or(DomainError::MissingRequiredField {
                field: "business_name",
            })?,
            service_name: self.service_name.ok_or(DomainError::MissingRequiredField {
                field: "service_name",
            })?,
            service_interface_name: self.service_interface_name.ok_or(
                DomainError::MissingRequiredField {
                    field: "service_interface_name",
                },
            )?,
            service_folder: FolderPath::parse(self.service_folder.ok_or(
                DomainError::MissingRequiredField {
                    field: "service_folder",
                },
            )?)?,
            view_folder: FolderPath::parse(self.view_folder.ok_or(
                DomainError::MissingRequiredField {
                    field: "view_folder",
                },
            )?)?,
            view_files: self.view_files,
        };

        request.validate()?;
        Ok(request)
    }
}

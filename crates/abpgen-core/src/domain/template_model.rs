//! Typed models bound to the four generated-file templates.
//!
//! Models are plain values built fresh for every file and dropped after
//! rendering. They serialise with `serde` so any template engine with
//! structured parameters can consume them.

use std::fmt;

use serde::Serialize;

use crate::domain::request::ViewFileSpec;

/// Identifies one of the built-in templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    ServiceFile,
    ServiceInterfaceFile,
    CshtmlView,
    JsView,
}

impl TemplateId {
    pub const ALL: [TemplateId; 4] = [
        Self::ServiceFile,
        Self::ServiceInterfaceFile,
        Self::CshtmlView,
        Self::JsView,
    ];

    /// Name of the template file (also the override file name in a
    /// user-supplied template directory).
    pub const fn template_name(&self) -> &'static str {
        match self {
            Self::ServiceFile => "service.cs.j2",
            Self::ServiceInterfaceFile => "service_interface.cs.j2",
            Self::CshtmlView => "view.cshtml.j2",
            Self::JsView => "view.js.j2",
        }
    }

    /// Extension (with leading dot) of the generated file.
    pub const fn file_extension(&self) -> &'static str {
        match self {
            Self::ServiceFile | Self::ServiceInterfaceFile => ".cs",
            Self::CshtmlView => ".cshtml",
            Self::JsView => ".js",
        }
    }

    /// The two templates generated for every view.
    pub const VIEW_KINDS: [TemplateId; 2] = [Self::CshtmlView, Self::JsView];
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceFileModel {
    pub app_name: String,
    pub namespace: String,
    pub interface_name: String,
    pub service_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceInterfaceFileModel {
    pub namespace: String,
    pub interface_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewFileModel {
    pub business_name: String,
    pub namespace: String,
    pub file_name: String,
    pub is_popup: bool,
    /// The view folder as requested, before any casing adjustment.
    pub view_folder: String,
    /// Every view of the request, so a page can link to its popups.
    pub view_files: Vec<ViewFileSpec>,
}

/// A model for any of the templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TemplateModel {
    Service(ServiceFileModel),
    ServiceInterface(ServiceInterfaceFileModel),
    View(ViewFileModel),
}

impl TemplateModel {
    /// Whether this model can be bound to the given template.
    pub fn binds_to(&self, id: TemplateId) -> bool {
        matches!(
            (self, id),
            (Self::Service(_), TemplateId::ServiceFile)
                | (Self::ServiceInterface(_), TemplateId::ServiceInterfaceFile)
                | (Self::View(_), TemplateId::CshtmlView | TemplateId::JsView)
        )
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Service(_) => "service",
            Self::ServiceInterface(_) => "service interface",
            Self::View(_) => "view",
        }
    }
}

impl From<ServiceFileModel> for TemplateModel {
    fn from(model: ServiceFileModel) -> Self {
        Self::Service(model)
    }
}

impl From<ServiceInterfaceFileModel> for TemplateModel {
    fn from(model: ServiceInterfaceFileModel) -> Self {
        Self::ServiceInterface(model)
    }
}

impl From<ViewFileModel> for TemplateModel {
    fn from(model: ViewFileModel) -> Self {
        Self::View(model)
    }
}

//! Namespace derivation from folder paths.
//!
//! Two flavours exist because the generated code lives in two worlds:
//!
//! - **View namespaces** feed client-side script modules. Only the first
//!   character of each segment is lowered: `App\Main\Views` → `app.Main.Views`.
//! - **Service namespaces** are CLR namespaces rooted at the solution name:
//!   `Sales\Orders` in `Acme` → `Acme.Sales.Orders`.

use crate::domain::{error::DomainError, folder_path::FolderPath};

/// Pure string functions that turn folder paths into dotted namespaces.
pub struct NamespaceBuilder;

impl NamespaceBuilder {
    /// View namespace for a delimited path string.
    pub fn view(path: &str) -> Result<String, DomainError> {
        FolderPath::parse(path).map(|p| Self::view_for(&p))
    }

    /// View namespace: the first character of every segment lower-cased,
    /// segments joined with `.`.
    pub fn view_for(path: &FolderPath) -> String {
        path.segments()
            .iter()
            .map(|segment| lower_first_char(segment))
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Service namespace for a delimited path string.
    pub fn service(app_name: &str, folder: &str) -> Result<String, DomainError> {
        FolderPath::parse(folder).map(|p| Self::service_for(app_name, &p))
    }

    /// Service namespace: `{app_name}.` followed by the folder path with every
    /// separator replaced by `.`.
    pub fn service_for(app_name: &str, folder: &FolderPath) -> String {
        format!("{}.{}", app_name, folder.segments().join("."))
    }
}

fn lower_first_char(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_namespace_lowers_only_first_char() {
        assert_eq!(
            NamespaceBuilder::view(r"App\Main\Views").unwrap(),
            "app.Main.Views"
        );
    }

    #[test]
    fn view_namespace_leaves_rest_of_segment() {
        assert_eq!(
            NamespaceBuilder::view(r"App\Main\views\OrderAdmin").unwrap(),
            "app.main.views.orderAdmin"
        );
    }

    #[test]
    fn view_namespace_single_segment() {
        assert_eq!(NamespaceBuilder::view("Orders").unwrap(), "orders");
    }

    #[test]
    fn service_namespace_prefixes_app_name() {
        assert_eq!(
            NamespaceBuilder::service("Acme", r"Sales\Orders").unwrap(),
            "Acme.Sales.Orders"
        );
    }

    #[test]
    fn service_namespace_accepts_forward_slash() {
        assert_eq!(
            NamespaceBuilder::service("Acme", "Sales/Orders").unwrap(),
            "Acme.Sales.Orders"
        );
    }

    #[test]
    fn empty_input_is_invalid_path() {
        assert!(matches!(
            NamespaceBuilder::view(""),
            Err(DomainError::InvalidPath { .. })
        ));
        assert!(matches!(
            NamespaceBuilder::service("Acme", ""),
            Err(DomainError::InvalidPath { .. })
        ));
    }

    #[test]
    fn lower_first_char_handles_non_ascii() {
        assert_eq!(lower_first_char("Éclair"), "éclair");
        assert_eq!(lower_first_char(""), "");
    }
}

//! Legacy-compatibility rule for the casing of the web project's views folder.
//!
//! ABP `1.0.1.5` shipped its SPA views under `App\Main\Views`, every other
//! release uses `App\Main\views`. When that exact package version is installed
//! in the solution the requested view folder is rewritten to the capitalised
//! form so the generated files land next to the existing ones.
//!
//! This is a single historical special case, not a version-compatibility
//! mechanism. Do not add further versions here.

use tracing::debug;

/// Package-name marker identifying ABP framework packages.
pub const ABP_PACKAGE_MARKER: &str = "Abp";

/// The one ABP release that used a capitalised views folder.
pub const LEGACY_ABP_VERSION: &str = "1.0.1.5";

const LOWER_VIEWS: &str = "views";
const UPPER_VIEWS: &str = "Views";

/// Adjusts view-folder casing based on the installed ABP package version.
pub struct VersionAwarePathRule;

impl VersionAwarePathRule {
    /// Return `path` with its first `views` (case-insensitive) rewritten to
    /// `Views` when a legacy ABP package is among `installed`; otherwise
    /// return it unchanged.
    pub fn adjust<S: AsRef<str>>(path: &str, installed: &[S]) -> String {
        match installed
            .iter()
            .map(AsRef::as_ref)
            .find(|name| is_legacy_abp_package(name))
        {
            Some(package) => {
                debug!(package, "legacy ABP package detected, capitalising views folder");
                capitalise_views(path)
            }
            None => path.to_string(),
        }
    }

    /// Whether any of the installed package names is the legacy ABP release.
    pub fn legacy_detected<S: AsRef<str>>(installed: &[S]) -> bool {
        installed
            .iter()
            .any(|name| is_legacy_abp_package(name.as_ref()))
    }
}

/// `Abp.1.0.1.5` → true. The version is everything after the first `.` that is
/// directly followed by a digit.
fn is_legacy_abp_package(name: &str) -> bool {
    name.contains(ABP_PACKAGE_MARKER) && version_suffix(name) == Some(LEGACY_ABP_VERSION)
}

fn version_suffix(name: &str) -> Option<&str> {
    name.char_indices()
        .find(|&(i, c)| {
            c == '.'
                && name[i + 1..]
                    .chars()
                    .next()
                    .is_some_and(|next| next.is_ascii_digit())
        })
        .map(|(i, _)| &name[i + 1..])
}

fn capitalise_views(path: &str) -> String {
    // ASCII lowering keeps byte offsets aligned with the original string.
    match path.to_ascii_lowercase().find(LOWER_VIEWS) {
        Some(start) => {
            let end = start + LOWER_VIEWS.len();
            format!("{}{}{}", &path[..start], UPPER_VIEWS, &path[end..])
        }
        None => path.to_string(),
    }
}

//! Delimited folder paths as typed into a scaffold request.
//!
//! The canonical separator is `\` (the host solutions are Windows projects),
//! but `/` is accepted as well so that the same request works from a Unix
//! shell. The original text is preserved for display and template binding.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::domain::error::DomainError;

/// Canonical separator between folder segments.
pub const SEPARATOR: char = '\\';

fn is_separator(c: char) -> bool {
    c == SEPARATOR || c == '/'
}

/// A non-empty, validated sequence of folder names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FolderPath {
    raw: String,
    segments: Vec<String>,
}

impl FolderPath {
    /// Parse a delimited path such as `Sales\Orders`.
    ///
    /// Fails with [`DomainError::InvalidPath`] when the input is blank or any
    /// segment is blank, padded with whitespace, `.` or `..`.
    pub fn parse(path: impl Into<String>) -> Result<Self, DomainError> {
        let raw = path.into();

        if raw.trim().is_empty() {
            return Err(DomainError::invalid_path(raw, "path is empty"));
        }

        let mut segments = Vec::new();
        for segment in raw.split(is_separator) {
            if segment.trim().is_empty() {
                return Err(DomainError::invalid_path(&raw, "path contains an empty segment"));
            }
            if segment.trim() != segment {
                return Err(DomainError::invalid_path(
                    &raw,
                    format!("segment '{segment}' has leading or trailing whitespace"),
                ));
            }
            if segment == "." || segment == ".." {
                return Err(DomainError::invalid_path(
                    &raw,
                    format!("relative segment '{segment}' is not allowed"),
                ));
            }
            segments.push(segment.to_string());
        }

        Ok(Self { raw, segments })
    }

    /// Folder names, outermost first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The path exactly as it was supplied.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for FolderPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for FolderPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl TryFrom<&str> for FolderPath {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

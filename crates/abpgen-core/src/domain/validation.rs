use crate::domain::{error::DomainError, request::ScaffoldRequest};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across callers.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_request(request: &ScaffoldRequest) -> Result<(), DomainError> {
        request.validate()
    }

    /// A solution name must be usable as the root of a CLR namespace.
    pub fn validate_app_name(app_name: &str) -> Result<(), DomainError> {
        if app_name.trim().is_empty() {
            return Err(DomainError::InvalidRequest(
                "application name cannot be empty".into(),
            ));
        }
        if app_name.contains(char::is_whitespace) {
            return Err(DomainError::InvalidRequest(format!(
                "application name '{app_name}' must not contain whitespace"
            )));
        }
        Ok(())
    }
}

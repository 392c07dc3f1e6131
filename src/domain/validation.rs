use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("project name cannot be empty")]
    EmptyName,
    #[error("project name '{0}' must not contain path separators")]
    InvalidName(String),
}

/// Trims the raw input and checks it can be used as a project name.
/// `"."` and `"./"` are accepted and mean "the current directory".
pub fn validate_project_name(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if name == "." || name == "./" {
        return Ok(name.to_string());
    }
    if name == ".." || name.contains('/') || name.contains('\\') {
        return Err(ValidationError::InvalidName(name.to_string()));
    }
    Ok(name.to_string())
}

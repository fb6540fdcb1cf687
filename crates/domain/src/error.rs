//! Domain error types.

use thiserror::Error;

/// Errors raised when constructing a template.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Template name must not be empty")]
    EmptyName,

    #[error("Alias {0:?} contains no usable characters")]
    UnusableAlias(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TemplateError::EmptyName.to_string(),
            "Template name must not be empty"
        );
        assert_eq!(
            TemplateError::UnusableAlias("###".to_string()).to_string(),
            "Alias \"###\" contains no usable characters"
        );
    }
}

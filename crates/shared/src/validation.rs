//! Common validation utilities.

use validator::ValidationError;

use crate::alias::to_safe_alias;

/// Validates that an alias contains at least one usable character after
/// sanitization.
pub fn validate_alias(alias: &str) -> Result<(), ValidationError> {
    if to_safe_alias(alias).is_empty() {
        let mut err = ValidationError::new("alias_unusable");
        err.message = Some("Alias must contain at least one letter".into());
        Err(err)
    } else {
        Ok(())
    }
}

/// Validates that a template path is non-empty and free of `..` traversal
/// segments.
pub fn validate_template_path(path: &str) -> Result<(), ValidationError> {
    if path.trim().is_empty() {
        let mut err = ValidationError::new("path_empty");
        err.message = Some("Path must not be empty".into());
        return Err(err);
    }

    let normalized = path.replace('\\', "/");
    if normalized.split('/').any(|segment| segment == "..") {
        let mut err = ValidationError::new("path_traversal");
        err.message = Some("Path must not contain traversal segments".into());
        return Err(err);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_alias() {
        assert!(validate_alias("homePage").is_ok());
        assert!(validate_alias("Home Page").is_ok());
        assert!(validate_alias("").is_err());
        assert!(validate_alias("###").is_err());
        assert!(validate_alias("1234").is_err());
    }

    #[test]
    fn test_validate_alias_error_message() {
        let err = validate_alias("###").unwrap_err();
        assert_eq!(
            err.message.unwrap().to_string(),
            "Alias must contain at least one letter"
        );
    }

    #[test]
    fn test_validate_template_path() {
        assert!(validate_template_path("/views/home.cshtml").is_ok());
        assert!(validate_template_path("").is_err());
        assert!(validate_template_path("   ").is_err());
    }

    #[test]
    fn test_validate_template_path_rejects_traversal() {
        assert!(validate_template_path("/views/../home.cshtml").is_err());
        assert!(validate_template_path("\\views\\..\\home.cshtml").is_err());
    }

    #[test]
    fn test_validate_template_path_error_messages() {
        let err = validate_template_path("").unwrap_err();
        assert_eq!(err.message.unwrap().to_string(), "Path must not be empty");

        let err = validate_template_path("/views/../x").unwrap_err();
        assert_eq!(
            err.message.unwrap().to_string(),
            "Path must not contain traversal segments"
        );
    }
}

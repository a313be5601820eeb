// ABOUTME: Input validation shared by the domain packages
// ABOUTME: Text normalization rules applied before any write reaches storage

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("Invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Trim a required text field, rejecting blank and oversized values
pub fn require_text(field: &'static str, value: &str, max: usize) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required(field));
    }
    if trimmed.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(trimmed.to_string())
}

/// Trim an optional text field; blank values become `None`
pub fn normalize_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_require_text_trims() {
        assert_eq!(require_text("title", "  Steel beams ", 200).unwrap(), "Steel beams");
    }

    #[test]
    fn test_require_text_rejects_blank() {
        assert_eq!(
            require_text("title", "   ", 200),
            Err(ValidationError::Required("title"))
        );
    }

    #[test]
    fn test_require_text_rejects_oversized() {
        let long = "x".repeat(11);
        assert_eq!(
            require_text("title", &long, 10),
            Err(ValidationError::TooLong { field: "title", max: 10 })
        );
    }

    #[test]
    fn test_normalize_optional() {
        assert_eq!(normalize_optional(Some("  ")), None);
        assert_eq!(normalize_optional(None), None);
        assert_eq!(normalize_optional(Some(" Acme ")), Some("Acme".to_string()));
    }
}

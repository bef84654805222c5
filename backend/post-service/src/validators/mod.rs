/// Input validation for post endpoints
use crate::error::AppError;

/// User-facing message returned when post content is missing or blank
pub const EMPTY_CONTENT_MESSAGE: &str = "投稿の中身が空なので入力してください";

/// Validates post content
/// Requirements:
/// - Must be present in the request body
/// - Must be non-empty after trimming surrounding whitespace
///
/// Returns the trimmed content on success.
pub fn validate_content(content: Option<&str>) -> Result<&str, AppError> {
    let trimmed = content.map(str::trim).unwrap_or("");

    if trimmed.is_empty() {
        return Err(AppError::Validation(EMPTY_CONTENT_MESSAGE.to_string()));
    }

    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_content_valid() {
        assert_eq!(validate_content(Some("hello")).unwrap(), "hello");
    }

    #[test]
    fn test_validate_content_trims_whitespace() {
        assert_eq!(validate_content(Some("  hello  ")).unwrap(), "hello");
        assert_eq!(validate_content(Some("\thello\n")).unwrap(), "hello");
    }

    #[test]
    fn test_validate_content_empty() {
        assert!(validate_content(Some("")).is_err());
    }

    #[test]
    fn test_validate_content_whitespace_only() {
        assert!(validate_content(Some("   ")).is_err());
        assert!(validate_content(Some(" \t\n ")).is_err());
    }

    #[test]
    fn test_validate_content_missing() {
        assert!(validate_content(None).is_err());
    }

    #[test]
    fn test_validate_content_error_message() {
        let err = validate_content(Some("  ")).unwrap_err();
        match err {
            AppError::Validation(msg) => assert_eq!(msg, EMPTY_CONTENT_MESSAGE),
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}

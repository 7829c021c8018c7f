//! Validation for new prompt submissions.

use crate::category::validate_category;

/// Validate the user-supplied fields of a prompt submission.
///
/// Title and prompt text must be non-empty after trimming; the category must
/// be one of the fixed vocabulary. Returns the first failure as a
/// human-readable message.
pub fn validate_submission(title: &str, prompt_text: &str, category: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Title must not be empty".to_string());
    }
    if prompt_text.trim().is_empty() {
        return Err("Prompt text must not be empty".to_string());
    }
    validate_category(category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::CATEGORY_CODING;

    #[test]
    fn test_valid_submission_passes() {
        assert!(validate_submission("Refactor helper", "Rewrite this function", CATEGORY_CODING).is_ok());
    }

    #[test]
    fn test_empty_title_rejected() {
        let result = validate_submission("", "Some text", CATEGORY_CODING);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Title"));
    }

    #[test]
    fn test_whitespace_title_rejected() {
        assert!(validate_submission("   ", "Some text", CATEGORY_CODING).is_err());
    }

    #[test]
    fn test_empty_prompt_text_rejected() {
        let result = validate_submission("A title", "", CATEGORY_CODING);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Prompt text"));
    }

    #[test]
    fn test_bad_category_rejected() {
        let result = validate_submission("A title", "Some text", "Gardening");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid category"));
    }

    #[test]
    fn test_title_checked_before_text() {
        // Both empty: the title failure wins.
        let msg = validate_submission("", "", CATEGORY_CODING).unwrap_err();
        assert!(msg.contains("Title"));
    }
}

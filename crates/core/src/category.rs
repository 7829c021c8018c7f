//! Prompt category vocabulary and validation.
//!
//! Categories are fixed display strings, stored verbatim in
//! `prompts.category` and constrained there by a CHECK clause that must
//! match this list.

pub const CATEGORY_GENERAL: &str = "General";
pub const CATEGORY_CODING: &str = "Coding";
pub const CATEGORY_CREATIVE_WRITING: &str = "Creative Writing";
pub const CATEGORY_MARKETING: &str = "Marketing";
pub const CATEGORY_EDUCATION: &str = "Education";

/// All valid category values, in display order.
pub const VALID_CATEGORIES: &[&str] = &[
    CATEGORY_GENERAL,
    CATEGORY_CODING,
    CATEGORY_CREATIVE_WRITING,
    CATEGORY_MARKETING,
    CATEGORY_EDUCATION,
];

/// Validate that a category string is one of the accepted values.
pub fn validate_category(category: &str) -> Result<(), String> {
    if VALID_CATEGORIES.contains(&category) {
        Ok(())
    } else {
        Err(format!(
            "Invalid category '{category}'. Must be one of: {}",
            VALID_CATEGORIES.join(", ")
        ))
    }
}

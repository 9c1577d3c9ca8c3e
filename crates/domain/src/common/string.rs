//! String conversion utilities for form input.

/// True when the value is empty or only whitespace.
///
/// # Examples
///
/// ```
/// use medidesk_domain::common::is_blank;
///
/// assert!(is_blank("   "));
/// assert!(!is_blank(" a "));
/// ```
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Trims the value, returning `None` when nothing is left.
///
/// Optional form fields (description, notes, instructions) are stored as
/// `None` rather than as empty strings.
///
/// # Examples
///
/// ```
/// use medidesk_domain::common::none_if_blank;
///
/// assert_eq!(none_if_blank("  Take with food "), Some("Take with food".to_string()));
/// assert_eq!(none_if_blank("\t"), None);
/// ```
pub fn none_if_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

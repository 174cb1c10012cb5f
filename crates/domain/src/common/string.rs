//! String normalization utilities.

/// Trims `value` and returns `None` when nothing is left.
///
/// # Examples
///
/// ```
/// use restolist_domain::common::none_if_blank;
///
/// assert_eq!(none_if_blank("  Cafe A "), Some("Cafe A"));
/// assert_eq!(none_if_blank("   "), None);
/// assert_eq!(none_if_blank(""), None);
/// ```
pub fn none_if_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Case-insensitive substring test. `needle` is expected to be lowercase already.
pub fn contains_lowercase(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex pattern to detect distance-at-time expressions
    /// Matches: number (optional decimal) + unit letters + "@" + clock time
    /// Examples: "800m@4:37", "1km @ 5:00", "26.2 miles @ 3:59:59"
    static ref EXPRESSION_PATTERN: Regex = Regex::new(
        r"^\d*\.?\d+\s*[a-zA-Z]+\s*@\s*\d+:\d{1,2}(:\d{1,2})?$"
    ).unwrap();
}

/// Check if a string has the general shape of a pace expression
/// Used for diagnostics only; the real grammar lives in the parsers
pub fn looks_like_pace_expression(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return false;
    }

    EXPRESSION_PATTERN.is_match(trimmed)
}

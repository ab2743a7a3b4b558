//! Logging helpers shared by channel adapters

/// Maximum length of message text written to logs
pub const MAX_LOG_TEXT_LENGTH: usize = 50;

/// Patterns that mark text as unsafe to log
pub const SENSITIVE_PATTERNS: &[&str] = &[
    "password",
    "secret",
    "token",
    "api_key",
    "bearer",
    "authorization",
    "-----begin",
];

/// Mask text before it reaches a log line
///
/// Sensitive content is redacted and long text is truncated on a char boundary.
///
/// # Examples
/// ```
/// use conduit_channels::util::mask_for_logging;
///
/// assert!(mask_for_logging("bot token is 123:abc").contains("REDACTED"));
/// assert_eq!(mask_for_logging("Pick one"), "Pick one");
/// ```
#[must_use]
pub fn mask_for_logging(text: &str) -> String {
    let lower = text.to_lowercase();
    if SENSITIVE_PATTERNS.iter().any(|p| lower.contains(p)) {
        return "[REDACTED]".to_string();
    }

    match text.char_indices().nth(MAX_LOG_TEXT_LENGTH) {
        Some((cut, _)) => format!("{}...[truncated]", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_redacts() {
        assert_eq!(mask_for_logging("Authorization: Bearer x"), "[REDACTED]");
    }

    #[test]
    fn test_mask_truncates_multibyte() {
        let long = "é".repeat(80);
        let masked = mask_for_logging(&long);
        assert!(masked.ends_with("...[truncated]"));
        assert_eq!(masked.chars().filter(|c| *c == 'é').count(), MAX_LOG_TEXT_LENGTH);
    }

    #[test]
    fn test_mask_passes_short_text() {
        assert_eq!(mask_for_logging("*Deal*"), "*Deal*");
    }
}

//! Utilities for sanitizing error messages and header values for display.
//!
//! Removes control characters and bounds the length of text that ends up
//! inside a table cell.

/// Sanitizes an error message by removing control characters.
///
/// Newlines, tabs and carriage returns become spaces so the message stays on
/// one table row; other control characters are dropped.
pub fn sanitize_error_message(message: &str) -> String {
    message
        .chars()
        .filter_map(|c| match c {
            '\n' | '\t' | '\r' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}

/// Truncates text to at most `max_chars` characters, appending `...` when cut.
///
/// Counts characters rather than bytes so multi-byte UTF-8 is never split.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_error_message_removes_control_chars() {
        let input = "Error\x00message\x01with\x02control\x03chars";
        let output = sanitize_error_message(input);
        assert_eq!(output, "Errormessagewithcontrolchars");
    }

    #[test]
    fn test_sanitize_error_message_flattens_newlines() {
        let input = "Error\nmessage\twith\r\nbreaks";
        let output = sanitize_error_message(input);
        assert_eq!(output, "Error message with  breaks");
    }

    #[test]
    fn test_sanitize_error_message_preserves_unicode() {
        let input = "Error message with unicode: 测试 🚀";
        let output = sanitize_error_message(input);
        assert_eq!(output, input);
    }

    #[test]
    fn test_truncate_chars_short_text_untouched() {
        assert_eq!(truncate_chars("nosniff", 80), "nosniff");
    }

    #[test]
    fn test_truncate_chars_long_text() {
        let input = "a".repeat(100);
        let output = truncate_chars(&input, 10);
        assert_eq!(output, "aaaaaaa...");
        assert_eq!(output.chars().count(), 10);
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        let input = "测".repeat(20);
        let output = truncate_chars(&input, 5);
        assert_eq!(output, "测测...");
    }
}

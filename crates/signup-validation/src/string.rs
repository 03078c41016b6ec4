//! String validation functions

/// True when the string has at most `max` characters
pub fn has_max_length(s: &str, max: usize) -> bool {
    s.chars().count() <= max
}

/// True when the string has at least one character
pub fn is_present(s: &str) -> bool {
    !s.is_empty()
}

/// True when the string is empty or only whitespace
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// True when the string is non-empty and made of ASCII letters and spaces only
///
/// Mirrors the pattern `^[A-Za-z ]+$`.
pub fn is_alpha_spaces(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic() || c == ' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_length() {
        assert!(has_max_length("hello", 10));
        assert!(has_max_length("hello", 5));
        assert!(!has_max_length("verylongstring", 5));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        assert!(has_max_length("ééééé", 5));
    }

    #[test]
    fn test_alpha_spaces() {
        assert!(is_alpha_spaces("Jane Doe"));
        assert!(is_alpha_spaces("jane"));
        assert!(!is_alpha_spaces("Jane3"));
        assert!(!is_alpha_spaces("O'Brien"));
        assert!(!is_alpha_spaces(""));
    }

    #[test]
    fn test_blank_and_present() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(!is_blank(" x "));

        assert!(is_present(" "));
        assert!(!is_present(""));
    }
}

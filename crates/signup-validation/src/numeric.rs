//! Numeric validation functions

/// Parses user input as a non-negative whole number
///
/// Surrounding whitespace is ignored. Anything that does not fit a `u32`
/// (empty input, letters, fractions, negative or overflowing values) yields
/// `None` rather than an error, so callers can report it as an ordinary
/// validation failure.
pub fn parse_whole_number(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok()
}

/// True when `value` is at least `min`
pub fn is_at_least<T: PartialOrd>(value: T, min: T) -> bool {
    value >= min
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_number() {
        assert_eq!(parse_whole_number("19"), Some(19));
        assert_eq!(parse_whole_number("  42 "), Some(42));
        assert_eq!(parse_whole_number("abc"), None);
        assert_eq!(parse_whole_number(""), None);
        assert_eq!(parse_whole_number("19.5"), None);
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert_eq!(parse_whole_number("-3"), None);
        assert_eq!(parse_whole_number("4294967295"), Some(u32::MAX));
        assert_eq!(parse_whole_number("5000000000"), None);
    }

    #[test]
    fn test_is_at_least() {
        assert!(is_at_least(19, 19));
        assert!(!is_at_least(18, 19));
    }
}

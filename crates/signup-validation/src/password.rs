//! Password validation functions

/// Characters accepted as "special" by the registration password rules
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Minimum password length in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

pub fn has_min_password_length(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
}

pub fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

pub fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

pub fn has_special_character(password: &str) -> bool {
    password.chars().any(|c| SPECIAL_CHARACTERS.contains(c))
}

/// Strong registration password: 8+ chars, lowercase, uppercase and a special character
pub fn is_strong_password(password: &str) -> bool {
    has_min_password_length(password)
        && has_lowercase(password)
        && has_uppercase(password)
        && has_special_character(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_classes() {
        assert!(has_lowercase("ABCd"));
        assert!(!has_lowercase("ABCD1!"));

        assert!(has_uppercase("abcD"));
        assert!(!has_uppercase("abcd1!"));

        assert!(has_special_character("abc{"));
        assert!(has_special_character("a\"b"));
        assert!(!has_special_character("abc-_+="));
    }

    #[test]
    fn test_strong_password() {
        assert!(is_strong_password("Password!"));
        assert!(is_strong_password("Secure@Pass"));
        assert!(!is_strong_password("Pass!"));
        assert!(!is_strong_password("password!"));
        assert!(!is_strong_password("PASSWORD!"));
        assert!(!is_strong_password("Password1"));
    }
}

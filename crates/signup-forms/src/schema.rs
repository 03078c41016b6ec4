// File: src/schema.rs
// Purpose: Declarative validation schema for the registration record
//
// Each field is an ordered list of (predicate, message) rules and stops at its
// first failure. One cross-field rule runs after the per-field checks.

use crate::path::FieldPath;
use crate::record::Record;
use crate::validation::{Validate, ValidationErrors};
use signup_types::{FIRST_NAME_MAX_LENGTH, MINIMUM_AGE};
use signup_validation::{
    first_failure, has_lowercase, has_min_password_length, has_special_character,
    has_uppercase, is_alpha_spaces, is_blank_rich_text, is_present, is_valid_email,
    has_max_length, has_min_items, is_at_least, parse_whole_number, Rule,
};

pub const FIRST_NAME_RULES: &[Rule<str>] = &[
    Rule::new(is_present, "First Name is Required"),
    Rule::new(within_first_name_limit, "Maximum length is 50 characters"),
    Rule::new(
        is_alpha_spaces,
        "First Name must contain only alphabetic characters and spaces",
    ),
];

pub const EMAIL_RULES: &[Rule<str>] = &[
    Rule::new(is_present, "Email is required"),
    Rule::new(is_valid_email, "Invalid email address"),
];

pub const PASSWORD_RULES: &[Rule<str>] = &[
    Rule::new(is_present, "Password is required"),
    Rule::new(
        has_min_password_length,
        "Password must contain at least 8 characters",
    ),
    Rule::new(
        has_lowercase,
        "Password must contain at least one lowercase letter",
    ),
    Rule::new(
        has_uppercase,
        "Password must contain at least one uppercase letter",
    ),
    Rule::new(
        has_special_character,
        "Password must contain at least one special character",
    ),
];

pub const CITY_RULES: &[Rule<str>] = &[Rule::new(is_present, "City is required")];

pub const STATE_RULES: &[Rule<str>] = &[Rule::new(is_present, "State is required")];

pub const AGE_RULES: &[Rule<u32>] = &[
    Rule::new(is_positive, AGE_REQUIRED),
    Rule::new(is_adult, "Minimum age should be above 18"),
];

pub const HOBBY_NAME_RULES: &[Rule<str>] = &[Rule::new(is_present, "Hobby Name is required")];

pub const GENDER_REQUIRED: &str = "Gender is Required";
pub const AGE_REQUIRED: &str = "Age is required";
pub const HOBBIES_REQUIRED: &str = "At least one hobby is required";
pub const DESCRIPTION_REQUIRED: &str =
    "Description is required when you accept the privacy policy";

/// Minimum number of hobbies
pub const MIN_HOBBIES: usize = 1;

fn within_first_name_limit(s: &str) -> bool {
    has_max_length(s, FIRST_NAME_MAX_LENGTH)
}

fn is_positive(age: &u32) -> bool {
    is_at_least(*age, 1)
}

fn is_adult(age: &u32) -> bool {
    is_at_least(*age, MINIMUM_AGE)
}

/// Validate the whole record
///
/// Pure: the same record always yields the same errors.
pub fn validate(record: &Record) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    for path in FieldPath::SCALARS {
        if let Some(message) = check_scalar(record, path) {
            errors.insert(path, message);
        }
    }
    validate_hobbies(record, &mut errors);
    apply_cross_field_rules(record, &mut errors);

    errors
}

/// Message for a single path, including the cross-field rule for `description`
///
/// For [`FieldPath::Hobbies`] only the sequence-level rule is checked.
pub fn validate_field(record: &Record, path: FieldPath) -> Option<&'static str> {
    match path {
        FieldPath::Hobbies => {
            (!has_min_items(record.hobbies.ids(), MIN_HOBBIES)).then_some(HOBBIES_REQUIRED)
        }
        FieldPath::HobbyName(index) => {
            let id = record.hobbies.id_at(index)?;
            let hobby = record.hobbies.get(id)?;
            first_failure(hobby.name.as_str(), HOBBY_NAME_RULES)
        }
        FieldPath::Description => {
            check_scalar(record, path).or_else(|| description_rule(record))
        }
        other => check_scalar(record, other),
    }
}

/// Sequence-level and per-element checks for `hobbies`
///
/// Both run independently; an element failure never hides the sequence rule.
pub fn validate_hobbies(record: &Record, errors: &mut ValidationErrors) {
    if let Some(message) = validate_field(record, FieldPath::Hobbies) {
        errors.insert(FieldPath::Hobbies, message);
    }

    for (index, hobby) in record.hobbies.values().enumerate() {
        if let Some(message) = first_failure(hobby.name.as_str(), HOBBY_NAME_RULES) {
            errors.insert(FieldPath::HobbyName(index), message);
        }
    }
}

/// Cross-field rules, run after every per-field check
///
/// A message already recorded for the same path is kept.
pub fn apply_cross_field_rules(record: &Record, errors: &mut ValidationErrors) {
    if let Some(message) = description_rule(record) {
        errors.insert_if_absent(FieldPath::Description, message);
    }
}

fn description_rule(record: &Record) -> Option<&'static str> {
    let missing = record
        .description
        .as_deref()
        .map_or(true, is_blank_rich_text);

    (record.accept_privacy && missing).then_some(DESCRIPTION_REQUIRED)
}

fn check_scalar(record: &Record, path: FieldPath) -> Option<&'static str> {
    match path {
        FieldPath::FirstName => first_failure(record.first_name.trim(), FIRST_NAME_RULES),
        FieldPath::Email => first_failure(record.email.as_str(), EMAIL_RULES),
        FieldPath::Password => first_failure(record.password.as_str(), PASSWORD_RULES),
        FieldPath::Gender => record.gender.is_none().then_some(GENDER_REQUIRED),
        FieldPath::AddressCity => first_failure(record.address.city.as_str(), CITY_RULES),
        FieldPath::AddressState => first_failure(record.address.state.as_str(), STATE_RULES),
        // Same parse as the snapshot, so an accepted age always fits `Age`
        FieldPath::Age => match parse_whole_number(&record.age) {
            Some(age) => first_failure(&age, AGE_RULES),
            None => Some(AGE_REQUIRED),
        },
        // No per-field rules of their own
        FieldPath::AcceptPrivacy | FieldPath::Description => None,
        FieldPath::Hobbies | FieldPath::HobbyName(_) => validate_field(record, path),
    }
}

impl Validate for Record {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validate(self).into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Hobby;
    use signup_types::Gender;

    fn valid_record() -> Record {
        let mut record = Record {
            first_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            password: "Secret!pass".to_string(),
            gender: Some(Gender::Female),
            age: "30".to_string(),
            ..Record::default()
        };
        record.address.city = "Springfield".to_string();
        record.address.state = "Oregon".to_string();
        record.hobbies.push(Hobby::new("chess"));
        record
    }

    #[test]
    fn test_valid_record_has_no_errors() {
        assert!(validate(&valid_record()).is_empty());
        assert!(valid_record().validate().is_ok());
    }

    #[test]
    fn test_empty_record_reports_every_required_field() {
        let errors = validate(&Record::default());

        assert_eq!(errors.get(FieldPath::FirstName), Some("First Name is Required"));
        assert_eq!(errors.get(FieldPath::Email), Some("Email is required"));
        assert_eq!(errors.get(FieldPath::Password), Some("Password is required"));
        assert_eq!(errors.get(FieldPath::Gender), Some(GENDER_REQUIRED));
        assert_eq!(errors.get(FieldPath::AddressCity), Some("City is required"));
        assert_eq!(errors.get(FieldPath::AddressState), Some("State is required"));
        assert_eq!(errors.get(FieldPath::Age), Some(AGE_REQUIRED));
        assert_eq!(errors.get(FieldPath::Hobbies), Some(HOBBIES_REQUIRED));
        assert!(!errors.contains(FieldPath::Description));
        assert_eq!(errors.len(), 8);
    }

    #[test]
    fn test_password_stops_at_first_failing_rule() {
        let mut record = valid_record();
        record.password = "short".to_string();
        assert_eq!(
            validate_field(&record, FieldPath::Password),
            Some("Password must contain at least 8 characters")
        );

        record.password = "NOLOWERCASE!".to_string();
        assert_eq!(
            validate_field(&record, FieldPath::Password),
            Some("Password must contain at least one lowercase letter")
        );

        record.password = "nouppercase!".to_string();
        assert_eq!(
            validate_field(&record, FieldPath::Password),
            Some("Password must contain at least one uppercase letter")
        );

        record.password = "NoSpecial123".to_string();
        assert_eq!(
            validate_field(&record, FieldPath::Password),
            Some("Password must contain at least one special character")
        );
    }

    #[test]
    fn test_first_name_length_checked_after_trim() {
        let mut record = valid_record();
        record.first_name = format!("  {}  ", "a".repeat(50));
        assert_eq!(validate_field(&record, FieldPath::FirstName), None);

        record.first_name = "a".repeat(51);
        assert_eq!(
            validate_field(&record, FieldPath::FirstName),
            Some("Maximum length is 50 characters")
        );

        record.first_name = "   ".to_string();
        assert_eq!(
            validate_field(&record, FieldPath::FirstName),
            Some("First Name is Required")
        );
    }

    #[test]
    fn test_age_below_one_is_required_message() {
        let mut record = valid_record();
        record.age = "0".to_string();
        assert_eq!(validate_field(&record, FieldPath::Age), Some(AGE_REQUIRED));
    }

    #[test]
    fn test_age_outside_whole_number_range() {
        let mut record = valid_record();
        record.age = "5000000000".to_string();
        assert_eq!(validate_field(&record, FieldPath::Age), Some(AGE_REQUIRED));

        record.age = "-20".to_string();
        assert_eq!(validate_field(&record, FieldPath::Age), Some(AGE_REQUIRED));
    }

    #[test]
    fn test_description_rule_uses_plain_text() {
        let mut record = valid_record();
        record.accept_privacy = true;
        record.description = Some("<p><br></p>".to_string());
        assert_eq!(
            validate_field(&record, FieldPath::Description),
            Some(DESCRIPTION_REQUIRED)
        );

        record.description = Some("<p>Happy to share</p>".to_string());
        assert_eq!(validate_field(&record, FieldPath::Description), None);
    }

    #[test]
    fn test_description_ignored_without_privacy() {
        let mut record = valid_record();
        record.accept_privacy = false;
        record.description = None;
        assert!(validate(&record).is_empty());
    }
}

/// Schema behaviour on whole records
///
/// Each case starts from a fully valid record and changes one thing.

use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use signup_forms::schema::{self, validate, validate_field};
use signup_forms::{FieldPath, Gender, Hobby, Record, Validate};

#[fixture]
fn valid() -> Record {
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

#[rstest]
fn test_valid_record_without_privacy_has_no_errors(valid: Record) {
    assert!(!valid.accept_privacy);
    assert!(validate(&valid).is_empty());
    assert!(valid.validate().is_ok());
}

#[rstest]
#[case::absent(None)]
#[case::empty(Some(""))]
#[case::empty_rich_text(Some("<p><br></p>"))]
fn test_privacy_without_description_is_one_error(mut valid: Record, #[case] description: Option<&str>) {
    valid.accept_privacy = true;
    valid.description = description.map(str::to_string);

    let errors = validate(&valid);
    assert_eq!(
        errors.iter().collect::<Vec<_>>(),
        vec![(FieldPath::Description, schema::DESCRIPTION_REQUIRED)]
    );
}

#[rstest]
fn test_privacy_with_description_is_valid(mut valid: Record) {
    valid.accept_privacy = true;
    valid.description = Some("<p>Count me in</p>".to_string());
    assert!(validate(&valid).is_empty());
}

#[rstest]
#[case("18", Some("Minimum age should be above 18"))]
#[case("19", None)]
#[case("abc", Some("Age is required"))]
#[case("", Some("Age is required"))]
#[case("0", Some("Age is required"))]
#[case(" 42 ", None)]
fn test_age_rules(mut valid: Record, #[case] age: &str, #[case] expected: Option<&str>) {
    valid.age = age.to_string();
    assert_eq!(validate(&valid).get(FieldPath::Age), expected);
}

#[rstest]
#[case("Jane Doe", None)]
#[case("  Jane  ", None)]
#[case("Jane3", Some("First Name must contain only alphabetic characters and spaces"))]
#[case("", Some("First Name is Required"))]
fn test_first_name_rules(mut valid: Record, #[case] name: &str, #[case] expected: Option<&str>) {
    valid.first_name = name.to_string();
    assert_eq!(validate_field(&valid, FieldPath::FirstName), expected);
}

#[rstest]
#[case("", Some("Email is required"))]
#[case("jane", Some("Invalid email address"))]
#[case("jane@example", Some("Invalid email address"))]
#[case("jane@example.com", None)]
fn test_email_rules(mut valid: Record, #[case] email: &str, #[case] expected: Option<&str>) {
    valid.email = email.to_string();
    assert_eq!(validate_field(&valid, FieldPath::Email), expected);
}

#[rstest]
fn test_missing_gender(mut valid: Record) {
    valid.gender = None;
    assert_eq!(validate(&valid).get(FieldPath::Gender), Some("Gender is Required"));
}

#[rstest]
fn test_nested_address_paths(mut valid: Record) {
    valid.address.city.clear();
    valid.address.state.clear();

    let errors = validate(&valid);
    assert_eq!(errors.get(FieldPath::AddressCity), Some("City is required"));
    assert_eq!(errors.get(FieldPath::AddressState), Some("State is required"));
    assert_eq!(
        errors.paths().map(|p| p.to_string()).collect::<Vec<_>>(),
        vec!["address.city", "address.state"]
    );
}

#[rstest]
fn test_no_hobbies_is_sequence_error(mut valid: Record) {
    valid.hobbies.replace(Vec::new());

    let errors = validate(&valid);
    assert_eq!(errors.get(FieldPath::Hobbies), Some("At least one hobby is required"));
    assert_eq!(errors.len(), 1);
}

#[rstest]
fn test_blank_hobby_is_element_error_only(mut valid: Record) {
    valid.hobbies.replace(vec![Hobby::new("")]);

    let errors = validate(&valid);
    assert_eq!(errors.get(FieldPath::HobbyName(0)), Some("Hobby Name is required"));
    assert!(!errors.contains(FieldPath::Hobbies));
}

#[rstest]
fn test_element_error_keeps_index_of_failing_entry(mut valid: Record) {
    valid.hobbies.replace(vec![Hobby::new("chess"), Hobby::new(""), Hobby::new("go")]);

    let errors = validate(&valid);
    assert_eq!(
        errors.paths().map(|p| p.to_string()).collect::<Vec<_>>(),
        vec!["hobbies.1.name"]
    );
}

#[rstest]
fn test_validation_is_pure(valid: Record) {
    let mut record = valid;
    record.password = "weak".to_string();
    let before = record.clone();

    let first = validate(&record);
    let second = validate(&record);

    assert_eq!(first, second);
    assert_eq!(record, before);
}

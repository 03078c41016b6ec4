use anyhow::{bail, Result};
use colored::Colorize;
use signup_forms::{schema, Record};

pub fn execute(record: &Record) -> Result<()> {
    let errors = schema::validate(record);

    if errors.is_empty() {
        println!("{}", "✓ Record is valid".green().bold());
        return Ok(());
    }

    println!("{}", "Validation failed:".red().bold());
    super::print_errors(&errors);
    bail!("{} validation error(s)", errors.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::valid_record;

    #[test]
    fn test_valid_record_passes() {
        assert!(execute(&valid_record()).is_ok());
    }

    #[test]
    fn test_errors_fail_the_command() {
        let err = execute(&Record::default()).unwrap_err();
        assert_eq!(err.to_string(), "8 validation error(s)");
    }

    #[test]
    fn test_record_with_numeric_age_loads_and_validates() {
        let mut value = serde_json::to_value(valid_record()).unwrap();
        value["age"] = serde_json::json!(30);

        let record: Record = serde_json::from_value(value).unwrap();
        assert!(execute(&record).is_ok());
    }
}

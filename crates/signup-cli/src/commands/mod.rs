pub mod render;
pub mod submit;
pub mod validate;

use colored::Colorize;
use signup_forms::ValidationErrors;

/// One `path: message` line per error, in form order
pub(crate) fn print_errors(errors: &ValidationErrors) {
    for (path, message) in errors.iter() {
        println!("  {} {}", format!("{}:", path).red().bold(), message);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use signup_forms::{Gender, Hobby, Record};

    pub(crate) fn valid_record() -> Record {
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
}

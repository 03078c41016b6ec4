use anyhow::{bail, Result};
use colored::Colorize;
use signup_forms::{FormConfig, FormState, Record, SubmitOutcome};

/// Submit `record` and return the accepted registration as pretty JSON
pub fn execute(record: Record, config: FormConfig) -> Result<String> {
    let mut form = FormState::with_defaults(record, config);

    match form.submit(|registration| serde_json::to_string_pretty(registration))? {
        SubmitOutcome::Accepted(json) => {
            eprintln!("{}", "✓ Registration accepted".green().bold());
            Ok(json?)
        }
        SubmitOutcome::Rejected { errors, focus } => {
            println!("{}", "Registration rejected:".red().bold());
            super::print_errors(&errors);
            if let Some(path) = focus {
                println!("Focus: {}", path.to_string().cyan());
            }
            bail!("{} validation error(s)", errors.len())
        }
        SubmitOutcome::Ignored => bail!("A submission is already in flight"),
    }
}

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use signup_forms::{FormConfig, Record};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "signup")]
#[command(version, about = "Registration form validation and rendering", long_about = None)]
struct Cli {
    /// Form configuration file
    #[arg(short, long, global = true, default_value = "signup.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a registration record and list its errors
    Validate {
        /// JSON file holding the record
        record: PathBuf,
    },

    /// Render the registration form for a record as HTML
    Render {
        /// JSON file holding the record; an empty form when omitted
        record: Option<PathBuf>,

        /// Show every error as if a submit had been attempted
        #[arg(long)]
        submitted: bool,
    },

    /// Submit a registration record and print the accepted registration
    Submit {
        /// JSON file holding the record
        record: PathBuf,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so command output stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = FormConfig::load(&cli.config)?;

    match cli.command {
        Commands::Validate { record } => {
            commands::validate::execute(&read_record(&record)?)?;
        }
        Commands::Render { record, submitted } => {
            let record = match record {
                Some(path) => read_record(&path)?,
                None => Record::default(),
            };
            commands::render::execute(record, config, submitted)?;
        }
        Commands::Submit { record } => {
            let json = commands::submit::execute(read_record(&record)?, config)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn read_record(path: &Path) -> Result<Record> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read record file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse record file {}", path.display()))
}

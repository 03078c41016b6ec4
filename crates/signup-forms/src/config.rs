// File: src/config.rs
// Purpose: Form behaviour configuration parsed from signup.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Form configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default)]
    pub validation: ValidationConfig,

    #[serde(default)]
    pub submit: SubmitConfig,
}

/// When errors become visible and how much is re-checked on each write
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    #[serde(default)]
    pub mode: ValidationMode,

    #[serde(default)]
    pub revalidate: RevalidateScope,
}

/// Submit gate behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitConfig {
    /// Move focus to the first invalid field when a submit is refused
    #[serde(default = "default_true")]
    pub focus_first_error: bool,
}

/// Which computed errors are shown to the user
///
/// Errors are always computed against the current record; the mode only
/// decides when a field's message becomes visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// After the first submit attempt
    #[default]
    OnSubmit,
    /// Once the field has been edited, or after a submit attempt
    OnChange,
    /// Once the field has been blurred, or after a submit attempt
    OnTouched,
    /// Always
    All,
}

/// What is re-validated after a write
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevalidateScope {
    /// Re-run the whole schema
    #[default]
    Record,
    /// Re-run the written field and the fields that depend on it
    Field,
}

fn default_true() -> bool {
    true
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            focus_first_error: true,
        }
    }
}

impl FormConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FormConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./signup.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("signup.toml")
    }
}

//! Validated types for the signup registration form
//!
//! Reusable newtype wrappers built with the `nutype` crate. A value of one of
//! these types has already passed the same rules the form schema reports on,
//! so code holding a `Registration` never re-checks its fields.
//!
//! The predicates come from `signup-validation`; the schema and the types
//! cannot drift apart.
//!
//! # Example
//!
//! ```rust,ignore
//! use signup_types::{Age, FirstName};
//!
//! let name = FirstName::try_new("  Jane Doe ".to_string())?; // trimmed to "Jane Doe"
//! let age = Age::try_new(19)?;
//! assert!(Age::try_new(18).is_err());
//! ```

use nutype::nutype;
use serde::{Deserialize, Serialize};
use signup_validation::{is_alpha_spaces, is_strong_password, is_valid_email};

/// Maximum length of a first name, in characters
pub const FIRST_NAME_MAX_LENGTH: usize = 50;

/// Minimum accepted age
pub const MINIMUM_AGE: u32 = 19;

// =============================================================================
// Person
// =============================================================================

/// First name: trimmed, 1-50 characters, letters and spaces only
#[nutype(
    sanitize(trim),
    validate(predicate = is_valid_first_name),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        AsRef,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct FirstName(String);

fn is_valid_first_name(s: &str) -> bool {
    s.chars().count() <= FIRST_NAME_MAX_LENGTH && is_alpha_spaces(s)
}

/// Syntactically valid email address
#[nutype(
    validate(predicate = is_valid_email),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct EmailAddress(String);

/// Password meeting the registration strength rules
///
/// No `Display` or `Serialize`; `Debug` is redacted.
#[nutype(validate(predicate = is_strong_password), derive(Clone, PartialEq, Eq, AsRef))]
pub struct Password(String);

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Age in whole years, at least [`MINIMUM_AGE`]
#[nutype(
    validate(greater_or_equal = 19),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Display,
        Into,
        Serialize,
        Deserialize,
    )
)]
pub struct Age(u32);

/// Any text that must not be empty (city, state, hobby name)
#[nutype(
    validate(not_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        AsRef,
        Deref,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct RequiredText(String);

// =============================================================================
// Gender
// =============================================================================

/// Gender choices offered by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Others,
}

impl Gender {
    /// All choices, in display order
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Others];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Others => "Others",
        }
    }

    /// Parse the exact option value submitted by the form
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == value)
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

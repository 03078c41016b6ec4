//! Signup-Validation Core
//!
//! Pure Rust rule functions compatible with both std and no_std environments.
//! Used by the registration schema and by the validated newtypes in
//! `signup-types`, so both sides agree on what a valid value is.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod collection;
pub mod email;
pub mod numeric;
pub mod password;
pub mod rich_text;
pub mod string;

// Re-export all validators
pub use collection::*;
pub use email::*;
pub use numeric::*;
pub use password::*;
pub use rich_text::*;
pub use string::*;

/// One declarative rule: a predicate and the message reported when it fails.
pub struct Rule<T: ?Sized + 'static> {
    pub check: fn(&T) -> bool,
    pub message: &'static str,
}

impl<T: ?Sized + 'static> Rule<T> {
    pub const fn new(check: fn(&T) -> bool, message: &'static str) -> Self {
        Self { check, message }
    }
}

/// Runs `rules` in order and returns the message of the first one that fails.
///
/// A field stops at its first failing rule, so at most one message is produced.
pub fn first_failure<T: ?Sized>(value: &T, rules: &[Rule<T>]) -> Option<&'static str> {
    rules
        .iter()
        .find(|rule| !(rule.check)(value))
        .map(|rule| rule.message)
}

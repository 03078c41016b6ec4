// File: src/validation.rs
// Purpose: Validation trait and the path-keyed error map it produces

use crate::path::FieldPath;
use serde::Serialize;
use std::collections::BTreeMap;

/// Trait for values that can be checked against a schema
pub trait Validate {
    /// Returns Ok(()) if valid, or Err with one message per failing field
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Field path to error message, at most one message per path
///
/// Iteration follows form order (see [`FieldPath`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<FieldPath, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Message for `path`, if it failed
    pub fn get(&self, path: FieldPath) -> Option<&str> {
        self.errors.get(&path).map(String::as_str)
    }

    pub fn contains(&self, path: FieldPath) -> bool {
        self.errors.contains_key(&path)
    }

    /// Record a failure, replacing any previous message for `path`
    pub fn insert(&mut self, path: FieldPath, message: impl Into<String>) {
        self.errors.insert(path, message.into());
    }

    /// Record a failure unless `path` already has a message
    pub fn insert_if_absent(&mut self, path: FieldPath, message: impl Into<String>) {
        self.errors.entry(path).or_insert_with(|| message.into());
    }

    pub fn remove(&mut self, path: FieldPath) -> Option<String> {
        self.errors.remove(&path)
    }

    /// Drop every message whose path matches `predicate`
    pub fn remove_where(&mut self, predicate: impl Fn(&FieldPath) -> bool) {
        self.errors.retain(|path, _| !predicate(path));
    }

    /// First failing field in form order
    pub fn first(&self) -> Option<(FieldPath, &str)> {
        self.errors
            .iter()
            .next()
            .map(|(path, message)| (*path, message.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldPath, &str)> + '_ {
        self.errors
            .iter()
            .map(|(path, message)| (*path, message.as_str()))
    }

    pub fn paths(&self) -> impl Iterator<Item = FieldPath> + '_ {
        self.errors.keys().copied()
    }

    /// Convert into a Result, Ok when there are no errors
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, (path, message)) in self.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", path, message)?;
        }
        Ok(())
    }
}

// File: src/path.rs
// Purpose: Typed field paths into the registration record

use crate::field_array::EntryId;
use serde::{Serialize, Serializer};

/// Locator of one field of the [`Record`](crate::Record)
///
/// Variants are declared in form order, so sorting paths yields the order in
/// which the fields appear on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldPath {
    FirstName,
    Email,
    Password,
    Gender,
    AddressCity,
    AddressState,
    Age,
    /// The hobbies sequence as a whole
    Hobbies,
    /// `name` of the hobby at this display index
    HobbyName(usize),
    AcceptPrivacy,
    Description,
}

impl FieldPath {
    /// Every scalar path except the index-qualified hobby names
    pub const SCALARS: [FieldPath; 9] = [
        FieldPath::FirstName,
        FieldPath::Email,
        FieldPath::Password,
        FieldPath::Gender,
        FieldPath::AddressCity,
        FieldPath::AddressState,
        FieldPath::Age,
        FieldPath::AcceptPrivacy,
        FieldPath::Description,
    ];

    /// Parse a dotted path such as `address.city` or `hobbies.2.name`
    pub fn parse(path: &str) -> Option<Self> {
        let parsed = match path {
            "first_name" => FieldPath::FirstName,
            "email" => FieldPath::Email,
            "password" => FieldPath::Password,
            "gender" => FieldPath::Gender,
            "address.city" => FieldPath::AddressCity,
            "address.state" => FieldPath::AddressState,
            "age" => FieldPath::Age,
            "hobbies" => FieldPath::Hobbies,
            "acceptPrivacy" => FieldPath::AcceptPrivacy,
            "description" => FieldPath::Description,
            other => {
                let index = other.strip_prefix("hobbies.")?.strip_suffix(".name")?;
                FieldPath::HobbyName(index.parse().ok()?)
            }
        };
        Some(parsed)
    }

    /// Kind of value stored at this path, `None` for the hobbies sequence
    pub fn kind(&self) -> Option<FieldKind> {
        match self {
            FieldPath::Hobbies => None,
            FieldPath::Gender => Some(FieldKind::Choice),
            FieldPath::AcceptPrivacy => Some(FieldKind::Bool),
            _ => Some(FieldKind::Text),
        }
    }

    pub fn is_hobby(&self) -> bool {
        matches!(self, FieldPath::Hobbies | FieldPath::HobbyName(_))
    }
}

impl std::fmt::Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldPath::FirstName => f.write_str("first_name"),
            FieldPath::Email => f.write_str("email"),
            FieldPath::Password => f.write_str("password"),
            FieldPath::Gender => f.write_str("gender"),
            FieldPath::AddressCity => f.write_str("address.city"),
            FieldPath::AddressState => f.write_str("address.state"),
            FieldPath::Age => f.write_str("age"),
            FieldPath::Hobbies => f.write_str("hobbies"),
            FieldPath::HobbyName(index) => write!(f, "hobbies.{}.name", index),
            FieldPath::AcceptPrivacy => f.write_str("acceptPrivacy"),
            FieldPath::Description => f.write_str("description"),
        }
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Repeatable sub-records of the record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrayPath {
    Hobbies,
}

impl std::fmt::Display for ArrayPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArrayPath::Hobbies => f.write_str("hobbies"),
        }
    }
}

/// Kind of value a scalar field holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Bool,
    Choice,
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldKind::Text => write!(f, "text"),
            FieldKind::Bool => write!(f, "boolean"),
            FieldKind::Choice => write!(f, "choice"),
        }
    }
}

/// Identity of a field for per-field flags (touched, edited)
///
/// Hobby names are keyed by entry id, not index, so flags follow the entry
/// when earlier entries are removed or reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Scalar(FieldPath),
    HobbyName(EntryId),
}

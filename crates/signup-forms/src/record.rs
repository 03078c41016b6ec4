// File: src/record.rs
// Purpose: The registration record edited by the form, and typed access to its fields

use crate::error::{FormError, Result};
use crate::field_array::FieldArray;
use crate::path::{FieldKey, FieldKind, FieldPath};
use serde::{Deserialize, Deserializer, Serialize};
use signup_types::Gender;

/// In-memory value edited by the registration form
///
/// Text inputs are kept exactly as typed (including `age`), so a
/// half-finished value can always be represented and validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Record {
    pub first_name: String,
    pub email: String,
    pub password: String,
    pub gender: Option<Gender>,
    pub address: Address,
    /// Accepts a JSON string or number when loaded
    #[serde(deserialize_with = "deserialize_age")]
    pub age: String,
    pub hobbies: FieldArray<Hobby>,
    #[serde(rename = "acceptPrivacy")]
    pub accept_privacy: bool,
    /// Rich-text HTML, only shown while `accept_privacy` is set
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub city: String,
    pub state: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hobby {
    pub name: String,
}

impl Hobby {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Value read from or written to a scalar field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
    Choice(Option<Gender>),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Text(_) => FieldKind::Text,
            FieldValue::Bool(_) => FieldKind::Bool,
            FieldValue::Choice(_) => FieldKind::Choice,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(flag) => Some(*flag),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<Gender> for FieldValue {
    fn from(value: Gender) -> Self {
        FieldValue::Choice(Some(value))
    }
}

impl From<Option<Gender>> for FieldValue {
    fn from(value: Option<Gender>) -> Self {
        FieldValue::Choice(value)
    }
}

impl Record {
    /// Read the scalar field identified by `key`
    pub fn get(&self, key: FieldKey) -> Result<FieldValue> {
        let path = match key {
            FieldKey::Scalar(path) => path,
            FieldKey::HobbyName(id) => {
                let hobby = self.hobbies.get(id).ok_or(FormError::UnknownEntry(id))?;
                return Ok(FieldValue::Text(hobby.name.clone()));
            }
        };

        let value = match path {
            FieldPath::FirstName => FieldValue::Text(self.first_name.clone()),
            FieldPath::Email => FieldValue::Text(self.email.clone()),
            FieldPath::Password => FieldValue::Text(self.password.clone()),
            FieldPath::Gender => FieldValue::Choice(self.gender),
            FieldPath::AddressCity => FieldValue::Text(self.address.city.clone()),
            FieldPath::AddressState => FieldValue::Text(self.address.state.clone()),
            FieldPath::Age => FieldValue::Text(self.age.clone()),
            FieldPath::AcceptPrivacy => FieldValue::Bool(self.accept_privacy),
            FieldPath::Description => {
                FieldValue::Text(self.description.clone().unwrap_or_default())
            }
            FieldPath::HobbyName(index) => {
                let id = self
                    .hobbies
                    .id_at(index)
                    .ok_or(FormError::IndexOutOfRange(path))?;
                return self.get(FieldKey::HobbyName(id));
            }
            FieldPath::Hobbies => return Err(FormError::NotScalar(path)),
        };
        Ok(value)
    }

    /// Write the scalar field identified by `key`
    ///
    /// The value must match the field's [`FieldKind`].
    pub fn set(&mut self, key: FieldKey, value: FieldValue) -> Result<()> {
        let path = match key {
            FieldKey::Scalar(path) => path,
            FieldKey::HobbyName(id) => {
                let index = self.hobbies.position(id).ok_or(FormError::UnknownEntry(id))?;
                let name = into_text(FieldPath::HobbyName(index), value)?;
                if let Some(hobby) = self.hobbies.get_mut(id) {
                    hobby.name = name;
                }
                return Ok(());
            }
        };

        match path {
            FieldPath::FirstName => self.first_name = into_text(path, value)?,
            FieldPath::Email => self.email = into_text(path, value)?,
            FieldPath::Password => self.password = into_text(path, value)?,
            FieldPath::AddressCity => self.address.city = into_text(path, value)?,
            FieldPath::AddressState => self.address.state = into_text(path, value)?,
            FieldPath::Age => self.age = into_text(path, value)?,
            FieldPath::Description => self.description = Some(into_text(path, value)?),
            FieldPath::Gender => match value {
                FieldValue::Choice(gender) => self.gender = gender,
                _ => return Err(mismatch(path)),
            },
            FieldPath::AcceptPrivacy => match value {
                FieldValue::Bool(flag) => self.accept_privacy = flag,
                _ => return Err(mismatch(path)),
            },
            FieldPath::HobbyName(index) => {
                let id = self
                    .hobbies
                    .id_at(index)
                    .ok_or(FormError::IndexOutOfRange(path))?;
                return self.set(FieldKey::HobbyName(id), value);
            }
            FieldPath::Hobbies => return Err(FormError::NotScalar(path)),
        }
        Ok(())
    }

    /// Resolve an index-qualified path to the stable key of the field it
    /// currently points at
    pub fn key_for(&self, path: FieldPath) -> Result<FieldKey> {
        match path {
            FieldPath::HobbyName(index) => self
                .hobbies
                .id_at(index)
                .map(FieldKey::HobbyName)
                .ok_or(FormError::IndexOutOfRange(path)),
            other => Ok(FieldKey::Scalar(other)),
        }
    }

    /// Index-qualified path of the field behind `key`, if it still exists
    pub fn path_for(&self, key: FieldKey) -> Option<FieldPath> {
        match key {
            FieldKey::Scalar(path) => Some(path),
            FieldKey::HobbyName(id) => self.hobbies.position(id).map(FieldPath::HobbyName),
        }
    }
}

/// Age as typed, whether the source wrote it as text or as a number
fn deserialize_age<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAge {
        Text(String),
        Integer(i64),
        Decimal(f64),
    }

    Ok(match RawAge::deserialize(deserializer)? {
        RawAge::Text(text) => text,
        RawAge::Integer(number) => number.to_string(),
        RawAge::Decimal(number) => number.to_string(),
    })
}

fn into_text(path: FieldPath, value: FieldValue) -> Result<String> {
    match value {
        FieldValue::Text(text) => Ok(text),
        _ => Err(mismatch(path)),
    }
}

fn mismatch(path: FieldPath) -> FormError {
    FormError::TypeMismatch {
        path,
        expected: path.kind().unwrap_or(FieldKind::Text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_set_nested_fields() {
        let mut record = Record::default();
        record
            .set(FieldKey::Scalar(FieldPath::AddressCity), "Berlin".into())
            .unwrap();

        assert_eq!(record.address.city, "Berlin");
        assert_eq!(
            record.get(FieldKey::Scalar(FieldPath::AddressCity)).unwrap(),
            FieldValue::Text("Berlin".to_string())
        );
    }

    #[test]
    fn test_set_rejects_wrong_kind() {
        let mut record = Record::default();
        let err = record
            .set(FieldKey::Scalar(FieldPath::AcceptPrivacy), "yes".into())
            .unwrap_err();

        assert_eq!(
            err,
            FormError::TypeMismatch {
                path: FieldPath::AcceptPrivacy,
                expected: FieldKind::Bool,
            }
        );
    }

    #[test]
    fn test_hobbies_is_not_scalar() {
        let record = Record::default();
        assert_eq!(
            record.get(FieldKey::Scalar(FieldPath::Hobbies)),
            Err(FormError::NotScalar(FieldPath::Hobbies))
        );
    }

    #[test]
    fn test_hobby_name_by_index_and_id() {
        let mut record = Record::default();
        let first = record.hobbies.push(Hobby::new("chess"));
        let second = record.hobbies.push(Hobby::new("rowing"));

        assert_eq!(
            record.key_for(FieldPath::HobbyName(1)).unwrap(),
            FieldKey::HobbyName(second)
        );
        record
            .set(FieldKey::Scalar(FieldPath::HobbyName(0)), "go".into())
            .unwrap();
        assert_eq!(record.hobbies.get(first).unwrap().name, "go");

        assert_eq!(
            record.get(FieldKey::Scalar(FieldPath::HobbyName(5))),
            Err(FormError::IndexOutOfRange(FieldPath::HobbyName(5)))
        );
    }

    #[test]
    fn test_deserialize_partial_record() {
        let record: Record = serde_json::from_str(
            r#"{"first_name": "Jane", "acceptPrivacy": true, "hobbies": [{"name": "chess"}]}"#,
        )
        .unwrap();

        assert_eq!(record.first_name, "Jane");
        assert!(record.accept_privacy);
        assert_eq!(record.hobbies.len(), 1);
        assert_eq!(record.description, None);
        assert_eq!(record.age, "");
    }

    #[test]
    fn test_deserialize_age_as_text_or_number() {
        let typed: Record = serde_json::from_str(r#"{"age": "30"}"#).unwrap();
        assert_eq!(typed.age, "30");

        let numeric: Record = serde_json::from_str(r#"{"age": 30}"#).unwrap();
        assert_eq!(numeric.age, "30");

        let fractional: Record = serde_json::from_str(r#"{"age": 19.5}"#).unwrap();
        assert_eq!(fractional.age, "19.5");
    }

    #[test]
    fn test_deserialize_rejects_non_scalar_age() {
        assert!(serde_json::from_str::<Record>(r#"{"age": [30]}"#).is_err());
    }
}

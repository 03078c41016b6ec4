// File: src/registration.rs
// Purpose: Strongly typed snapshot handed to the submit handler

use crate::error::{FormError, Result};
use crate::record::Record;
use serde::Serialize;
use signup_types::{Age, EmailAddress, FirstName, Gender, Password, RequiredText};
use signup_validation::{is_blank_rich_text, parse_whole_number};

/// A registration that passed the schema
///
/// Built only from a record with no validation errors. Every field holds a
/// validated type, so consumers never re-check it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Registration {
    pub first_name: FirstName,
    pub email: EmailAddress,
    #[serde(skip_serializing)]
    pub password: Password,
    pub gender: Gender,
    pub address: RegisteredAddress,
    pub age: Age,
    pub hobbies: Vec<RegisteredHobby>,
    #[serde(rename = "acceptPrivacy")]
    pub accept_privacy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisteredAddress {
    pub city: RequiredText,
    pub state: RequiredText,
}

/// Serialized as `{"name": ...}`, the same shape as a record's hobby
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisteredHobby {
    pub name: RequiredText,
}

impl TryFrom<&Record> for Registration {
    type Error = FormError;

    fn try_from(record: &Record) -> Result<Self> {
        let age = parse_whole_number(&record.age)
            .ok_or_else(|| FormError::Snapshot(format!("age {:?}", record.age)))?;

        let hobbies = record
            .hobbies
            .values()
            .map(|hobby| required(&hobby.name, "hobby name").map(|name| RegisteredHobby { name }))
            .collect::<Result<Vec<_>>>()?;

        // Blank rich text means "no description"
        let description = record
            .description
            .as_ref()
            .filter(|html| !is_blank_rich_text(html))
            .cloned();

        Ok(Self {
            first_name: FirstName::try_new(record.first_name.clone())
                .map_err(|e| snapshot("first_name", e))?,
            email: EmailAddress::try_new(record.email.clone())
                .map_err(|e| snapshot("email", e))?,
            password: Password::try_new(record.password.clone())
                .map_err(|e| snapshot("password", e))?,
            gender: record
                .gender
                .ok_or_else(|| FormError::Snapshot("gender missing".to_string()))?,
            address: RegisteredAddress {
                city: required(&record.address.city, "address.city")?,
                state: required(&record.address.state, "address.state")?,
            },
            age: Age::try_new(age).map_err(|e| snapshot("age", e))?,
            hobbies,
            accept_privacy: record.accept_privacy,
            description,
        })
    }
}

fn required(value: &str, field: &str) -> Result<RequiredText> {
    RequiredText::try_new(value.to_string()).map_err(|e| snapshot(field, e))
}

fn snapshot(field: &str, err: impl std::fmt::Debug) -> FormError {
    FormError::Snapshot(format!("{}: {:?}", field, err))
}

// Core types for the registration form - no dioxus imports needed here
use std::collections::BTreeMap;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::services::errors::{RegistrationError, RegistrationResult};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Country {
    Mx,
    #[default]
    Co,
    Ar,
}

impl Country {
    pub const ALL: [Country; 3] = [Country::Mx, Country::Co, Country::Ar];

    pub fn code(&self) -> &'static str {
        match self {
            Country::Mx => "mx",
            Country::Co => "co",
            Country::Ar => "ar",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Country::Mx => "México",
            Country::Co => "Colombia",
            Country::Ar => "Argentina",
        }
    }

    /// Only Argentina asks for a province
    pub fn requires_province(&self) -> bool {
        matches!(self, Country::Ar)
    }
}

impl FromStr for Country {
    type Err = RegistrationError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Country::ALL
            .into_iter()
            .find(|country| country.code() == code)
            .ok_or_else(|| RegistrationError::UnknownCountry {
                code: code.to_string(),
            })
    }
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub enum FieldName {
    Name,
    Email,
    BirthDate,
    Password,
    ConfirmPassword,
    Country,
    Province,
    FileName,
    AcceptedTerms,
}

impl FieldName {
    pub const ALL: [FieldName; 9] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::BirthDate,
        FieldName::Password,
        FieldName::ConfirmPassword,
        FieldName::Country,
        FieldName::Province,
        FieldName::FileName,
        FieldName::AcceptedTerms,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::BirthDate => "birth_date",
            FieldName::Password => "password",
            FieldName::ConfirmPassword => "confirm_password",
            FieldName::Country => "country",
            FieldName::Province => "province",
            FieldName::FileName => "file_name",
            FieldName::AcceptedTerms => "accepted_terms",
        }
    }

    /// Fields whose rules read this field's value
    pub fn dependents(&self) -> &'static [FieldName] {
        match self {
            FieldName::Password => &[FieldName::ConfirmPassword],
            FieldName::Country => &[FieldName::Province],
            _ => &[],
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

/// Raw values exactly as the user entered them
#[derive(Clone, PartialEq, Debug, Default, Serialize)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub birth_date: String,
    pub password: String,
    pub confirm_password: String,
    pub country: Country,
    pub province: String,
    pub file_name: String,
    pub accepted_terms: bool,
}

impl FormValues {
    /// Text view of a field; `None` for flag fields
    pub fn text(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::Name => Some(&self.name),
            FieldName::Email => Some(&self.email),
            FieldName::BirthDate => Some(&self.birth_date),
            FieldName::Password => Some(&self.password),
            FieldName::ConfirmPassword => Some(&self.confirm_password),
            FieldName::Country => Some(self.country.code()),
            FieldName::Province => Some(&self.province),
            FieldName::FileName => Some(&self.file_name),
            FieldName::AcceptedTerms => None,
        }
    }

    pub fn flag(&self, field: FieldName) -> Option<bool> {
        match field {
            FieldName::AcceptedTerms => Some(self.accepted_terms),
            _ => None,
        }
    }

    pub(crate) fn set(&mut self, field: FieldName, value: FieldValue) -> RegistrationResult<()> {
        match (field, value) {
            (FieldName::AcceptedTerms, FieldValue::Flag(flag)) => self.accepted_terms = flag,
            (FieldName::AcceptedTerms, FieldValue::Text(_)) => {
                return Err(RegistrationError::FieldTypeMismatch {
                    field: field.as_str(),
                    expected: "flag",
                });
            }
            (_, FieldValue::Flag(_)) => {
                return Err(RegistrationError::FieldTypeMismatch {
                    field: field.as_str(),
                    expected: "text",
                });
            }
            (FieldName::Name, FieldValue::Text(text)) => self.name = text,
            (FieldName::Email, FieldValue::Text(text)) => self.email = text,
            (FieldName::BirthDate, FieldValue::Text(text)) => self.birth_date = text,
            (FieldName::Password, FieldValue::Text(text)) => self.password = text,
            (FieldName::ConfirmPassword, FieldValue::Text(text)) => self.confirm_password = text,
            (FieldName::Country, FieldValue::Text(text)) => self.country = text.parse()?,
            (FieldName::Province, FieldValue::Text(text)) => self.province = text,
            (FieldName::FileName, FieldValue::Text(text)) => self.file_name = text,
        }
        Ok(())
    }
}

/// Current error message per field; absent means the field passed
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FieldErrors(BTreeMap<FieldName, String>);

impl FieldErrors {
    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn set(&mut self, field: FieldName, error: Option<String>) {
        match error {
            Some(message) => {
                self.0.insert(field, message);
            }
            None => {
                self.0.remove(&field);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Snapshot handed to the submission sink after a clean validation pass
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct RegistrationPayload {
    pub name: String,
    pub email: String,
    pub birth_date: NaiveDate,
    pub password: String,
    pub confirm_password: String,
    pub country: Country,
    pub province: Option<String>,
    pub file_name: Option<String>,
    pub accepted_terms: bool,
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum RegistrationAction {
    SetName(String),
    SetEmail(String),
    SetBirthDate(String),
    SetPassword(String),
    SetConfirmPassword(String),
    SetCountry(Country),
    SetProvince(String),
    SelectFiles(Vec<String>),
    SetAcceptedTerms(bool),
    BlurField(FieldName),
    Reset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_codes_round_trip() {
        for country in Country::ALL {
            assert_eq!(country.code().parse::<Country>().unwrap(), country);
        }
        assert!("br".parse::<Country>().is_err());
        assert_eq!(Country::default(), Country::Co);
    }

    #[test]
    fn test_only_argentina_requires_province() {
        assert!(Country::Ar.requires_province());
        assert!(!Country::Co.requires_province());
        assert!(!Country::Mx.requires_province());
    }

    #[test]
    fn test_set_rejects_mismatched_value_kind() {
        let mut values = FormValues::default();

        let err = values
            .set(FieldName::Name, FieldValue::Flag(true))
            .unwrap_err();
        assert!(matches!(err, RegistrationError::FieldTypeMismatch { .. }));

        let err = values
            .set(FieldName::AcceptedTerms, FieldValue::Text("yes".into()))
            .unwrap_err();
        assert!(matches!(err, RegistrationError::FieldTypeMismatch { .. }));

        values
            .set(FieldName::Country, FieldValue::Text("ar".into()))
            .unwrap();
        assert_eq!(values.country, Country::Ar);
        assert_eq!(values.text(FieldName::Country), Some("ar"));
    }

    #[test]
    fn test_field_errors_set_and_clear() {
        let mut errors = FieldErrors::default();
        errors.set(FieldName::Email, Some("Email is not valid".into()));
        assert_eq!(errors.get(FieldName::Email), Some("Email is not valid"));
        assert_eq!(errors.len(), 1);

        errors.set(FieldName::Email, None);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_payload_serializes_country_as_code() {
        let payload = RegistrationPayload {
            name: "Al".into(),
            email: "a@b.com".into(),
            birth_date: NaiveDate::from_ymd_opt(2000, 5, 1).unwrap(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
            country: Country::Co,
            province: None,
            file_name: None,
            accepted_terms: true,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["country"], "co");
        assert_eq!(json["birth_date"], "2000-05-01");
        assert!(json["province"].is_null());
    }
}

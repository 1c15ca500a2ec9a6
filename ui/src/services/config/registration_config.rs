//! Registration form configuration
//!
//! Rule constants for the registration form. Defaults match the product
//! requirements; a JSON document can override any subset of them.

use serde::{Deserialize, Serialize};

use crate::services::errors::RegistrationResult;

/// Address pattern applied to the email field
pub const DEFAULT_EMAIL_PATTERN: &str = r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+$";

/// Configuration for every validated field of the registration form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationConfig {
    /// Inclusive character bounds for the name field
    pub name_length: LengthBounds,

    /// Minimum character count for password and its confirmation
    pub password_min_length: usize,

    /// Minimum age in years, computed from calendar years only
    pub minimum_age: i32,

    /// Regular expression the email field must match
    pub email_pattern: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthBounds {
    pub min: usize,
    pub max: usize,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            name_length: LengthBounds { min: 2, max: 20 },
            password_min_length: 6,
            minimum_age: 18,
            email_pattern: DEFAULT_EMAIL_PATTERN.to_string(),
        }
    }
}

impl RegistrationConfig {
    /// Parse a configuration from JSON; missing keys fall back to defaults
    pub fn from_json(json: &str) -> RegistrationResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.name_length.min == 0 {
            errors.push("Name min length must be greater than 0".to_string());
        }

        if self.name_length.min > self.name_length.max {
            errors.push(format!(
                "Name min length {} exceeds max length {}",
                self.name_length.min, self.name_length.max
            ));
        }

        if self.password_min_length == 0 {
            errors.push("Password min length must be greater than 0".to_string());
        }

        if self.minimum_age < 0 {
            errors.push("Minimum age must not be negative".to_string());
        }

        if self.email_pattern.trim().is_empty() {
            errors.push("Email pattern must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

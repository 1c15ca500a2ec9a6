//! Declarative rule sets for the registration fields
//!
//! Rules are plain data. Each field's active set is derived from the current
//! values every time it is requested, so conditional fields (province) never
//! carry a separately stored "enabled" flag.

use regex::Regex;

use crate::features::registration::types::{FieldName, FormValues};
use crate::services::config::{LengthBounds, RegistrationConfig};
use crate::services::errors::{RegistrationError, RegistrationResult};

/// When a rule runs relative to the others on the same field
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum RuleStage {
    Presence,
    Content,
    CrossField,
}

#[derive(Clone, Debug)]
pub enum Rule {
    /// Non-blank text, or a checked flag
    Required,
    MinLength(usize),
    MaxLength(usize),
    Pattern(Regex),
    /// Text parses as a `YYYY-MM-DD` calendar date
    Date,
    /// Calendar-year age of a `YYYY-MM-DD` date
    MinimumAge(i32),
    /// Equals the live value of another field
    MatchesField(FieldName),
}

impl Rule {
    pub fn stage(&self) -> RuleStage {
        match self {
            Rule::Required => RuleStage::Presence,
            Rule::MinLength(_)
            | Rule::MaxLength(_)
            | Rule::Pattern(_)
            | Rule::Date
            | Rule::MinimumAge(_) => RuleStage::Content,
            Rule::MatchesField(_) => RuleStage::CrossField,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FieldRule {
    pub rule: Rule,
    pub message: String,
}

impl FieldRule {
    fn new(rule: Rule, message: impl Into<String>) -> Self {
        Self {
            rule,
            message: message.into(),
        }
    }
}

/// Compiled rule constants for the whole form
#[derive(Clone, Debug)]
pub struct FormRules {
    name_length: LengthBounds,
    password_min_length: usize,
    minimum_age: i32,
    email_pattern: Regex,
}

impl PartialEq for FormRules {
    fn eq(&self, other: &Self) -> bool {
        self.name_length == other.name_length
            && self.password_min_length == other.password_min_length
            && self.minimum_age == other.minimum_age
            && self.email_pattern.as_str() == other.email_pattern.as_str()
    }
}

impl FormRules {
    pub fn from_config(config: &RegistrationConfig) -> RegistrationResult<Self> {
        config
            .validate()
            .map_err(|errors| RegistrationError::Configuration {
                field: "registration".to_string(),
                value: errors.join("; "),
            })?;

        Ok(Self {
            name_length: config.name_length,
            password_min_length: config.password_min_length,
            minimum_age: config.minimum_age,
            email_pattern: Regex::new(&config.email_pattern)?,
        })
    }

    /// Whether the field's rules currently apply
    pub fn is_active(&self, field: FieldName, values: &FormValues) -> bool {
        match field {
            FieldName::Province => values.country.requires_province(),
            _ => true,
        }
    }

    /// Active rule set for a field, ordered by stage
    pub fn rules_for(&self, field: FieldName, values: &FormValues) -> Vec<FieldRule> {
        if !self.is_active(field, values) {
            return Vec::new();
        }

        match field {
            FieldName::Name => vec![
                FieldRule::new(Rule::Required, "Name is required"),
                FieldRule::new(
                    Rule::MinLength(self.name_length.min),
                    format!("Name must be at least {} characters", self.name_length.min),
                ),
                FieldRule::new(
                    Rule::MaxLength(self.name_length.max),
                    format!("Name must not exceed {} characters", self.name_length.max),
                ),
            ],
            FieldName::Email => vec![
                FieldRule::new(Rule::Required, "Email is required"),
                FieldRule::new(Rule::Pattern(self.email_pattern.clone()), "Email is not valid"),
            ],
            FieldName::BirthDate => vec![
                FieldRule::new(Rule::Required, "Birth date is required"),
                FieldRule::new(Rule::Date, "Birth date is not a valid date"),
                FieldRule::new(Rule::MinimumAge(self.minimum_age), "You must be of age"),
            ],
            FieldName::Password => vec![
                FieldRule::new(Rule::Required, "Password is required"),
                FieldRule::new(
                    Rule::MinLength(self.password_min_length),
                    format!(
                        "Password must be at least {} characters",
                        self.password_min_length
                    ),
                ),
            ],
            FieldName::ConfirmPassword => vec![
                FieldRule::new(Rule::Required, "Password confirmation is required"),
                FieldRule::new(
                    Rule::MinLength(self.password_min_length),
                    format!(
                        "Password confirmation must be at least {} characters",
                        self.password_min_length
                    ),
                ),
                FieldRule::new(
                    Rule::MatchesField(FieldName::Password),
                    "Passwords do not match",
                ),
            ],
            FieldName::Province => vec![FieldRule::new(Rule::Required, "Province is required")],
            FieldName::AcceptedTerms => vec![FieldRule::new(
                Rule::Required,
                "You must accept the terms and conditions",
            )],
            FieldName::Country | FieldName::FileName => Vec::new(),
        }
    }
}

use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;

use crate::features::registration::form_validation::{self, parse_birth_date};
use crate::features::registration::rules::FormRules;
use crate::features::registration::types::*;
use crate::services::errors::{RegistrationError, RegistrationResult};
use crate::services::submission::SubmissionSink;
use crate::{console_debug, console_error, console_info};

/// Source of the evaluation date used by the age rule
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Clock {
    #[default]
    System,
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => chrono::Local::now().date_naive(),
            Clock::Fixed(date) => *date,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum SubmitOutcome {
    /// Validation failed; errors stay on the fields and nothing was emitted
    Rejected { errors: usize },
    /// Payload was handed to the sink and the form was reset
    Submitted(RegistrationPayload),
}

/// Owns the form values, their errors and the submission lifecycle
#[derive(Clone, Debug)]
pub struct FormController {
    values: FormValues,
    errors: FieldErrors,
    touched: HashSet<FieldName>,
    submit_attempted: bool,
    rules: FormRules,
    clock: Clock,
}

impl FormController {
    pub fn new(rules: FormRules) -> Self {
        Self {
            values: FormValues::default(),
            errors: FieldErrors::default(),
            touched: HashSet::new(),
            submit_attempted: false,
            rules,
            clock: Clock::System,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: FieldName) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn is_active(&self, field: FieldName) -> bool {
        self.rules.is_active(field, &self.values)
    }

    pub fn is_touched(&self, field: FieldName) -> bool {
        self.touched.contains(&field)
    }

    /// Sets a field's value and re-validates it along with the fields that read it
    pub fn update_field(&mut self, field: FieldName, value: FieldValue) -> RegistrationResult<()> {
        self.values.set(field, value)?;
        self.touched.insert(field);
        self.revalidate(field);

        for &dependent in field.dependents() {
            if !self.is_active(dependent) {
                self.deactivate(dependent);
            } else if self.submit_attempted || self.is_touched(dependent) {
                self.revalidate(dependent);
            }
        }
        Ok(())
    }

    pub fn blur_field(&mut self, field: FieldName) {
        if self.is_active(field) {
            self.touched.insert(field);
            self.revalidate(field);
        }
    }

    /// Keeps only the display name of the first selected file; contents are never read
    pub fn select_file<S: AsRef<str>>(&mut self, files: &[S]) {
        let file_name = files
            .first()
            .map(|file| {
                let raw = file.as_ref();
                Path::new(raw)
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| raw.to_string())
            })
            .unwrap_or_default();

        console_debug!("[Registration] File selected: '{}'", file_name);
        self.values.file_name = file_name;
        self.touched.insert(FieldName::FileName);
    }

    pub fn validate_field(&self, field: FieldName) -> Option<String> {
        form_validation::validate_field(field, &self.values, &self.rules, self.clock.today())
    }

    /// Runs a full validation pass; returns true when no active field has an error
    pub fn validate_all(&mut self) -> bool {
        self.errors = form_validation::validate_all(&self.values, &self.rules, self.clock.today());
        self.errors.is_empty()
    }

    pub fn submit(&mut self, sink: &dyn SubmissionSink) -> RegistrationResult<SubmitOutcome> {
        self.submit_attempted = true;

        if !self.validate_all() {
            console_info!(
                "[Registration] Submit rejected with {} field error(s)",
                self.errors.len()
            );
            return Ok(SubmitOutcome::Rejected {
                errors: self.errors.len(),
            });
        }

        let payload = self.payload()?;
        sink.submit(&payload)?;
        console_info!("[Registration] Submission accepted, resetting form");
        self.reset();
        Ok(SubmitOutcome::Submitted(payload))
    }

    pub fn reset(&mut self) {
        self.values = FormValues::default();
        self.errors = FieldErrors::default();
        self.touched.clear();
        self.submit_attempted = false;
    }

    /// Applies a UI action in place (preserves Dioxus Signal reactivity)
    pub fn reduce_in_place(&mut self, action: RegistrationAction) {
        let result = match action {
            RegistrationAction::SetName(name) => {
                self.update_field(FieldName::Name, FieldValue::Text(name))
            }
            RegistrationAction::SetEmail(email) => {
                self.update_field(FieldName::Email, FieldValue::Text(email))
            }
            RegistrationAction::SetBirthDate(date) => {
                self.update_field(FieldName::BirthDate, FieldValue::Text(date))
            }
            RegistrationAction::SetPassword(password) => {
                self.update_field(FieldName::Password, FieldValue::Text(password))
            }
            RegistrationAction::SetConfirmPassword(password) => {
                self.update_field(FieldName::ConfirmPassword, FieldValue::Text(password))
            }
            RegistrationAction::SetCountry(country) => self.update_field(
                FieldName::Country,
                FieldValue::Text(country.code().to_string()),
            ),
            RegistrationAction::SetProvince(province) => {
                self.update_field(FieldName::Province, FieldValue::Text(province))
            }
            RegistrationAction::SelectFiles(files) => {
                self.select_file(&files);
                Ok(())
            }
            RegistrationAction::SetAcceptedTerms(accepted) => {
                self.update_field(FieldName::AcceptedTerms, FieldValue::Flag(accepted))
            }
            RegistrationAction::BlurField(field) => {
                self.blur_field(field);
                Ok(())
            }
            RegistrationAction::Reset => {
                self.reset();
                Ok(())
            }
        };

        if let Err(error) = result {
            console_error!("[REDUCER] Action rejected: {}", error);
        }
    }

    fn revalidate(&mut self, field: FieldName) {
        let error = self.validate_field(field);
        self.errors.set(field, error);
    }

    fn deactivate(&mut self, field: FieldName) {
        if self.values.set(field, FieldValue::Text(String::new())).is_ok() {
            self.errors.set(field, None);
            self.touched.remove(&field);
        }
    }

    fn payload(&self) -> RegistrationResult<RegistrationPayload> {
        let values = &self.values;
        let non_empty = |text: &str| (!text.is_empty()).then(|| text.to_string());

        let birth_date = parse_birth_date(&values.birth_date).ok_or_else(|| {
            RegistrationError::Payload {
                field: FieldName::BirthDate.as_str(),
                value: values.birth_date.clone(),
            }
        })?;

        Ok(RegistrationPayload {
            name: values.name.clone(),
            email: values.email.clone(),
            birth_date,
            password: values.password.clone(),
            confirm_password: values.confirm_password.clone(),
            country: values.country,
            province: if values.country.requires_province() {
                non_empty(&values.province)
            } else {
                None
            },
            file_name: non_empty(&values.file_name),
            accepted_terms: values.accepted_terms,
        })
    }
}

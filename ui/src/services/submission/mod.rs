//! Submission sinks for validated registrations
//!
//! The form has no backend. A sink receives the payload after a clean
//! validation pass; the browser build logs it to the console.

use crate::console_log;
use crate::features::registration::RegistrationPayload;
use crate::services::errors::{RegistrationError, RegistrationResult};

pub trait SubmissionSink {
    fn submit(&self, payload: &RegistrationPayload) -> RegistrationResult<()>;
}

/// Writes the payload as JSON to the browser console
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConsoleSink;

impl SubmissionSink for ConsoleSink {
    fn submit(&self, payload: &RegistrationPayload) -> RegistrationResult<()> {
        let json = serde_json::to_string_pretty(payload).map_err(|err| RegistrationError::Sink {
            message: format!("payload serialization failed: {}", err),
        })?;
        console_log!("[Registration] Submitted payload: {}", json);
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::features::registration::Country;
    use chrono::NaiveDate;
    use std::cell::RefCell;

    #[derive(Default)]
    pub(crate) struct RecordingSink {
        payloads: RefCell<Vec<RegistrationPayload>>,
    }

    impl RecordingSink {
        pub(crate) fn payloads(&self) -> Vec<RegistrationPayload> {
            self.payloads.borrow().clone()
        }
    }

    impl SubmissionSink for RecordingSink {
        fn submit(&self, payload: &RegistrationPayload) -> RegistrationResult<()> {
            self.payloads.borrow_mut().push(payload.clone());
            Ok(())
        }
    }

    pub(crate) struct FailingSink;

    impl SubmissionSink for FailingSink {
        fn submit(&self, _payload: &RegistrationPayload) -> RegistrationResult<()> {
            Err(RegistrationError::Sink {
                message: "sink offline".to_string(),
            })
        }
    }

    #[test]
    fn test_console_sink_accepts_payload() {
        let payload = RegistrationPayload {
            name: "Al".into(),
            email: "a@b.com".into(),
            birth_date: NaiveDate::from_ymd_opt(1999, 1, 1).unwrap(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
            country: Country::Ar,
            province: Some("Salta".into()),
            file_name: None,
            accepted_terms: true,
        };
        assert!(ConsoleSink.submit(&payload).is_ok());
    }
}

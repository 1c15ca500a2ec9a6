use thiserror::Error;

use crate::{console_error, console_info, console_warn};

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("Configuration error: {field} = {value}")]
    Configuration { field: String, value: String },

    #[error("Invalid email pattern: {source}")]
    EmailPattern {
        #[from]
        source: regex::Error,
    },

    #[error("Configuration could not be parsed: {source}")]
    ConfigParse {
        #[from]
        source: serde_json::Error,
    },

    #[error("Field type mismatch: {field} expects {expected}")]
    FieldTypeMismatch {
        field: &'static str,
        expected: &'static str,
    },

    #[error("Unknown country code: {code}")]
    UnknownCountry { code: String },

    #[error("Cannot build payload: {field} = {value}")]
    Payload { field: &'static str, value: String },

    #[error("Submission sink error: {message}")]
    Sink { message: String },

    #[error("DOM error: {operation} - {reason}")]
    Dom { operation: String, reason: String },
}

pub type RegistrationResult<T> = Result<T, RegistrationError>;

impl RegistrationError {
    /// Get error severity for logging purposes
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RegistrationError::Configuration { .. }
            | RegistrationError::EmailPattern { .. }
            | RegistrationError::ConfigParse { .. } => ErrorSeverity::High,
            RegistrationError::Sink { .. } | RegistrationError::Payload { .. } => {
                ErrorSeverity::Medium
            }
            RegistrationError::Dom { .. } => ErrorSeverity::Low,
            RegistrationError::FieldTypeMismatch { .. }
            | RegistrationError::UnknownCountry { .. } => ErrorSeverity::Medium,
        }
    }
}

impl RegistrationError {
    /// Writes the error to the console at a level matching its severity
    pub fn log(&self, context: &str) -> ErrorSeverity {
        let severity = self.severity();
        match severity {
            ErrorSeverity::High => console_error!("[{}] {}", context, self),
            ErrorSeverity::Medium => console_warn!("[{}] {}", context, self),
            ErrorSeverity::Low => console_info!("[{}] {}", context, self),
        }
        severity
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RegistrationError::UnknownCountry {
            code: "br".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown country code: br");

        let err = RegistrationError::FieldTypeMismatch {
            field: "name",
            expected: "text",
        };
        assert_eq!(err.to_string(), "Field type mismatch: name expects text");
    }

    #[test]
    fn test_regex_error_converts() {
        let regex_err = regex::Regex::new("(").unwrap_err();
        let err: RegistrationError = regex_err.into();
        assert!(matches!(err, RegistrationError::EmailPattern { .. }));
        assert_eq!(err.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_log_reports_severity() {
        let sink = RegistrationError::Sink {
            message: "closed".to_string(),
        };
        assert_eq!(sink.log("Registration"), ErrorSeverity::Medium);

        let dom = RegistrationError::Dom {
            operation: "apply theme".to_string(),
            reason: "no document".to_string(),
        };
        assert_eq!(dom.log("Theme"), ErrorSeverity::Low);

        let payload = RegistrationError::Payload {
            field: "birth_date",
            value: "soon".to_string(),
        };
        assert_eq!(payload.severity(), ErrorSeverity::Medium);
    }
}

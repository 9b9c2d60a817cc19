//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;

use crate::domain::{Error, JobValidationError};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    EmptyField,
    InvalidSalary,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::EmptyField => "empty_field",
            ErrorCode::InvalidSalary => "invalid_salary",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &'static str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: &'static str,
    message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }

    fn with_value(self, code: ErrorCode, value: serde_json::Value) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value,
            "code": code.as_str(),
        }))
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("missing required field: {field}"))
        .with_code(ErrorCode::MissingField)
}

pub(crate) fn empty_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must not be empty")).with_code(ErrorCode::EmptyField)
}

pub(crate) fn invalid_salary_error(value: f64) -> Error {
    // Non-finite values have no JSON form and serialise as null.
    ValidationError::new("salary", "salary must be a positive number")
        .with_value(ErrorCode::InvalidSalary, json!(value))
}

/// Map job validation failures onto field-level request errors.
pub(crate) fn map_job_validation_error(err: JobValidationError) -> Error {
    match err {
        JobValidationError::EmptyField { field } => empty_field_error(FieldName::new(field)),
        JobValidationError::NonPositiveSalary { value } => invalid_salary_error(value),
    }
}

/// Unwrap a required field, reporting which one is missing.
pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn missing_field_reports_field_and_code() {
        let err = require::<String>(None, FieldName::new("password")).expect_err("missing");
        assert_eq!(
            err.details(),
            Some(&json!({ "field": "password", "code": "missing_field" }))
        );
    }

    #[rstest]
    #[case(JobValidationError::EmptyField { field: "jobTitle" }, "jobTitle", "empty_field")]
    #[case(JobValidationError::NonPositiveSalary { value: -5.0 }, "salary", "invalid_salary")]
    fn job_errors_map_to_fields(
        #[case] err: JobValidationError,
        #[case] field: &str,
        #[case] code: &str,
    ) {
        let mapped = map_job_validation_error(err);
        let details = mapped.details().expect("details");
        assert_eq!(details["field"], json!(field));
        assert_eq!(details["code"], json!(code));
    }
}

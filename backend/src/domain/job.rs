//! Job postings.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Validation errors raised while building a job posting.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum JobValidationError {
    /// A required text field was blank once trimmed.
    #[error("{field} must not be empty")]
    EmptyField {
        /// Wire name of the offending field.
        field: &'static str,
    },
    /// The salary was zero, negative, or not a finite number.
    #[error("salary must be a positive number")]
    NonPositiveSalary {
        /// Rejected value.
        value: f64,
    },
}

impl JobValidationError {
    /// Wire name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyField { field } => field,
            Self::NonPositiveSalary { .. } => "salary",
        }
    }
}

/// Sequential job identifier assigned by the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(u64);

impl JobId {
    /// Wrap a raw identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Annual salary; finite and strictly positive.
///
/// # Examples
/// ```
/// use jobboard::domain::Salary;
///
/// assert!(Salary::try_new(50_000.0).is_ok());
/// assert!(Salary::try_new(0.0).is_err());
/// assert!(Salary::try_new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Salary(f64);

impl Salary {
    /// Validate a raw amount.
    pub fn try_new(value: f64) -> Result<Self, JobValidationError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(JobValidationError::NonPositiveSalary { value })
        }
    }

    /// Raw amount.
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl From<Salary> for f64 {
    fn from(value: Salary) -> Self {
        value.0
    }
}

impl TryFrom<f64> for Salary {
    type Error = JobValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

/// Validated posting awaiting an identifier and timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct NewJob {
    company_name: String,
    job_title: String,
    description: String,
    salary: Salary,
}

impl NewJob {
    /// Validate raw fields. Text fields are trimmed.
    pub fn try_new(
        company_name: &str,
        job_title: &str,
        description: &str,
        salary: f64,
    ) -> Result<Self, JobValidationError> {
        Ok(Self {
            company_name: required("companyName", company_name)?,
            job_title: required("jobTitle", job_title)?,
            description: required("description", description)?,
            salary: Salary::try_new(salary)?,
        })
    }

    /// Salary on offer.
    pub fn salary(&self) -> Salary {
        self.salary
    }
}

fn required(field: &'static str, raw: &str) -> Result<String, JobValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(JobValidationError::EmptyField { field });
    }
    Ok(trimmed.to_owned())
}

/// Stored job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Repository-assigned identifier.
    pub id: JobId,
    /// Hiring company.
    pub company_name: String,
    /// Position title.
    pub job_title: String,
    /// Free-form description.
    pub description: String,
    /// Salary on offer.
    pub salary: Salary,
    /// Moment the posting was stored.
    pub created_at: DateTime<Utc>,
}

impl Job {
    /// Assemble a stored posting; only repositories assign identifiers.
    pub fn new(id: JobId, candidate: NewJob, created_at: DateTime<Utc>) -> Self {
        let NewJob {
            company_name,
            job_title,
            description,
            salary,
        } = candidate;
        Self {
            id,
            company_name,
            job_title,
            description,
            salary,
            created_at,
        }
    }
}

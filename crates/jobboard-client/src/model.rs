//! Wire shapes exchanged with the job board API.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ClientError;

/// Message shown when a role is neither `admin` nor `employee`.
pub const INVALID_ROLE_MESSAGE: &str = r#"Invalid user type. Must be "admin" or "employee""#;

/// Account role. Serialised as the lowercase `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// May manage employees and post jobs.
    Admin,
    /// May browse job listings.
    Employee,
}

impl Role {
    /// Wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Employee => "employee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ClientError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "admin" => Ok(Self::Admin),
            "employee" => Ok(Self::Employee),
            _ => Err(ClientError::validation("type", INVALID_ROLE_MESSAGE)),
        }
    }
}

/// A user as returned by the server. Never carries a password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    /// Sequential identifier.
    pub id: u64,
    /// Login identifier.
    pub username: String,
    /// Contact address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Account role.
    #[serde(rename = "type")]
    pub role: Role,
}

/// A job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Sequential identifier.
    pub id: u64,
    /// Hiring company.
    pub company_name: String,
    /// Position title.
    pub job_title: String,
    /// Free-form description.
    pub description: String,
    /// Positive salary figure.
    pub salary: f64,
    /// RFC 3339 creation timestamp assigned by the server.
    pub created_at: String,
}

/// Credentials submitted to the login endpoint.
///
/// Sent as `{email, password}`; the server resolves `email` as the username.
/// Accounts registered here sign in with their email address, seeded ones
/// with names such as `admin1`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginCredentials {
    #[serde(rename = "email")]
    username: String,
    password: String,
}

impl LoginCredentials {
    /// Pair an identifier with its password.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// The login identifier.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Sign-up form contents.
///
/// `role` holds the raw form value and is checked before anything is sent.
#[derive(Clone, PartialEq, Eq)]
pub struct Registration {
    /// Display name.
    pub full_name: String,
    /// Contact address, also used as the username.
    pub email: String,
    /// Plain password, sent once over the wire.
    pub password: String,
    /// Requested role as typed by the user.
    pub role: String,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

/// Request body for `POST /create`, built from a checked [`Registration`].
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RegistrationBody<'a> {
    pub full_name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    #[serde(rename = "type")]
    pub role: Role,
}

impl Registration {
    /// Check the role and borrow the fields as a request body.
    pub(crate) fn to_body(&self) -> Result<RegistrationBody<'_>, ClientError> {
        let role = self.role.parse::<Role>()?;
        Ok(RegistrationBody {
            full_name: &self.full_name,
            email: &self.email,
            password: &self.password,
            role,
        })
    }
}

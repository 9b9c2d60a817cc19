//! User accounts held by the credential store.
//!
//! [`User`] is the stored record and owns a password digest; it is never
//! serialised. Everything that leaves the domain goes through [`UserView`],
//! which has no password field at all.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::password::PasswordDigest;

/// Message shared by every role validation failure.
pub const INVALID_ROLE_MESSAGE: &str = r#"Invalid user type. Must be "admin" or "employee""#;

/// Validation errors raised while building user values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The role was absent.
    #[error(r#"Invalid user type. Must be "admin" or "employee""#)]
    MissingRole,
    /// The role was not one of the recognised values.
    #[error(r#"Invalid user type. Must be "admin" or "employee""#)]
    UnknownRole {
        /// Raw value supplied by the caller.
        value: String,
    },
    /// The username was empty or only whitespace.
    #[error("username must not be empty")]
    EmptyUsername,
    /// The password was empty.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Sequential user identifier assigned by the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Wrap a raw identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Unique login identifier.
///
/// Stored exactly as given; only empty or whitespace-only input is refused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Validate and construct a username.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let raw = raw.as_ref();
        if raw.trim().is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }
        Ok(Self(raw.to_owned()))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl TryFrom<String> for Username {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Closed set of account roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Manages employees and posts jobs.
    Admin,
    /// Browses job listings.
    Employee,
}

impl Role {
    /// Wire representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Employee => "employee",
        }
    }

    /// Parse an optional role field, treating absence as a validation error.
    ///
    /// # Examples
    /// ```
    /// use jobboard::domain::{Role, UserValidationError};
    ///
    /// assert_eq!(Role::parse_optional(Some("admin")), Ok(Role::Admin));
    /// assert_eq!(Role::parse_optional(None), Err(UserValidationError::MissingRole));
    /// ```
    pub fn parse_optional(raw: Option<&str>) -> Result<Self, UserValidationError> {
        raw.ok_or(UserValidationError::MissingRole)?.parse()
    }
}

impl FromStr for Role {
    type Err = UserValidationError;

    // Matching is exact: "Admin" is not a role.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "employee" => Ok(Self::Employee),
            other => Err(UserValidationError::UnknownRole {
                value: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored user record.
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    username: Username,
    password: PasswordDigest,
    email: String,
    name: String,
    role: Role,
}

impl User {
    /// Assemble a stored record; only repositories assign identifiers.
    pub fn new(id: UserId, candidate: NewUser) -> Self {
        let NewUser {
            username,
            password,
            email,
            name,
            role,
        } = candidate;
        Self {
            id,
            username,
            password,
            email,
            name,
            role,
        }
    }

    /// Repository-assigned identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Login identifier.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Stored password digest.
    pub fn password(&self) -> &PasswordDigest {
        &self.password
    }

    /// Account role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Password-free projection.
    pub fn view(&self) -> UserView {
        UserView {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role,
        }
    }
}

/// Password-free user projection returned by every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    /// Repository-assigned identifier.
    pub id: UserId,
    /// Login identifier.
    pub username: Username,
    /// Contact address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Account role, serialised as `type`.
    #[serde(rename = "type")]
    pub role: Role,
}

/// Validated creation candidate.
#[derive(Debug, Clone)]
pub struct NewUser {
    username: Username,
    password: PasswordDigest,
    email: String,
    name: String,
    role: Role,
}

impl NewUser {
    /// Bundle validated parts into a candidate.
    pub fn new(
        username: Username,
        password: PasswordDigest,
        email: impl Into<String>,
        name: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            username,
            password,
            email: email.into(),
            name: name.into(),
            role,
        }
    }

    /// Requested login identifier.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Requested role.
    pub fn role(&self) -> Role {
        self.role
    }
}

//! Raw inputs for login and registration.
//!
//! These keep inbound payload parsing outside the domain: handlers convert
//! request bodies into these types and the credential store does the rest.

use zeroize::Zeroizing;

use super::user::{UserValidationError, Username};

/// Credentials presented at login.
///
/// ## Invariants
/// - `username` is kept verbatim and is not blank.
/// - `password` is non-empty and keeps caller whitespace; comparison is
///   against the stored digest, never the plaintext.
///
/// # Examples
/// ```
/// use jobboard::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts("admin1", "admin123").unwrap();
/// assert_eq!(creds.username().as_ref(), "admin1");
/// assert_eq!(creds.password(), "admin123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: Username,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Validate raw login inputs.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, UserValidationError> {
        let username = Username::new(username)?;
        if password.is_empty() {
            return Err(UserValidationError::EmptyPassword);
        }
        Ok(Self {
            username,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Login identifier to resolve.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Plaintext password supplied by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Unvalidated account creation request.
///
/// Validation happens inside [`crate::domain::CredentialStore::create`] so
/// the role check always runs before the uniqueness check.
#[derive(Debug, Clone, Default)]
pub struct UserCandidate {
    /// Requested login identifier.
    pub username: String,
    /// Plaintext password; hashed before storage.
    pub password: Zeroizing<String>,
    /// Contact address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Requested role; `None` when the field was omitted.
    pub role: Option<String>,
}

impl UserCandidate {
    /// Convenience constructor used by seeding and tests.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
        name: impl Into<String>,
        role: Option<&str>,
    ) -> Self {
        Self {
            username: username.into(),
            password: Zeroizing::new(password.into()),
            email: email.into(),
            name: name.into(),
            role: role.map(str::to_owned),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "pw", UserValidationError::EmptyUsername)]
    #[case("   ", "pw", UserValidationError::EmptyUsername)]
    #[case("admin1", "", UserValidationError::EmptyPassword)]
    fn invalid_credentials(
        #[case] username: &str,
        #[case] password: &str,
        #[case] expected: UserValidationError,
    ) {
        let err = LoginCredentials::try_from_parts(username, password)
            .expect_err("invalid inputs must fail");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn username_whitespace_is_preserved() {
        let creds = LoginCredentials::try_from_parts(" admin1 ", "admin123").expect("valid");
        assert_eq!(creds.username().as_ref(), " admin1 ");
    }

    #[rstest]
    fn password_whitespace_is_preserved() {
        let creds = LoginCredentials::try_from_parts("employee1", " emp123 ").expect("valid");
        assert_eq!(creds.password(), " emp123 ");
    }
}

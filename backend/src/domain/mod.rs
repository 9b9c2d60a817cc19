//! Domain primitives, aggregates and services.
//!
//! Purpose: define strongly typed entities for the job board and the two
//! services that own them. Keep types immutable and document invariants and
//! serialisation contracts (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - Error / ErrorCode: API error payload and its stable category.
//! - User / UserView / Role: stored account, its password-free projection
//!   and the closed role set.
//! - Job / NewJob / Salary: job postings and their validated parts.
//! - CredentialStore: account creation and login resolution.
//! - JobBoard: job posting and listing.

pub mod auth;
pub mod credential_store;
pub mod error;
pub mod job;
pub mod job_board;
pub mod password;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::auth::{LoginCredentials, UserCandidate};
pub use self::credential_store::{
    CredentialStore, DUPLICATE_USERNAME_MESSAGE, INVALID_CREDENTIALS_MESSAGE,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::job::{Job, JobId, JobValidationError, NewJob, Salary};
pub use self::job_board::JobBoard;
pub use self::password::{HashingCost, PasswordDigest, PasswordHashError, PasswordHasher};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    INVALID_ROLE_MESSAGE, NewUser, Role, User, UserId, UserValidationError, UserView, Username,
};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use jobboard::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("no such job"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;

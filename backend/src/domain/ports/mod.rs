//! Ports at the hexagonal boundary.
//!
//! Driving ports (`LoginService`, `UsersQuery`, `UserRegistration`,
//! `JobsQuery`, `JobsCommand`) are what inbound adapters call. Driven ports
//! (`UserRepository`, `JobRepository`) are what domain services call.

mod macros;
pub(crate) use macros::define_port_error;

mod job_repository;
mod jobs_command;
mod jobs_query;
mod login_service;
mod user_registration;
mod user_repository;
mod users_query;

#[cfg(test)]
pub use job_repository::MockJobRepository;
pub use job_repository::{JobPersistenceError, JobRepository};
pub use jobs_command::JobsCommand;
pub use jobs_query::JobsQuery;
pub use login_service::LoginService;
pub use user_registration::UserRegistration;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
pub use users_query::UsersQuery;

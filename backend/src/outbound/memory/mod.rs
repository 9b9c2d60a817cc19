//! In-memory adapters.
//!
//! State lives for the lifetime of the process and is lost on restart.

mod job_repository;
mod user_repository;

pub use job_repository::InMemoryJobRepository;
pub use user_repository::InMemoryUserRepository;

use crate::domain::UserCandidate;

/// Accounts loaded at startup when seeding is enabled.
///
/// Creating these in order against an empty store assigns ids 1 to 4.
pub fn default_accounts() -> Vec<UserCandidate> {
    [
        ("admin1", "admin123", "Admin User", "admin"),
        ("employee1", "emp123", "John Doe", "employee"),
        ("employee2", "emp456", "Jane Smith", "employee"),
        ("admin2", "admin456", "Super Admin", "admin"),
    ]
    .into_iter()
    .map(|(username, password, name, role)| {
        UserCandidate::new(
            username,
            password,
            format!("{username}@example.com"),
            name,
            Some(role),
        )
    })
    .collect()
}

//! Outbound adapters implementing domain ports.
//!
//! Adapters are thin translators between domain types and their storage.
//! They contain no business logic.
//!
//! - **memory**: process-local repositories for users and jobs.

pub mod memory;

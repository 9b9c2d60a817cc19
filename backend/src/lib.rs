//! Job board backend: credential store, job postings and their HTTP surface.
//!
//! Layout follows a hexagonal split:
//! - [`domain`]: entities, services and the ports they speak through.
//! - [`inbound`]: Actix handlers translating HTTP into port calls.
//! - [`outbound`]: repository adapters.
//! - [`server`]: configuration and application assembly.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;

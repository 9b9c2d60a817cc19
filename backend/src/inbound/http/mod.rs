//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod jobs;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
mod validation;

use actix_web::web;

pub use error::ApiResult;

/// Shared JSON extractor configuration.
///
/// Malformed bodies become `invalid_request` errors with the usual payload.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(error::json_error_handler)
}

/// Register the job board routes on a service config.
///
/// Call this inside the `/user` scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(users::login)
        .service(users::register)
        .service(users::list_users)
        .service(jobs::list_jobs)
        .service(jobs::create_job);
}

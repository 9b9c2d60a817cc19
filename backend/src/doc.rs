//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! document for the REST API. It registers:
//!
//! - **Paths**: every handler under `/user` plus the health probes
//! - **Schemas**: domain type wrappers ([`ErrorSchema`], [`UserViewSchema`],
//!   [`JobSchema`] and friends) that provide OpenAPI definitions without
//!   coupling domain types to the utoipa framework
//!
//! The generated document is used by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::jobs::{CreateJobRequest, JobResponse, JobsResponse};
use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorSchema, JobSchema, RoleSchema, UserViewSchema,
};
use crate::inbound::http::users::{LoginRequest, RegisterRequest, UsersResponse};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Job board API",
        description = "Accounts, login resolution and job postings for the job portal."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::login,
        crate::inbound::http::users::register,
        crate::inbound::http::users::list_users,
        crate::inbound::http::jobs::list_jobs,
        crate::inbound::http::jobs::create_job,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        RoleSchema,
        UserViewSchema,
        JobSchema,
        LoginRequest,
        RegisterRequest,
        UsersResponse,
        CreateJobRequest,
        JobsResponse,
        JobResponse,
    )),
    tags(
        (name = "users", description = "Accounts and login"),
        (name = "jobs", description = "Job postings"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated document.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    /// Assert that an Object schema contains a field with the given name.
    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/user/login")]
    #[case("/user/create")]
    #[case("/user/getAll")]
    #[case("/user/jobs")]
    #[case("/user/create/job")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn every_route_is_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[rstest]
    fn error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get("Error").expect("Error schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "message");
    }

    #[rstest]
    fn user_view_schema_has_wire_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let user_schema = schemas.get("UserView").expect("UserView schema");

        for field in ["id", "username", "email", "name", "type"] {
            assert_object_schema_has_field(user_schema, field);
        }
    }
}

//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the wire shape of their domain counterparts but
//! live in the inbound adapter layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Nothing matched, including unmatched login credentials.
    #[schema(rename = "not_found")]
    NotFound,
    /// The write collides with existing state.
    #[schema(rename = "conflict")]
    Conflict,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Username already exists")]
    message: String,
    /// Correlation identifier, echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary details such as `{field, code}`.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Role`].
#[derive(ToSchema)]
#[schema(as = Role)]
pub enum RoleSchema {
    /// Manages employees and posts jobs.
    #[schema(rename = "admin")]
    Admin,
    /// Browses job listings.
    #[schema(rename = "employee")]
    Employee,
}

/// OpenAPI schema for [`crate::domain::UserView`].
#[derive(ToSchema)]
#[schema(as = UserView)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserViewSchema {
    /// Sequential identifier.
    #[schema(example = 1)]
    id: u64,
    /// Login identifier.
    #[schema(example = "admin1")]
    username: String,
    /// Contact address.
    #[schema(example = "admin1@example.com")]
    email: String,
    /// Display name.
    #[schema(example = "Admin User")]
    name: String,
    /// Account role.
    #[schema(rename = "type")]
    role: RoleSchema,
}

/// OpenAPI schema for [`crate::domain::Job`].
#[derive(ToSchema)]
#[schema(as = Job, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct JobSchema {
    /// Sequential identifier.
    #[schema(example = 1)]
    id: u64,
    /// Hiring company.
    #[schema(example = "Tech Corp")]
    company_name: String,
    /// Position title.
    #[schema(example = "Senior Developer")]
    job_title: String,
    /// Free-form description.
    description: String,
    /// Annual salary, greater than zero.
    #[schema(example = 50000.0)]
    salary: f64,
    /// RFC 3339 creation timestamp.
    #[schema(value_type = String, format = DateTime, example = "2024-05-01T12:00:00Z")]
    created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn error_code_schema_variants_match_domain() {
        let schema_json = schema_to_json::<ErrorCodeSchema>();
        assert_eq!(ErrorCodeSchema::name(), "ErrorCode");
        for code in [
            "invalid_request",
            "not_found",
            "conflict",
            "internal_error",
        ] {
            assert!(schema_json.contains(code), "missing {code}");
        }
    }

    #[test]
    fn error_schema_uses_camel_case() {
        let schema_json = schema_to_json::<ErrorSchema>();
        assert_eq!(ErrorSchema::name(), "Error");
        assert!(schema_json.contains("traceId"), "schema should contain traceId");
    }

    #[test]
    fn user_view_schema_exposes_type_not_password() {
        let schema_json = schema_to_json::<UserViewSchema>();
        assert_eq!(UserViewSchema::name(), "UserView");
        assert!(schema_json.contains("\"type\""));
        assert!(!schema_json.contains("password"));
    }

    #[test]
    fn job_schema_uses_wire_field_names() {
        let schema_json = schema_to_json::<JobSchema>();
        for field in ["companyName", "jobTitle", "createdAt", "salary"] {
            assert!(schema_json.contains(field), "missing {field}");
        }
    }
}

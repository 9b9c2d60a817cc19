//! Job posting handlers.
//!
//! ```text
//! GET /user/jobs
//! POST /user/create/job {"companyName":"Tech Corp","jobTitle":"Dev","description":"...","salary":50000}
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Job, NewJob};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, JobSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, map_job_validation_error, require};

/// Request body for `POST /user/create/job`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    /// Hiring company.
    #[schema(example = "Tech Corp")]
    pub company_name: Option<String>,
    /// Position title.
    #[schema(example = "Senior Developer")]
    pub job_title: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Annual salary; must be greater than zero.
    #[schema(example = 50000.0)]
    pub salary: Option<f64>,
}

impl TryFrom<CreateJobRequest> for NewJob {
    type Error = crate::domain::Error;

    fn try_from(value: CreateJobRequest) -> Result<Self, Self::Error> {
        let company_name = require(value.company_name, FieldName::new("companyName"))?;
        let job_title = require(value.job_title, FieldName::new("jobTitle"))?;
        let description = require(value.description, FieldName::new("description"))?;
        let salary = require(value.salary, FieldName::new("salary"))?;
        NewJob::try_new(&company_name, &job_title, &description, salary)
            .map_err(map_job_validation_error)
    }
}

/// Response body for `GET /user/jobs`.
#[derive(Debug, Serialize, ToSchema)]
pub struct JobsResponse {
    /// Every posting in insertion order.
    #[schema(value_type = Vec<JobSchema>)]
    pub jobs: Vec<Job>,
}

/// Response body for `POST /user/create/job`.
#[derive(Debug, Serialize, ToSchema)]
pub struct JobResponse {
    /// The stored posting.
    #[schema(value_type = JobSchema)]
    pub job: Job,
}

/// List job postings.
#[utoipa::path(
    get,
    path = "/user/jobs",
    responses(
        (status = 200, description = "Job postings", body = JobsResponse),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["jobs"],
    operation_id = "listJobs"
)]
#[get("/jobs")]
pub async fn list_jobs(state: web::Data<HttpState>) -> ApiResult<web::Json<JobsResponse>> {
    let jobs = state.jobs_query.list_jobs().await?;
    Ok(web::Json(JobsResponse { jobs }))
}

/// Post a job.
#[utoipa::path(
    post,
    path = "/user/create/job",
    request_body = CreateJobRequest,
    responses(
        (status = 201, description = "Job created", body = JobResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["jobs"],
    operation_id = "createJob"
)]
#[post("/create/job")]
pub async fn create_job(
    state: web::Data<HttpState>,
    payload: web::Json<CreateJobRequest>,
) -> ApiResult<HttpResponse> {
    let candidate = NewJob::try_from(payload.into_inner())?;
    let job = state.jobs_command.create_job(candidate).await?;
    Ok(HttpResponse::Created().json(JobResponse { job }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::json_config;
    use crate::inbound::http::test_utils::test_state;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use rstest::rstest;
    use serde_json::{Value, json};

    async fn call(state: web::Data<HttpState>, req: test::TestRequest) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(json_config())
                .service(web::scope("/user").service(list_jobs).service(create_job)),
        )
        .await;
        let res = test::call_service(&app, req.to_request()).await;
        let status = res.status();
        let body: Value = test::read_body_json(res).await;
        (status, body)
    }

    fn job_body() -> Value {
        json!({
            "companyName": "Tech Corp",
            "jobTitle": "Senior Developer",
            "description": "Build things",
            "salary": 50000.00,
        })
    }

    #[rstest]
    #[actix_web::test]
    async fn created_job_round_trips_in_listing() {
        let state = test_state().await;

        let (status, created) = call(
            state.clone(),
            test::TestRequest::post()
                .uri("/user/create/job")
                .set_json(job_body()),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["job"]["id"], json!(1));
        assert_eq!(created["job"]["salary"], json!(50000.0));
        assert!(created["job"]["createdAt"].is_string());

        let (status, listed) = call(
            state,
            test::TestRequest::get().uri("/user/jobs"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed["jobs"], json!([created["job"].clone()]));
    }

    #[rstest]
    #[case(json!(0))]
    #[case(json!(-100))]
    #[actix_web::test]
    async fn non_positive_salary_is_rejected(#[case] salary: Value) {
        let state = test_state().await;
        let mut body = job_body();
        body["salary"] = salary;

        let (status, error) = call(
            state,
            test::TestRequest::post().uri("/user/create/job").set_json(body),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error["code"], json!("invalid_request"));
        assert_eq!(error["details"]["field"], json!("salary"));
    }

    #[rstest]
    #[case("companyName")]
    #[case("jobTitle")]
    #[case("description")]
    #[case("salary")]
    #[actix_web::test]
    async fn missing_fields_are_reported(#[case] field: &str) {
        let state = test_state().await;
        let mut body = job_body();
        body.as_object_mut().expect("object").remove(field);

        let (status, error) = call(
            state,
            test::TestRequest::post().uri("/user/create/job").set_json(body),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error["details"]["field"], json!(field));
        assert_eq!(error["details"]["code"], json!("missing_field"));
    }

    #[rstest]
    #[actix_web::test]
    async fn empty_board_lists_no_jobs() {
        let (status, body) = call(
            test_state().await,
            test::TestRequest::get().uri("/user/jobs"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "jobs": [] }));
    }
}

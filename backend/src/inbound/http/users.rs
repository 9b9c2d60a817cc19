//! Users API handlers.
//!
//! ```text
//! POST /user/login {"username":"admin1","password":"admin123"}
//! POST /user/create {"fullName":"Ada","email":"ada@example.com","password":"pw","type":"employee"}
//! GET /user/getAll
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use utoipa::ToSchema;
use zeroize::Zeroizing;

use crate::domain::{Error, LoginCredentials, UserCandidate, UserValidationError, UserView};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserViewSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, require};

/// Login request body for `POST /user/login`.
///
/// `username` is the canonical identifier; `email` is accepted in its place
/// so clients that post `{email, password}` keep working.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Login identifier.
    #[serde(default)]
    #[schema(example = "admin1")]
    pub username: Option<String>,
    /// Alias for `username`, used when `username` is absent or blank.
    #[serde(default)]
    pub email: Option<String>,
    /// Plaintext password.
    #[serde(default)]
    #[schema(example = "admin123")]
    pub password: Option<String>,
}

impl LoginRequest {
    fn into_credentials(self) -> Result<LoginCredentials, Error> {
        let Self {
            username,
            email,
            password,
        } = self;
        let identifier = username
            .filter(|value| !value.trim().is_empty())
            .or(email);
        let identifier = require(identifier, FieldName::new("username"))?;
        let password = Zeroizing::new(require(password, FieldName::new("password"))?);
        LoginCredentials::try_from_parts(&identifier, &password).map_err(map_login_validation_error)
    }
}

fn map_login_validation_error(err: UserValidationError) -> Error {
    let (field, code) = match err {
        UserValidationError::EmptyPassword => ("password", "empty_password"),
        _ => ("username", "empty_username"),
    };
    Error::invalid_request(err.to_string()).with_details(json!({ "field": field, "code": code }))
}

/// Registration request body for `POST /user/create`.
///
/// `fullName` and `name` are interchangeable. When `username` is omitted the
/// email address becomes the login identifier.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Display name.
    #[serde(default)]
    #[schema(example = "Ada Lovelace")]
    pub full_name: Option<String>,
    /// Display name, used when `fullName` is absent.
    #[serde(default)]
    pub name: Option<String>,
    /// Contact address; doubles as the username when none is given.
    #[serde(default)]
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    /// Requested login identifier.
    #[serde(default)]
    pub username: Option<String>,
    /// Plaintext password.
    #[serde(default)]
    pub password: Option<String>,
    /// Requested role: `admin` or `employee`.
    #[serde(default, rename = "type")]
    #[schema(example = "employee")]
    pub role: Option<String>,
}

impl From<RegisterRequest> for UserCandidate {
    fn from(value: RegisterRequest) -> Self {
        let RegisterRequest {
            full_name,
            name,
            email,
            username,
            password,
            role,
        } = value;
        let email = email.unwrap_or_default();
        let username = username
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| email.clone());
        Self {
            username,
            password: Zeroizing::new(password.unwrap_or_default()),
            email,
            name: full_name.or(name).unwrap_or_default(),
            role,
        }
    }
}

/// Response body for `GET /user/getAll`.
#[derive(Debug, Serialize, ToSchema)]
pub struct UsersResponse {
    /// Every account, passwords stripped.
    #[schema(value_type = Vec<UserViewSchema>)]
    pub users: Vec<UserView>,
}

/// Resolve credentials to a user view.
///
/// Unknown usernames and wrong passwords produce the same 404 so callers
/// cannot probe for valid usernames.
#[utoipa::path(
    post,
    path = "/user/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = UserViewSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Invalid credentials", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<UserView>> {
    let credentials = payload.into_inner().into_credentials()?;
    let user = state.login.resolve(&credentials).await?;
    info!(user_id = %user.id, "login succeeded");
    Ok(web::Json(user))
}

/// Create an account.
#[utoipa::path(
    post,
    path = "/user/create",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = UserViewSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Username already exists", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "register"
)]
#[post("/create")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let user = state
        .registration
        .create(UserCandidate::from(payload.into_inner()))
        .await?;
    Ok(HttpResponse::Created().json(user))
}

/// List every account without passwords.
#[utoipa::path(
    get,
    path = "/user/getAll",
    responses(
        (status = 200, description = "Users", body = UsersResponse),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/getAll")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<UsersResponse>> {
    let users = state.users.list_all().await?;
    Ok(web::Json(UsersResponse { users }))
}

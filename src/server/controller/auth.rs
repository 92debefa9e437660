use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{AuthTokenDto, LoginDto, RegisterDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::{LoginParam, RegisterParam},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates the user and returns a full-access bearer token. The plain token is only
/// ever returned here and by login.
///
/// # Returns
/// - `201 Created` - The new user and their token
/// - `409 Conflict` - Email already registered
/// - `422 Unprocessable Entity` - Invalid name, email or password
#[utoipa::path(
    post,
    path = "/api/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = AuthTokenDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = RegisterParam::from_dto(payload)?;

    let (user, issued) = AuthService::new(&state.db).register(param).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthTokenDto {
            user: user.into_dto(),
            token: issued.plain_text,
        }),
    ))
}

/// Log in with email and password.
///
/// # Returns
/// - `200 OK` - The user and a new full-access token
/// - `401 Unauthorized` - Unknown email or wrong password
#[utoipa::path(
    post,
    path = "/api/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = AuthTokenDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = LoginParam::from_dto(payload)?;

    let (user, issued) = AuthService::new(&state.db).login(param).await?;

    Ok((
        StatusCode::OK,
        Json(AuthTokenDto {
            user: user.into_dto(),
            token: issued.plain_text,
        }),
    ))
}

/// Revoke the token used for this request.
#[utoipa::path(
    post,
    path = "/api/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    AuthService::new(&state.db).logout(auth.token_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logged out successfully".to_string(),
        }),
    ))
}

/// Get the authenticated user.
#[utoipa::path(
    get,
    path = "/api/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    Ok((StatusCode::OK, Json(auth.user.into_dto())))
}

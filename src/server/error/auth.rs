use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header was sent.
    #[error("Request has no bearer token")]
    MissingToken,

    /// The bearer token does not match any stored token.
    ///
    /// Either the token was never issued, was revoked on logout, or its user was deleted.
    #[error("Bearer token is not valid")]
    InvalidToken,

    /// Email and password did not match a user.
    #[error("Invalid credentials for {0}")]
    InvalidCredentials(String),

    /// User lacks the permission required for the endpoint.
    ///
    /// # Fields
    /// - User ID that was denied
    /// - Description of the denied action for server-side logs
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Endpoint requires an active business but the user has none selected.
    #[error("User {0} has no active business")]
    NoActiveBusiness(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error messages:
/// - `MissingToken` / `InvalidToken` → 401 Unauthorized with "Unauthenticated."
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid credentials"
/// - `AccessDenied` → 403 Forbidden with "Insufficient permissions"
/// - `NoActiveBusiness` → 400 Bad Request with "No active business selected"
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken | Self::InvalidToken => (StatusCode::UNAUTHORIZED, "Unauthenticated."),
            Self::InvalidCredentials(_) => (StatusCode::UNAUTHORIZED, "Invalid credentials"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Insufficient permissions"),
            Self::NoActiveBusiness(_) => (StatusCode::BAD_REQUEST, "No active business selected"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

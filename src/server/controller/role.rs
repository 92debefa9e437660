use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        role::{RoleTokenDto, SelectRoleDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::business::MemberRole,
        service::role::RoleService, state::AppState,
    },
};

/// Tag for grouping role endpoints in OpenAPI documentation
pub static ROLE_TAG: &str = "role";

/// Select the role the caller works as and get a token carrying it.
///
/// The business is inferred when omitted. The role only drives which interface the
/// client shows; permissions still come from membership.
///
/// # Access Control
/// - Authenticated user
///
/// # Returns
/// - `200 OK` - Role token and resolved business
/// - `422 Unprocessable Entity` - Unknown role or business, or the business could not be inferred
#[utoipa::path(
    post,
    path = "/api/role/select",
    tag = ROLE_TAG,
    request_body = SelectRoleDto,
    responses(
        (status = 200, description = "Role selected", body = RoleTokenDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn select_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SelectRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let role = MemberRole::parse(&payload.role)?;

    let selected = RoleService::new(&state.db)
        .select(auth.user.id, role, payload.business_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(RoleTokenDto {
            token: selected.token.plain_text,
            role: selected.role.as_str().to_string(),
            business_id: selected.business_id,
        }),
    ))
}

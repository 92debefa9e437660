use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        business_waiter::{BusinessTablesDto, LeaveBusinessResultDto, WaiterBusinessesDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard,
        service::business_waiter::BusinessWaiterService, state::AppState,
    },
};

/// Tag for grouping waiter business endpoints in OpenAPI documentation
pub static BUSINESS_WAITER_TAG: &str = "business-waiter";

/// Get every business the caller belongs to with table stats and pending call counts.
#[utoipa::path(
    get,
    path = "/api/waiter/businesses",
    tag = BUSINESS_WAITER_TAG,
    responses(
        (status = 200, description = "Caller's businesses", body = WaiterBusinessesDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_waiter_businesses(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let businesses = BusinessWaiterService::new(&state.db)
        .get_businesses(&auth.user)
        .await?;

    Ok((StatusCode::OK, Json(businesses)))
}

/// Get the tables of a business as the caller sees them.
///
/// Each table carries its assignment status relative to the caller, the latest call,
/// silence info and the actions the caller can take on it.
///
/// # Access Control
/// - Member of the business
///
/// # Returns
/// - `200 OK` - Tables and statistics
/// - `403 Forbidden` - Not a member
#[utoipa::path(
    get,
    path = "/api/waiter/businesses/{id}/tables",
    tag = BUSINESS_WAITER_TAG,
    params(("id" = i32, Path, description = "Business ID")),
    responses(
        (status = 200, description = "Business tables", body = BusinessTablesDto),
        (status = 403, description = "Not a member of the business", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_business_tables(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let tables = BusinessWaiterService::new(&state.db)
        .get_tables(&auth.user, id)
        .await?;

    Ok((StatusCode::OK, Json(tables)))
}

/// Leave a business.
///
/// Pending calls of the caller in the business are cancelled and their tables released.
/// If it was the active business, the next membership becomes active.
///
/// # Returns
/// - `200 OK` - Left, with the new active business
/// - `404 Not Found` - Not a member
#[utoipa::path(
    post,
    path = "/api/waiter/businesses/{id}/leave",
    tag = BUSINESS_WAITER_TAG,
    params(("id" = i32, Path, description = "Business ID")),
    responses(
        (status = 200, description = "Left the business", body = LeaveBusinessResultDto),
        (status = 404, description = "Not a member of the business", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn leave_business(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let result = BusinessWaiterService::new(&state.db)
        .leave(&auth.user, id)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}

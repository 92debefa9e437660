use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{api::ErrorDto, waiter_call::CallHistoryDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::waiter_call::HistoryFilter,
        service::call_history::{CallHistoryService, DEFAULT_HISTORY_LIMIT},
        state::AppState,
    },
};

/// Tag for grouping call history endpoints in OpenAPI documentation
pub static CALL_HISTORY_TAG: &str = "call-history";

#[derive(Deserialize)]
pub struct HistoryQuery {
    pub filter: Option<String>,
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    DEFAULT_HISTORY_LIMIT
}

/// Get call history for the caller.
///
/// Admins of the active business see every call of the business, everyone else the
/// calls routed to them.
///
/// # Returns
/// - `200 OK` - A page of calls, newest first
/// - `422 Unprocessable Entity` - Unknown filter
#[utoipa::path(
    get,
    path = "/api/waiter/calls/history",
    tag = CALL_HISTORY_TAG,
    params(
        ("filter" = Option<String>, Query, description = "today (default), hour or historic"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 20, max: 100)")
    ),
    responses(
        (status = 200, description = "Call history", body = CallHistoryDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 422, description = "Invalid filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_waiter_call_history(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<HistoryQuery>,
) -> Result<impl IntoResponse, AppError> {
    call_history(&state, &headers, query).await
}

/// Get call history from the admin panel. Same scoping rules as the waiter endpoint.
#[utoipa::path(
    get,
    path = "/api/admin/calls/history",
    tag = CALL_HISTORY_TAG,
    params(
        ("filter" = Option<String>, Query, description = "today (default), hour or historic"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 20, max: 100)")
    ),
    responses(
        (status = 200, description = "Call history", body = CallHistoryDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 422, description = "Invalid filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_admin_call_history(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<HistoryQuery>,
) -> Result<impl IntoResponse, AppError> {
    call_history(&state, &headers, query).await
}

async fn call_history(
    state: &AppState,
    headers: &HeaderMap,
    query: HistoryQuery,
) -> Result<(StatusCode, Json<CallHistoryDto>), AppError> {
    let auth = AuthGuard::new(&state.db, headers).require(&[]).await?;

    let filter = HistoryFilter::parse(query.filter.as_deref())?;

    let history = CallHistoryService::new(&state.db)
        .get_history(
            auth.user.id,
            auth.user.active_business_id,
            filter,
            query.page,
            query.limit,
        )
        .await?;

    Ok((StatusCode::OK, Json(history)))
}

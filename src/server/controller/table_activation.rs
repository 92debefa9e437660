use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        table::{
            ActivateTableResultDto, AssignedTablesDto, AvailableTablesDto,
            BulkActivationResultDto, BulkDeactivationResultDto, DeactivateTableResultDto,
            TableIdsDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::table::TableIds,
        service::table_activation::{Activation, TableActivationService},
        state::AppState,
    },
};

/// Tag for grouping table activation endpoints in OpenAPI documentation
pub static TABLE_ACTIVATION_TAG: &str = "table-activation";

/// Take responsibility for a table.
///
/// Calls from the table are routed to the caller from now on. A table held by a waiter who
/// left the business is taken over.
///
/// # Access Control
/// - `ActiveBusiness` - The table must belong to the caller's active business
///
/// # Returns
/// - `200 OK` - Table assigned, or it already was
/// - `403 Forbidden` - Table belongs to another business
/// - `404 Not Found` - No such table
/// - `409 Conflict` - Another waiter holds the table
#[utoipa::path(
    post,
    path = "/api/waiter/tables/{id}/activate",
    tag = TABLE_ACTIVATION_TAG,
    params(("id" = i32, Path, description = "Table ID")),
    responses(
        (status = 200, description = "Table assigned to the caller", body = ActivateTableResultDto),
        (status = 403, description = "Table outside the active business", body = ErrorDto),
        (status = 404, description = "Table not found", body = ErrorDto),
        (status = 409, description = "Table held by another waiter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn activate_table(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::ActiveBusiness])
        .await?;

    let activation = TableActivationService::new(&state.db)
        .activate(auth.user.id, auth.business_id()?, id)
        .await?;

    let (message, table) = match activation {
        Activation::Activated(table) => ("Table activated", table),
        Activation::AlreadyAssigned(table) => ("Table already assigned to you", table),
    };

    Ok((
        StatusCode::OK,
        Json(ActivateTableResultDto {
            message: message.to_string(),
            table: table.into_dto(),
        }),
    ))
}

/// Release a table held by the caller, cancelling its pending calls.
///
/// # Access Control
/// - `ActiveBusiness` - The table must belong to the caller's active business
///
/// # Returns
/// - `200 OK` - Table released with the number of cancelled calls
/// - `409 Conflict` - The table is not assigned to the caller
#[utoipa::path(
    delete,
    path = "/api/waiter/tables/{id}/activate",
    tag = TABLE_ACTIVATION_TAG,
    params(("id" = i32, Path, description = "Table ID")),
    responses(
        (status = 200, description = "Table released", body = DeactivateTableResultDto),
        (status = 403, description = "Table outside the active business", body = ErrorDto),
        (status = 404, description = "Table not found", body = ErrorDto),
        (status = 409, description = "Table not assigned to the caller", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn deactivate_table(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::ActiveBusiness])
        .await?;

    let cancelled_calls = TableActivationService::new(&state.db)
        .deactivate(auth.user.id, auth.business_id()?, id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(DeactivateTableResultDto {
            message: "Table deactivated".to_string(),
            cancelled_calls,
        }),
    ))
}

/// Take responsibility for several tables in one transaction.
///
/// # Access Control
/// - `ActiveBusiness` - Every table must belong to the caller's active business
///
/// # Returns
/// - `200 OK` - Per-table outcome and totals
/// - `400 Bad Request` - A table is outside the active business
/// - `422 Unprocessable Entity` - Empty, oversized or duplicated ID list
#[utoipa::path(
    post,
    path = "/api/waiter/tables/activate/multiple",
    tag = TABLE_ACTIVATION_TAG,
    request_body = TableIdsDto,
    responses(
        (status = 200, description = "Bulk activation result", body = BulkActivationResultDto),
        (status = 400, description = "Table outside the active business", body = ErrorDto),
        (status = 422, description = "Invalid table list", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn activate_tables(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<TableIdsDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::ActiveBusiness])
        .await?;

    let ids = TableIds::parse(payload.table_ids)?;

    let result = TableActivationService::new(&state.db)
        .activate_many(auth.user.id, auth.business_id()?, ids)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}

/// Release several tables in one transaction.
///
/// # Access Control
/// - `ActiveBusiness` - Every table must belong to the caller's active business
///
/// # Returns
/// - `200 OK` - Per-table outcome and totals
/// - `400 Bad Request` - A table is outside the active business
/// - `422 Unprocessable Entity` - Empty, oversized or duplicated ID list
#[utoipa::path(
    post,
    path = "/api/waiter/tables/deactivate/multiple",
    tag = TABLE_ACTIVATION_TAG,
    request_body = TableIdsDto,
    responses(
        (status = 200, description = "Bulk deactivation result", body = BulkDeactivationResultDto),
        (status = 400, description = "Table outside the active business", body = ErrorDto),
        (status = 422, description = "Invalid table list", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn deactivate_tables(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<TableIdsDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::ActiveBusiness])
        .await?;

    let ids = TableIds::parse(payload.table_ids)?;

    let result = TableActivationService::new(&state.db)
        .deactivate_many(auth.user.id, auth.business_id()?, ids)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}

/// Get the caller's tables with pending call counts and silence state.
#[utoipa::path(
    get,
    path = "/api/waiter/tables/assigned",
    tag = TABLE_ACTIVATION_TAG,
    responses(
        (status = 200, description = "Tables assigned to the caller", body = AssignedTablesDto),
        (status = 400, description = "No active business", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_assigned_tables(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::ActiveBusiness])
        .await?;

    let assigned = TableActivationService::new(&state.db)
        .get_assigned(auth.user.id, auth.business_id()?)
        .await?;

    Ok((StatusCode::OK, Json(assigned)))
}

/// Get the tables of the active business that nobody holds.
#[utoipa::path(
    get,
    path = "/api/waiter/tables/available",
    tag = TABLE_ACTIVATION_TAG,
    responses(
        (status = 200, description = "Unassigned tables", body = AvailableTablesDto),
        (status = 400, description = "No active business", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_available_tables(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::ActiveBusiness])
        .await?;

    let tables = TableActivationService::new(&state.db)
        .get_available(auth.business_id()?)
        .await?;

    Ok((
        StatusCode::OK,
        Json(AvailableTablesDto {
            total: tables.len() as u64,
            tables: tables.into_iter().map(|table| table.into_dto()).collect(),
        }),
    ))
}

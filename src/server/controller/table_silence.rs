use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        silence::{
            BulkSilenceDto, BulkSilenceResultDto, SilenceResultDto, SilenceTableDto,
            SilencedTablesDto,
        },
        table::TableIdsDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{silence::SilenceParam, table::TableIds},
        service::table_silence::TableSilenceService,
        state::AppState,
    },
};

/// Tag for grouping table silence endpoints in OpenAPI documentation
pub static TABLE_SILENCE_TAG: &str = "table-silence";

/// Silence a table so customer calls are not forwarded.
///
/// # Access Control
/// - `ActiveBusiness` - The table must belong to the caller's active business
///
/// # Returns
/// - `201 Created` - The new silence
/// - `403 Forbidden` - Table belongs to another business
/// - `409 Conflict` - Table is already silenced
/// - `422 Unprocessable Entity` - Duration outside 1 to 120 minutes or long notes
#[utoipa::path(
    post,
    path = "/api/waiter/tables/{id}/silence",
    tag = TABLE_SILENCE_TAG,
    params(("id" = i32, Path, description = "Table ID")),
    request_body = SilenceTableDto,
    responses(
        (status = 201, description = "Table silenced", body = SilenceResultDto),
        (status = 403, description = "Table outside the active business", body = ErrorDto),
        (status = 404, description = "Table not found", body = ErrorDto),
        (status = 409, description = "Table already silenced", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn silence_table(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<SilenceTableDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::ActiveBusiness])
        .await?;

    let param = SilenceParam::from_dto(payload)?;

    let silence = TableSilenceService::new(&state.db)
        .silence(auth.user.id, auth.business_id()?, id, param)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SilenceResultDto {
            message: "Table silenced".to_string(),
            silence: silence.into_dto(Utc::now()),
        }),
    ))
}

/// Lift the active silence of a table.
///
/// # Access Control
/// - `ActiveBusiness` - The table must belong to the caller's active business
///
/// # Returns
/// - `200 OK` - Silence lifted
/// - `404 Not Found` - Table not found or not silenced
#[utoipa::path(
    delete,
    path = "/api/waiter/tables/{id}/silence",
    tag = TABLE_SILENCE_TAG,
    params(("id" = i32, Path, description = "Table ID")),
    responses(
        (status = 200, description = "Silence lifted", body = MessageDto),
        (status = 403, description = "Table outside the active business", body = ErrorDto),
        (status = 404, description = "Table not silenced", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn unsilence_table(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::ActiveBusiness])
        .await?;

    unsilence(&state, auth.business_id()?, id).await
}

/// Lift the active silence of a table from the admin panel.
///
/// # Access Control
/// - `BusinessAdmin` - Admin of the active business
#[utoipa::path(
    delete,
    path = "/api/admin/tables/{id}/silence",
    tag = TABLE_SILENCE_TAG,
    params(("id" = i32, Path, description = "Table ID")),
    responses(
        (status = 200, description = "Silence lifted", body = MessageDto),
        (status = 403, description = "Not an admin, or table outside the business", body = ErrorDto),
        (status = 404, description = "Table not silenced", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn admin_unsilence_table(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::BusinessAdmin])
        .await?;

    unsilence(&state, auth.business_id()?, id).await
}

async fn unsilence(
    state: &AppState,
    business_id: i32,
    table_id: i32,
) -> Result<(StatusCode, Json<MessageDto>), AppError> {
    TableSilenceService::new(&state.db)
        .unsilence(business_id, table_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Table unsilenced".to_string(),
        }),
    ))
}

/// Get the active silences of the business's tables.
#[utoipa::path(
    get,
    path = "/api/waiter/tables/silenced",
    tag = TABLE_SILENCE_TAG,
    responses(
        (status = 200, description = "Silenced tables", body = SilencedTablesDto),
        (status = 400, description = "No active business", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_silenced_tables(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::ActiveBusiness])
        .await?;

    let silenced = TableSilenceService::new(&state.db)
        .get_silenced(auth.business_id()?)
        .await?;

    Ok((StatusCode::OK, Json(silenced)))
}

/// Get the active silences of the business's tables from the admin panel.
#[utoipa::path(
    get,
    path = "/api/admin/tables/silenced",
    tag = TABLE_SILENCE_TAG,
    responses(
        (status = 200, description = "Silenced tables", body = SilencedTablesDto),
        (status = 403, description = "Not an admin of the active business", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn admin_get_silenced_tables(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::BusinessAdmin])
        .await?;

    let silenced = TableSilenceService::new(&state.db)
        .get_silenced(auth.business_id()?)
        .await?;

    Ok((StatusCode::OK, Json(silenced)))
}

/// Silence several tables in one transaction.
///
/// # Returns
/// - `200 OK` - Per-table outcome and totals
/// - `400 Bad Request` - A table is outside the active business
/// - `422 Unprocessable Entity` - Invalid table list, duration or notes
#[utoipa::path(
    post,
    path = "/api/waiter/tables/silence/multiple",
    tag = TABLE_SILENCE_TAG,
    request_body = BulkSilenceDto,
    responses(
        (status = 200, description = "Bulk silence result", body = BulkSilenceResultDto),
        (status = 400, description = "Table outside the active business", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn silence_tables(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<BulkSilenceDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::ActiveBusiness])
        .await?;

    let ids = TableIds::parse(payload.table_ids)?;
    let param = SilenceParam::validate(payload.duration_minutes, payload.notes)?;

    let result = TableSilenceService::new(&state.db)
        .silence_many(auth.user.id, auth.business_id()?, ids, param)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}

/// Lift the silences of several tables in one transaction.
#[utoipa::path(
    post,
    path = "/api/waiter/tables/unsilence/multiple",
    tag = TABLE_SILENCE_TAG,
    request_body = TableIdsDto,
    responses(
        (status = 200, description = "Bulk unsilence result", body = BulkSilenceResultDto),
        (status = 400, description = "Table outside the active business", body = ErrorDto),
        (status = 422, description = "Invalid table list", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn unsilence_tables(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<TableIdsDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::ActiveBusiness])
        .await?;

    let ids = TableIds::parse(payload.table_ids)?;

    let result = TableSilenceService::new(&state.db)
        .unsilence_many(auth.business_id()?, ids)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}

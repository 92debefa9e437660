use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        table::{CreateTableDto, NotificationsToggleDto, TableDto, UpdateTableDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::table::{CreateTableParam, UpdateTableParam},
        service::table::TableService,
        state::AppState,
    },
};

/// Tag for grouping table endpoints in OpenAPI documentation
pub static TABLE_TAG: &str = "table";

/// List the tables of the active business ordered by number.
///
/// # Access Control
/// - `ActiveBusiness` - Any member of the active business
#[utoipa::path(
    get,
    path = "/api/tables",
    tag = TABLE_TAG,
    responses(
        (status = 200, description = "Tables of the active business", body = Vec<TableDto>),
        (status = 400, description = "No active business", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_tables(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::ActiveBusiness])
        .await?;

    let tables = TableService::new(&state.db)
        .get_by_business(auth.business_id()?)
        .await?;

    let tables = tables.into_iter().map(|table| table.into_dto()).collect::<Vec<_>>();

    Ok((StatusCode::OK, Json(tables)))
}

/// Create a table with a generated QR code.
///
/// # Access Control
/// - `BusinessAdmin` - Admin of the active business
///
/// # Returns
/// - `201 Created` - The new table
/// - `409 Conflict` - The number is taken in this business
/// - `422 Unprocessable Entity` - Invalid number or field lengths
#[utoipa::path(
    post,
    path = "/api/tables",
    tag = TABLE_TAG,
    request_body = CreateTableDto,
    responses(
        (status = 201, description = "Table created", body = TableDto),
        (status = 403, description = "Not an admin of the active business", body = ErrorDto),
        (status = 409, description = "Table number taken", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_table(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateTableDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::BusinessAdmin])
        .await?;

    let param = CreateTableParam::from_dto(payload)?;

    let table = TableService::new(&state.db)
        .create(auth.business_id()?, param)
        .await?;

    Ok((StatusCode::CREATED, Json(table.into_dto())))
}

/// Update a table of the active business.
///
/// # Access Control
/// - `BusinessAdmin` - Admin of the active business
#[utoipa::path(
    put,
    path = "/api/tables/{id}",
    tag = TABLE_TAG,
    params(("id" = i32, Path, description = "Table ID")),
    request_body = UpdateTableDto,
    responses(
        (status = 200, description = "Table updated", body = TableDto),
        (status = 403, description = "Not an admin, or table outside the business", body = ErrorDto),
        (status = 404, description = "Table not found", body = ErrorDto),
        (status = 409, description = "Table number taken", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_table(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTableDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::BusinessAdmin])
        .await?;

    let param = UpdateTableParam::from_dto(payload)?;

    let table = TableService::new(&state.db)
        .update(auth.business_id()?, id, param)
        .await?;

    Ok((StatusCode::OK, Json(table.into_dto())))
}

/// Delete a table of the active business along with its calls and silences.
///
/// # Access Control
/// - `BusinessAdmin` - Admin of the active business
#[utoipa::path(
    delete,
    path = "/api/tables/{id}",
    tag = TABLE_TAG,
    params(("id" = i32, Path, description = "Table ID")),
    responses(
        (status = 204, description = "Table deleted"),
        (status = 403, description = "Not an admin, or table outside the business", body = ErrorDto),
        (status = 404, description = "Table not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_table(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::BusinessAdmin])
        .await?;

    TableService::new(&state.db)
        .delete(auth.business_id()?, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Flip whether customers can call from a table.
///
/// # Access Control
/// - `ActiveBusiness` - Admins of the business, or the waiter assigned to the table
#[utoipa::path(
    post,
    path = "/api/tables/{id}/toggle-notifications",
    tag = TABLE_TAG,
    params(("id" = i32, Path, description = "Table ID")),
    responses(
        (status = 200, description = "Notifications toggled", body = NotificationsToggleDto),
        (status = 403, description = "Neither admin nor assigned waiter", body = ErrorDto),
        (status = 404, description = "Table not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn toggle_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::ActiveBusiness])
        .await?;

    let table = TableService::new(&state.db)
        .toggle_notifications(auth.user.id, auth.business_id()?, auth.is_admin(), id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(NotificationsToggleDto {
            table_id: table.id,
            notifications_enabled: table.notifications_enabled,
        }),
    ))
}

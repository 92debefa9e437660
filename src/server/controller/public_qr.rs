use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        public_qr::{PublicTableInfoDto, TableStatusDto},
    },
    server::{error::AppError, service::public_qr::PublicQrService, state::AppState},
};

/// Tag for grouping public QR endpoints in OpenAPI documentation
pub static PUBLIC_QR_TAG: &str = "public-qr";

/// Resolve the business and table codes printed on a QR code.
#[utoipa::path(
    get,
    path = "/api/qr/{business_code}/{table_code}",
    tag = PUBLIC_QR_TAG,
    params(
        ("business_code" = String, Path, description = "Business code"),
        ("table_code" = String, Path, description = "Table code")
    ),
    responses(
        (status = 200, description = "Business and table info", body = PublicTableInfoDto),
        (status = 404, description = "Unknown business or table", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_table_info(
    State(state): State<AppState>,
    Path((business_code, table_code)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let info = PublicQrService::new(&state.db)
        .get_table_info(&business_code, &table_code)
        .await?;

    Ok((StatusCode::OK, Json(info)))
}

/// Get whether a table can call right now and whether a call is already pending.
#[utoipa::path(
    get,
    path = "/api/table/{id}/status",
    tag = PUBLIC_QR_TAG,
    params(("id" = i32, Path, description = "Table ID")),
    responses(
        (status = 200, description = "Table status", body = TableStatusDto),
        (status = 404, description = "Table not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_table_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let status = PublicQrService::new(&state.db).get_table_status(id).await?;

    Ok((StatusCode::OK, Json(status)))
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        firebase::{FirebaseConfigResponseDto, TableFirebaseConfigDto},
    },
    server::{error::AppError, service::firebase::FirebaseConfigService, state::AppState},
};

/// Tag for grouping Firebase endpoints in OpenAPI documentation
pub static FIREBASE_TAG: &str = "firebase";

/// Get the Firebase client configuration.
///
/// Includes which values are configured and the realtime path templates, so clients can
/// tell whether realtime updates and push delivery are available.
///
/// # Returns
/// - `200 OK` - Client config, diagnostics and readiness flags
#[utoipa::path(
    get,
    path = "/api/firebase/config",
    tag = FIREBASE_TAG,
    responses(
        (status = 200, description = "Firebase client configuration", body = FirebaseConfigResponseDto)
    ),
)]
pub async fn get_firebase_config(State(state): State<AppState>) -> impl IntoResponse {
    let service = FirebaseConfigService::new(&state.db, &state.firebase);

    (StatusCode::OK, Json(service.get_config()))
}

/// Get the Firebase configuration and realtime paths for one table.
///
/// # Returns
/// - `200 OK` - Table summary, client config and Firestore paths
/// - `404 Not Found` - No such table
#[utoipa::path(
    get,
    path = "/api/firebase/table/{id}/config",
    tag = FIREBASE_TAG,
    params(("id" = i32, Path, description = "Table ID")),
    responses(
        (status = 200, description = "Table realtime configuration", body = TableFirebaseConfigDto),
        (status = 404, description = "Table not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_table_firebase_config(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = FirebaseConfigService::new(&state.db, &state.firebase);

    let config = service.get_table_config(id).await?;

    Ok((StatusCode::OK, Json(config)))
}

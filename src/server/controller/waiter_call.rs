use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;

use crate::{
    model::{
        api::ErrorDto,
        waiter_call::{
            AcknowledgeCallResultDto, CallRejectedDto, CallSilencedDto, CallWaiterDto,
            CallWaiterResultDto, CompleteCallResultDto, PendingCallsDto, WaiterInfoDto,
        },
    },
    server::{
        error::AppError,
        middleware::{
            auth::AuthGuard,
            client_ip::{user_agent, ClientIp},
        },
        model::waiter_call::CallWaiterParam,
        service::waiter_call::{CallOrigin, CallOutcome, WaiterCallService},
        state::AppState,
    },
};

/// Tag for grouping waiter call endpoints in OpenAPI documentation
pub static WAITER_CALL_TAG: &str = "waiter-call";

/// Call the waiter assigned to a table.
///
/// Public endpoint used from the table's QR page. A caller whose IP is blocked gets a
/// response that looks like success but nothing is stored or sent.
///
/// # Arguments
/// - `state` - Application state containing the database connection and push sender
/// - `client_ip` - Caller IP from proxy headers or the socket
/// - `headers` - Request headers, for the user agent
/// - `table_id` - Table the customer is sitting at
/// - `payload` - Optional message, urgency and client details
///
/// # Returns
/// - `201 Created` - Call stored and the waiter notified
/// - `200 OK` - Table is silenced, or the caller is blocked
/// - `400 Bad Request` - Notifications are disabled for the table
/// - `404 Not Found` - No such table
/// - `409 Conflict` - A call from this table is already pending
/// - `422 Unprocessable Entity` - No waiter assigned, or invalid payload
/// - `429 Too Many Requests` - Too many calls, the table was silenced
#[utoipa::path(
    post,
    path = "/api/tables/{id}/call-waiter",
    tag = WAITER_CALL_TAG,
    params(("id" = i32, Path, description = "Table ID")),
    request_body = CallWaiterDto,
    responses(
        (status = 201, description = "Waiter called", body = CallWaiterResultDto),
        (status = 200, description = "Table silenced", body = CallSilencedDto),
        (status = 400, description = "Notifications disabled", body = ErrorDto),
        (status = 404, description = "Table not found", body = ErrorDto),
        (status = 409, description = "Call already pending", body = ErrorDto),
        (status = 422, description = "No waiter assigned", body = CallRejectedDto),
        (status = 429, description = "Too many calls", body = CallRejectedDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn call_waiter(
    State(state): State<AppState>,
    ClientIp(ip_address): ClientIp,
    headers: HeaderMap,
    Path(table_id): Path<i32>,
    Json(payload): Json<CallWaiterDto>,
) -> Result<Response, AppError> {
    let param = CallWaiterParam::from_dto(payload)?;
    let origin = CallOrigin {
        ip_address,
        user_agent: user_agent(&headers),
    };

    let outcome = WaiterCallService::new(&state.db, state.push.as_ref())
        .call_waiter(table_id, param, origin)
        .await?;

    let response = match outcome {
        CallOutcome::Created { call, waiter } => (
            StatusCode::CREATED,
            Json(CallWaiterResultDto {
                call_id: call.id,
                status: call.status.as_str().to_string(),
                message: "Waiter has been called".to_string(),
                waiter: WaiterInfoDto {
                    id: waiter.id,
                    name: waiter.name,
                },
                called_at: call.called_at,
                blocked: None,
            }),
        )
            .into_response(),
        CallOutcome::Blocked {
            fake_call_id,
            waiter_id,
            waiter_name,
            called_at,
        } => (
            StatusCode::OK,
            Json(CallWaiterResultDto {
                call_id: fake_call_id,
                status: "pending".to_string(),
                message: "Waiter has been called".to_string(),
                waiter: WaiterInfoDto {
                    id: waiter_id,
                    name: waiter_name,
                },
                called_at,
                blocked: Some(true),
            }),
        )
            .into_response(),
        CallOutcome::Silenced {
            reason,
            remaining_minutes,
        } => (
            StatusCode::OK,
            Json(CallSilencedDto {
                status: "silenced".to_string(),
                message: "This table is temporarily silenced. Please wait before calling again."
                    .to_string(),
                reason: reason.as_str().to_string(),
                remaining_minutes,
            }),
        )
            .into_response(),
    };

    Ok(response)
}

/// Acknowledge one of the caller's pending calls.
///
/// # Access Control
/// - Waiter the call is routed to
///
/// # Returns
/// - `200 OK` - The acknowledged call with its response time
/// - `403 Forbidden` - The call belongs to another waiter
/// - `404 Not Found` - No such call
/// - `409 Conflict` - The call is not pending
#[utoipa::path(
    post,
    path = "/api/waiter/calls/{id}/acknowledge",
    tag = WAITER_CALL_TAG,
    params(("id" = i32, Path, description = "Call ID")),
    responses(
        (status = 200, description = "Call acknowledged", body = AcknowledgeCallResultDto),
        (status = 403, description = "Call assigned to another waiter", body = ErrorDto),
        (status = 404, description = "Call not found", body = ErrorDto),
        (status = 409, description = "Call is not pending", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn acknowledge_call(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let (call, table) = WaiterCallService::new(&state.db, state.push.as_ref())
        .acknowledge(auth.user.id, id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(AcknowledgeCallResultDto {
            message: "Call acknowledged".to_string(),
            call: call.into_dto(table.as_ref(), Utc::now()),
        }),
    ))
}

/// Complete one of the caller's open calls.
///
/// # Access Control
/// - Waiter the call is routed to
///
/// # Returns
/// - `200 OK` - The completed call with the total handling time
/// - `403 Forbidden` - The call belongs to another waiter
/// - `404 Not Found` - No such call
/// - `409 Conflict` - The call was already completed or cancelled
#[utoipa::path(
    post,
    path = "/api/waiter/calls/{id}/complete",
    tag = WAITER_CALL_TAG,
    params(("id" = i32, Path, description = "Call ID")),
    responses(
        (status = 200, description = "Call completed", body = CompleteCallResultDto),
        (status = 403, description = "Call assigned to another waiter", body = ErrorDto),
        (status = 404, description = "Call not found", body = ErrorDto),
        (status = 409, description = "Call already closed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn complete_call(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let (call, table) = WaiterCallService::new(&state.db, state.push.as_ref())
        .complete(auth.user.id, id)
        .await?;

    let total_time_seconds = call.completion_time_seconds().unwrap_or(0);

    Ok((
        StatusCode::OK,
        Json(CompleteCallResultDto {
            message: "Call completed".to_string(),
            call: call.into_dto(table.as_ref(), Utc::now()),
            total_time_seconds,
        }),
    ))
}

/// Get the caller's pending calls, oldest first.
#[utoipa::path(
    get,
    path = "/api/waiter/calls/pending",
    tag = WAITER_CALL_TAG,
    responses(
        (status = 200, description = "Pending calls", body = PendingCallsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_pending_calls(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let pending = WaiterCallService::new(&state.db, state.push.as_ref())
        .get_pending(auth.user.id)
        .await?;

    Ok((StatusCode::OK, Json(pending)))
}

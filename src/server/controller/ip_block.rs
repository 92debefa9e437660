use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        ip_block::{
            BlockIpDto, BlockIpResultDto, ForceUnblockResultDto, IpBlockListDto, IpDebugDto,
            UnblockIpDto,
        },
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthContext, AuthGuard, Permission},
            client_ip::ClientIp,
        },
        model::ip_block::{BlockIpParam, BlockReason},
        service::ip_block::IpBlockService,
        state::AppState,
    },
};

/// Tag for grouping IP block endpoints in OpenAPI documentation
pub static IP_BLOCK_TAG: &str = "ip-block";

#[derive(Deserialize)]
pub struct BlockedIpsQuery {
    #[serde(default = "default_active_only")]
    pub active_only: bool,
    pub reason: Option<String>,
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

#[derive(Deserialize)]
pub struct IpDebugQuery {
    pub ip: Option<String>,
    pub business_id: Option<i32>,
}

fn default_active_only() -> bool {
    true
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    20
}

/// Explicit business from the request, else the caller's active business.
fn target_business(auth: &AuthContext, business_id: Option<i32>) -> Result<i32, AppError> {
    match business_id {
        Some(id) => Ok(id),
        None => auth.business_id(),
    }
}

/// Block the IP a call was made from.
///
/// Future calls from the IP to any table of the business get a fake success. The call's
/// table is silenced for 24 hours unless it already is.
///
/// # Access Control
/// - Waiter the call is routed to
///
/// # Returns
/// - `201 Created` - The block and whether the table was silenced
/// - `400 Bad Request` - The call has no recorded IP
/// - `403 Forbidden` - The call belongs to another waiter
/// - `404 Not Found` - No such call
/// - `409 Conflict` - The IP is already blocked
#[utoipa::path(
    post,
    path = "/api/waiter/ip/block",
    tag = IP_BLOCK_TAG,
    request_body = BlockIpDto,
    responses(
        (status = 201, description = "IP blocked", body = BlockIpResultDto),
        (status = 400, description = "Call has no IP", body = ErrorDto),
        (status = 403, description = "Call assigned to another waiter", body = ErrorDto),
        (status = 404, description = "Call not found", body = ErrorDto),
        (status = 409, description = "IP already blocked", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn block_ip(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<BlockIpDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let param = BlockIpParam::from_dto(payload)?;

    let (block, table_silenced) = IpBlockService::new(&state.db)
        .block(auth.user.id, param)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BlockIpResultDto {
            message: "IP blocked".to_string(),
            block: block.into_dto(Utc::now()),
            table_silenced,
        }),
    ))
}

/// Lift the active block of an IP.
///
/// # Returns
/// - `200 OK` - IP unblocked
/// - `400 Bad Request` - No business given and none active
/// - `403 Forbidden` - Not a member of the business
/// - `404 Not Found` - The IP is not blocked
#[utoipa::path(
    post,
    path = "/api/waiter/ip/unblock",
    tag = IP_BLOCK_TAG,
    request_body = UnblockIpDto,
    responses(
        (status = 200, description = "IP unblocked", body = MessageDto),
        (status = 400, description = "No active business", body = ErrorDto),
        (status = 403, description = "Not a member of the business", body = ErrorDto),
        (status = 404, description = "IP not blocked", body = ErrorDto),
        (status = 422, description = "Malformed IP", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn unblock_ip(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UnblockIpDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers).require(&[]).await?;
    let business_id = target_business(&auth, payload.business_id)?;

    IpBlockService::new(&state.db)
        .unblock(auth.user.id, business_id, &payload.ip_address)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "IP unblocked".to_string(),
        }),
    ))
}

/// List IP blocks of the active business, newest first.
#[utoipa::path(
    get,
    path = "/api/waiter/ip/blocked",
    tag = IP_BLOCK_TAG,
    params(
        ("active_only" = Option<bool>, Query, description = "Only active blocks (default: true)"),
        ("reason" = Option<String>, Query, description = "spam, abuse or manual"),
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 20, max: 100)")
    ),
    responses(
        (status = 200, description = "IP blocks", body = IpBlockListDto),
        (status = 400, description = "No active business", body = ErrorDto),
        (status = 422, description = "Unknown reason", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_blocked_ips(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<BlockedIpsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::ActiveBusiness])
        .await?;

    let reason = match query.reason.as_deref() {
        None | Some("") => None,
        Some(value) => Some(BlockReason::parse(value).ok_or_else(|| {
            AppError::Validation("The selected reason is invalid.".to_string())
        })?),
    };

    let blocks = IpBlockService::new(&state.db)
        .get_paginated(
            auth.business_id()?,
            query.active_only,
            reason,
            query.page,
            query.per_page,
        )
        .await?;

    Ok((StatusCode::OK, Json(blocks)))
}

/// Inspect every block record and the latest calls of an IP.
///
/// Without `ip` the caller's own address is inspected.
///
/// # Access Control
/// - Admin of the inspected business
#[utoipa::path(
    get,
    path = "/api/admin/ip/debug",
    tag = IP_BLOCK_TAG,
    params(
        ("ip" = Option<String>, Query, description = "IP to inspect (default: caller IP)"),
        ("business_id" = Option<i32>, Query, description = "Business (default: active business)")
    ),
    responses(
        (status = 200, description = "IP block state", body = IpDebugDto),
        (status = 400, description = "No IP or business", body = ErrorDto),
        (status = 403, description = "Not an admin of the business", body = ErrorDto),
        (status = 422, description = "Malformed IP", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn debug_ip(
    State(state): State<AppState>,
    ClientIp(client_ip): ClientIp,
    headers: HeaderMap,
    Query(query): Query<IpDebugQuery>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers).require(&[]).await?;
    let business_id = target_business(&auth, query.business_id)?;

    let ip = query
        .ip
        .or(client_ip)
        .ok_or_else(|| AppError::BadRequest("No IP address to inspect".to_string()))?;

    let debug = IpBlockService::new(&state.db)
        .debug(auth.user.id, business_id, &ip)
        .await?;

    Ok((StatusCode::OK, Json(debug)))
}

/// Close every open block record of an IP, expired ones included.
///
/// # Access Control
/// - Admin of the business
#[utoipa::path(
    post,
    path = "/api/admin/ip/force-unblock",
    tag = IP_BLOCK_TAG,
    request_body = UnblockIpDto,
    responses(
        (status = 200, description = "Block records closed", body = ForceUnblockResultDto),
        (status = 400, description = "No active business", body = ErrorDto),
        (status = 403, description = "Not an admin of the business", body = ErrorDto),
        (status = 422, description = "Malformed IP", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn force_unblock_ip(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UnblockIpDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers).require(&[]).await?;
    let business_id = target_business(&auth, payload.business_id)?;

    let result = IpBlockService::new(&state.db)
        .force_unblock(auth.user.id, business_id, &payload.ip_address)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ForceUnblockResultDto {
            message: format!("{} block records closed", result.unblocked_count),
            unblocked_count: result.unblocked_count,
            still_blocked: result.still_blocked,
        }),
    ))
}

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        notification::{
            DeleteDeviceTokenDto, DeviceTokenDto, NotificationDto, NotificationListDto,
            NotifiedUserDto, RegisterDeviceTokenDto, SendTestNotificationDto,
            SendTestNotificationResultDto, SendUserNotificationDto, SendUserNotificationResultDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::notification::{PushContentParam, RegisterDeviceTokenParam},
        service::notification::NotificationService,
        state::AppState,
    },
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

/// Send a test notification to every member of the active business.
///
/// # Access Control
/// - `BusinessAdmin` - Admin of the active business
///
/// # Returns
/// - `200 OK` - How many members were notified
/// - `404 Not Found` - The business has no members
/// - `422 Unprocessable Entity` - Title or body too long
#[utoipa::path(
    post,
    path = "/api/admin/send-test-notification",
    tag = NOTIFICATION_TAG,
    request_body = SendTestNotificationDto,
    responses(
        (status = 200, description = "Test notification sent", body = SendTestNotificationResultDto),
        (status = 403, description = "Not an admin of the active business", body = ErrorDto),
        (status = 404, description = "No users in the business", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn send_test_notification(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SendTestNotificationDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::BusinessAdmin])
        .await?;

    let content = PushContentParam::from_test_dto(payload)?;

    let result = NotificationService::new(&state.db, state.push.as_ref())
        .send_test(auth.business_id()?, content)
        .await?;

    Ok((
        StatusCode::OK,
        Json(SendTestNotificationResultDto {
            message: format!(
                "Test notification sent to {} of {} users",
                result.users_notified, result.total_users
            ),
            users_notified: result.users_notified,
            total_users: result.total_users,
        }),
    ))
}

/// Send a notification to one member of the active business.
///
/// # Access Control
/// - `BusinessAdmin` - Admin of the active business
///
/// # Returns
/// - `200 OK` - The notified user
/// - `403 Forbidden` - The user is not a member of the business
/// - `404 Not Found` - No such user
/// - `500 Internal Server Error` - Push delivery failed
#[utoipa::path(
    post,
    path = "/api/admin/send-notification-to-user",
    tag = NOTIFICATION_TAG,
    request_body = SendUserNotificationDto,
    responses(
        (status = 200, description = "Notification sent", body = SendUserNotificationResultDto),
        (status = 403, description = "User outside the business", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Failed to send notification", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn send_notification_to_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SendUserNotificationDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers)
        .require(&[Permission::BusinessAdmin])
        .await?;

    let content = PushContentParam::from_user_dto(&payload)?;

    let user = NotificationService::new(&state.db, state.push.as_ref())
        .send_to_user(auth.business_id()?, payload.user_id, content, payload.data)
        .await?;

    Ok((
        StatusCode::OK,
        Json(SendUserNotificationResultDto {
            message: "Notification sent".to_string(),
            sent_to: NotifiedUserDto {
                id: user.id,
                name: user.name,
            },
        }),
    ))
}

/// Register a push device for the caller.
///
/// Registering a token that already exists moves it to the caller.
#[utoipa::path(
    post,
    path = "/api/device-token",
    tag = NOTIFICATION_TAG,
    request_body = RegisterDeviceTokenDto,
    responses(
        (status = 200, description = "Device registered", body = DeviceTokenDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn register_device_token(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<RegisterDeviceTokenDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let param = RegisterDeviceTokenParam::from_dto(payload)?;

    let device = NotificationService::new(&state.db, state.push.as_ref())
        .register_device(auth.user.id, param)
        .await?;

    Ok((StatusCode::OK, Json(device.into_dto())))
}

/// Remove one of the caller's push devices.
#[utoipa::path(
    delete,
    path = "/api/device-token",
    tag = NOTIFICATION_TAG,
    request_body = DeleteDeviceTokenDto,
    responses(
        (status = 200, description = "Device removed", body = MessageDto),
        (status = 404, description = "Device token not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_device_token(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<DeleteDeviceTokenDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    NotificationService::new(&state.db, state.push.as_ref())
        .remove_device(auth.user.id, &payload.token)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Device token removed".to_string(),
        }),
    ))
}

/// Get the caller's latest notifications and unread count.
#[utoipa::path(
    get,
    path = "/api/user/notifications",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Notification inbox", body = NotificationListDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let (notifications, unread_count) = NotificationService::new(&state.db, state.push.as_ref())
        .get_inbox(auth.user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(NotificationListDto {
            notifications: notifications.into_iter().map(|n| n.into_dto()).collect(),
            unread_count,
        }),
    ))
}

/// Mark one of the caller's notifications as read.
#[utoipa::path(
    post,
    path = "/api/user/notifications/{id}/read",
    tag = NOTIFICATION_TAG,
    params(("id" = i32, Path, description = "Notification ID")),
    responses(
        (status = 200, description = "Notification marked as read", body = NotificationDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let notification = NotificationService::new(&state.db, state.push.as_ref())
        .mark_read(auth.user.id, id)
        .await?;

    Ok((StatusCode::OK, Json(notification.into_dto())))
}

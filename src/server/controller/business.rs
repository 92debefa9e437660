use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        business::{
            BusinessActionDto, BusinessDto, CreateBusinessDto, JoinBusinessDto, MembershipDto,
            SwitchBusinessDto, UpdateBusinessDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::business::{BusinessDetailsParam, MemberRole},
        service::business::BusinessService,
        state::AppState,
    },
};

/// Tag for grouping business endpoints in OpenAPI documentation
pub static BUSINESS_TAG: &str = "business";

/// List the caller's businesses.
///
/// # Access Control
/// - Authenticated user
///
/// # Returns
/// - `200 OK` - Every business the caller belongs to with their role and whether it is active
#[utoipa::path(
    get,
    path = "/api/businesses",
    tag = BUSINESS_TAG,
    responses(
        (status = 200, description = "Businesses of the caller", body = Vec<MembershipDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_businesses(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let memberships = BusinessService::new(&state.db)
        .get_for_user(auth.user.id)
        .await?;

    let memberships = memberships
        .into_iter()
        .map(|entry| MembershipDto {
            is_active: auth.user.active_business_id == Some(entry.business.id),
            business: entry.business.into_dto(entry.role == MemberRole::Admin),
            role: entry.role.as_str().to_string(),
        })
        .collect::<Vec<_>>();

    Ok((StatusCode::OK, Json(memberships)))
}

/// Create a business.
///
/// The caller becomes its admin and, when they had no active business, it becomes active.
///
/// # Access Control
/// - Authenticated user
///
/// # Returns
/// - `201 Created` - The business including its join code
/// - `422 Unprocessable Entity` - Invalid details
#[utoipa::path(
    post,
    path = "/api/businesses",
    tag = BUSINESS_TAG,
    request_body = CreateBusinessDto,
    responses(
        (status = 201, description = "Business created", body = BusinessDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_business(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateBusinessDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let details = BusinessDetailsParam::from_create_dto(payload)?;

    let business = BusinessService::new(&state.db)
        .create(&auth.user, details)
        .await?;

    Ok((StatusCode::CREATED, Json(business.into_dto(true))))
}

/// Get a business the caller belongs to.
///
/// # Access Control
/// - Member of the business
///
/// # Returns
/// - `200 OK` - The business, with the join code for admins
/// - `403 Forbidden` - Not a member
/// - `404 Not Found` - No such business
#[utoipa::path(
    get,
    path = "/api/businesses/{id}",
    tag = BUSINESS_TAG,
    params(("id" = i32, Path, description = "Business ID")),
    responses(
        (status = 200, description = "Business details", body = BusinessDto),
        (status = 403, description = "Not a member", body = ErrorDto),
        (status = 404, description = "Business not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_business(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let (business, membership) = BusinessService::new(&state.db)
        .get(auth.user.id, id)
        .await?;

    Ok((StatusCode::OK, Json(business.into_dto(membership.is_admin()))))
}

/// Update a business.
///
/// # Access Control
/// - Admin of the business
///
/// # Returns
/// - `200 OK` - The updated business
/// - `403 Forbidden` - Not an admin of the business
/// - `404 Not Found` - No such business
/// - `422 Unprocessable Entity` - Invalid details
#[utoipa::path(
    put,
    path = "/api/businesses/{id}",
    tag = BUSINESS_TAG,
    params(("id" = i32, Path, description = "Business ID")),
    request_body = UpdateBusinessDto,
    responses(
        (status = 200, description = "Business updated", body = BusinessDto),
        (status = 403, description = "Not an admin of the business", body = ErrorDto),
        (status = 404, description = "Business not found", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_business(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBusinessDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let details = BusinessDetailsParam::from_update_dto(payload)?;

    let business = BusinessService::new(&state.db)
        .update(auth.user.id, id, details)
        .await?;

    Ok((StatusCode::OK, Json(business.into_dto(true))))
}

/// Delete a business.
///
/// Members who had it active are left without an active business.
///
/// # Access Control
/// - Admin of the business
///
/// # Returns
/// - `204 No Content` - Deleted
/// - `403 Forbidden` - Not an admin of the business
/// - `404 Not Found` - No such business
#[utoipa::path(
    delete,
    path = "/api/businesses/{id}",
    tag = BUSINESS_TAG,
    params(("id" = i32, Path, description = "Business ID")),
    responses(
        (status = 204, description = "Business deleted"),
        (status = 403, description = "Not an admin of the business", body = ErrorDto),
        (status = 404, description = "Business not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_business(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    BusinessService::new(&state.db)
        .delete(auth.user.id, id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Join a business with its join code as a waiter.
///
/// # Access Control
/// - Authenticated user
///
/// # Returns
/// - `200 OK` - Joined
/// - `409 Conflict` - Already a member
/// - `422 Unprocessable Entity` - Unknown join code
#[utoipa::path(
    post,
    path = "/api/businesses/join",
    tag = BUSINESS_TAG,
    request_body = JoinBusinessDto,
    responses(
        (status = 200, description = "Joined the business", body = BusinessActionDto),
        (status = 409, description = "Already a member", body = ErrorDto),
        (status = 422, description = "Invalid join code", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn join_business(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<JoinBusinessDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let business = BusinessService::new(&state.db)
        .join(&auth.user, &payload.join_code)
        .await?;

    Ok((
        StatusCode::OK,
        Json(BusinessActionDto {
            message: format!("You have joined {}", business.name),
            business: business.into_dto(false),
        }),
    ))
}

/// Switch the caller's active business.
///
/// # Access Control
/// - Member of the target business
///
/// # Returns
/// - `200 OK` - The now active business
/// - `403 Forbidden` - Not a member
#[utoipa::path(
    post,
    path = "/api/businesses/switch",
    tag = BUSINESS_TAG,
    request_body = SwitchBusinessDto,
    responses(
        (status = 200, description = "Active business switched", body = BusinessActionDto),
        (status = 403, description = "Not a member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn switch_business(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SwitchBusinessDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth = AuthGuard::new(&state.db, &headers).require(&[]).await?;

    let (business, membership) = BusinessService::new(&state.db)
        .switch(auth.user.id, payload.business_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(BusinessActionDto {
            message: format!("Switched to {}", business.name),
            business: business.into_dto(membership.is_admin()),
        }),
    ))
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        plan::{PlanDto, PricingDto},
    },
    server::{error::AppError, service::plan::PlanService, state::AppState},
};

/// Tag for grouping plan endpoints in OpenAPI documentation
pub static PLAN_TAG: &str = "plan";

/// List active subscription plans in display order.
#[utoipa::path(
    get,
    path = "/api/plans",
    tag = PLAN_TAG,
    responses(
        (status = 200, description = "Active plans", body = Vec<PlanDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_plans(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let plans = PlanService::new(&state.db).get_active().await?;

    let plans = plans.into_iter().map(|plan| plan.into_dto()).collect::<Vec<_>>();

    Ok((StatusCode::OK, Json(plans)))
}

/// Get an active plan.
///
/// # Returns
/// - `200 OK` - The plan
/// - `404 Not Found` - No such plan, or it is inactive
#[utoipa::path(
    get,
    path = "/api/plans/{id}",
    tag = PLAN_TAG,
    params(("id" = i32, Path, description = "Plan ID")),
    responses(
        (status = 200, description = "Plan details", body = PlanDto),
        (status = 404, description = "Plan not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_plan(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let plan = PlanService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(plan.into_dto())))
}

/// Get the pricing page data: every active plan plus the featured and popular one.
#[utoipa::path(
    get,
    path = "/api/plans/pricing",
    tag = PLAN_TAG,
    responses(
        (status = 200, description = "Pricing overview", body = PricingDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pricing(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let pricing = PlanService::new(&state.db).get_pricing().await?;

    Ok((
        StatusCode::OK,
        Json(PricingDto {
            plans: pricing.plans.into_iter().map(|plan| plan.into_dto()).collect(),
            featured: pricing.featured.map(|plan| plan.into_dto()),
            popular: pricing.popular.map(|plan| plan.into_dto()),
        }),
    ))
}

use sea_orm::DatabaseConnection;

use crate::server::{data::plan::PlanRepository, error::AppError, model::plan::Plan};

/// Active plans split out for the pricing page.
#[derive(Debug, Clone, PartialEq)]
pub struct Pricing {
    pub plans: Vec<Plan>,
    pub featured: Option<Plan>,
    pub popular: Option<Plan>,
}

pub struct PlanService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets active plans in display order.
    pub async fn get_active(&self) -> Result<Vec<Plan>, AppError> {
        Ok(PlanRepository::new(self.db).get_active().await?)
    }

    /// Gets an active plan; inactive plans are reported as missing.
    pub async fn get_by_id(&self, id: i32) -> Result<Plan, AppError> {
        PlanRepository::new(self.db)
            .find_active_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Plan not found".to_string()))
    }

    /// Gets active plans plus the first featured and first popular plan.
    pub async fn get_pricing(&self) -> Result<Pricing, AppError> {
        let plans = self.get_active().await?;

        let featured = plans.iter().find(|plan| plan.is_featured).cloned();
        let popular = plans.iter().find(|plan| plan.is_popular).cloned();

        Ok(Pricing {
            plans,
            featured,
            popular,
        })
    }
}

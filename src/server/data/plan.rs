//! Subscription plan repository. Plans are read-only at runtime.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::plan::Plan;

pub struct PlanRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets active plans in display order.
    pub async fn get_active(&self) -> Result<Vec<Plan>, DbErr> {
        let plans = entity::prelude::Plan::find()
            .filter(entity::plan::Column::IsActive.eq(true))
            .order_by_asc(entity::plan::Column::SortOrder)
            .order_by_asc(entity::plan::Column::Id)
            .all(self.db)
            .await?;

        Ok(plans.into_iter().map(Plan::from_entity).collect())
    }

    /// Finds an active plan. Inactive plans are treated as missing.
    pub async fn find_active_by_id(&self, id: i32) -> Result<Option<Plan>, DbErr> {
        let plan = entity::prelude::Plan::find_by_id(id)
            .filter(entity::plan::Column::IsActive.eq(true))
            .one(self.db)
            .await?;

        Ok(plan.map(Plan::from_entity))
    }
}

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating subscription plans.
///
/// Defaults to an active, monthly plan priced at 19.99 USD sorted by creation order.
pub struct PlanFactory<'a> {
    db: &'a DatabaseConnection,
    code: String,
    name: String,
    price_cents: i64,
    sort_order: i32,
    is_featured: bool,
    is_popular: bool,
    is_active: bool,
}

impl<'a> PlanFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            code: format!("PLAN{}", id),
            name: format!("Plan {}", id),
            price_cents: 1999,
            sort_order: id as i32,
            is_featured: false,
            is_popular: false,
            is_active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn price_cents(mut self, price_cents: i64) -> Self {
        self.price_cents = price_cents;
        self
    }

    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.is_featured = featured;
        self
    }

    pub fn popular(mut self, popular: bool) -> Self {
        self.is_popular = popular;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    pub async fn build(self) -> Result<entity::plan::Model, DbErr> {
        entity::plan::ActiveModel {
            code: ActiveValue::Set(self.code),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(Some("Test plan".to_string())),
            billing_period: ActiveValue::Set("monthly".to_string()),
            price_cents: ActiveValue::Set(self.price_cents),
            currency: ActiveValue::Set("USD".to_string()),
            yearly_discount_percent: ActiveValue::Set(20),
            trial_enabled: ActiveValue::Set(true),
            trial_days: ActiveValue::Set(14),
            features: ActiveValue::Set(serde_json::json!(["Waiter calls", "Table management"])),
            limits: ActiveValue::Set(serde_json::json!({ "max_tables": 10 })),
            sort_order: ActiveValue::Set(self.sort_order),
            is_featured: ActiveValue::Set(self.is_featured),
            is_popular: ActiveValue::Set(self.is_popular),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_plan(db: &DatabaseConnection) -> Result<entity::plan::Model, DbErr> {
    PlanFactory::new(db).build().await
}

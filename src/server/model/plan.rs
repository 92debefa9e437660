//! Subscription plan domain model.

use crate::model::plan::PlanDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub billing_period: String,
    pub price_cents: i64,
    pub currency: String,
    pub yearly_discount_percent: i32,
    pub trial_enabled: bool,
    pub trial_days: i32,
    pub features: serde_json::Value,
    pub limits: serde_json::Value,
    pub is_featured: bool,
    pub is_popular: bool,
    pub is_active: bool,
}

impl Plan {
    pub fn from_entity(entity: entity::plan::Model) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            name: entity.name,
            description: entity.description,
            billing_period: entity.billing_period,
            price_cents: entity.price_cents,
            currency: entity.currency,
            yearly_discount_percent: entity.yearly_discount_percent,
            trial_enabled: entity.trial_enabled,
            trial_days: entity.trial_days,
            features: entity.features,
            limits: entity.limits,
            is_featured: entity.is_featured,
            is_popular: entity.is_popular,
            is_active: entity.is_active,
        }
    }

    /// Display price such as `USD 29.99`.
    pub fn formatted_price(&self) -> String {
        format!(
            "{} {}.{:02}",
            self.currency,
            self.price_cents / 100,
            self.price_cents % 100
        )
    }

    /// Twelve monthly payments with the yearly discount applied, rounded to the cent.
    pub fn yearly_price_cents(&self) -> i64 {
        let full = self.price_cents * 12;
        let discount = i64::from(self.yearly_discount_percent.clamp(0, 100));
        (full * (100 - discount) + 50) / 100
    }

    pub fn into_dto(self) -> PlanDto {
        let formatted_price = self.formatted_price();
        let yearly_price_cents = self.yearly_price_cents();
        PlanDto {
            id: self.id,
            code: self.code,
            name: self.name,
            description: self.description,
            billing_period: self.billing_period,
            price_cents: self.price_cents,
            currency: self.currency,
            formatted_price,
            yearly_discount_percent: self.yearly_discount_percent,
            yearly_price_cents,
            trial_enabled: self.trial_enabled,
            trial_days: if self.trial_enabled { self.trial_days } else { 0 },
            features: self.features,
            limits: self.limits,
            is_featured: self.is_featured,
            is_popular: self.is_popular,
        }
    }
}

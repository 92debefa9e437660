use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PlanDto {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub billing_period: String,
    pub price_cents: i64,
    pub currency: String,
    /// Price formatted for display, e.g. `"USD 29.99"`.
    pub formatted_price: String,
    pub yearly_discount_percent: i32,
    /// Twelve months of the monthly price with the yearly discount applied.
    pub yearly_price_cents: i64,
    pub trial_enabled: bool,
    pub trial_days: i32,
    #[schema(value_type = Vec<String>)]
    pub features: serde_json::Value,
    #[schema(value_type = Object)]
    pub limits: serde_json::Value,
    pub is_featured: bool,
    pub is_popular: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PricingDto {
    pub plans: Vec<PlanDto>,
    pub featured: Option<PlanDto>,
    pub popular: Option<PlanDto>,
}

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "plan")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    /// `monthly` or `yearly`.
    pub billing_period: String,
    pub price_cents: i64,
    pub currency: String,
    pub yearly_discount_percent: i32,
    pub trial_enabled: bool,
    pub trial_days: i32,
    pub features: Json,
    pub limits: Json,
    pub sort_order: i32,
    pub is_featured: bool,
    pub is_popular: bool,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

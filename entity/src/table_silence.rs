use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "table_silence")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub table_id: i32,
    pub silenced_by: Option<i32>,
    /// `manual` or `automatic`.
    pub reason: String,
    pub notes: Option<String>,
    pub call_count: Option<i32>,
    pub silenced_at: DateTimeUtc,
    pub expires_at: Option<DateTimeUtc>,
    pub unsilenced_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::restaurant_table::Entity",
        from = "Column::TableId",
        to = "super::restaurant_table::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    RestaurantTable,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::SilencedBy",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    SilencedBy,
}

impl Related<super::restaurant_table::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RestaurantTable.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

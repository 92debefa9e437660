use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "restaurant_table")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub business_id: i32,
    pub number: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub code: String,
    pub capacity: Option<i32>,
    pub location: Option<String>,
    pub notifications_enabled: bool,
    pub active_waiter_id: Option<i32>,
    pub waiter_assigned_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::business::Entity",
        from = "Column::BusinessId",
        to = "super::business::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Business,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ActiveWaiterId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    ActiveWaiter,
    #[sea_orm(has_many = "super::waiter_call::Entity")]
    WaiterCall,
    #[sea_orm(has_many = "super::table_silence::Entity")]
    TableSilence,
}

impl Related<super::business::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Business.def()
    }
}

impl Related<super::waiter_call::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WaiterCall.def()
    }
}

impl Related<super::table_silence::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TableSilence.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

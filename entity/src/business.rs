use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "business")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub code: String,
    #[sea_orm(unique)]
    pub join_code: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub logo: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::business_member::Entity")]
    BusinessMember,
    #[sea_orm(has_many = "super::restaurant_table::Entity")]
    RestaurantTable,
    #[sea_orm(has_many = "super::ip_block::Entity")]
    IpBlock,
}

impl Related<super::business_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BusinessMember.def()
    }
}

impl Related<super::restaurant_table::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RestaurantTable.def()
    }
}

impl Related<super::ip_block::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IpBlock.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

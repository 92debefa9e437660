use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_business_table::Business, m20260301_000002_create_user_table::User,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RestaurantTable::Table)
                    .if_not_exists()
                    .col(pk_auto(RestaurantTable::Id))
                    .col(integer(RestaurantTable::BusinessId))
                    .col(integer(RestaurantTable::Number))
                    .col(string(RestaurantTable::Name))
                    .col(string_uniq(RestaurantTable::Code))
                    .col(integer_null(RestaurantTable::Capacity))
                    .col(string_null(RestaurantTable::Location))
                    .col(boolean(RestaurantTable::NotificationsEnabled).default(true))
                    .col(integer_null(RestaurantTable::ActiveWaiterId))
                    .col(timestamp_with_time_zone_null(
                        RestaurantTable::WaiterAssignedAt,
                    ))
                    .col(
                        timestamp_with_time_zone(RestaurantTable::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_restaurant_table_business_id")
                            .from(RestaurantTable::Table, RestaurantTable::BusinessId)
                            .to(Business::Table, Business::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_restaurant_table_active_waiter_id")
                            .from(RestaurantTable::Table, RestaurantTable::ActiveWaiterId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_restaurant_table_business_number")
                    .table(RestaurantTable::Table)
                    .col(RestaurantTable::BusinessId)
                    .col(RestaurantTable::Number)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RestaurantTable::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RestaurantTable {
    Table,
    Id,
    BusinessId,
    Number,
    Name,
    Code,
    Capacity,
    Location,
    NotificationsEnabled,
    ActiveWaiterId,
    WaiterAssignedAt,
    CreatedAt,
}

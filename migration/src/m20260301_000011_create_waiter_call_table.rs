use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_business_table::Business, m20260301_000002_create_user_table::User,
    m20260301_000009_create_restaurant_table_table::RestaurantTable,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WaiterCall::Table)
                    .if_not_exists()
                    .col(pk_auto(WaiterCall::Id))
                    .col(integer(WaiterCall::TableId))
                    .col(integer(WaiterCall::BusinessId))
                    .col(integer_null(WaiterCall::WaiterId))
                    .col(string(WaiterCall::Status).default("pending"))
                    .col(text(WaiterCall::Message))
                    .col(string(WaiterCall::Urgency).default("normal"))
                    .col(string_null(WaiterCall::IpAddress))
                    .col(text_null(WaiterCall::UserAgent))
                    .col(text_null(WaiterCall::ClientInfo))
                    .col(
                        timestamp_with_time_zone(WaiterCall::CalledAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(WaiterCall::AcknowledgedAt))
                    .col(timestamp_with_time_zone_null(WaiterCall::CompletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_waiter_call_table_id")
                            .from(WaiterCall::Table, WaiterCall::TableId)
                            .to(RestaurantTable::Table, RestaurantTable::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_waiter_call_business_id")
                            .from(WaiterCall::Table, WaiterCall::BusinessId)
                            .to(Business::Table, Business::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_waiter_call_waiter_id")
                            .from(WaiterCall::Table, WaiterCall::WaiterId)
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
                    .name("idx_waiter_call_table_called_at")
                    .table(WaiterCall::Table)
                    .col(WaiterCall::TableId)
                    .col(WaiterCall::CalledAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WaiterCall::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WaiterCall {
    Table,
    Id,
    TableId,
    BusinessId,
    WaiterId,
    Status,
    Message,
    Urgency,
    IpAddress,
    UserAgent,
    ClientInfo,
    CalledAt,
    AcknowledgedAt,
    CompletedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000002_create_user_table::User,
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
                    .table(TableSilence::Table)
                    .if_not_exists()
                    .col(pk_auto(TableSilence::Id))
                    .col(integer(TableSilence::TableId))
                    .col(integer_null(TableSilence::SilencedBy))
                    .col(string(TableSilence::Reason))
                    .col(text_null(TableSilence::Notes))
                    .col(integer_null(TableSilence::CallCount))
                    .col(
                        timestamp_with_time_zone(TableSilence::SilencedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(TableSilence::ExpiresAt))
                    .col(timestamp_with_time_zone_null(TableSilence::UnsilencedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_table_silence_table_id")
                            .from(TableSilence::Table, TableSilence::TableId)
                            .to(RestaurantTable::Table, RestaurantTable::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_table_silence_silenced_by")
                            .from(TableSilence::Table, TableSilence::SilencedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TableSilence::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TableSilence {
    Table,
    Id,
    TableId,
    SilencedBy,
    Reason,
    Notes,
    CallCount,
    SilencedAt,
    ExpiresAt,
    UnsilencedAt,
}

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
                    .table(IpBlock::Table)
                    .if_not_exists()
                    .col(pk_auto(IpBlock::Id))
                    .col(integer(IpBlock::BusinessId))
                    .col(string(IpBlock::IpAddress))
                    .col(integer_null(IpBlock::BlockedBy))
                    .col(string(IpBlock::Reason).default("spam"))
                    .col(text_null(IpBlock::Notes))
                    .col(
                        timestamp_with_time_zone(IpBlock::BlockedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(IpBlock::ExpiresAt))
                    .col(timestamp_with_time_zone_null(IpBlock::UnblockedAt))
                    .col(json_null(IpBlock::Metadata))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ip_block_business_id")
                            .from(IpBlock::Table, IpBlock::BusinessId)
                            .to(Business::Table, Business::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ip_block_blocked_by")
                            .from(IpBlock::Table, IpBlock::BlockedBy)
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
                    .name("idx_ip_block_ip_business")
                    .table(IpBlock::Table)
                    .col(IpBlock::IpAddress)
                    .col(IpBlock::BusinessId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(IpBlock::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum IpBlock {
    Table,
    Id,
    BusinessId,
    IpAddress,
    BlockedBy,
    Reason,
    Notes,
    BlockedAt,
    ExpiresAt,
    UnblockedAt,
    Metadata,
}

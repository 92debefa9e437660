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
                    .table(BusinessMember::Table)
                    .if_not_exists()
                    .col(pk_auto(BusinessMember::Id))
                    .col(integer(BusinessMember::BusinessId))
                    .col(integer(BusinessMember::UserId))
                    .col(string(BusinessMember::Role))
                    .col(
                        timestamp_with_time_zone(BusinessMember::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_business_member_business_id")
                            .from(BusinessMember::Table, BusinessMember::BusinessId)
                            .to(Business::Table, Business::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_business_member_user_id")
                            .from(BusinessMember::Table, BusinessMember::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_business_member_business_user")
                    .table(BusinessMember::Table)
                    .col(BusinessMember::BusinessId)
                    .col(BusinessMember::UserId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BusinessMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BusinessMember {
    Table,
    Id,
    BusinessId,
    UserId,
    Role,
    CreatedAt,
}

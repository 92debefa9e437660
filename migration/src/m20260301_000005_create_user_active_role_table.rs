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
                    .table(UserActiveRole::Table)
                    .if_not_exists()
                    .col(pk_auto(UserActiveRole::Id))
                    .col(integer(UserActiveRole::UserId))
                    .col(integer(UserActiveRole::BusinessId))
                    .col(string(UserActiveRole::ActiveRole))
                    .col(
                        timestamp_with_time_zone(UserActiveRole::SwitchedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_active_role_user_id")
                            .from(UserActiveRole::Table, UserActiveRole::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_active_role_business_id")
                            .from(UserActiveRole::Table, UserActiveRole::BusinessId)
                            .to(Business::Table, Business::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_active_role_user_business")
                    .table(UserActiveRole::Table)
                    .col(UserActiveRole::UserId)
                    .col(UserActiveRole::BusinessId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserActiveRole::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserActiveRole {
    Table,
    Id,
    UserId,
    BusinessId,
    ActiveRole,
    SwitchedAt,
}

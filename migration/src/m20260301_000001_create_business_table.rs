use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Business::Table)
                    .if_not_exists()
                    .col(pk_auto(Business::Id))
                    .col(string(Business::Name))
                    .col(string_uniq(Business::Code))
                    .col(string_uniq(Business::JoinCode))
                    .col(string_null(Business::Address))
                    .col(string_null(Business::Phone))
                    .col(string_null(Business::Email))
                    .col(string_null(Business::Logo))
                    .col(
                        timestamp_with_time_zone(Business::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Business::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Business::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Business {
    Table,
    Id,
    Name,
    Code,
    JoinCode,
    Address,
    Phone,
    Email,
    Logo,
    CreatedAt,
    UpdatedAt,
}

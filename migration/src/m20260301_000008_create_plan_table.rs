use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Plan::Table)
                    .if_not_exists()
                    .col(pk_auto(Plan::Id))
                    .col(string_uniq(Plan::Code))
                    .col(string(Plan::Name))
                    .col(text_null(Plan::Description))
                    .col(string(Plan::BillingPeriod).default("monthly"))
                    .col(big_integer(Plan::PriceCents))
                    .col(string(Plan::Currency).default("USD"))
                    .col(integer(Plan::YearlyDiscountPercent).default(0))
                    .col(boolean(Plan::TrialEnabled).default(false))
                    .col(integer(Plan::TrialDays).default(0))
                    .col(json(Plan::Features))
                    .col(json(Plan::Limits))
                    .col(integer(Plan::SortOrder).default(0))
                    .col(boolean(Plan::IsFeatured).default(false))
                    .col(boolean(Plan::IsPopular).default(false))
                    .col(boolean(Plan::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(Plan::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Plan::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Plan {
    Table,
    Id,
    Code,
    Name,
    Description,
    BillingPeriod,
    PriceCents,
    Currency,
    YearlyDiscountPercent,
    TrialEnabled,
    TrialDays,
    Features,
    Limits,
    SortOrder,
    IsFeatured,
    IsPopular,
    IsActive,
    CreatedAt,
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

struct SeedPlan {
    code: &'static str,
    name: &'static str,
    description: &'static str,
    price_cents: i64,
    yearly_discount_percent: i32,
    trial_days: i32,
    features: &'static str,
    limits: &'static str,
    sort_order: i32,
    is_popular: bool,
    is_featured: bool,
}

const PLANS: [SeedPlan; 3] = [
    SeedPlan {
        code: "STARTER",
        name: "Starter",
        description: "For new venues getting started with table calls",
        price_cents: 999,
        yearly_discount_percent: 15,
        trial_days: 15,
        features: r#"["Basic QR codes","Table management","Waiter calls","Admin panel","Email support"]"#,
        limits: r#"{"max_businesses":1,"max_tables":10,"max_staff":3}"#,
        sort_order: 1,
        is_popular: false,
        is_featured: false,
    },
    SeedPlan {
        code: "PROFESSIONAL",
        name: "Professional",
        description: "For established restaurants that want to grow",
        price_cents: 2999,
        yearly_discount_percent: 20,
        trial_days: 30,
        features: r#"["Everything in Starter","Multiple businesses","Reports","Advanced customization","Phone support"]"#,
        limits: r#"{"max_businesses":3,"max_tables":50,"max_staff":15}"#,
        sort_order: 2,
        is_popular: true,
        is_featured: false,
    },
    SeedPlan {
        code: "ENTERPRISE",
        name: "Enterprise",
        description: "For chains and franchises",
        price_cents: 9999,
        yearly_discount_percent: 25,
        trial_days: 45,
        features: r#"["Everything in Professional","Unlimited businesses","Executive dashboard","POS integration","24/7 support"]"#,
        limits: r#"{"max_businesses":999,"max_tables":999,"max_staff":999}"#,
        sort_order: 3,
        is_popular: false,
        is_featured: true,
    },
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert()
            .into_table(Plan::Table)
            .columns([
                Plan::Code,
                Plan::Name,
                Plan::Description,
                Plan::BillingPeriod,
                Plan::PriceCents,
                Plan::Currency,
                Plan::YearlyDiscountPercent,
                Plan::TrialEnabled,
                Plan::TrialDays,
                Plan::Features,
                Plan::Limits,
                Plan::SortOrder,
                Plan::IsFeatured,
                Plan::IsPopular,
                Plan::IsActive,
            ])
            .to_owned();

        for plan in PLANS {
            insert.values_panic([
                plan.code.into(),
                plan.name.into(),
                plan.description.into(),
                "monthly".into(),
                plan.price_cents.into(),
                "USD".into(),
                plan.yearly_discount_percent.into(),
                true.into(),
                plan.trial_days.into(),
                plan.features.into(),
                plan.limits.into(),
                plan.sort_order.into(),
                plan.is_featured.into(),
                plan.is_popular.into(),
                true.into(),
            ]);
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let delete = Query::delete()
            .from_table(Plan::Table)
            .and_where(Expr::col(Plan::Code).is_in(PLANS.iter().map(|plan| plan.code)))
            .to_owned();

        manager.exec_stmt(delete).await
    }
}

#[derive(DeriveIden)]
enum Plan {
    Table,
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
}

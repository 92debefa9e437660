pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_business_table;
mod m20260301_000002_create_user_table;
mod m20260301_000003_create_api_token_table;
mod m20260301_000004_create_business_member_table;
mod m20260301_000005_create_user_active_role_table;
mod m20260301_000006_create_device_token_table;
mod m20260301_000007_create_notification_table;
mod m20260301_000008_create_plan_table;
mod m20260301_000009_create_restaurant_table_table;
mod m20260301_000010_create_table_silence_table;
mod m20260301_000011_create_waiter_call_table;
mod m20260301_000012_create_ip_block_table;
mod m20260301_000013_seed_plans;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_business_table::Migration),
            Box::new(m20260301_000002_create_user_table::Migration),
            Box::new(m20260301_000003_create_api_token_table::Migration),
            Box::new(m20260301_000004_create_business_member_table::Migration),
            Box::new(m20260301_000005_create_user_active_role_table::Migration),
            Box::new(m20260301_000006_create_device_token_table::Migration),
            Box::new(m20260301_000007_create_notification_table::Migration),
            Box::new(m20260301_000008_create_plan_table::Migration),
            Box::new(m20260301_000009_create_restaurant_table_table::Migration),
            Box::new(m20260301_000010_create_table_silence_table::Migration),
            Box::new(m20260301_000011_create_waiter_call_table::Migration),
            Box::new(m20260301_000012_create_ip_block_table::Migration),
            Box::new(m20260301_000013_seed_plans::Migration),
        ]
    }
}

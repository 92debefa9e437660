//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including unique ID generation and shortcuts for creating entities together
//! with the rows they depend on.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, IntoActiveModel};

static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Returns a process-wide unique number for building unique names and codes.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a business and an admin user whose active business is that business.
///
/// # Returns
/// - `Ok((business, admin))` - Both rows, with the membership already inserted
/// - `Err(DbErr)` - Insert failed
pub async fn create_business_with_admin(
    db: &DatabaseConnection,
) -> Result<(entity::business::Model, entity::user::Model), DbErr> {
    let business = crate::factory::business::create_business(db).await?;
    let admin = crate::factory::user::UserFactory::new(db)
        .active_business_id(Some(business.id))
        .build()
        .await?;
    crate::factory::business_member::create_admin_member(db, business.id, admin.id).await?;

    Ok((business, admin))
}

/// Creates a waiter user who is a member of `business_id` with it set as active.
pub async fn create_waiter_for_business(
    db: &DatabaseConnection,
    business_id: i32,
) -> Result<entity::user::Model, DbErr> {
    let waiter = crate::factory::user::UserFactory::new(db)
        .active_business_id(Some(business_id))
        .build()
        .await?;
    crate::factory::business_member::create_waiter_member(db, business_id, waiter.id).await?;

    Ok(waiter)
}

/// Creates a business, a waiter working there and a table assigned to that waiter.
///
/// # Returns
/// - `Ok((business, waiter, table))` - The created rows
/// - `Err(DbErr)` - Insert failed
pub async fn create_assigned_table(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::business::Model,
        entity::user::Model,
        entity::restaurant_table::Model,
    ),
    DbErr,
> {
    let business = crate::factory::business::create_business(db).await?;
    let waiter = create_waiter_for_business(db, business.id).await?;
    let table = crate::factory::restaurant_table::TableFactory::new(db, business.id)
        .active_waiter_id(Some(waiter.id))
        .build()
        .await?;

    Ok((business, waiter, table))
}

/// Points an existing user at a different active business.
pub async fn set_active_business(
    db: &DatabaseConnection,
    user: entity::user::Model,
    business_id: Option<i32>,
) -> Result<entity::user::Model, DbErr> {
    let mut active = user.into_active_model();
    active.active_business_id = ActiveValue::Set(business_id);
    active.update(db).await
}

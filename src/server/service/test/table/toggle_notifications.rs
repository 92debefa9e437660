use super::*;

/// Tests the assigned waiter disabling calls from their table.
///
/// Expected: Ok(Table) with notifications disabled
#[tokio::test]
async fn assigned_waiter_toggles() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, waiter, table) = factory::helpers::create_assigned_table(db).await?;

    let toggled = TableService::new(db)
        .toggle_notifications(waiter.id, business.id, false, table.id)
        .await?;

    assert!(!toggled.notifications_enabled);

    Ok(())
}

/// Tests an admin toggling a table twice.
///
/// Expected: notifications end up enabled again
#[tokio::test]
async fn admin_toggles_any_table() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, admin) = factory::helpers::create_business_with_admin(db).await?;
    let table = factory::create_table(db, business.id).await?;

    let service = TableService::new(db);
    let first = service
        .toggle_notifications(admin.id, business.id, true, table.id)
        .await?;
    let second = service
        .toggle_notifications(admin.id, business.id, true, table.id)
        .await?;

    assert!(!first.notifications_enabled);
    assert!(second.notifications_enabled);

    Ok(())
}

/// Tests a waiter toggling a table assigned to someone else.
///
/// Expected: Err(AppError::Forbidden)
#[tokio::test]
async fn rejects_other_waiter() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, _, table) = factory::helpers::create_assigned_table(db).await?;
    let other = factory::helpers::create_waiter_for_business(db, business.id).await?;

    let result = TableService::new(db)
        .toggle_notifications(other.id, business.id, false, table.id)
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests toggling a table of another business.
///
/// Expected: Err(AppError::Forbidden)
#[tokio::test]
async fn rejects_table_outside_business() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, admin) = factory::helpers::create_business_with_admin(db).await?;
    let other = factory::create_business(db).await?;
    let table = factory::create_table(db, other.id).await?;

    let result = TableService::new(db)
        .toggle_notifications(admin.id, business.id, true, table.id)
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

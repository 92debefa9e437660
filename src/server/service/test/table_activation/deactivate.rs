use super::*;

/// Tests releasing a held table with open calls.
///
/// Expected: Ok(1) with the call cancelled and the table unassigned
#[tokio::test]
async fn releases_table_and_cancels_calls() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, waiter, table) = factory::helpers::create_assigned_table(db).await?;
    let call = factory::create_call(db, &table).await?;

    let cancelled = TableActivationService::new(db)
        .deactivate(waiter.id, business.id, table.id)
        .await?;

    assert_eq!(cancelled, 1);

    let call = entity::prelude::WaiterCall::find_by_id(call.id).one(db).await?.unwrap();
    assert_eq!(call.status, "cancelled");
    let table = entity::prelude::RestaurantTable::find_by_id(table.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(table.active_waiter_id, None);
    assert_eq!(table.waiter_assigned_at, None);

    Ok(())
}

/// Tests releasing a table the waiter does not hold.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_table_not_held() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    let waiter = factory::helpers::create_waiter_for_business(db, business.id).await?;
    let table = factory::create_table(db, business.id).await?;

    let result = TableActivationService::new(db)
        .deactivate(waiter.id, business.id, table.id)
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

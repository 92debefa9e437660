use super::*;

/// Tests deleting a table that has calls and a silence.
///
/// Expected: Ok(()) with the table, its calls and its silences removed
#[tokio::test]
async fn deletes_table_with_calls_and_silences() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, _, table) = factory::helpers::create_assigned_table(db).await?;
    let kept = factory::create_table(db, business.id).await?;
    factory::create_call(db, &table).await?;
    factory::create_call(db, &kept).await?;
    factory::create_silence(db, table.id).await?;

    TableService::new(db).delete(business.id, table.id).await?;

    assert!(entity::prelude::RestaurantTable::find_by_id(table.id)
        .one(db)
        .await?
        .is_none());
    assert_eq!(entity::prelude::WaiterCall::find().count(db).await?, 1);
    assert_eq!(entity::prelude::TableSilence::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a table that belongs to another business.
///
/// Expected: Err(AppError::Forbidden) and the table still exists
#[tokio::test]
async fn rejects_table_of_other_business() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    let other = factory::create_business(db).await?;
    let table = factory::create_table(db, other.id).await?;

    let result = TableService::new(db).delete(business.id, table.id).await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));
    assert!(entity::prelude::RestaurantTable::find_by_id(table.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a table that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_table() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;

    let result = TableService::new(db).delete(business.id, 9999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

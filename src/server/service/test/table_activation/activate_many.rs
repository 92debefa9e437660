use super::*;

/// Tests activating a mix of free, held and taken tables.
///
/// Expected: Ok with one result per table in request order and matching totals
#[tokio::test]
async fn reports_outcome_per_table() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, waiter, held) = factory::helpers::create_assigned_table(db).await?;
    let colleague = factory::helpers::create_waiter_for_business(db, business.id).await?;
    let taken = factory::restaurant_table::TableFactory::new(db, business.id)
        .active_waiter_id(Some(colleague.id))
        .build()
        .await?;
    let free = factory::create_table(db, business.id).await?;

    let ids = TableIds::parse(vec![free.id, held.id, taken.id])?;
    let result = TableActivationService::new(db)
        .activate_many(waiter.id, business.id, ids)
        .await?;

    let statuses: Vec<&str> = result.results.iter().map(|r| r.status.as_str()).collect();
    assert_eq!(statuses, vec!["activated", "already_assigned", "assigned_to_other"]);
    assert_eq!(
        result.results[2].message,
        Some(format!("Assigned to {}", colleague.name))
    );
    assert_eq!(result.summary.activated, 1);
    assert_eq!(result.summary.already_assigned, 1);
    assert_eq!(result.summary.conflicts, 1);

    Ok(())
}

/// Tests a bulk request containing a table of another business.
///
/// Expected: Err(AppError::BadRequest) and no table assigned
#[tokio::test]
async fn rejects_foreign_table_without_changes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    let waiter = factory::helpers::create_waiter_for_business(db, business.id).await?;
    let free = factory::create_table(db, business.id).await?;
    let other = factory::create_business(db).await?;
    let foreign = factory::create_table(db, other.id).await?;

    let ids = TableIds::parse(vec![free.id, foreign.id])?;
    let result = TableActivationService::new(db)
        .activate_many(waiter.id, business.id, ids)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let free = entity::prelude::RestaurantTable::find_by_id(free.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(free.active_waiter_id, None);

    Ok(())
}

use super::*;

/// Tests assigning a waiter to a free table.
///
/// Verifies that both the waiter and the assignment timestamp are stored.
///
/// Expected: Ok(Table) with active_waiter_id set
#[tokio::test]
async fn assigns_waiter_and_timestamp() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    let waiter = factory::helpers::create_waiter_for_business(db, business.id).await?;
    let table = factory::create_table(db, business.id).await?;

    let now = Utc::now();
    let repo = TableRepository::new(db);
    let assigned = repo.assign_waiter(table.id, waiter.id, now).await?;

    assert_eq!(assigned.active_waiter_id, Some(waiter.id));
    assert!(assigned.waiter_assigned_at.is_some());

    Ok(())
}

/// Tests assigning a waiter to a table that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = TableRepository::new(db);
    let result = repo.assign_waiter(99999, user.id, Utc::now()).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}

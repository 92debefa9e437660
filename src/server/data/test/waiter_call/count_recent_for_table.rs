use super::*;

/// Tests counting calls inside the spam window.
///
/// Verifies that calls older than the window are not counted regardless of status.
///
/// Expected: Ok(2)
#[tokio::test]
async fn counts_calls_since_cutoff() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, table) = factory::helpers::create_assigned_table(db).await?;
    let now = Utc::now();

    factory::waiter_call::WaiterCallFactory::new(db, &table)
        .called_at(now - Duration::minutes(2))
        .build()
        .await?;
    factory::waiter_call::WaiterCallFactory::new(db, &table)
        .status("completed")
        .called_at(now - Duration::minutes(5))
        .build()
        .await?;
    factory::waiter_call::WaiterCallFactory::new(db, &table)
        .called_at(now - Duration::minutes(30))
        .build()
        .await?;

    let repo = WaiterCallRepository::new(db);
    let count = repo
        .count_recent_for_table(table.id, now - Duration::minutes(10))
        .await?;

    assert_eq!(count, 2);

    Ok(())
}

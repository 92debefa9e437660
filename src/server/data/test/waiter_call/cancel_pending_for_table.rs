use super::*;

/// Tests cancelling the pending calls of a table.
///
/// Verifies that acknowledged calls are left alone.
///
/// Expected: Ok(2)
#[tokio::test]
async fn cancels_only_pending_calls() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, table) = factory::helpers::create_assigned_table(db).await?;
    factory::create_call(db, &table).await?;
    factory::create_call(db, &table).await?;
    let acknowledged = factory::waiter_call::WaiterCallFactory::new(db, &table)
        .status("acknowledged")
        .acknowledged_at(Some(Utc::now()))
        .build()
        .await?;

    let repo = WaiterCallRepository::new(db);
    let cancelled = repo.cancel_pending_for_table(table.id).await?;

    assert_eq!(cancelled, 2);
    assert!(repo.find_pending_for_table(table.id, None).await?.is_none());
    assert_eq!(
        repo.find_by_id(acknowledged.id).await?.unwrap().status,
        CallStatus::Acknowledged
    );

    Ok(())
}

use super::*;

/// Tests listing a waiter's open calls across tables.
///
/// Verifies that only pending calls routed to the waiter are returned, oldest first,
/// with their table details attached.
///
/// Expected: Ok(PendingCallsDto) with two calls
#[tokio::test]
async fn lists_own_pending_calls_oldest_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, waiter, first) = factory::helpers::create_assigned_table(db).await?;
    let second = factory::restaurant_table::TableFactory::new(db, business.id)
        .active_waiter_id(Some(waiter.id))
        .build()
        .await?;
    let now = Utc::now();

    let older = factory::waiter_call::WaiterCallFactory::new(db, &second)
        .called_at(now - Duration::minutes(5))
        .build()
        .await?;
    let newer = factory::waiter_call::WaiterCallFactory::new(db, &first)
        .called_at(now - Duration::minutes(1))
        .build()
        .await?;
    factory::waiter_call::WaiterCallFactory::new(db, &first)
        .status("completed")
        .build()
        .await?;

    let push = RecordingPushSender::new();
    let pending = WaiterCallService::new(db, &push).get_pending(waiter.id).await?;

    assert_eq!(pending.total, 2);
    assert_eq!(pending.calls[0].id, older.id);
    assert_eq!(pending.calls[0].table_number, Some(second.number));
    assert_eq!(pending.calls[0].minutes_ago, 5);
    assert_eq!(pending.calls[1].id, newer.id);

    Ok(())
}

use super::*;

/// Tests completing an acknowledged call.
///
/// Expected: Ok with status `completed` and a total time from the original call
#[tokio::test]
async fn completes_acknowledged_call() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, waiter, table) = factory::helpers::create_assigned_table(db).await?;
    let now = Utc::now();
    let call = factory::waiter_call::WaiterCallFactory::new(db, &table)
        .status("acknowledged")
        .called_at(now - Duration::minutes(4))
        .acknowledged_at(Some(now - Duration::minutes(3)))
        .build()
        .await?;
    let push = RecordingPushSender::new();

    let (call, _) = WaiterCallService::new(db, &push)
        .complete(waiter.id, call.id)
        .await?;

    assert_eq!(call.status, CallStatus::Completed);
    assert!(call.completion_time_seconds().unwrap() >= 240);
    assert_eq!(call.response_time_seconds(), Some(60));

    Ok(())
}

/// Tests completing a call straight from pending.
///
/// Verifies that the call is acknowledged at the moment it is completed.
///
/// Expected: Ok with `acknowledged_at` set and both durations reported
#[tokio::test]
async fn completes_pending_call() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, waiter, table) = factory::helpers::create_assigned_table(db).await?;
    let call = factory::waiter_call::WaiterCallFactory::new(db, &table)
        .status("pending")
        .called_at(Utc::now() - Duration::minutes(2))
        .build()
        .await?;
    let push = RecordingPushSender::new();

    let (call, _) = WaiterCallService::new(db, &push)
        .complete(waiter.id, call.id)
        .await?;

    assert_eq!(call.status, CallStatus::Completed);
    assert!(call.acknowledged_at.is_some());
    assert_eq!(call.acknowledged_at, call.completed_at);
    assert!(call.response_time_seconds().unwrap() >= 120);
    assert!(call.completion_time_seconds().unwrap() >= 120);

    Ok(())
}

/// Tests completing a call that was cancelled when its table was released.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_cancelled_call() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, waiter, table) = factory::helpers::create_assigned_table(db).await?;
    let call = factory::waiter_call::WaiterCallFactory::new(db, &table)
        .status("cancelled")
        .build()
        .await?;
    let push = RecordingPushSender::new();

    let result = WaiterCallService::new(db, &push)
        .complete(waiter.id, call.id)
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

use super::*;

/// Tests the assigned waiter acknowledging a pending call.
///
/// Expected: Ok with status `acknowledged`, a timestamp and the call's table
#[tokio::test]
async fn acknowledges_own_pending_call() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, waiter, table) = factory::helpers::create_assigned_table(db).await?;
    let call = factory::create_call(db, &table).await?;
    let push = RecordingPushSender::new();

    let (call, call_table) = WaiterCallService::new(db, &push)
        .acknowledge(waiter.id, call.id)
        .await?;

    assert_eq!(call.status, CallStatus::Acknowledged);
    assert!(call.acknowledged_at.is_some());
    assert_eq!(call_table.map(|t| t.id), Some(table.id));

    Ok(())
}

/// Tests a waiter acknowledging a call routed to somebody else.
///
/// Expected: Err(AppError::Forbidden)
#[tokio::test]
async fn rejects_call_of_other_waiter() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, _, table) = factory::helpers::create_assigned_table(db).await?;
    let colleague = factory::helpers::create_waiter_for_business(db, business.id).await?;
    let call = factory::create_call(db, &table).await?;
    let push = RecordingPushSender::new();

    let result = WaiterCallService::new(db, &push)
        .acknowledge(colleague.id, call.id)
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests acknowledging a call twice.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_call_that_is_not_pending() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, waiter, table) = factory::helpers::create_assigned_table(db).await?;
    let call = factory::waiter_call::WaiterCallFactory::new(db, &table)
        .status("acknowledged")
        .acknowledged_at(Some(Utc::now()))
        .build()
        .await?;
    let push = RecordingPushSender::new();

    let result = WaiterCallService::new(db, &push)
        .acknowledge(waiter.id, call.id)
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests acknowledging a call that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_call() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let waiter = factory::create_user(db).await?;
    let push = RecordingPushSender::new();

    let result = WaiterCallService::new(db, &push)
        .acknowledge(waiter.id, 999_999)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

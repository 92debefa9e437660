use super::*;

/// Tests a customer calling the waiter assigned to their table.
///
/// Verifies that the call is stored with the default message, the waiter gets an inbox
/// entry and a push is sent to the waiter's device.
///
/// Expected: Ok(CallOutcome::Created) routed to the assigned waiter
#[tokio::test]
async fn creates_call_and_notifies_waiter() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, waiter, table) = factory::helpers::create_assigned_table(db).await?;
    let device = factory::create_device_token(db, waiter.id).await?;
    let push = RecordingPushSender::new();

    let outcome = WaiterCallService::new(db, &push)
        .call_waiter(table.id, customer_call(), origin("198.51.100.7"))
        .await?;

    let CallOutcome::Created { call, waiter: notified } = outcome else {
        panic!("expected a created call, got {:?}", outcome);
    };
    assert_eq!(notified.id, waiter.id);
    assert_eq!(call.waiter_id, Some(waiter.id));
    assert_eq!(call.status, CallStatus::Pending);
    assert_eq!(call.message, format!("Call from table {}", table.number));
    assert_eq!(call.ip_address.as_deref(), Some("198.51.100.7"));

    let sent = push.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, vec![device.token]);
    assert_eq!(sent[0].1.title, format!("{} is calling", table.name));

    let inbox = entity::prelude::Notification::find().count(db).await?;
    assert_eq!(inbox, 1);

    Ok(())
}

/// Tests a call from an IP blocked in the table's business.
///
/// Expected: Ok(CallOutcome::Blocked) with nothing stored and no push sent
#[tokio::test]
async fn fakes_success_for_blocked_ip() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, waiter, table) = factory::helpers::create_assigned_table(db).await?;
    factory::create_device_token(db, waiter.id).await?;
    factory::create_ip_block(db, business.id, "198.51.100.7").await?;
    let push = RecordingPushSender::new();

    let outcome = WaiterCallService::new(db, &push)
        .call_waiter(table.id, customer_call(), origin("198.51.100.7"))
        .await?;

    let CallOutcome::Blocked {
        fake_call_id,
        waiter_id,
        waiter_name,
        ..
    } = outcome
    else {
        panic!("expected a blocked call, got {:?}", outcome);
    };
    assert!((100_000..1_000_000).contains(&fake_call_id));
    assert_eq!(waiter_id, waiter.id);
    assert_eq!(waiter_name, waiter.name);

    assert_eq!(entity::prelude::WaiterCall::find().count(db).await?, 0);
    assert!(push.sent().is_empty());

    Ok(())
}

/// Tests a caller whose address is written differently from the stored block.
///
/// Expected: Ok(CallOutcome::Blocked) and nothing stored
#[tokio::test]
async fn matches_block_on_normalized_ip() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, _, table) = factory::helpers::create_assigned_table(db).await?;
    factory::create_ip_block(db, business.id, "2001:db8::1").await?;
    let push = RecordingPushSender::new();

    let outcome = WaiterCallService::new(db, &push)
        .call_waiter(table.id, customer_call(), origin("2001:DB8:0:0::1"))
        .await?;

    assert!(matches!(outcome, CallOutcome::Blocked { .. }));
    assert_eq!(entity::prelude::WaiterCall::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a block in another business does not affect the caller.
///
/// Expected: Ok(CallOutcome::Created)
#[tokio::test]
async fn ignores_block_from_other_business() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, table) = factory::helpers::create_assigned_table(db).await?;
    let other = factory::create_business(db).await?;
    factory::create_ip_block(db, other.id, "198.51.100.7").await?;
    let push = RecordingPushSender::new();

    let outcome = WaiterCallService::new(db, &push)
        .call_waiter(table.id, customer_call(), origin("198.51.100.7"))
        .await?;

    assert!(matches!(outcome, CallOutcome::Created { .. }));

    Ok(())
}

/// Tests calling from a table whose notifications were switched off.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_table_with_notifications_disabled() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    let waiter = factory::helpers::create_waiter_for_business(db, business.id).await?;
    let table = factory::restaurant_table::TableFactory::new(db, business.id)
        .active_waiter_id(Some(waiter.id))
        .notifications_enabled(false)
        .build()
        .await?;
    let push = RecordingPushSender::new();

    let result = WaiterCallService::new(db, &push)
        .call_waiter(table.id, customer_call(), origin("198.51.100.7"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests calling from a table nobody is serving.
///
/// Expected: Err(CallError::NoWaiterAssigned)
#[tokio::test]
async fn rejects_table_without_waiter() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    let table = factory::create_table(db, business.id).await?;
    let push = RecordingPushSender::new();

    let result = WaiterCallService::new(db, &push)
        .call_waiter(table.id, customer_call(), CallOrigin::default())
        .await;

    assert!(matches!(
        result,
        Err(AppError::CallErr(CallError::NoWaiterAssigned(id))) if id == table.id
    ));

    Ok(())
}

/// Tests calling from a silenced table.
///
/// Expected: Ok(CallOutcome::Silenced) with the remaining minutes and no stored call
#[tokio::test]
async fn reports_active_silence() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, table) = factory::helpers::create_assigned_table(db).await?;
    factory::table_silence::TableSilenceFactory::new(db, table.id)
        .expires_at(Some(Utc::now() + Duration::minutes(15)))
        .build()
        .await?;
    let push = RecordingPushSender::new();

    let outcome = WaiterCallService::new(db, &push)
        .call_waiter(table.id, customer_call(), origin("198.51.100.7"))
        .await?;

    assert_eq!(
        outcome,
        CallOutcome::Silenced {
            reason: SilenceReason::Manual,
            remaining_minutes: Some(15),
        }
    );
    assert_eq!(entity::prelude::WaiterCall::find().count(db).await?, 0);

    Ok(())
}

/// Tests the fourth call from a table within ten minutes.
///
/// Verifies that the table is silenced automatically with the call count recorded.
///
/// Expected: Err(CallError::TooManyCalls) and an automatic silence for ten minutes
#[tokio::test]
async fn auto_silences_after_three_recent_calls() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, table) = factory::helpers::create_assigned_table(db).await?;
    let now = Utc::now();
    for minutes in [2, 4, 6] {
        factory::waiter_call::WaiterCallFactory::new(db, &table)
            .status("completed")
            .called_at(now - Duration::minutes(minutes))
            .build()
            .await?;
    }
    let push = RecordingPushSender::new();

    let result = WaiterCallService::new(db, &push)
        .call_waiter(table.id, customer_call(), origin("198.51.100.7"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::CallErr(CallError::TooManyCalls {
            call_count: 4,
            silenced_minutes: 10,
            ..
        }))
    ));

    let silences = entity::prelude::TableSilence::find().all(db).await?;
    assert_eq!(silences.len(), 1);
    assert_eq!(silences[0].reason, "automatic");
    assert_eq!(silences[0].call_count, Some(4));
    assert_eq!(
        silences[0].notes.as_deref(),
        Some("Automatically silenced after 4 calls in 10 minutes")
    );
    assert_eq!(entity::prelude::WaiterCall::find().count(db).await?, 3);
    assert!(push.sent().is_empty());

    Ok(())
}

/// Tests that calls older than the spam window are not counted.
///
/// Expected: Ok(CallOutcome::Created)
#[tokio::test]
async fn ignores_calls_outside_spam_window() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, table) = factory::helpers::create_assigned_table(db).await?;
    let now = Utc::now();
    for minutes in [11, 15, 20] {
        factory::waiter_call::WaiterCallFactory::new(db, &table)
            .status("completed")
            .called_at(now - Duration::minutes(minutes))
            .build()
            .await?;
    }
    let push = RecordingPushSender::new();

    let outcome = WaiterCallService::new(db, &push)
        .call_waiter(table.id, customer_call(), origin("198.51.100.7"))
        .await?;

    assert!(matches!(outcome, CallOutcome::Created { .. }));

    Ok(())
}

/// Tests two customers calling from the same table at the same moment.
///
/// Expected: one call is created and the other answers Err(AppError::Conflict)
#[tokio::test]
async fn stores_one_of_two_simultaneous_calls() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, table) = factory::helpers::create_assigned_table(db).await?;
    let push = RecordingPushSender::new();
    let service = WaiterCallService::new(db, &push);

    let (first, second) = tokio::join!(
        service.call_waiter(table.id, customer_call(), origin("198.51.100.7")),
        service.call_waiter(table.id, customer_call(), origin("198.51.100.8")),
    );

    let created = [&first, &second]
        .iter()
        .filter(|result| matches!(result, Ok(CallOutcome::Created { .. })))
        .count();
    let conflicts = [&first, &second]
        .iter()
        .filter(|result| matches!(result, Err(AppError::Conflict(_))))
        .count();
    assert_eq!((created, conflicts), (1, 1));
    assert_eq!(entity::prelude::WaiterCall::find().count(db).await?, 1);

    Ok(())
}

/// Tests calling again while a fresh call is still pending.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_pending_call() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, table) = factory::helpers::create_assigned_table(db).await?;
    factory::waiter_call::WaiterCallFactory::new(db, &table)
        .called_at(Utc::now() - Duration::seconds(10))
        .build()
        .await?;
    let push = RecordingPushSender::new();

    let result = WaiterCallService::new(db, &push)
        .call_waiter(table.id, customer_call(), origin("198.51.100.7"))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that a push failure does not fail the customer's call.
///
/// Expected: Ok(CallOutcome::Created)
#[tokio::test]
async fn succeeds_when_push_fails() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, waiter, table) = factory::helpers::create_assigned_table(db).await?;
    factory::create_device_token(db, waiter.id).await?;
    let push = RecordingPushSender::failing();

    let outcome = WaiterCallService::new(db, &push)
        .call_waiter(table.id, customer_call(), origin("198.51.100.7"))
        .await?;

    assert!(matches!(outcome, CallOutcome::Created { .. }));

    Ok(())
}

/// Tests calling from a table that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_table() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let push = RecordingPushSender::new();

    let result = WaiterCallService::new(db, &push)
        .call_waiter(999_999, customer_call(), CallOrigin::default())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

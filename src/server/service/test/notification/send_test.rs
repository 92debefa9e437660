use super::*;

/// Tests fanning a test notification out to every member.
///
/// Verifies that each member gets an inbox row and that only members with devices
/// receive a push.
///
/// Expected: Ok(FanOutResult) counting both members
#[tokio::test]
async fn notifies_every_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, _) = factory::helpers::create_business_with_admin(db).await?;
    let waiter = factory::helpers::create_waiter_for_business(db, business.id).await?;
    let device = factory::create_device_token(db, waiter.id).await?;
    let push = RecordingPushSender::new();

    let result = NotificationService::new(db, &push)
        .send_test(business.id, content())
        .await?;

    assert_eq!(result.users_notified, 2);
    assert_eq!(result.total_users, 2);
    assert_eq!(entity::prelude::Notification::find().count(db).await?, 2);

    let sent = push.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, vec![device.token]);
    assert_eq!(sent[0].1.title, "Staff meeting");

    Ok(())
}

/// Tests that push failures do not stop the fan-out.
///
/// Expected: Ok(FanOutResult) with every member notified
#[tokio::test]
async fn continues_when_push_fails() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, admin) = factory::helpers::create_business_with_admin(db).await?;
    let waiter = factory::helpers::create_waiter_for_business(db, business.id).await?;
    factory::create_device_token(db, admin.id).await?;
    factory::create_device_token(db, waiter.id).await?;
    let push = RecordingPushSender::failing();

    let result = NotificationService::new(db, &push)
        .send_test(business.id, content())
        .await?;

    assert_eq!(result.users_notified, 2);

    Ok(())
}

/// Tests fanning out in a business without members.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_without_members() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    let push = RecordingPushSender::new();

    let result = NotificationService::new(db, &push)
        .send_test(business.id, content())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

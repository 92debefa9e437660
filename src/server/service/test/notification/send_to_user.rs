use super::*;

/// Tests an admin messaging one member with extra data.
///
/// Expected: Ok(User) with the data attached to the push
#[tokio::test]
async fn sends_to_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, _) = factory::helpers::create_business_with_admin(db).await?;
    let waiter = factory::helpers::create_waiter_for_business(db, business.id).await?;
    factory::create_device_token(db, waiter.id).await?;
    let push = RecordingPushSender::new();

    let recipient = NotificationService::new(db, &push)
        .send_to_user(business.id, waiter.id, content(), Some(json!({"shift": "late"})))
        .await?;

    assert_eq!(recipient.id, waiter.id);
    let sent = push.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].1.data["shift"], "late");

    Ok(())
}

/// Tests messaging a user from another business.
///
/// Expected: Err(AppError::Forbidden)
#[tokio::test]
async fn rejects_user_outside_business() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, _) = factory::helpers::create_business_with_admin(db).await?;
    let outsider = factory::create_user(db).await?;
    let push = RecordingPushSender::new();

    let result = NotificationService::new(db, &push)
        .send_to_user(business.id, outsider.id, content(), None)
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests that a push failure is reported to the admin.
///
/// Expected: Err(AppError::InternalError) after the inbox row is stored
#[tokio::test]
async fn reports_push_failure() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, _) = factory::helpers::create_business_with_admin(db).await?;
    let waiter = factory::helpers::create_waiter_for_business(db, business.id).await?;
    factory::create_device_token(db, waiter.id).await?;
    let push = RecordingPushSender::failing();

    let result = NotificationService::new(db, &push)
        .send_to_user(business.id, waiter.id, content(), None)
        .await;

    assert!(matches!(result, Err(AppError::InternalError(_))));
    assert_eq!(entity::prelude::Notification::find().count(db).await?, 1);

    Ok(())
}

use super::*;

/// Tests reading the inbox and marking an entry as read.
///
/// Expected: Ok with the unread count dropping to zero after `mark_read`
#[tokio::test]
async fn tracks_unread_notifications() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, admin) = factory::helpers::create_business_with_admin(db).await?;
    let push = RecordingPushSender::new();
    let service = NotificationService::new(db, &push);
    service.send_test(business.id, content()).await?;

    let (notifications, unread) = service.get_inbox(admin.id).await?;
    assert_eq!(notifications.len(), 1);
    assert_eq!(unread, 1);

    service.mark_read(admin.id, notifications[0].id).await?;

    let (_, unread) = service.get_inbox(admin.id).await?;
    assert_eq!(unread, 0);

    Ok(())
}

/// Tests marking another user's notification as read.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn hides_other_users_notifications() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, admin) = factory::helpers::create_business_with_admin(db).await?;
    let stranger = factory::create_user(db).await?;
    let push = RecordingPushSender::new();
    let service = NotificationService::new(db, &push);
    service.send_test(business.id, content()).await?;

    let (notifications, _) = service.get_inbox(admin.id).await?;
    let result = service.mark_read(stranger.id, notifications[0].id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

use super::*;

fn param(user_id: i32) -> CreateNotificationParam {
    CreateNotificationParam {
        user_id,
        kind: kind::ADMIN_TEST.to_string(),
        title: "Hello".to_string(),
        body: "World".to_string(),
        data: None,
    }
}

/// Tests marking one of the user's notifications as read.
///
/// Expected: Ok(Some(Notification)) and the unread count drops
#[tokio::test]
async fn marks_own_notification_read() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = NotificationRepository::new(db);
    let first = repo.create(param(user.id)).await?;
    repo.create(param(user.id)).await?;

    let read = repo.mark_read(user.id, first.id, Utc::now()).await?.unwrap();

    assert!(read.read_at.is_some());
    assert_eq!(repo.count_unread(user.id).await?, 1);

    Ok(())
}

/// Tests marking a notification that belongs to another user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn refuses_other_users_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let intruder = factory::create_user(db).await?;
    let repo = NotificationRepository::new(db);
    let notification = repo.create(param(owner.id)).await?;

    let result = repo.mark_read(intruder.id, notification.id, Utc::now()).await?;

    assert!(result.is_none());
    assert_eq!(repo.count_unread(owner.id).await?, 1);

    Ok(())
}

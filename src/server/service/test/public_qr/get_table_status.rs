use super::*;

/// Tests the status of a staffed, silenced table with a pending call.
///
/// Expected: Ok(TableStatusDto) reporting the waiter, silence and pending call
#[tokio::test]
async fn reports_waiter_silence_and_pending_call() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, waiter, table) = factory::helpers::create_assigned_table(db).await?;
    factory::create_silence(db, table.id).await?;
    let call = factory::create_call(db, &table).await?;

    let status = PublicQrService::new(db).get_table_status(table.id).await?;

    assert!(status.has_waiter);
    assert_eq!(status.waiter_name, Some(waiter.name));
    assert!(status.is_silenced);
    let pending = status.pending_call.unwrap();
    assert_eq!(pending.id, call.id);
    assert_eq!(pending.status, "pending");

    Ok(())
}

/// Tests the status of an unattended table.
///
/// Expected: Ok(TableStatusDto) with no waiter, no silence and no pending call
#[tokio::test]
async fn reports_unattended_table() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    let table = factory::create_table(db, business.id).await?;

    let status = PublicQrService::new(db).get_table_status(table.id).await?;

    assert!(!status.has_waiter);
    assert_eq!(status.waiter_name, None);
    assert!(!status.is_silenced);
    assert!(status.pending_call.is_none());
    assert!(status.notifications_enabled);

    Ok(())
}

/// Tests an unknown table id.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_table() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PublicQrService::new(db).get_table_status(9999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

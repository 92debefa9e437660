use super::*;

/// Tests an admin closing every open record of an IP, including expired ones.
///
/// Expected: Ok with both records closed and the IP no longer blocked
#[tokio::test]
async fn closes_active_and_expired_records() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, admin) = factory::helpers::create_business_with_admin(db).await?;
    factory::create_ip_block(db, business.id, "198.51.100.7").await?;
    factory::ip_block::IpBlockFactory::new(db, business.id, "198.51.100.7")
        .blocked_at(Utc::now() - Duration::days(3))
        .expires_at(Some(Utc::now() - Duration::days(2)))
        .build()
        .await?;

    let result = IpBlockService::new(db)
        .force_unblock(admin.id, business.id, "198.51.100.7")
        .await?;

    assert_eq!(result.unblocked_count, 2);
    assert!(!result.still_blocked);

    Ok(())
}

/// Tests a waiter attempting a forced unblock.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn rejects_waiter() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, waiter, _) = factory::helpers::create_assigned_table(db).await?;
    factory::create_ip_block(db, business.id, "198.51.100.7").await?;

    let result = IpBlockService::new(db)
        .force_unblock(waiter.id, business.id, "198.51.100.7")
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

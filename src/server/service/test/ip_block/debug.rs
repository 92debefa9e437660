use super::*;

/// Tests the admin view of an IP's block history and calls.
///
/// Expected: Ok(IpDebugDto) counting one active and one lifted block, plus the IP's call
#[tokio::test]
async fn reports_block_history_and_calls() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, admin) = factory::helpers::create_business_with_admin(db).await?;
    let table = factory::create_table(db, business.id).await?;
    factory::create_call(db, &table).await?;
    factory::create_ip_block(db, business.id, "203.0.113.10").await?;
    factory::ip_block::IpBlockFactory::new(db, business.id, "203.0.113.10")
        .blocked_at(Utc::now() - Duration::days(2))
        .unblocked_at(Some(Utc::now() - Duration::days(1)))
        .build()
        .await?;

    let debug = IpBlockService::new(db)
        .debug(admin.id, business.id, "203.0.113.10")
        .await?;

    assert!(debug.is_blocked_now);
    assert_eq!(debug.total_blocks, 2);
    assert_eq!(debug.active_blocks, 1);
    assert_eq!(debug.recent_calls.len(), 1);

    Ok(())
}

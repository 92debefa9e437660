use super::*;

const IP: &str = "198.51.100.8";

/// Tests that force unblock stamps every open record, including expired ones.
///
/// Verifies that the plain unblock only touches active records while force unblock
/// also closes expired records that were never stamped.
///
/// Expected: Ok(2)
#[tokio::test]
async fn stamps_all_open_records() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    let now = Utc::now();
    factory::create_ip_block(db, business.id, IP).await?;
    factory::ip_block::IpBlockFactory::new(db, business.id, IP)
        .blocked_at(now - Duration::hours(48))
        .expires_at(Some(now - Duration::hours(24)))
        .build()
        .await?;
    factory::ip_block::IpBlockFactory::new(db, business.id, IP)
        .unblocked_at(Some(now - Duration::hours(1)))
        .build()
        .await?;

    let repo = IpBlockRepository::new(db);
    let unblocked = repo.force_unblock(business.id, IP, now).await?;

    assert_eq!(unblocked, 2);
    assert!(!repo.is_blocked(business.id, IP, now).await?);
    assert!(repo
        .get_for_ip(business.id, IP)
        .await?
        .iter()
        .all(|block| block.unblocked_at.is_some()));

    Ok(())
}

/// Tests the plain unblock on an IP without active blocks.
///
/// Expected: Ok(0)
#[tokio::test]
async fn unblock_reports_zero_when_not_blocked() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;

    let repo = IpBlockRepository::new(db);
    assert_eq!(repo.unblock(business.id, IP, Utc::now()).await?, 0);

    Ok(())
}

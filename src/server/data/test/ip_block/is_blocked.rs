use super::*;

const IP: &str = "198.51.100.7";

/// Tests that an active block is detected for its business.
///
/// Expected: Ok(true)
#[tokio::test]
async fn detects_active_block() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    factory::create_ip_block(db, business.id, IP).await?;

    let repo = IpBlockRepository::new(db);
    assert!(repo.is_blocked(business.id, IP, Utc::now()).await?);

    Ok(())
}

/// Tests that blocks are scoped to the business that created them.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_block_in_other_business() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    let other = factory::create_business(db).await?;
    factory::create_ip_block(db, other.id, IP).await?;

    let repo = IpBlockRepository::new(db);
    assert!(!repo.is_blocked(business.id, IP, Utc::now()).await?);

    Ok(())
}

/// Tests that expired and lifted blocks no longer apply.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_expired_and_lifted_blocks() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    let now = Utc::now();
    factory::ip_block::IpBlockFactory::new(db, business.id, IP)
        .blocked_at(now - Duration::hours(30))
        .expires_at(Some(now - Duration::hours(6)))
        .build()
        .await?;
    factory::ip_block::IpBlockFactory::new(db, business.id, IP)
        .unblocked_at(Some(now - Duration::minutes(1)))
        .build()
        .await?;

    let repo = IpBlockRepository::new(db);
    assert!(!repo.is_blocked(business.id, IP, now).await?);

    Ok(())
}

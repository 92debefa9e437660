use super::*;

/// Tests filtering the block list by activity and reason.
///
/// Expected: Ok((one block, 1))
#[tokio::test]
async fn filters_active_blocks_by_reason() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    let now = Utc::now();
    factory::ip_block::IpBlockFactory::new(db, business.id, "198.51.100.1")
        .reason("abuse")
        .build()
        .await?;
    factory::ip_block::IpBlockFactory::new(db, business.id, "198.51.100.2")
        .build()
        .await?;
    factory::ip_block::IpBlockFactory::new(db, business.id, "198.51.100.3")
        .reason("abuse")
        .unblocked_at(Some(now))
        .build()
        .await?;

    let repo = IpBlockRepository::new(db);
    let (blocks, total) = repo
        .get_paginated(business.id, true, Some(BlockReason::Abuse), now, 0, 20)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(blocks[0].ip_address, "198.51.100.1");

    Ok(())
}

/// Tests listing all blocks including lifted ones.
///
/// Expected: Ok((blocks, 2))
#[tokio::test]
async fn includes_inactive_when_requested() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    let now = Utc::now();
    factory::create_ip_block(db, business.id, "198.51.100.4").await?;
    factory::ip_block::IpBlockFactory::new(db, business.id, "198.51.100.5")
        .unblocked_at(Some(now))
        .build()
        .await?;

    let repo = IpBlockRepository::new(db);
    let (blocks, total) = repo
        .get_paginated(business.id, false, None, now, 0, 20)
        .await?;

    assert_eq!(total, 2);
    assert_eq!(blocks.len(), 2);

    Ok(())
}

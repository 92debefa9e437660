use super::*;

/// Tests listing only the active blocks of a business.
///
/// Expected: Ok(IpBlockListDto) with the active block and pagination totals
#[tokio::test]
async fn lists_active_blocks() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    let active = factory::create_ip_block(db, business.id, "198.51.100.7").await?;
    factory::ip_block::IpBlockFactory::new(db, business.id, "198.51.100.8")
        .unblocked_at(Some(Utc::now()))
        .build()
        .await?;

    let list = IpBlockService::new(db)
        .get_paginated(business.id, true, None, 1, 20)
        .await?;

    assert_eq!(list.blocks.len(), 1);
    assert_eq!(list.blocks[0].id, active.id);
    assert!(list.blocks[0].is_active);
    assert_eq!(list.pagination.total, 1);
    assert_eq!(list.pagination.last_page, 1);

    Ok(())
}

/// Tests filtering by reason across active and lifted blocks.
///
/// Expected: Ok(IpBlockListDto) with only the abuse blocks
#[tokio::test]
async fn filters_by_reason() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    factory::create_ip_block(db, business.id, "198.51.100.7").await?;
    factory::ip_block::IpBlockFactory::new(db, business.id, "198.51.100.8")
        .reason("abuse")
        .unblocked_at(Some(Utc::now()))
        .build()
        .await?;

    let list = IpBlockService::new(db)
        .get_paginated(business.id, false, Some(BlockReason::Abuse), 1, 20)
        .await?;

    assert_eq!(list.blocks.len(), 1);
    assert_eq!(list.blocks[0].reason, "abuse");

    Ok(())
}

use super::*;

/// Tests a waiter blocking the IP behind one of their calls.
///
/// Verifies that the block records the call in its metadata and that the table is
/// silenced for a day.
///
/// Expected: Ok((IpBlock, true))
#[tokio::test]
async fn blocks_ip_and_silences_table() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, waiter, table) = factory::helpers::create_assigned_table(db).await?;
    let call = factory::create_call(db, &table).await?;

    let (block, table_silenced) = IpBlockService::new(db)
        .block(waiter.id, block_param(call.id))
        .await?;

    assert!(table_silenced);
    assert_eq!(block.business_id, business.id);
    assert_eq!(block.ip_address, "203.0.113.10");
    assert_eq!(block.blocked_by, Some(waiter.id));
    assert_eq!(block.reason, BlockReason::Spam);
    assert!(block.is_active(Utc::now()));

    let metadata = block.metadata.unwrap();
    assert_eq!(metadata["call_id"], call.id);
    assert_eq!(metadata["table_id"], table.id);

    let silences = entity::prelude::TableSilence::find().all(db).await?;
    assert_eq!(silences.len(), 1);
    assert_eq!(silences[0].reason, "manual");
    assert_eq!(silences[0].notes.as_deref(), Some("IP blocked: spam"));

    Ok(())
}

/// Tests blocking when the table is already silenced.
///
/// Expected: Ok((IpBlock, false)) without a second silence
#[tokio::test]
async fn keeps_existing_silence() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, waiter, table) = factory::helpers::create_assigned_table(db).await?;
    factory::create_silence(db, table.id).await?;
    let call = factory::create_call(db, &table).await?;

    let (_, table_silenced) = IpBlockService::new(db)
        .block(waiter.id, block_param(call.id))
        .await?;

    assert!(!table_silenced);
    assert_eq!(entity::prelude::TableSilence::find().all(db).await?.len(), 1);

    Ok(())
}

/// Tests blocking an IP that is already blocked in the business.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_already_blocked_ip() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, waiter, table) = factory::helpers::create_assigned_table(db).await?;
    factory::create_ip_block(db, business.id, "203.0.113.10").await?;
    let call = factory::create_call(db, &table).await?;

    let result = IpBlockService::new(db)
        .block(waiter.id, block_param(call.id))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests blocking from a call routed to another waiter.
///
/// Expected: Err(AppError::Forbidden)
#[tokio::test]
async fn rejects_call_of_other_waiter() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, _, table) = factory::helpers::create_assigned_table(db).await?;
    let colleague = factory::helpers::create_waiter_for_business(db, business.id).await?;
    let call = factory::create_call(db, &table).await?;

    let result = IpBlockService::new(db)
        .block(colleague.id, block_param(call.id))
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

/// Tests blocking from a call made without a recorded IP.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_call_without_ip() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, waiter, table) = factory::helpers::create_assigned_table(db).await?;
    let call = factory::waiter_call::WaiterCallFactory::new(db, &table)
        .ip_address(None)
        .build()
        .await?;

    let result = IpBlockService::new(db)
        .block(waiter.id, block_param(call.id))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

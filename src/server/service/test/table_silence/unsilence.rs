use super::*;

/// Tests lifting a table's silence.
///
/// Expected: Ok(()) and a second attempt finds nothing to lift
#[tokio::test]
async fn lifts_silence_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, _, table) = factory::helpers::create_assigned_table(db).await?;
    factory::create_silence(db, table.id).await?;

    let service = TableSilenceService::new(db);
    service.unsilence(business.id, table.id).await?;

    let result = service.unsilence(business.id, table.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

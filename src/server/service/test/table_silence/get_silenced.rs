use super::*;

/// Tests listing silenced tables of a business.
///
/// Verifies that the silencer's name is resolved and that automatic silences cannot be
/// lifted by staff.
///
/// Expected: Ok(SilencedTablesDto) with the two active silences
#[tokio::test]
async fn lists_active_silences() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, waiter, manual) = factory::helpers::create_assigned_table(db).await?;
    let automatic = factory::create_table(db, business.id).await?;
    factory::create_table(db, business.id).await?;

    factory::table_silence::TableSilenceFactory::new(db, manual.id)
        .silenced_by(Some(waiter.id))
        .build()
        .await?;
    factory::table_silence::TableSilenceFactory::new(db, automatic.id)
        .reason("automatic")
        .expires_at(Some(Utc::now() + Duration::minutes(10)))
        .build()
        .await?;

    let silenced = TableSilenceService::new(db).get_silenced(business.id).await?;

    assert_eq!(silenced.total, 2);

    let manual_row = silenced.tables.iter().find(|t| t.table_id == manual.id).unwrap();
    assert!(manual_row.can_unsilence);
    assert_eq!(manual_row.silenced_by_name.as_deref(), Some(waiter.name.as_str()));

    let automatic_row = silenced.tables.iter().find(|t| t.table_id == automatic.id).unwrap();
    assert!(!automatic_row.can_unsilence);
    assert_eq!(automatic_row.silence.reason, "automatic");

    Ok(())
}

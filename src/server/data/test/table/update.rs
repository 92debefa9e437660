use super::*;

/// Tests a partial table update.
///
/// Verifies that only provided fields change.
///
/// Expected: Ok(Some(Table)) with the new name and the old number
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    let table = factory::restaurant_table::TableFactory::new(db, business.id)
        .number(3)
        .build()
        .await?;

    let repo = TableRepository::new(db);
    let updated = repo
        .update(
            table.id,
            UpdateTableParam {
                name: Some("Terrace 3".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Terrace 3");
    assert_eq!(updated.number, 3);

    Ok(())
}

/// Tests updating a table that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TableRepository::new(db);
    let result = repo.update(99999, UpdateTableParam::default()).await?;

    assert!(result.is_none());

    Ok(())
}

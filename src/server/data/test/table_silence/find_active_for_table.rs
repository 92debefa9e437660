use super::*;

/// Tests finding the active silence of a table.
///
/// Expected: Ok(Some(TableSilence))
#[tokio::test]
async fn finds_unexpired_silence() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    let table = factory::create_table(db, business.id).await?;
    let created = factory::create_silence(db, table.id).await?;

    let repo = TableSilenceRepository::new(db);
    let found = repo.find_active_for_table(table.id, Utc::now()).await?;

    assert_eq!(found.map(|s| s.id), Some(created.id));

    Ok(())
}

/// Tests that expired silences are not returned even before the scheduler closes them.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_expired_silence() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    let table = factory::create_table(db, business.id).await?;
    let now = Utc::now();
    factory::table_silence::TableSilenceFactory::new(db, table.id)
        .silenced_at(now - Duration::minutes(40))
        .expires_at(Some(now - Duration::minutes(10)))
        .build()
        .await?;

    let repo = TableSilenceRepository::new(db);
    assert!(repo.find_active_for_table(table.id, now).await?.is_none());

    Ok(())
}

/// Tests that lifted silences are not returned.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_lifted_silence() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    let table = factory::create_table(db, business.id).await?;
    let now = Utc::now();
    factory::table_silence::TableSilenceFactory::new(db, table.id)
        .unsilenced_at(Some(now))
        .build()
        .await?;

    let repo = TableSilenceRepository::new(db);
    assert!(repo.find_active_for_table(table.id, now).await?.is_none());

    Ok(())
}

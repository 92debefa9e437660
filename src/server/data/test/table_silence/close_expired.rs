use super::*;

/// Tests closing silences past their expiry.
///
/// Verifies that only expired, still open silences are stamped.
///
/// Expected: Ok(1)
#[tokio::test]
async fn closes_only_expired_silences() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    let expired_table = factory::create_table(db, business.id).await?;
    let active_table = factory::create_table(db, business.id).await?;
    let now = Utc::now();

    factory::table_silence::TableSilenceFactory::new(db, expired_table.id)
        .silenced_at(now - Duration::minutes(20))
        .expires_at(Some(now - Duration::minutes(10)))
        .build()
        .await?;
    factory::create_silence(db, active_table.id).await?;

    let repo = TableSilenceRepository::new(db);
    let closed = repo.close_expired(now).await?;

    assert_eq!(closed, 1);
    assert!(repo.find_active_for_table(active_table.id, now).await?.is_some());
    assert_eq!(repo.close_expired(now).await?, 0);

    Ok(())
}

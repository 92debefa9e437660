use super::*;

/// Tests detecting a taken table number within the same business.
///
/// Expected: Ok(true)
#[tokio::test]
async fn detects_number_taken_in_business() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    factory::restaurant_table::TableFactory::new(db, business.id)
        .number(5)
        .build()
        .await?;

    let repo = TableRepository::new(db);
    assert!(repo.number_exists(business.id, 5, None).await?);

    Ok(())
}

/// Tests that table numbers are scoped per business.
///
/// Verifies that the same number used in another business does not count.
///
/// Expected: Ok(false)
#[tokio::test]
async fn ignores_other_businesses() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    let other = factory::create_business(db).await?;
    factory::restaurant_table::TableFactory::new(db, other.id)
        .number(5)
        .build()
        .await?;

    let repo = TableRepository::new(db);
    assert!(!repo.number_exists(business.id, 5, None).await?);

    Ok(())
}

/// Tests that the table being edited does not conflict with itself.
///
/// Expected: Ok(false)
#[tokio::test]
async fn excludes_table_being_updated() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    let table = factory::restaurant_table::TableFactory::new(db, business.id)
        .number(5)
        .build()
        .await?;

    let repo = TableRepository::new(db);
    assert!(!repo.number_exists(business.id, 5, Some(table.id)).await?);

    Ok(())
}

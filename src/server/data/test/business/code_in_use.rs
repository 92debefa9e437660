use super::*;

/// Tests a code already taken as a public business code.
///
/// Expected: Ok(true)
#[tokio::test]
async fn detects_public_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::business::BusinessFactory::new(db)
        .code("RESTO001")
        .build()
        .await?;

    let repo = BusinessRepository::new(db);
    assert!(repo.code_in_use("RESTO001").await?);

    Ok(())
}

/// Tests a code already taken as a join code.
///
/// Expected: Ok(true)
#[tokio::test]
async fn detects_join_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::business::BusinessFactory::new(db)
        .join_code("JOINME")
        .build()
        .await?;

    let repo = BusinessRepository::new(db);
    assert!(repo.code_in_use("JOINME").await?);

    Ok(())
}

/// Tests a code used by no business.
///
/// Expected: Ok(false)
#[tokio::test]
async fn accepts_free_code() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_business(db).await?;

    let repo = BusinessRepository::new(db);
    assert!(!repo.code_in_use("FREE42").await?);

    Ok(())
}

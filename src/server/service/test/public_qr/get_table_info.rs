use super::*;

/// Tests resolving a business and table code pair.
///
/// Expected: Ok(PublicTableInfoDto) with the matching business and table
#[tokio::test]
async fn resolves_codes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    let table = factory::create_table(db, business.id).await?;

    let info = PublicQrService::new(db)
        .get_table_info(&business.code, &table.code)
        .await?;

    assert_eq!(info.business.id, business.id);
    assert_eq!(info.business.name, business.name);
    assert_eq!(info.table.id, table.id);
    assert_eq!(info.table.number, table.number);

    Ok(())
}

/// Tests a table code that belongs to a different business.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_table_of_other_business() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    let other = factory::create_business(db).await?;
    let table = factory::create_table(db, other.id).await?;

    let result = PublicQrService::new(db)
        .get_table_info(&business.code, &table.code)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests an unknown business code.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_business_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    let table = factory::create_table(db, business.id).await?;

    let result = PublicQrService::new(db)
        .get_table_info("NOSUCHBZ", &table.code)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

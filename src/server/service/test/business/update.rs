use super::*;

/// Tests an admin replacing the business details.
///
/// Expected: Ok(Business) with the new name and contact details stored
#[tokio::test]
async fn updates_details_as_admin() -> Result<(), AppError> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, admin) = factory::helpers::create_business_with_admin(db).await?;
    let mut param = details("La Esquina");
    param.phone = Some("555-0100".to_string());

    let updated = BusinessService::new(db)
        .update(admin.id, business.id, param)
        .await?;

    assert_eq!(updated.name, "La Esquina");
    assert_eq!(updated.code, business.code);
    let stored = entity::prelude::Business::find_by_id(business.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, "La Esquina");
    assert_eq!(stored.phone.as_deref(), Some("555-0100"));

    Ok(())
}

/// Tests a waiter attempting to rename the business.
///
/// Expected: Err(AppError::Forbidden) and the name is unchanged
#[tokio::test]
async fn rejects_waiter() -> Result<(), AppError> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    let waiter = factory::helpers::create_waiter_for_business(db, business.id).await?;

    let result = BusinessService::new(db)
        .update(waiter.id, business.id, details("Taken Over"))
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));
    let stored = entity::prelude::Business::find_by_id(business.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.name, business.name);

    Ok(())
}

/// Tests updating a business that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_missing_business() -> Result<(), AppError> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = BusinessService::new(db)
        .update(user.id, 9999, details("Nowhere"))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

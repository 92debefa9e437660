use super::*;

/// Tests an admin deleting their business.
///
/// Expected: Ok(()) with members left without an active business
#[tokio::test]
async fn deletes_and_clears_active_business() -> Result<(), AppError> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, admin) = factory::helpers::create_business_with_admin(db).await?;
    let waiter = factory::helpers::create_waiter_for_business(db, business.id).await?;

    BusinessService::new(db).delete(admin.id, business.id).await?;

    assert!(entity::prelude::Business::find_by_id(business.id)
        .one(db)
        .await?
        .is_none());
    let waiter = entity::prelude::User::find_by_id(waiter.id).one(db).await?.unwrap();
    assert_eq!(waiter.active_business_id, None);

    Ok(())
}

/// Tests a waiter attempting to delete the business.
///
/// Expected: Err(AppError::Forbidden)
#[tokio::test]
async fn rejects_waiter() -> Result<(), AppError> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    let waiter = factory::helpers::create_waiter_for_business(db, business.id).await?;

    let result = BusinessService::new(db).delete(waiter.id, business.id).await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

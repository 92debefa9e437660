use super::*;

/// Tests switching to a business the user belongs to.
///
/// Expected: Ok and the user's active business updated
#[tokio::test]
async fn switches_active_business() -> Result<(), AppError> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, admin) = factory::helpers::create_business_with_admin(db).await?;
    let other = factory::create_business(db).await?;
    factory::create_waiter_member(db, other.id, admin.id).await?;

    let (business, membership) = BusinessService::new(db).switch(admin.id, other.id).await?;

    assert_eq!(business.id, other.id);
    assert_eq!(membership.role, MemberRole::Waiter);
    let admin = entity::prelude::User::find_by_id(admin.id).one(db).await?.unwrap();
    assert_eq!(admin.active_business_id, Some(other.id));

    Ok(())
}

/// Tests switching to a business the user does not belong to.
///
/// Expected: Err(AppError::Forbidden)
#[tokio::test]
async fn rejects_non_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let business = factory::create_business(db).await?;

    let result = BusinessService::new(db).switch(user.id, business.id).await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

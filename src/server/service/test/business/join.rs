use super::*;

/// Tests joining a business with a lowercase join code.
///
/// Expected: Ok(Business) with the user attached as waiter
#[tokio::test]
async fn joins_as_waiter() -> Result<(), AppError> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::business::BusinessFactory::new(db)
        .join_code("JOINME12")
        .build()
        .await?;
    let user = factory::create_user(db).await?;

    let joined = BusinessService::new(db)
        .join(&User::from_entity(user.clone()), " joinme12 ")
        .await?;

    assert_eq!(joined.id, business.id);
    let (_, membership) = BusinessService::new(db).get(user.id, business.id).await?;
    assert_eq!(membership.role, MemberRole::Waiter);

    Ok(())
}

/// Tests joining with an unknown code.
///
/// Expected: Err(AppError::Validation)
#[tokio::test]
async fn rejects_unknown_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = BusinessService::new(db)
        .join(&User::from_entity(user), "NOPE0000")
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests joining a business twice.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_existing_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, admin) = factory::helpers::create_business_with_admin(db).await?;

    let result = BusinessService::new(db)
        .join(&User::from_entity(admin), &business.join_code)
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

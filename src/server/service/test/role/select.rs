use super::*;

/// Tests selecting a role for an explicit business.
///
/// Expected: Ok(SelectedRole) with a role-scoped token and the role persisted
#[tokio::test]
async fn selects_role_for_given_business() -> Result<(), AppError> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, admin) = factory::helpers::create_business_with_admin(db).await?;

    let selected = RoleService::new(db)
        .select(admin.id, MemberRole::Waiter, Some(business.id))
        .await?;

    assert_eq!(selected.business_id, business.id);
    assert_eq!(selected.role, MemberRole::Waiter);
    assert_eq!(selected.token.token.name, "role-waiter");
    assert_eq!(selected.token.token.abilities, vec!["role:waiter".to_string()]);

    let stored = UserActiveRoleRepository::new(db)
        .find(admin.id, business.id)
        .await?;
    assert_eq!(stored, Some(MemberRole::Waiter));

    Ok(())
}

/// Tests that selecting again replaces the stored role.
///
/// Expected: Ok with the latest role stored
#[tokio::test]
async fn replaces_previous_selection() -> Result<(), AppError> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, admin) = factory::helpers::create_business_with_admin(db).await?;
    let service = RoleService::new(db);

    service
        .select(admin.id, MemberRole::Waiter, Some(business.id))
        .await?;
    service
        .select(admin.id, MemberRole::Admin, Some(business.id))
        .await?;

    let stored = UserActiveRoleRepository::new(db)
        .find(admin.id, business.id)
        .await?;
    assert_eq!(stored, Some(MemberRole::Admin));

    Ok(())
}

/// Tests inferring the business from a single admin membership.
///
/// The user also waits at another business, the administered one wins.
///
/// Expected: Ok(SelectedRole) for the administered business
#[tokio::test]
async fn infers_administered_business() -> Result<(), AppError> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, admin) = factory::helpers::create_business_with_admin(db).await?;
    let other = factory::create_business(db).await?;
    factory::create_waiter_member(db, other.id, admin.id).await?;

    let selected = RoleService::new(db)
        .select(admin.id, MemberRole::Admin, None)
        .await?;

    assert_eq!(selected.business_id, business.id);

    Ok(())
}

/// Tests inference when the user waits at two businesses and administers none.
///
/// Expected: Err(AppError::Validation)
#[tokio::test]
async fn rejects_ambiguous_business() -> Result<(), AppError> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_business(db).await?;
    let second = factory::create_business(db).await?;
    let waiter = factory::helpers::create_waiter_for_business(db, first.id).await?;
    factory::create_waiter_member(db, second.id, waiter.id).await?;

    let result = RoleService::new(db)
        .select(waiter.id, MemberRole::Waiter, None)
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests selecting a role for a business that does not exist.
///
/// Expected: Err(AppError::Validation)
#[tokio::test]
async fn rejects_unknown_business() -> Result<(), AppError> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = RoleService::new(db)
        .select(user.id, MemberRole::Admin, Some(9999))
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

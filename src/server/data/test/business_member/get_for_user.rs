use super::*;

/// Tests listing a user's businesses with their role in each.
///
/// Expected: Ok(Vec<BusinessWithRole>) in membership order
#[tokio::test]
async fn lists_businesses_with_roles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owned, admin) = factory::helpers::create_business_with_admin(db).await?;
    let other = factory::create_business(db).await?;
    factory::create_waiter_member(db, other.id, admin.id).await?;

    let repo = BusinessMemberRepository::new(db);
    let memberships = repo.get_for_user(admin.id).await?;

    assert_eq!(memberships.len(), 2);
    assert_eq!(memberships[0].business.id, owned.id);
    assert_eq!(memberships[0].role, MemberRole::Admin);
    assert_eq!(memberships[1].business.id, other.id);
    assert_eq!(memberships[1].role, MemberRole::Waiter);

    Ok(())
}

/// Tests listing businesses for a user without memberships.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_user_without_memberships() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = BusinessMemberRepository::new(db);
    assert!(repo.get_for_user(user.id).await?.is_empty());

    Ok(())
}

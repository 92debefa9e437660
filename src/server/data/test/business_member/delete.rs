use super::*;

/// Tests removing a membership.
///
/// Expected: Ok(true), then the membership is gone
#[tokio::test]
async fn removes_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    let waiter = factory::helpers::create_waiter_for_business(db, business.id).await?;

    let repo = BusinessMemberRepository::new(db);
    assert!(repo.delete(business.id, waiter.id).await?);
    assert!(repo.find(business.id, waiter.id).await?.is_none());

    Ok(())
}

/// Tests removing a membership that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_when_not_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    let user = factory::create_user(db).await?;

    let repo = BusinessMemberRepository::new(db);
    assert!(!repo.delete(business.id, user.id).await?);

    Ok(())
}

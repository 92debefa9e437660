use super::*;

/// Tests a user without a business creating one.
///
/// Verifies generated codes, the admin membership and that the business becomes active.
///
/// Expected: Ok(Business) with distinct 8-character uppercase codes
#[tokio::test]
async fn creates_business_with_admin_membership() -> Result<(), AppError> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let business = BusinessService::new(db)
        .create(&User::from_entity(owner.clone()), details("Casa Pepe"))
        .await?;

    assert_eq!(business.name, "Casa Pepe");
    assert_eq!(business.code.len(), 8);
    assert_eq!(business.join_code.len(), 8);
    assert_ne!(business.code, business.join_code);
    assert!(business
        .code
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));

    let memberships = BusinessService::new(db).get_for_user(owner.id).await?;
    assert_eq!(memberships.len(), 1);
    assert_eq!(memberships[0].role, MemberRole::Admin);

    let owner = entity::prelude::User::find_by_id(owner.id).one(db).await?.unwrap();
    assert_eq!(owner.active_business_id, Some(business.id));

    Ok(())
}

/// Tests creating a second business.
///
/// Expected: Ok(Business) while the first business stays active
#[tokio::test]
async fn keeps_existing_active_business() -> Result<(), AppError> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, owner) = factory::helpers::create_business_with_admin(db).await?;

    BusinessService::new(db)
        .create(&User::from_entity(owner.clone()), details("Second Venue"))
        .await?;

    let owner = entity::prelude::User::find_by_id(owner.id).one(db).await?.unwrap();
    assert_eq!(owner.active_business_id, Some(first.id));

    Ok(())
}

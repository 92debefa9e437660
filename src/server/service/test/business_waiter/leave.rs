use super::*;

/// Tests a waiter leaving their active business while working elsewhere too.
///
/// Verifies that pending calls are cancelled, tables released, the membership removed
/// and the other business becomes active.
///
/// Expected: Ok(LeaveBusinessResultDto) pointing at the remaining business
#[tokio::test]
async fn releases_work_and_switches_business() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, waiter, table) = factory::helpers::create_assigned_table(db).await?;
    let call = factory::create_call(db, &table).await?;
    let other = factory::create_business(db).await?;
    factory::create_waiter_member(db, other.id, waiter.id).await?;

    let result = BusinessWaiterService::new(db)
        .leave(&User::from_entity(waiter.clone()), business.id)
        .await?;

    assert_eq!(result.new_active_business_id, Some(other.id));
    assert_eq!(result.cancelled_calls, 1);
    assert_eq!(result.released_tables, 1);

    let call = entity::prelude::WaiterCall::find_by_id(call.id).one(db).await?.unwrap();
    assert_eq!(call.status, "cancelled");

    let table = entity::prelude::RestaurantTable::find_by_id(table.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(table.active_waiter_id, None);

    let user = entity::prelude::User::find_by_id(waiter.id).one(db).await?.unwrap();
    assert_eq!(user.active_business_id, Some(other.id));

    let memberships = entity::prelude::BusinessMember::find().all(db).await?;
    assert!(memberships
        .iter()
        .all(|m| m.business_id != business.id || m.user_id != waiter.id));

    Ok(())
}

/// Tests leaving the only business a user belongs to.
///
/// Expected: Ok with no active business left
#[tokio::test]
async fn clears_active_business_when_none_left() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    let waiter = factory::helpers::create_waiter_for_business(db, business.id).await?;

    let result = BusinessWaiterService::new(db)
        .leave(&User::from_entity(waiter.clone()), business.id)
        .await?;

    assert_eq!(result.new_active_business_id, None);
    let user = entity::prelude::User::find_by_id(waiter.id).one(db).await?.unwrap();
    assert_eq!(user.active_business_id, None);

    Ok(())
}

/// Tests leaving a business the user is not a member of.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_non_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    let outsider = factory::create_user(db).await?;

    let result = BusinessWaiterService::new(db)
        .leave(&User::from_entity(outsider), business.id)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

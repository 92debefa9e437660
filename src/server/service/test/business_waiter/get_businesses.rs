use super::*;

/// Tests a waiter's overview of the businesses they work at.
///
/// Verifies table statistics relative to the waiter and the count of their pending calls.
///
/// Expected: Ok(WaiterBusinessesDto) with one active business
#[tokio::test]
async fn reports_table_stats_per_business() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, waiter, table) = factory::helpers::create_assigned_table(db).await?;
    let colleague = factory::helpers::create_waiter_for_business(db, business.id).await?;
    factory::restaurant_table::TableFactory::new(db, business.id)
        .active_waiter_id(Some(colleague.id))
        .build()
        .await?;
    factory::create_table(db, business.id).await?;
    factory::create_call(db, &table).await?;

    let overview = BusinessWaiterService::new(db)
        .get_businesses(&User::from_entity(waiter))
        .await?;

    assert_eq!(overview.active_business_id, Some(business.id));
    assert_eq!(overview.businesses.len(), 1);

    let entry = &overview.businesses[0];
    assert!(entry.is_active);
    assert_eq!(entry.role, "waiter");
    assert_eq!(entry.business.join_code, None);
    assert_eq!(entry.table_stats.total, 3);
    assert_eq!(entry.table_stats.assigned_to_me, 1);
    assert_eq!(entry.table_stats.available, 1);
    assert_eq!(entry.table_stats.occupied_by_others, 1);
    assert_eq!(entry.pending_calls, 1);

    Ok(())
}

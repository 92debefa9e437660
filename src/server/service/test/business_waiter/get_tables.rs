use super::*;

/// Tests the per-table view of a business from a waiter's perspective.
///
/// Expected: Ok(BusinessTablesDto) with statuses, available actions and statistics
#[tokio::test]
async fn describes_each_table() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (business, waiter, mine) = factory::helpers::create_assigned_table(db).await?;
    let colleague = factory::helpers::create_waiter_for_business(db, business.id).await?;
    let theirs = factory::restaurant_table::TableFactory::new(db, business.id)
        .active_waiter_id(Some(colleague.id))
        .build()
        .await?;
    let free = factory::create_table(db, business.id).await?;
    factory::create_silence(db, mine.id).await?;
    let call = factory::create_call(db, &mine).await?;

    let view = BusinessWaiterService::new(db)
        .get_tables(&User::from_entity(waiter), business.id)
        .await?;

    assert_eq!(view.business.id, business.id);
    assert_eq!(view.tables.len(), 3);

    let row = |id: i32| view.tables.iter().find(|t| t.table.id == id).unwrap();

    let mine_row = row(mine.id);
    assert_eq!(mine_row.status, "assigned_to_me");
    assert_eq!(mine_row.actions_available, vec!["deactivate", "unsilence"]);
    assert_eq!(mine_row.pending_calls, 1);
    assert_eq!(mine_row.latest_call.as_ref().map(|c| c.id), Some(call.id));
    assert!(mine_row.silence.is_some());

    let theirs_row = row(theirs.id);
    assert_eq!(theirs_row.status, "occupied");
    assert_eq!(theirs_row.waiter_name.as_deref(), Some(colleague.name.as_str()));
    assert!(theirs_row.actions_available.is_empty());

    let free_row = row(free.id);
    assert_eq!(free_row.status, "available");
    assert_eq!(free_row.actions_available, vec!["activate", "silence"]);

    assert_eq!(view.statistics.total, 3);
    assert_eq!(view.statistics.silenced, 1);
    assert_eq!(view.statistics.pending_calls, 1);

    Ok(())
}

/// Tests viewing the tables of a business the user does not belong to.
///
/// Expected: Err(AppError::Forbidden)
#[tokio::test]
async fn rejects_non_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_call_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let business = factory::create_business(db).await?;
    let outsider = factory::create_user(db).await?;

    let result = BusinessWaiterService::new(db)
        .get_tables(&User::from_entity(outsider), business.id)
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));

    Ok(())
}

use super::*;

/// Tests creating a user.
///
/// Expected: Ok(User) without an active business
#[tokio::test]
async fn creates_user_without_active_business() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParam {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            password_hash: "hash".to_string(),
        })
        .await?;

    assert_eq!(user.email, "ana@example.com");
    assert!(user.active_business_id.is_none());
    assert!(repo.email_exists("ana@example.com").await?);

    Ok(())
}

/// Tests that the email column is unique.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParam {
            name: "Copy".to_string(),
            email: "taken@example.com".to_string(),
            password_hash: "hash".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

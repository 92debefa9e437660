use super::*;

/// Tests registering a new account.
///
/// Verifies the token is stored by hash only and carries full access.
///
/// Expected: Ok((User, IssuedToken)) with a token resolvable by its hash
#[tokio::test]
async fn registers_and_issues_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, issued) = AuthService::new(db)
        .register(registration("lucia@example.com"))
        .await?;

    assert_eq!(user.email, "lucia@example.com");
    assert_eq!(user.active_business_id, None);
    assert_eq!(issued.token.user_id, user.id);
    assert_eq!(issued.token.abilities, vec![ALL_ABILITIES.to_string()]);

    let stored = ApiTokenRepository::new(db)
        .find_by_hash(&hash_token(&issued.plain_text))
        .await?;
    assert_eq!(stored.map(|t| t.id), Some(issued.token.id));

    Ok(())
}

/// Tests registering an email that is already taken.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    service.register(registration("taken@example.com")).await?;

    let result = service.register(registration("taken@example.com")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

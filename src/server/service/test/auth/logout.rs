use super::*;

/// Tests that logging out revokes only the current token.
///
/// Expected: Ok(()) with the token no longer resolvable
#[tokio::test]
async fn revokes_current_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    let (_, issued) = service.register(registration("pia@example.com")).await?;

    service.logout(issued.token.id).await?;

    let stored = ApiTokenRepository::new(db)
        .find_by_hash(&hash_token(&issued.plain_text))
        .await?;
    assert!(stored.is_none());

    Ok(())
}

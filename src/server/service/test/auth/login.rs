use super::*;

/// Tests logging in with the registered password.
///
/// Expected: Ok with a new token distinct from the registration token
#[tokio::test]
async fn logs_in_with_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    let (user, first) = service.register(registration("mario@example.com")).await?;

    let (logged_in, second) = service
        .login(LoginParam {
            email: "mario@example.com".to_string(),
            password: "secret-password".to_string(),
        })
        .await?;

    assert_eq!(logged_in.id, user.id);
    assert_ne!(first.plain_text, second.plain_text);

    Ok(())
}

/// Tests logging in with a wrong password.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    service.register(registration("ana@example.com")).await?;

    let result = service
        .login(LoginParam {
            email: "ana@example.com".to_string(),
            password: "wrong-password".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials(_)))
    ));

    Ok(())
}

/// Tests logging in with an unknown email.
///
/// Expected: Err(AuthError::InvalidCredentials)
#[tokio::test]
async fn rejects_unknown_email() -> Result<(), AppError> {
    let test = TestBuilder::new().with_business_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AuthService::new(db)
        .login(LoginParam {
            email: "nobody@example.com".to_string(),
            password: "secret-password".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials(_)))
    ));

    Ok(())
}

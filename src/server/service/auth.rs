use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::server::{
    data::{api_token::ApiTokenRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::{CreateApiTokenParam, CreateUserParam, IssuedToken, LoginParam, RegisterParam, User},
    util::token::{generate_token, hash_token},
};

/// Name given to tokens issued by register and login.
const LOGIN_TOKEN_NAME: &str = "auth-token";

/// Ability granting full access, carried by login tokens.
pub const ALL_ABILITIES: &str = "*";

/// Service for account registration and bearer token lifecycle.
///
/// Passwords are hashed with bcrypt; tokens are random strings of which only the
/// SHA-256 digest is stored.
pub struct AuthService<'a> {
    /// Database connection for user and token operations.
    pub db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an account and logs it in.
    ///
    /// # Arguments
    /// - `param` - Validated registration input
    ///
    /// # Returns
    /// - `Ok((User, IssuedToken))` - The new user and a full-access token
    /// - `Err(AppError::Conflict)` - The email is already registered
    /// - `Err(AppError::BcryptErr)` - Password hashing failed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, param: RegisterParam) -> Result<(User, IssuedToken), AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.email_exists(&param.email).await? {
            return Err(AppError::Conflict(
                "The email has already been taken.".to_string(),
            ));
        }

        let password_hash = bcrypt::hash(&param.password, bcrypt::DEFAULT_COST)?;

        let user = user_repo
            .create(CreateUserParam {
                name: param.name,
                email: param.email,
                password_hash,
            })
            .await?;

        let token = issue_token(
            self.db,
            user.id,
            LOGIN_TOKEN_NAME,
            vec![ALL_ABILITIES.to_string()],
        )
        .await?;

        tracing::info!("Registered user {}", user.id);

        Ok((user, token))
    }

    /// Verifies credentials and issues a full-access token.
    ///
    /// An unknown email and a wrong password produce the same error so callers cannot
    /// discover which emails are registered.
    ///
    /// # Returns
    /// - `Ok((User, IssuedToken))` - Authenticated user and new token
    /// - `Err(AuthError::InvalidCredentials)` - Email unknown or password mismatch
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn login(&self, param: LoginParam) -> Result<(User, IssuedToken), AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some((user, password_hash)) = user_repo.find_credentials_by_email(&param.email).await?
        else {
            return Err(AuthError::InvalidCredentials(param.email).into());
        };

        // A malformed stored hash can never match, treat it as a failed login
        let matches = bcrypt::verify(&param.password, &password_hash).unwrap_or(false);
        if !matches {
            return Err(AuthError::InvalidCredentials(param.email).into());
        }

        let token = issue_token(
            self.db,
            user.id,
            LOGIN_TOKEN_NAME,
            vec![ALL_ABILITIES.to_string()],
        )
        .await?;

        Ok((user, token))
    }

    /// Revokes the token used for the current request.
    pub async fn logout(&self, token_id: i32) -> Result<(), AppError> {
        let token_repo = ApiTokenRepository::new(self.db);

        token_repo.delete(token_id).await?;

        Ok(())
    }
}

/// Generates a token, stores its hash and returns the plain value once.
///
/// Generic over the connection so it can run inside a transaction.
pub async fn issue_token<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    name: &str,
    abilities: Vec<String>,
) -> Result<IssuedToken, AppError> {
    let token_repo = ApiTokenRepository::new(db);

    let plain_text = generate_token();
    let token = token_repo
        .create(CreateApiTokenParam {
            user_id,
            name: name.to_string(),
            token_hash: hash_token(&plain_text),
            abilities,
        })
        .await?;

    tracing::debug!("Issued token {} ({}) for user {}", token.id, token.name, user_id);

    Ok(IssuedToken { plain_text, token })
}

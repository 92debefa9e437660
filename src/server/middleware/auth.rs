use axum::http::{header::AUTHORIZATION, HeaderMap};
use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{api_token::ApiTokenRepository, business_member::BusinessMemberRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{business::Membership, user::User},
    util::token::hash_token,
};

pub enum Permission {
    /// The user has an active business and still belongs to it.
    ActiveBusiness,
    /// The user administers their active business. Implies `ActiveBusiness`.
    BusinessAdmin,
}

/// Authenticated caller resolved from a bearer token.
pub struct AuthContext {
    pub user: User,
    /// Token presented with the request, revoked on logout.
    pub token_id: i32,
    /// Membership in the active business, loaded when a business permission was required.
    pub membership: Option<Membership>,
}

impl AuthContext {
    /// Active business of the caller.
    ///
    /// # Returns
    /// - `Ok(i32)` - The active business ID
    /// - `Err(AuthError::NoActiveBusiness)` - No business selected
    pub fn business_id(&self) -> Result<i32, AppError> {
        self.user
            .active_business_id
            .ok_or_else(|| AuthError::NoActiveBusiness(self.user.id).into())
    }

    pub fn is_admin(&self) -> bool {
        self.membership
            .as_ref()
            .is_some_and(|membership| membership.is_admin())
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, headers: &'a HeaderMap) -> Self {
        Self { db, headers }
    }

    /// Resolves the bearer token and checks the requested permissions.
    ///
    /// # Returns
    /// - `Ok(AuthContext)` - Caller with every permission satisfied
    /// - `Err(AuthError::MissingToken)` - No bearer token sent
    /// - `Err(AuthError::InvalidToken)` - Token unknown, revoked, or its user is gone
    /// - `Err(AuthError::NoActiveBusiness)` - No active business, or no longer a member of it
    /// - `Err(AuthError::AccessDenied)` - Not an admin of the active business
    pub async fn require(&self, permissions: &[Permission]) -> Result<AuthContext, AppError> {
        let Some(plain_text) = bearer_token(self.headers) else {
            return Err(AuthError::MissingToken.into());
        };

        let token_repo = ApiTokenRepository::new(self.db);
        let Some(token) = token_repo.find_by_hash(&hash_token(plain_text)).await? else {
            return Err(AuthError::InvalidToken.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(token.user_id).await? else {
            return Err(AuthError::InvalidToken.into());
        };

        token_repo.touch(token.id, Utc::now()).await?;

        let mut auth = AuthContext {
            user,
            token_id: token.id,
            membership: None,
        };

        if permissions.is_empty() {
            return Ok(auth);
        }

        let business_id = auth.business_id()?;
        let Some(membership) = BusinessMemberRepository::new(self.db)
            .find(business_id, auth.user.id)
            .await?
        else {
            return Err(AuthError::NoActiveBusiness(auth.user.id).into());
        };

        for permission in permissions {
            match permission {
                Permission::ActiveBusiness => {}
                Permission::BusinessAdmin => {
                    if !membership.is_admin() {
                        return Err(AuthError::AccessDenied(
                            auth.user.id,
                            format!("User is not an admin of business {}", business_id),
                        )
                        .into());
                    }
                }
            }
        }

        auth.membership = Some(membership);

        Ok(auth)
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::{
        business::BusinessRepository, business_member::BusinessMemberRepository,
        user::UserRepository,
    },
    error::AppError,
    model::{
        business::{
            Business, BusinessDetailsParam, BusinessWithRole, CreateBusinessParam, MemberRole,
            Membership,
        },
        user::User,
    },
    util::code::{generate_code, UPPERCASE_ALPHANUMERIC},
};

const BUSINESS_CODE_LENGTH: usize = 8;

pub struct BusinessService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BusinessService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every business the user belongs to with their role, oldest membership first.
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<BusinessWithRole>, AppError> {
        let member_repo = BusinessMemberRepository::new(self.db);

        Ok(member_repo.get_for_user(user_id).await?)
    }

    /// Creates a business owned by `user`.
    ///
    /// Generates unique public and join codes, makes the creator an admin and selects the
    /// business as active when the creator had none. Runs in one transaction.
    ///
    /// # Returns
    /// - `Ok(Business)` - The created business
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, user: &User, details: BusinessDetailsParam) -> Result<Business, AppError> {
        let txn = self.db.begin().await?;

        let business_repo = BusinessRepository::new(&txn);
        let code = unique_code(&business_repo, None).await?;
        let join_code = unique_code(&business_repo, Some(&code)).await?;

        let business = business_repo
            .create(CreateBusinessParam {
                details,
                code,
                join_code,
            })
            .await?;

        BusinessMemberRepository::new(&txn)
            .create(business.id, user.id, MemberRole::Admin)
            .await?;

        if user.active_business_id.is_none() {
            UserRepository::new(&txn)
                .set_active_business(user.id, Some(business.id))
                .await?;
        }

        txn.commit().await?;

        tracing::info!("User {} created business {}", user.id, business.id);

        Ok(business)
    }

    /// Gets a business the user belongs to.
    ///
    /// # Returns
    /// - `Ok((Business, Membership))` - The business and the user's membership
    /// - `Err(AppError::NotFound)` - No such business
    /// - `Err(AppError::Forbidden)` - The user is not a member
    pub async fn get(&self, user_id: i32, id: i32) -> Result<(Business, Membership), AppError> {
        let business = BusinessRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Business not found".to_string()))?;

        let membership = BusinessMemberRepository::new(self.db)
            .find(id, user_id)
            .await?
            .ok_or_else(|| {
                AppError::Forbidden("You do not belong to this business".to_string())
            })?;

        Ok((business, membership))
    }

    /// Updates business details. Only admins of the business may do this.
    pub async fn update(
        &self,
        user_id: i32,
        id: i32,
        details: BusinessDetailsParam,
    ) -> Result<Business, AppError> {
        self.require_admin(user_id, id).await?;

        BusinessRepository::new(self.db)
            .update(id, details)
            .await?
            .ok_or_else(|| AppError::NotFound("Business not found".to_string()))
    }

    /// Deletes a business. Users who had it active are left with no active business.
    pub async fn delete(&self, user_id: i32, id: i32) -> Result<(), AppError> {
        self.require_admin(user_id, id).await?;

        let txn = self.db.begin().await?;

        let cleared = UserRepository::new(&txn).clear_active_business(id).await?;
        BusinessRepository::new(&txn).delete(id).await?;

        txn.commit().await?;

        tracing::info!(
            "User {} deleted business {}, cleared active business for {} users",
            user_id,
            id,
            cleared
        );

        Ok(())
    }

    /// Attaches the user to the business owning `join_code` as a waiter.
    ///
    /// # Returns
    /// - `Ok(Business)` - The joined business
    /// - `Err(AppError::Validation)` - Unknown join code
    /// - `Err(AppError::Conflict)` - Already a member
    pub async fn join(&self, user: &User, join_code: &str) -> Result<Business, AppError> {
        let join_code = join_code.trim().to_uppercase();

        let business = BusinessRepository::new(self.db)
            .find_by_join_code(&join_code)
            .await?
            .ok_or_else(|| {
                AppError::Validation("The selected join code is invalid.".to_string())
            })?;

        let member_repo = BusinessMemberRepository::new(self.db);
        if member_repo.find(business.id, user.id).await?.is_some() {
            return Err(AppError::Conflict(
                "You are already a member of this business".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        BusinessMemberRepository::new(&txn)
            .create(business.id, user.id, MemberRole::Waiter)
            .await?;

        if user.active_business_id.is_none() {
            UserRepository::new(&txn)
                .set_active_business(user.id, Some(business.id))
                .await?;
        }

        txn.commit().await?;

        tracing::info!("User {} joined business {} as waiter", user.id, business.id);

        Ok(business)
    }

    /// Makes `business_id` the user's active business.
    ///
    /// # Returns
    /// - `Ok((Business, Membership))` - The now active business
    /// - `Err(AppError::Forbidden)` - The user is not a member
    pub async fn switch(&self, user_id: i32, business_id: i32) -> Result<(Business, Membership), AppError> {
        let membership = BusinessMemberRepository::new(self.db)
            .find(business_id, user_id)
            .await?
            .ok_or_else(|| {
                AppError::Forbidden("You do not belong to this business".to_string())
            })?;

        let business = BusinessRepository::new(self.db)
            .find_by_id(business_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Business not found".to_string()))?;

        UserRepository::new(self.db)
            .set_active_business(user_id, Some(business_id))
            .await?;

        Ok((business, membership))
    }

    async fn require_admin(&self, user_id: i32, business_id: i32) -> Result<Membership, AppError> {
        let (_, membership) = self.get(user_id, business_id).await?;

        if !membership.is_admin() {
            return Err(AppError::Forbidden(
                "Only administrators can manage this business".to_string(),
            ));
        }

        Ok(membership)
    }
}

/// Generates a code not used as any business's code or join code.
async fn unique_code<C: ConnectionTrait>(
    repo: &BusinessRepository<'_, C>,
    exclude: Option<&str>,
) -> Result<String, DbErr> {
    loop {
        let code = generate_code(BUSINESS_CODE_LENGTH, UPPERCASE_ALPHANUMERIC);

        if exclude == Some(code.as_str()) {
            continue;
        }
        if !repo.code_in_use(&code).await? {
            return Ok(code);
        }
    }
}

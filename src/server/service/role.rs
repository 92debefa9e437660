use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        business::BusinessRepository, business_member::BusinessMemberRepository,
        user_active_role::UserActiveRoleRepository,
    },
    error::AppError,
    model::{business::MemberRole, user::IssuedToken},
    service::auth::issue_token,
};

/// Result of selecting a role.
#[derive(Debug, Clone)]
pub struct SelectedRole {
    pub token: IssuedToken,
    pub role: MemberRole,
    pub business_id: i32,
}

pub struct RoleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records the role the user works as in a business and issues a token carrying it.
    ///
    /// When `business_id` is omitted it is inferred from the user's memberships: the only
    /// business they administer, else the only business they wait at. The role is a UI
    /// preference; permissions keep coming from membership.
    ///
    /// # Returns
    /// - `Ok(SelectedRole)` - Token with ability `role:<role>` and the resolved business
    /// - `Err(AppError::Validation)` - Unknown business, or it could not be inferred
    pub async fn select(
        &self,
        user_id: i32,
        role: MemberRole,
        business_id: Option<i32>,
    ) -> Result<SelectedRole, AppError> {
        let business_id = match business_id {
            Some(id) => {
                if BusinessRepository::new(self.db).find_by_id(id).await?.is_none() {
                    return Err(AppError::Validation(
                        "The selected business id is invalid.".to_string(),
                    ));
                }
                id
            }
            None => self.infer_business(user_id).await?,
        };

        UserActiveRoleRepository::new(self.db)
            .upsert(user_id, business_id, role, Utc::now())
            .await?;

        let token = issue_token(
            self.db,
            user_id,
            &format!("role-{}", role.as_str()),
            vec![format!("role:{}", role.as_str())],
        )
        .await?;

        Ok(SelectedRole {
            token,
            role,
            business_id,
        })
    }

    async fn infer_business(&self, user_id: i32) -> Result<i32, AppError> {
        let member_repo = BusinessMemberRepository::new(self.db);

        let admin_of = member_repo
            .get_business_ids_with_role(user_id, MemberRole::Admin)
            .await?;
        if let [business_id] = admin_of.as_slice() {
            return Ok(*business_id);
        }

        let waiter_at = member_repo
            .get_business_ids_with_role(user_id, MemberRole::Waiter)
            .await?;
        if let [business_id] = waiter_at.as_slice() {
            return Ok(*business_id);
        }

        Err(AppError::Validation(
            "Unable to determine the business for this role".to_string(),
        ))
    }
}

//! Business membership repository.
//!
//! Memberships link users to businesses with an `admin` or `waiter` role. A user has at
//! most one membership per business.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::business::{Business, BusinessWithRole, MemberRole, Membership};

pub struct BusinessMemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BusinessMemberRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds a user to a business with the given role.
    ///
    /// # Returns
    /// - `Ok(Membership)` - Created membership
    /// - `Err(DbErr)` - Database error, including a unique violation if already a member
    pub async fn create(
        &self,
        business_id: i32,
        user_id: i32,
        role: MemberRole,
    ) -> Result<Membership, DbErr> {
        let entity = entity::business_member::ActiveModel {
            business_id: ActiveValue::Set(business_id),
            user_id: ActiveValue::Set(user_id),
            role: ActiveValue::Set(role.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Membership::from_entity(entity)
    }

    pub async fn find(&self, business_id: i32, user_id: i32) -> Result<Option<Membership>, DbErr> {
        entity::prelude::BusinessMember::find()
            .filter(entity::business_member::Column::BusinessId.eq(business_id))
            .filter(entity::business_member::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
            .map(Membership::from_entity)
            .transpose()
    }

    /// Gets every business the user belongs to, oldest membership first.
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<BusinessWithRole>, DbErr> {
        let rows = entity::prelude::BusinessMember::find()
            .filter(entity::business_member::Column::UserId.eq(user_id))
            .order_by_asc(entity::business_member::Column::CreatedAt)
            .order_by_asc(entity::business_member::Column::Id)
            .find_also_related(entity::prelude::Business)
            .all(self.db)
            .await?;

        rows.into_iter()
            .filter_map(|(member, business)| business.map(|b| (member, b)))
            .map(|(member, business)| {
                Ok(BusinessWithRole {
                    role: MemberRole::from_db(&member.role)?,
                    business: Business::from_entity(business),
                })
            })
            .collect()
    }

    /// Gets the IDs of all members of a business.
    pub async fn get_user_ids(&self, business_id: i32) -> Result<Vec<i32>, DbErr> {
        let members = entity::prelude::BusinessMember::find()
            .filter(entity::business_member::Column::BusinessId.eq(business_id))
            .order_by_asc(entity::business_member::Column::Id)
            .all(self.db)
            .await?;

        Ok(members.into_iter().map(|m| m.user_id).collect())
    }

    /// Gets the IDs of the businesses where the user holds `role`.
    pub async fn get_business_ids_with_role(
        &self,
        user_id: i32,
        role: MemberRole,
    ) -> Result<Vec<i32>, DbErr> {
        let members = entity::prelude::BusinessMember::find()
            .filter(entity::business_member::Column::UserId.eq(user_id))
            .filter(entity::business_member::Column::Role.eq(role.as_str()))
            .order_by_asc(entity::business_member::Column::Id)
            .all(self.db)
            .await?;

        Ok(members.into_iter().map(|m| m.business_id).collect())
    }

    /// Removes a user from a business.
    ///
    /// # Returns
    /// - `Ok(true)` - Membership deleted
    /// - `Ok(false)` - The user was not a member
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, business_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::BusinessMember::delete_many()
            .filter(entity::business_member::Column::BusinessId.eq(business_id))
            .filter(entity::business_member::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

//! Repository for the role a user last selected in each business.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::business::MemberRole;

pub struct UserActiveRoleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserActiveRoleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records the selected role, replacing any earlier selection for the same business.
    pub async fn upsert(
        &self,
        user_id: i32,
        business_id: i32,
        role: MemberRole,
        switched_at: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        let existing = entity::prelude::UserActiveRole::find()
            .filter(entity::user_active_role::Column::UserId.eq(user_id))
            .filter(entity::user_active_role::Column::BusinessId.eq(business_id))
            .one(self.db)
            .await?;

        match existing {
            Some(row) => {
                let mut active: entity::user_active_role::ActiveModel = row.into();
                active.active_role = ActiveValue::Set(role.as_str().to_string());
                active.switched_at = ActiveValue::Set(switched_at);
                active.update(self.db).await?;
            }
            None => {
                entity::user_active_role::ActiveModel {
                    user_id: ActiveValue::Set(user_id),
                    business_id: ActiveValue::Set(business_id),
                    active_role: ActiveValue::Set(role.as_str().to_string()),
                    switched_at: ActiveValue::Set(switched_at),
                    ..Default::default()
                }
                .insert(self.db)
                .await?;
            }
        }

        Ok(())
    }

    pub async fn find(&self, user_id: i32, business_id: i32) -> Result<Option<MemberRole>, DbErr> {
        entity::prelude::UserActiveRole::find()
            .filter(entity::user_active_role::Column::UserId.eq(user_id))
            .filter(entity::user_active_role::Column::BusinessId.eq(business_id))
            .one(self.db)
            .await?
            .map(|row| MemberRole::from_db(&row.active_role))
            .transpose()
    }

    pub async fn delete(&self, user_id: i32, business_id: i32) -> Result<(), DbErr> {
        entity::prelude::UserActiveRole::delete_many()
            .filter(entity::user_active_role::Column::UserId.eq(user_id))
            .filter(entity::user_active_role::Column::BusinessId.eq(business_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}

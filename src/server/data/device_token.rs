//! Push device token repository.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::notification::{DeviceToken, RegisterDeviceTokenParam};

pub struct DeviceTokenRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DeviceTokenRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Registers a device token for a user.
    ///
    /// A token is unique across users; registering a token that belongs to someone else
    /// moves it to the caller, since the device changed hands.
    pub async fn upsert(
        &self,
        user_id: i32,
        param: RegisterDeviceTokenParam,
    ) -> Result<DeviceToken, DbErr> {
        let now = Utc::now();
        let entity = entity::prelude::DeviceToken::insert(entity::device_token::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            token: ActiveValue::Set(param.token),
            platform: ActiveValue::Set(param.platform),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::device_token::Column::Token)
                .update_columns([
                    entity::device_token::Column::UserId,
                    entity::device_token::Column::Platform,
                    entity::device_token::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(DeviceToken::from_entity(entity))
    }

    /// Deletes one of the user's tokens.
    ///
    /// # Returns
    /// - `Ok(true)` - Token removed
    /// - `Ok(false)` - The user has no such token
    /// - `Err(DbErr)` - Database error
    pub async fn delete_for_user(&self, user_id: i32, token: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::DeviceToken::delete_many()
            .filter(entity::device_token::Column::UserId.eq(user_id))
            .filter(entity::device_token::Column::Token.eq(token))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the raw token strings push delivery needs for a user.
    pub async fn get_tokens_for_user(&self, user_id: i32) -> Result<Vec<String>, DbErr> {
        let tokens = entity::prelude::DeviceToken::find()
            .filter(entity::device_token::Column::UserId.eq(user_id))
            .order_by_desc(entity::device_token::Column::UpdatedAt)
            .all(self.db)
            .await?;

        Ok(tokens.into_iter().map(|t| t.token).collect())
    }
}

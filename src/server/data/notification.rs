//! In-app notification inbox repository.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::notification::{CreateNotificationParam, Notification};

pub struct NotificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateNotificationParam) -> Result<Notification, DbErr> {
        let entity = entity::notification::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            kind: ActiveValue::Set(param.kind),
            title: ActiveValue::Set(param.title),
            body: ActiveValue::Set(param.body),
            data: ActiveValue::Set(param.data),
            read_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Notification::from_entity(entity))
    }

    /// Gets the user's newest notifications first.
    pub async fn get_latest_for_user(
        &self,
        user_id: i32,
        limit: u64,
    ) -> Result<Vec<Notification>, DbErr> {
        let rows = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(Notification::from_entity).collect())
    }

    pub async fn count_unread(&self, user_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::ReadAt.is_null())
            .count(self.db)
            .await
    }

    /// Marks one of the user's notifications as read. Already read rows keep their timestamp.
    ///
    /// # Returns
    /// - `Ok(Some(Notification))` - The notification after the update
    /// - `Ok(None)` - Missing or owned by another user
    /// - `Err(DbErr)` - Database error
    pub async fn mark_read(
        &self,
        user_id: i32,
        id: i32,
        at: DateTime<Utc>,
    ) -> Result<Option<Notification>, DbErr> {
        let Some(existing) = entity::prelude::Notification::find_by_id(id)
            .filter(entity::notification::Column::UserId.eq(user_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        if existing.read_at.is_some() {
            return Ok(Some(Notification::from_entity(existing)));
        }

        let mut active: entity::notification::ActiveModel = existing.into();
        active.read_at = ActiveValue::Set(Some(at));
        let entity = active.update(self.db).await?;

        Ok(Some(Notification::from_entity(entity)))
    }
}

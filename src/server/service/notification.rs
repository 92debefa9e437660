use chrono::Utc;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};

use crate::server::{
    data::{
        business_member::BusinessMemberRepository, device_token::DeviceTokenRepository,
        notification::NotificationRepository, user::UserRepository,
    },
    error::AppError,
    model::{
        notification::{
            kind, CreateNotificationParam, DeviceToken, Notification, PushContentParam,
            RegisterDeviceTokenParam,
        },
        user::User,
    },
    service::push::{PushMessage, PushSender},
};

/// Number of inbox rows returned by `get_inbox`.
const INBOX_LIMIT: u64 = 50;

/// Outcome of a fan-out to every member of a business.
#[derive(Debug, Clone, PartialEq)]
pub struct FanOutResult {
    pub users_notified: u64,
    pub total_users: u64,
}

/// Service for in-app notifications, device tokens and push delivery.
///
/// Every notification is stored as an inbox row first; the push is sent afterwards to
/// all of the recipient's registered devices.
pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
    push: &'a dyn PushSender,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection, push: &'a dyn PushSender) -> Self {
        Self { db, push }
    }

    /// Sends a test notification to every member of a business.
    ///
    /// A member counts as notified once their inbox row is stored. Push failures are logged
    /// and do not stop the remaining members from being notified.
    ///
    /// # Returns
    /// - `Ok(FanOutResult)` - Notified and total member counts
    /// - `Err(AppError::NotFound)` - The business has no members
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn send_test(
        &self,
        business_id: i32,
        content: PushContentParam,
    ) -> Result<FanOutResult, AppError> {
        let user_ids = BusinessMemberRepository::new(self.db)
            .get_user_ids(business_id)
            .await?;

        if user_ids.is_empty() {
            return Err(AppError::NotFound(
                "No users found for this business".to_string(),
            ));
        }

        let data = json!({
            "type": kind::ADMIN_TEST,
            "business_id": business_id.to_string(),
        });
        let message = PushMessage::new(&content.title, &content.body, data.clone());
        let notification_repo = NotificationRepository::new(self.db);

        let mut users_notified = 0;
        for user_id in &user_ids {
            notification_repo
                .create(CreateNotificationParam {
                    user_id: *user_id,
                    kind: kind::ADMIN_TEST.to_string(),
                    title: content.title.clone(),
                    body: content.body.clone(),
                    data: Some(data.clone()),
                })
                .await?;
            users_notified += 1;

            if let Err(e) = self.push_to_user(*user_id, &message).await {
                tracing::warn!("Failed to push test notification to user {}: {}", user_id, e);
            }
        }

        Ok(FanOutResult {
            users_notified,
            total_users: user_ids.len() as u64,
        })
    }

    /// Sends a notification to one member of the admin's business.
    ///
    /// # Returns
    /// - `Ok(User)` - The recipient
    /// - `Err(AppError::NotFound)` - No such user
    /// - `Err(AppError::Forbidden)` - The user is not a member of `business_id`
    /// - `Err(AppError::InternalError)` - Push delivery failed
    pub async fn send_to_user(
        &self,
        business_id: i32,
        user_id: i32,
        content: PushContentParam,
        data: Option<Value>,
    ) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if BusinessMemberRepository::new(self.db)
            .find(business_id, user_id)
            .await?
            .is_none()
        {
            return Err(AppError::Forbidden(
                "The user does not belong to your business".to_string(),
            ));
        }

        let data = data.unwrap_or_else(|| json!({}));
        NotificationRepository::new(self.db)
            .create(CreateNotificationParam {
                user_id,
                kind: kind::ADMIN_MESSAGE.to_string(),
                title: content.title.clone(),
                body: content.body.clone(),
                data: Some(data.clone()),
            })
            .await?;

        let message = PushMessage::new(content.title, content.body, data);
        if let Err(e) = self.push_to_user(user_id, &message).await {
            tracing::warn!("Failed to send notification to user {}: {}", user_id, e);
            return Err(e);
        }

        Ok(user)
    }

    /// Stores an inbox row and pushes it to the user's devices.
    ///
    /// Push failures are logged; only storing the row can fail the call.
    pub async fn notify(
        &self,
        param: CreateNotificationParam,
    ) -> Result<Notification, AppError> {
        let message = PushMessage::new(
            &param.title,
            &param.body,
            param.data.clone().unwrap_or_else(|| json!({})),
        );
        let user_id = param.user_id;

        let notification = NotificationRepository::new(self.db).create(param).await?;

        if let Err(e) = self.push_to_user(user_id, &message).await {
            tracing::warn!("Failed to push notification to user {}: {}", user_id, e);
        }

        Ok(notification)
    }

    /// Pushes to all of a user's devices.
    ///
    /// # Returns
    /// - `Ok(usize)` - Devices that accepted the push, 0 when the user has none
    /// - `Err(AppError)` - Database or push error
    pub async fn push_to_user(&self, user_id: i32, message: &PushMessage) -> Result<usize, AppError> {
        let tokens = DeviceTokenRepository::new(self.db)
            .get_tokens_for_user(user_id)
            .await?;

        if tokens.is_empty() {
            return Ok(0);
        }

        Ok(self.push.send(&tokens, message).await?)
    }

    pub async fn register_device(
        &self,
        user_id: i32,
        param: RegisterDeviceTokenParam,
    ) -> Result<DeviceToken, AppError> {
        Ok(DeviceTokenRepository::new(self.db)
            .upsert(user_id, param)
            .await?)
    }

    pub async fn remove_device(&self, user_id: i32, token: &str) -> Result<(), AppError> {
        let removed = DeviceTokenRepository::new(self.db)
            .delete_for_user(user_id, token.trim())
            .await?;

        if !removed {
            return Err(AppError::NotFound("Device token not found".to_string()));
        }

        Ok(())
    }

    /// Gets the user's latest notifications and their unread count.
    pub async fn get_inbox(&self, user_id: i32) -> Result<(Vec<Notification>, u64), AppError> {
        let repo = NotificationRepository::new(self.db);

        let notifications = repo.get_latest_for_user(user_id, INBOX_LIMIT).await?;
        let unread = repo.count_unread(user_id).await?;

        Ok((notifications, unread))
    }

    pub async fn mark_read(&self, user_id: i32, id: i32) -> Result<Notification, AppError> {
        NotificationRepository::new(self.db)
            .mark_read(user_id, id, Utc::now())
            .await?
            .ok_or_else(|| AppError::NotFound("Notification not found".to_string()))
    }
}

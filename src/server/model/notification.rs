//! Notification inbox and device token models.

use chrono::{DateTime, Utc};

use crate::{
    model::notification::{
        DeviceTokenDto, NotificationDto, RegisterDeviceTokenDto, SendTestNotificationDto,
        SendUserNotificationDto,
    },
    server::error::AppError,
};

const MAX_TITLE_LENGTH: usize = 255;
const MAX_BODY_LENGTH: usize = 500;
const MAX_TOKEN_LENGTH: usize = 4096;

pub const DEFAULT_TEST_TITLE: &str = "Test notification";
pub const DEFAULT_TEST_BODY: &str = "This is a test notification from the admin panel";

/// Kinds of inbox rows.
pub mod kind {
    pub const ADMIN_TEST: &str = "admin_test";
    pub const ADMIN_MESSAGE: &str = "admin_message";
    pub const WAITER_CALL: &str = "waiter_call";
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub user_id: i32,
    pub kind: String,
    pub title: String,
    pub body: String,
    pub data: Option<serde_json::Value>,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            kind: entity.kind,
            title: entity.title,
            body: entity.body,
            data: entity.data,
            read_at: entity.read_at,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            kind: self.kind,
            title: self.title,
            body: self.body,
            data: self.data,
            read_at: self.read_at,
            created_at: self.created_at,
        }
    }
}

/// Parameters for storing an inbox row.
#[derive(Debug, Clone)]
pub struct CreateNotificationParam {
    pub user_id: i32,
    pub kind: String,
    pub title: String,
    pub body: String,
    pub data: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeviceToken {
    pub id: i32,
    pub user_id: i32,
    pub token: String,
    pub platform: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl DeviceToken {
    pub fn from_entity(entity: entity::device_token::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            token: entity.token,
            platform: entity.platform,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> DeviceTokenDto {
        DeviceTokenDto {
            id: self.id,
            token: self.token,
            platform: self.platform,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegisterDeviceTokenParam {
    pub token: String,
    pub platform: Option<String>,
}

impl RegisterDeviceTokenParam {
    pub fn from_dto(dto: RegisterDeviceTokenDto) -> Result<Self, AppError> {
        let token = dto.token.trim().to_string();
        if token.is_empty() || token.len() > MAX_TOKEN_LENGTH {
            return Err(AppError::Validation(
                "The token field is required.".to_string(),
            ));
        }

        Ok(Self {
            token,
            platform: dto
                .platform
                .map(|p| p.trim().to_lowercase())
                .filter(|p| !p.is_empty()),
        })
    }
}

/// Title and body of a push, validated.
#[derive(Debug, Clone, PartialEq)]
pub struct PushContentParam {
    pub title: String,
    pub body: String,
}

impl PushContentParam {
    /// Applies the admin test defaults to missing fields.
    pub fn from_test_dto(dto: SendTestNotificationDto) -> Result<Self, AppError> {
        Self::validate(
            dto.title.unwrap_or_else(|| DEFAULT_TEST_TITLE.to_string()),
            dto.body.unwrap_or_else(|| DEFAULT_TEST_BODY.to_string()),
        )
    }

    pub fn from_user_dto(dto: &SendUserNotificationDto) -> Result<Self, AppError> {
        Self::validate(dto.title.clone(), dto.body.clone())
    }

    fn validate(title: String, body: String) -> Result<Self, AppError> {
        let title = title.trim().to_string();
        let body = body.trim().to_string();

        if title.is_empty() || body.is_empty() {
            return Err(AppError::Validation(
                "The title and body fields are required.".to_string(),
            ));
        }
        if title.chars().count() > MAX_TITLE_LENGTH {
            return Err(AppError::Validation(
                "The title may not be greater than 255 characters.".to_string(),
            ));
        }
        if body.chars().count() > MAX_BODY_LENGTH {
            return Err(AppError::Validation(
                "The body may not be greater than 500 characters.".to_string(),
            ));
        }

        Ok(Self { title, body })
    }
}

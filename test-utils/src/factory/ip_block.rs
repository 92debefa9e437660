use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating IP blocks.
///
/// Defaults to a `spam` block started now and expiring in 24 hours.
pub struct IpBlockFactory<'a> {
    db: &'a DatabaseConnection,
    business_id: i32,
    ip_address: String,
    blocked_by: Option<i32>,
    reason: String,
    blocked_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
    unblocked_at: Option<DateTime<Utc>>,
}

impl<'a> IpBlockFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, business_id: i32, ip_address: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            db,
            business_id,
            ip_address: ip_address.into(),
            blocked_by: None,
            reason: "spam".to_string(),
            blocked_at: now,
            expires_at: Some(now + Duration::hours(24)),
            unblocked_at: None,
        }
    }

    pub fn blocked_by(mut self, user_id: Option<i32>) -> Self {
        self.blocked_by = user_id;
        self
    }

    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    pub fn blocked_at(mut self, blocked_at: DateTime<Utc>) -> Self {
        self.blocked_at = blocked_at;
        self
    }

    pub fn expires_at(mut self, expires_at: Option<DateTime<Utc>>) -> Self {
        self.expires_at = expires_at;
        self
    }

    pub fn unblocked_at(mut self, unblocked_at: Option<DateTime<Utc>>) -> Self {
        self.unblocked_at = unblocked_at;
        self
    }

    pub async fn build(self) -> Result<entity::ip_block::Model, DbErr> {
        entity::ip_block::ActiveModel {
            business_id: ActiveValue::Set(self.business_id),
            ip_address: ActiveValue::Set(self.ip_address),
            blocked_by: ActiveValue::Set(self.blocked_by),
            reason: ActiveValue::Set(self.reason),
            notes: ActiveValue::Set(None),
            blocked_at: ActiveValue::Set(self.blocked_at),
            expires_at: ActiveValue::Set(self.expires_at),
            unblocked_at: ActiveValue::Set(self.unblocked_at),
            metadata: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_ip_block(
    db: &DatabaseConnection,
    business_id: i32,
    ip_address: &str,
) -> Result<entity::ip_block::Model, DbErr> {
    IpBlockFactory::new(db, business_id, ip_address).build().await
}

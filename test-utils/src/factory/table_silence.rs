use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating table silences.
///
/// Defaults to a `manual` silence started now and expiring in 30 minutes.
pub struct TableSilenceFactory<'a> {
    db: &'a DatabaseConnection,
    table_id: i32,
    silenced_by: Option<i32>,
    reason: String,
    silenced_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
    unsilenced_at: Option<DateTime<Utc>>,
}

impl<'a> TableSilenceFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, table_id: i32) -> Self {
        let now = Utc::now();
        Self {
            db,
            table_id,
            silenced_by: None,
            reason: "manual".to_string(),
            silenced_at: now,
            expires_at: Some(now + Duration::minutes(30)),
            unsilenced_at: None,
        }
    }

    pub fn silenced_by(mut self, user_id: Option<i32>) -> Self {
        self.silenced_by = user_id;
        self
    }

    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    pub fn silenced_at(mut self, silenced_at: DateTime<Utc>) -> Self {
        self.silenced_at = silenced_at;
        self
    }

    pub fn expires_at(mut self, expires_at: Option<DateTime<Utc>>) -> Self {
        self.expires_at = expires_at;
        self
    }

    pub fn unsilenced_at(mut self, unsilenced_at: Option<DateTime<Utc>>) -> Self {
        self.unsilenced_at = unsilenced_at;
        self
    }

    pub async fn build(self) -> Result<entity::table_silence::Model, DbErr> {
        entity::table_silence::ActiveModel {
            table_id: ActiveValue::Set(self.table_id),
            silenced_by: ActiveValue::Set(self.silenced_by),
            reason: ActiveValue::Set(self.reason),
            notes: ActiveValue::Set(None),
            call_count: ActiveValue::Set(None),
            silenced_at: ActiveValue::Set(self.silenced_at),
            expires_at: ActiveValue::Set(self.expires_at),
            unsilenced_at: ActiveValue::Set(self.unsilenced_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_silence(
    db: &DatabaseConnection,
    table_id: i32,
) -> Result<entity::table_silence::Model, DbErr> {
    TableSilenceFactory::new(db, table_id).build().await
}

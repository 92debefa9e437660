//! Waiter call factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test waiter calls.
///
/// Defaults:
/// - status: `"pending"`
/// - urgency: `"normal"`
/// - called_at: now
/// - ip_address: `Some("203.0.113.10")`
pub struct WaiterCallFactory<'a> {
    db: &'a DatabaseConnection,
    table_id: i32,
    business_id: i32,
    waiter_id: Option<i32>,
    status: String,
    urgency: String,
    ip_address: Option<String>,
    called_at: DateTime<Utc>,
    acknowledged_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
}

impl<'a> WaiterCallFactory<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        table: &entity::restaurant_table::Model,
    ) -> Self {
        Self {
            db,
            table_id: table.id,
            business_id: table.business_id,
            waiter_id: table.active_waiter_id,
            status: "pending".to_string(),
            urgency: "normal".to_string(),
            ip_address: Some("203.0.113.10".to_string()),
            called_at: Utc::now(),
            acknowledged_at: None,
            completed_at: None,
        }
    }

    pub fn waiter_id(mut self, waiter_id: Option<i32>) -> Self {
        self.waiter_id = waiter_id;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn urgency(mut self, urgency: impl Into<String>) -> Self {
        self.urgency = urgency.into();
        self
    }

    pub fn ip_address(mut self, ip_address: Option<String>) -> Self {
        self.ip_address = ip_address;
        self
    }

    pub fn called_at(mut self, called_at: DateTime<Utc>) -> Self {
        self.called_at = called_at;
        self
    }

    pub fn acknowledged_at(mut self, acknowledged_at: Option<DateTime<Utc>>) -> Self {
        self.acknowledged_at = acknowledged_at;
        self
    }

    pub fn completed_at(mut self, completed_at: Option<DateTime<Utc>>) -> Self {
        self.completed_at = completed_at;
        self
    }

    pub async fn build(self) -> Result<entity::waiter_call::Model, DbErr> {
        entity::waiter_call::ActiveModel {
            table_id: ActiveValue::Set(self.table_id),
            business_id: ActiveValue::Set(self.business_id),
            waiter_id: ActiveValue::Set(self.waiter_id),
            status: ActiveValue::Set(self.status),
            message: ActiveValue::Set("Test call".to_string()),
            urgency: ActiveValue::Set(self.urgency),
            ip_address: ActiveValue::Set(self.ip_address),
            user_agent: ActiveValue::Set(Some("test-agent".to_string())),
            client_info: ActiveValue::Set(None),
            called_at: ActiveValue::Set(self.called_at),
            acknowledged_at: ActiveValue::Set(self.acknowledged_at),
            completed_at: ActiveValue::Set(self.completed_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_call(
    db: &DatabaseConnection,
    table: &entity::restaurant_table::Model,
) -> Result<entity::waiter_call::Model, DbErr> {
    WaiterCallFactory::new(db, table).build().await
}

//! Table factory for creating restaurant tables in tests.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tables.
///
/// Defaults:
/// - number: unique per factory call
/// - name: `"Table {number}"`
/// - code: `"T{id}"`
/// - notifications_enabled: `true`
/// - active_waiter_id: `None`
///
/// # Example
///
/// ```rust,ignore
/// let table = TableFactory::new(&db, business.id)
///     .active_waiter_id(Some(waiter.id))
///     .build()
///     .await?;
/// ```
pub struct TableFactory<'a> {
    db: &'a DatabaseConnection,
    business_id: i32,
    number: i32,
    name: String,
    code: String,
    notifications_enabled: bool,
    active_waiter_id: Option<i32>,
}

impl<'a> TableFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, business_id: i32) -> Self {
        let id = next_id();
        let number = id as i32;
        Self {
            db,
            business_id,
            number,
            name: format!("Table {}", number),
            code: format!("T{:05}", id),
            notifications_enabled: true,
            active_waiter_id: None,
        }
    }

    pub fn number(mut self, number: i32) -> Self {
        self.number = number;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn notifications_enabled(mut self, enabled: bool) -> Self {
        self.notifications_enabled = enabled;
        self
    }

    pub fn active_waiter_id(mut self, waiter_id: Option<i32>) -> Self {
        self.active_waiter_id = waiter_id;
        self
    }

    pub async fn build(self) -> Result<entity::restaurant_table::Model, DbErr> {
        let now = Utc::now();
        entity::restaurant_table::ActiveModel {
            business_id: ActiveValue::Set(self.business_id),
            number: ActiveValue::Set(self.number),
            name: ActiveValue::Set(self.name),
            code: ActiveValue::Set(self.code),
            capacity: ActiveValue::Set(Some(4)),
            location: ActiveValue::Set(None),
            notifications_enabled: ActiveValue::Set(self.notifications_enabled),
            waiter_assigned_at: ActiveValue::Set(self.active_waiter_id.map(|_| now)),
            active_waiter_id: ActiveValue::Set(self.active_waiter_id),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_table(
    db: &DatabaseConnection,
    business_id: i32,
) -> Result<entity::restaurant_table::Model, DbErr> {
    TableFactory::new(db, business_id).build().await
}

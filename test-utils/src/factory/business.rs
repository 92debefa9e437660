//! Business factory for creating test business entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test businesses.
///
/// Defaults:
/// - name: `"Business {id}"`
/// - code: `"BIZ{id}"`
/// - join_code: `"JOIN{id}"`
pub struct BusinessFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    code: String,
    join_code: String,
}

impl<'a> BusinessFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Business {}", id),
            code: format!("BIZ{:05}", id),
            join_code: format!("JOIN{:04}", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn join_code(mut self, join_code: impl Into<String>) -> Self {
        self.join_code = join_code.into();
        self
    }

    pub async fn build(self) -> Result<entity::business::Model, DbErr> {
        let now = Utc::now();
        entity::business::ActiveModel {
            name: ActiveValue::Set(self.name),
            code: ActiveValue::Set(self.code),
            join_code: ActiveValue::Set(self.join_code),
            address: ActiveValue::Set(None),
            phone: ActiveValue::Set(None),
            email: ActiveValue::Set(None),
            logo: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_business(db: &DatabaseConnection) -> Result<entity::business::Model, DbErr> {
    BusinessFactory::new(db).build().await
}

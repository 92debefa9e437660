use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a device token `"device-token-{id}"` owned by `user_id`.
pub async fn create_device_token(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::device_token::Model, DbErr> {
    let now = Utc::now();
    entity::device_token::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        token: ActiveValue::Set(format!("device-token-{}", next_id())),
        platform: ActiveValue::Set(Some("android".to_string())),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}

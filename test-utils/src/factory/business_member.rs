use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a membership row with the given role.
pub async fn create_member(
    db: &DatabaseConnection,
    business_id: i32,
    user_id: i32,
    role: &str,
) -> Result<entity::business_member::Model, DbErr> {
    entity::business_member::ActiveModel {
        business_id: ActiveValue::Set(business_id),
        user_id: ActiveValue::Set(user_id),
        role: ActiveValue::Set(role.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn create_admin_member(
    db: &DatabaseConnection,
    business_id: i32,
    user_id: i32,
) -> Result<entity::business_member::Model, DbErr> {
    create_member(db, business_id, user_id, "admin").await
}

pub async fn create_waiter_member(
    db: &DatabaseConnection,
    business_id: i32,
    user_id: i32,
) -> Result<entity::business_member::Model, DbErr> {
    create_member(db, business_id, user_id, "waiter").await
}

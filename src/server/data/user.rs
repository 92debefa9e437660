//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles account creation, credential lookup and the user's active business with
//! conversion between entity models and domain models at the infrastructure boundary.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::server::model::user::{CreateUserParam, User};

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `param` - Name, normalized email and bcrypt password hash
    ///
    /// # Returns
    /// - `Ok(User)` - The created user with no active business
    /// - `Err(DbErr)` - Database error, including a unique violation on email
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            name: ActiveValue::Set(param.name),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            active_business_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user and their password hash by email for login.
    ///
    /// # Returns
    /// - `Ok(Some((User, String)))` - User and bcrypt hash
    /// - `Ok(None)` - No account uses this email
    /// - `Err(DbErr)` - Database error
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<(User, String)>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(|e| {
            let hash = e.password_hash.clone();
            (User::from_entity(e), hash)
        }))
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Sets or clears the business the user operates in.
    ///
    /// # Returns
    /// - `Ok(())` - Update applied (no-op for unknown users)
    /// - `Err(DbErr)` - Database error
    pub async fn set_active_business(
        &self,
        user_id: i32,
        business_id: Option<i32>,
    ) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .col_expr(entity::user::Column::ActiveBusinessId, Expr::value(business_id))
            .filter(entity::user::Column::Id.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Resets the active business of every user currently operating in `business_id`.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of users reset
    /// - `Err(DbErr)` - Database error
    pub async fn clear_active_business(&self, business_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::ActiveBusinessId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::user::Column::ActiveBusinessId.eq(business_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Fetches display names for a set of users.
    ///
    /// # Returns
    /// - `Ok(HashMap<i32, String>)` - User ID to name, missing IDs are absent
    /// - `Err(DbErr)` - Database error
    pub async fn get_names(&self, ids: &[i32]) -> Result<HashMap<i32, String>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let users = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(users.into_iter().map(|u| (u.id, u.name)).collect())
    }
}

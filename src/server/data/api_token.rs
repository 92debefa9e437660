//! API token repository.
//!
//! Tokens are looked up by the SHA-256 digest of the bearer value; the plain value
//! never reaches the database.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter,
};

use crate::server::model::user::{ApiToken, CreateApiTokenParam};

pub struct ApiTokenRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ApiTokenRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores a token digest with its abilities joined by commas.
    pub async fn create(&self, param: CreateApiTokenParam) -> Result<ApiToken, DbErr> {
        let entity = entity::api_token::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            name: ActiveValue::Set(param.name),
            token_hash: ActiveValue::Set(param.token_hash),
            abilities: ActiveValue::Set(param.abilities.join(",")),
            created_at: ActiveValue::Set(Utc::now()),
            last_used_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ApiToken::from_entity(entity))
    }

    pub async fn find_by_hash(&self, token_hash: &str) -> Result<Option<ApiToken>, DbErr> {
        let entity = entity::prelude::ApiToken::find()
            .filter(entity::api_token::Column::TokenHash.eq(token_hash))
            .one(self.db)
            .await?;

        Ok(entity.map(ApiToken::from_entity))
    }

    /// Records when the token was last presented.
    pub async fn touch(&self, id: i32, at: DateTime<Utc>) -> Result<(), DbErr> {
        entity::prelude::ApiToken::update_many()
            .col_expr(entity::api_token::Column::LastUsedAt, Expr::value(Some(at)))
            .filter(entity::api_token::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes a token.
    ///
    /// # Returns
    /// - `Ok(true)` - Token revoked
    /// - `Ok(false)` - No token with this ID
    /// - `Err(DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ApiToken::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

//! Business repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::business::{Business, BusinessDetailsParam, CreateBusinessParam};

pub struct BusinessRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BusinessRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a business with already generated public and join codes.
    pub async fn create(&self, param: CreateBusinessParam) -> Result<Business, DbErr> {
        let now = Utc::now();
        let entity = entity::business::ActiveModel {
            name: ActiveValue::Set(param.details.name),
            code: ActiveValue::Set(param.code),
            join_code: ActiveValue::Set(param.join_code),
            address: ActiveValue::Set(param.details.address),
            phone: ActiveValue::Set(param.details.phone),
            email: ActiveValue::Set(param.details.email),
            logo: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Business::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Business>, DbErr> {
        let entity = entity::prelude::Business::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Business::from_entity))
    }

    /// Finds a business by its public code, as printed on table QR codes.
    pub async fn find_by_code(&self, code: &str) -> Result<Option<Business>, DbErr> {
        let entity = entity::prelude::Business::find()
            .filter(entity::business::Column::Code.eq(code))
            .one(self.db)
            .await?;

        Ok(entity.map(Business::from_entity))
    }

    pub async fn find_by_join_code(&self, join_code: &str) -> Result<Option<Business>, DbErr> {
        let entity = entity::prelude::Business::find()
            .filter(entity::business::Column::JoinCode.eq(join_code))
            .one(self.db)
            .await?;

        Ok(entity.map(Business::from_entity))
    }

    /// Checks whether a generated code collides with an existing public or join code.
    pub async fn code_in_use(&self, code: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Business::find()
            .filter(
                Condition::any()
                    .add(entity::business::Column::Code.eq(code))
                    .add(entity::business::Column::JoinCode.eq(code)),
            )
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Replaces the editable details of a business.
    ///
    /// # Returns
    /// - `Ok(Some(Business))` - Updated business
    /// - `Ok(None)` - No business with this ID
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        id: i32,
        param: BusinessDetailsParam,
    ) -> Result<Option<Business>, DbErr> {
        let Some(existing) = entity::prelude::Business::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::business::ActiveModel = existing.into();
        active.name = ActiveValue::Set(param.name);
        active.address = ActiveValue::Set(param.address);
        active.phone = ActiveValue::Set(param.phone);
        active.email = ActiveValue::Set(param.email);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Business::from_entity(entity)))
    }

    /// Deletes a business. Tables, memberships, calls and blocks cascade.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Business::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

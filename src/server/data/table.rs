//! Restaurant table repository.
//!
//! Besides CRUD, this repository owns waiter assignment: setting and clearing
//! `active_waiter_id` together with `waiter_assigned_at`.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::table::{CreateTableParam, Table, UpdateTableParam};

pub struct TableRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TableRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a table with notifications enabled and no waiter.
    pub async fn create(
        &self,
        business_id: i32,
        param: CreateTableParam,
        code: String,
    ) -> Result<Table, DbErr> {
        let entity = entity::restaurant_table::ActiveModel {
            business_id: ActiveValue::Set(business_id),
            number: ActiveValue::Set(param.number),
            name: ActiveValue::Set(param.name),
            code: ActiveValue::Set(code),
            capacity: ActiveValue::Set(param.capacity),
            location: ActiveValue::Set(param.location),
            notifications_enabled: ActiveValue::Set(true),
            active_waiter_id: ActiveValue::Set(None),
            waiter_assigned_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Table::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Table>, DbErr> {
        let entity = entity::prelude::RestaurantTable::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Table::from_entity))
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<Table>, DbErr> {
        let entity = entity::prelude::RestaurantTable::find()
            .filter(entity::restaurant_table::Column::Code.eq(code))
            .one(self.db)
            .await?;

        Ok(entity.map(Table::from_entity))
    }

    pub async fn code_exists(&self, code: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::RestaurantTable::find()
            .filter(entity::restaurant_table::Column::Code.eq(code))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks whether a table number is taken in a business, ignoring `exclude_id`.
    pub async fn number_exists(
        &self,
        business_id: i32,
        number: i32,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::RestaurantTable::find()
            .filter(entity::restaurant_table::Column::BusinessId.eq(business_id))
            .filter(entity::restaurant_table::Column::Number.eq(number));

        if let Some(id) = exclude_id {
            query = query.filter(entity::restaurant_table::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Gets all tables of a business ordered by number.
    pub async fn get_by_business(&self, business_id: i32) -> Result<Vec<Table>, DbErr> {
        let tables = entity::prelude::RestaurantTable::find()
            .filter(entity::restaurant_table::Column::BusinessId.eq(business_id))
            .order_by_asc(entity::restaurant_table::Column::Number)
            .all(self.db)
            .await?;

        Ok(tables.into_iter().map(Table::from_entity).collect())
    }

    /// Gets tables by ID. Missing IDs are skipped; order follows table number.
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<Table>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let tables = entity::prelude::RestaurantTable::find()
            .filter(entity::restaurant_table::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(entity::restaurant_table::Column::Number)
            .all(self.db)
            .await?;

        Ok(tables.into_iter().map(Table::from_entity).collect())
    }

    /// Gets the tables a waiter holds in a business.
    pub async fn get_assigned_to(
        &self,
        business_id: i32,
        waiter_id: i32,
    ) -> Result<Vec<Table>, DbErr> {
        let tables = entity::prelude::RestaurantTable::find()
            .filter(entity::restaurant_table::Column::BusinessId.eq(business_id))
            .filter(entity::restaurant_table::Column::ActiveWaiterId.eq(waiter_id))
            .order_by_asc(entity::restaurant_table::Column::Number)
            .all(self.db)
            .await?;

        Ok(tables.into_iter().map(Table::from_entity).collect())
    }

    /// Gets the tables of a business nobody is serving.
    pub async fn get_available(&self, business_id: i32) -> Result<Vec<Table>, DbErr> {
        let tables = entity::prelude::RestaurantTable::find()
            .filter(entity::restaurant_table::Column::BusinessId.eq(business_id))
            .filter(entity::restaurant_table::Column::ActiveWaiterId.is_null())
            .order_by_asc(entity::restaurant_table::Column::Number)
            .all(self.db)
            .await?;

        Ok(tables.into_iter().map(Table::from_entity).collect())
    }

    /// Applies the provided fields to a table.
    ///
    /// # Returns
    /// - `Ok(Some(Table))` - Updated table
    /// - `Ok(None)` - No table with this ID
    /// - `Err(DbErr)` - Database error
    pub async fn update(&self, id: i32, param: UpdateTableParam) -> Result<Option<Table>, DbErr> {
        let Some(existing) = entity::prelude::RestaurantTable::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::restaurant_table::ActiveModel = existing.into();
        if let Some(number) = param.number {
            active.number = ActiveValue::Set(number);
        }
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(capacity) = param.capacity {
            active.capacity = ActiveValue::Set(Some(capacity));
        }
        if let Some(location) = param.location {
            active.location = ActiveValue::Set(Some(location));
        }

        let entity = active.update(self.db).await?;

        Ok(Some(Table::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::RestaurantTable::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Makes `waiter_id` the active waiter of a table.
    ///
    /// # Returns
    /// - `Ok(Table)` - The table after assignment
    /// - `Err(DbErr::RecordNotFound)` - No table with this ID
    pub async fn assign_waiter(
        &self,
        id: i32,
        waiter_id: i32,
        at: DateTime<Utc>,
    ) -> Result<Table, DbErr> {
        let existing = entity::prelude::RestaurantTable::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Table {} not found", id)))?;

        let mut active: entity::restaurant_table::ActiveModel = existing.into();
        active.active_waiter_id = ActiveValue::Set(Some(waiter_id));
        active.waiter_assigned_at = ActiveValue::Set(Some(at));
        let entity = active.update(self.db).await?;

        Ok(Table::from_entity(entity))
    }

    /// Clears the active waiter of a table.
    pub async fn unassign(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::RestaurantTable::update_many()
            .col_expr(
                entity::restaurant_table::Column::ActiveWaiterId,
                Expr::value(Option::<i32>::None),
            )
            .col_expr(
                entity::restaurant_table::Column::WaiterAssignedAt,
                Expr::value(Option::<DateTime<Utc>>::None),
            )
            .filter(entity::restaurant_table::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Releases every table a waiter holds in a business.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of tables released
    /// - `Err(DbErr)` - Database error
    pub async fn unassign_all_for_waiter(
        &self,
        business_id: i32,
        waiter_id: i32,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::RestaurantTable::update_many()
            .col_expr(
                entity::restaurant_table::Column::ActiveWaiterId,
                Expr::value(Option::<i32>::None),
            )
            .col_expr(
                entity::restaurant_table::Column::WaiterAssignedAt,
                Expr::value(Option::<DateTime<Utc>>::None),
            )
            .filter(entity::restaurant_table::Column::BusinessId.eq(business_id))
            .filter(entity::restaurant_table::Column::ActiveWaiterId.eq(waiter_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Sets whether customers can call from a table.
    pub async fn set_notifications_enabled(&self, id: i32, enabled: bool) -> Result<Table, DbErr> {
        let existing = entity::prelude::RestaurantTable::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Table {} not found", id)))?;

        let mut active: entity::restaurant_table::ActiveModel = existing.into();
        active.notifications_enabled = ActiveValue::Set(enabled);
        let entity = active.update(self.db).await?;

        Ok(Table::from_entity(entity))
    }
}

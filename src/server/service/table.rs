use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};

use crate::server::{
    data::table::TableRepository,
    error::AppError,
    model::table::{CreateTableParam, Table, TableIds, UpdateTableParam},
    util::code::{generate_code, ALPHANUMERIC},
};

const TABLE_CODE_LENGTH: usize = 6;

/// Service for the admin management of a business's tables.
pub struct TableService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TableService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a business's tables ordered by number.
    pub async fn get_by_business(&self, business_id: i32) -> Result<Vec<Table>, AppError> {
        Ok(TableRepository::new(self.db)
            .get_by_business(business_id)
            .await?)
    }

    /// Creates a table with a fresh QR code.
    ///
    /// # Returns
    /// - `Ok(Table)` - Created table
    /// - `Err(AppError::Conflict)` - The business already has a table with this number
    pub async fn create(&self, business_id: i32, param: CreateTableParam) -> Result<Table, AppError> {
        let repo = TableRepository::new(self.db);

        if repo.number_exists(business_id, param.number, None).await? {
            return Err(AppError::Conflict(format!(
                "Table number {} already exists in this business",
                param.number
            )));
        }

        let code = unique_table_code(&repo).await?;
        let table = repo.create(business_id, param, code).await?;

        tracing::info!("Created table {} in business {}", table.id, business_id);

        Ok(table)
    }

    /// Updates a table of the business.
    ///
    /// # Returns
    /// - `Ok(Table)` - Updated table
    /// - `Err(AppError::NotFound)` - No such table
    /// - `Err(AppError::Forbidden)` - The table belongs to another business
    /// - `Err(AppError::Conflict)` - The new number is taken
    pub async fn update(
        &self,
        business_id: i32,
        id: i32,
        param: UpdateTableParam,
    ) -> Result<Table, AppError> {
        let repo = TableRepository::new(self.db);
        find_business_table(self.db, business_id, id).await?;

        if let Some(number) = param.number {
            if repo.number_exists(business_id, number, Some(id)).await? {
                return Err(AppError::Conflict(format!(
                    "Table number {} already exists in this business",
                    number
                )));
            }
        }

        repo.update(id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Table not found".to_string()))
    }

    pub async fn delete(&self, business_id: i32, id: i32) -> Result<(), AppError> {
        find_business_table(self.db, business_id, id).await?;

        TableRepository::new(self.db).delete(id).await?;

        tracing::info!("Deleted table {} from business {}", id, business_id);

        Ok(())
    }

    /// Flips whether customers can call from a table.
    ///
    /// Admins may toggle any table of the business; waiters only the tables assigned to them.
    pub async fn toggle_notifications(
        &self,
        user_id: i32,
        business_id: i32,
        is_admin: bool,
        id: i32,
    ) -> Result<Table, AppError> {
        let table = find_business_table(self.db, business_id, id).await?;

        if !is_admin && !table.is_assigned_to(user_id) {
            return Err(AppError::Forbidden(
                "Only admins or the assigned waiter can change this table".to_string(),
            ));
        }

        Ok(TableRepository::new(self.db)
            .set_notifications_enabled(id, !table.notifications_enabled)
            .await?)
    }
}

/// Gets a table and checks it belongs to `business_id`.
///
/// # Returns
/// - `Ok(Table)` - The table
/// - `Err(AppError::NotFound)` - No such table
/// - `Err(AppError::Forbidden)` - The table belongs to another business
pub async fn find_business_table<C: ConnectionTrait>(
    db: &C,
    business_id: i32,
    table_id: i32,
) -> Result<Table, AppError> {
    let table = TableRepository::new(db)
        .find_by_id(table_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Table not found".to_string()))?;

    if table.business_id != business_id {
        return Err(AppError::Forbidden(
            "The table does not belong to your active business".to_string(),
        ));
    }

    Ok(table)
}

/// Gets the tables of a bulk request in request order.
///
/// # Returns
/// - `Ok(Vec<Table>)` - One table per ID
/// - `Err(AppError::BadRequest)` - An ID is unknown or belongs to another business
pub async fn get_business_tables<C: ConnectionTrait>(
    db: &C,
    business_id: i32,
    ids: &TableIds,
) -> Result<Vec<Table>, AppError> {
    let tables = TableRepository::new(db).get_by_ids(ids.as_slice()).await?;

    let ordered = ids
        .as_slice()
        .iter()
        .map(|id| {
            tables
                .iter()
                .find(|table| table.id == *id && table.business_id == business_id)
                .cloned()
        })
        .collect::<Option<Vec<_>>>();

    ordered.ok_or_else(|| {
        AppError::BadRequest("Some tables do not belong to your active business".to_string())
    })
}

async fn unique_table_code<C: ConnectionTrait>(repo: &TableRepository<'_, C>) -> Result<String, DbErr> {
    loop {
        let code = generate_code(TABLE_CODE_LENGTH, ALPHANUMERIC);

        if !repo.code_exists(&code).await? {
            return Ok(code);
        }
    }
}

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::public_qr::{
        PendingCallStatusDto, PublicBusinessDto, PublicTableDto, PublicTableInfoDto, TableStatusDto,
    },
    server::{
        data::{
            business::BusinessRepository, table::TableRepository,
            table_silence::TableSilenceRepository, user::UserRepository,
            waiter_call::WaiterCallRepository,
        },
        error::AppError,
    },
};

/// Read-only lookups for customers who scanned a table QR code. No authentication.
pub struct PublicQrService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PublicQrService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves the business and table codes printed on a QR code.
    ///
    /// # Returns
    /// - `Ok(PublicTableInfoDto)` - Public business and table details
    /// - `Err(AppError::NotFound)` - Either code is unknown, or the table belongs to
    ///   another business
    pub async fn get_table_info(
        &self,
        business_code: &str,
        table_code: &str,
    ) -> Result<PublicTableInfoDto, AppError> {
        let not_found = || AppError::NotFound("Table not found".to_string());

        let business = BusinessRepository::new(self.db)
            .find_by_code(business_code)
            .await?
            .ok_or_else(not_found)?;
        let table = TableRepository::new(self.db)
            .find_by_code(table_code)
            .await?
            .filter(|table| table.business_id == business.id)
            .ok_or_else(not_found)?;

        Ok(PublicTableInfoDto {
            business: PublicBusinessDto {
                id: business.id,
                name: business.name,
                code: business.code,
                logo: business.logo,
            },
            table: PublicTableDto {
                id: table.id,
                number: table.number,
                name: table.name,
                code: table.code,
            },
        })
    }

    /// Gets what a customer needs to know before calling: waiter, silence and pending call.
    pub async fn get_table_status(&self, table_id: i32) -> Result<TableStatusDto, AppError> {
        let now = Utc::now();

        let table = TableRepository::new(self.db)
            .find_by_id(table_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Table not found".to_string()))?;

        let waiter_name = match table.active_waiter_id {
            Some(waiter_id) => UserRepository::new(self.db)
                .find_by_id(waiter_id)
                .await?
                .map(|waiter| waiter.name),
            None => None,
        };

        let is_silenced = TableSilenceRepository::new(self.db)
            .find_active_for_table(table.id, now)
            .await?
            .is_some();

        let pending_call = WaiterCallRepository::new(self.db)
            .find_pending_for_table(table.id, None)
            .await?
            .map(|call| PendingCallStatusDto {
                id: call.id,
                status: call.status.as_str().to_string(),
                called_at: call.called_at,
            });

        Ok(TableStatusDto {
            table_id: table.id,
            has_waiter: waiter_name.is_some(),
            waiter_name,
            notifications_enabled: table.notifications_enabled,
            is_silenced,
            pending_call,
        })
    }
}

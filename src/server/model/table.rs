//! Restaurant table domain models and parameters.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::{
    model::table::{CreateTableDto, TableDto, UpdateTableDto},
    server::error::AppError,
};

/// Maximum number of tables accepted by a single bulk request.
pub const MAX_BULK_TABLES: usize = 50;

const MAX_NAME_LENGTH: usize = 255;
const MAX_LOCATION_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub id: i32,
    pub business_id: i32,
    pub number: i32,
    pub name: String,
    pub code: String,
    pub capacity: Option<i32>,
    pub location: Option<String>,
    pub notifications_enabled: bool,
    /// Waiter currently responsible for the table.
    pub active_waiter_id: Option<i32>,
    pub waiter_assigned_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Table {
    pub fn from_entity(entity: entity::restaurant_table::Model) -> Self {
        Self {
            id: entity.id,
            business_id: entity.business_id,
            number: entity.number,
            name: entity.name,
            code: entity.code,
            capacity: entity.capacity,
            location: entity.location,
            notifications_enabled: entity.notifications_enabled,
            active_waiter_id: entity.active_waiter_id,
            waiter_assigned_at: entity.waiter_assigned_at,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> TableDto {
        TableDto {
            id: self.id,
            business_id: self.business_id,
            number: self.number,
            name: self.name,
            code: self.code,
            capacity: self.capacity,
            location: self.location,
            notifications_enabled: self.notifications_enabled,
            active_waiter_id: self.active_waiter_id,
            waiter_assigned_at: self.waiter_assigned_at,
        }
    }

    pub fn is_assigned_to(&self, user_id: i32) -> bool {
        self.active_waiter_id == Some(user_id)
    }
}

/// Validated table creation input.
#[derive(Debug, Clone)]
pub struct CreateTableParam {
    pub number: i32,
    pub name: String,
    pub capacity: Option<i32>,
    pub location: Option<String>,
}

impl CreateTableParam {
    /// Validates a create payload. A missing name becomes `Table <number>`.
    pub fn from_dto(dto: CreateTableDto) -> Result<Self, AppError> {
        validate_number(dto.number)?;
        let name = validate_name(dto.name)?.unwrap_or_else(|| format!("Table {}", dto.number));

        Ok(Self {
            number: dto.number,
            name,
            capacity: validate_capacity(dto.capacity)?,
            location: validate_location(dto.location)?,
        })
    }
}

/// Fields to change on an existing table. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateTableParam {
    pub number: Option<i32>,
    pub name: Option<String>,
    pub capacity: Option<i32>,
    pub location: Option<String>,
}

impl UpdateTableParam {
    pub fn from_dto(dto: UpdateTableDto) -> Result<Self, AppError> {
        if let Some(number) = dto.number {
            validate_number(number)?;
        }

        Ok(Self {
            number: dto.number,
            name: validate_name(dto.name)?,
            capacity: validate_capacity(dto.capacity)?,
            location: validate_location(dto.location)?,
        })
    }
}

/// Distinct table IDs for a bulk operation, in request order.
#[derive(Debug, Clone, PartialEq)]
pub struct TableIds(Vec<i32>);

impl TableIds {
    /// Validates a bulk ID list.
    ///
    /// # Returns
    /// - `Ok(TableIds)` - Between 1 and 50 IDs with no duplicates
    /// - `Err(AppError::Validation)` - Empty list, too many IDs or a repeated ID
    pub fn parse(ids: Vec<i32>) -> Result<Self, AppError> {
        if ids.is_empty() {
            return Err(AppError::Validation(
                "The table_ids field is required.".to_string(),
            ));
        }
        if ids.len() > MAX_BULK_TABLES {
            return Err(AppError::Validation(format!(
                "The table_ids may not have more than {} items.",
                MAX_BULK_TABLES
            )));
        }

        let mut seen = HashSet::new();
        if !ids.iter().all(|id| seen.insert(*id)) {
            return Err(AppError::Validation(
                "The table_ids field has a duplicate value.".to_string(),
            ));
        }

        Ok(Self(ids))
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }
}

fn validate_number(number: i32) -> Result<(), AppError> {
    if number < 1 {
        return Err(AppError::Validation(
            "The number must be at least 1.".to_string(),
        ));
    }
    Ok(())
}

fn validate_name(name: Option<String>) -> Result<Option<String>, AppError> {
    let name = name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty());
    if let Some(name) = &name {
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(AppError::Validation(
                "The name may not be greater than 255 characters.".to_string(),
            ));
        }
    }
    Ok(name)
}

fn validate_capacity(capacity: Option<i32>) -> Result<Option<i32>, AppError> {
    match capacity {
        Some(c) if c < 1 => Err(AppError::Validation(
            "The capacity must be at least 1.".to_string(),
        )),
        other => Ok(other),
    }
}

fn validate_location(location: Option<String>) -> Result<Option<String>, AppError> {
    let location = location
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty());
    if let Some(location) = &location {
        if location.chars().count() > MAX_LOCATION_LENGTH {
            return Err(AppError::Validation(
                "The location may not be greater than 255 characters.".to_string(),
            ));
        }
    }
    Ok(location)
}

//! Business domain models and parameters.
//!
//! A business is the tenant that owns tables, staff memberships, calls and IP blocks.
//! Users join a business either by creating it (becoming an admin) or by entering its
//! join code (becoming a waiter).

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::business::{BusinessDto, CreateBusinessDto, UpdateBusinessDto},
    server::error::AppError,
};

const MAX_NAME_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq)]
pub struct Business {
    pub id: i32,
    pub name: String,
    pub code: String,
    pub join_code: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub logo: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Business {
    pub fn from_entity(entity: entity::business::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            code: entity.code,
            join_code: entity.join_code,
            address: entity.address,
            phone: entity.phone,
            email: entity.email,
            logo: entity.logo,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts to a DTO. The join code is a shared secret and is only included for admins.
    pub fn into_dto(self, include_join_code: bool) -> BusinessDto {
        BusinessDto {
            id: self.id,
            name: self.name,
            code: self.code,
            join_code: include_join_code.then_some(self.join_code),
            address: self.address,
            phone: self.phone,
            email: self.email,
            logo: self.logo,
            created_at: self.created_at,
        }
    }
}

/// Role of a user inside a business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberRole {
    Admin,
    Waiter,
}

impl MemberRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Waiter => "waiter",
        }
    }

    /// Parses a role name from a request.
    ///
    /// # Returns
    /// - `Ok(MemberRole)` - `admin` or `waiter`
    /// - `Err(AppError::Validation)` - Any other value
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "admin" => Ok(Self::Admin),
            "waiter" => Ok(Self::Waiter),
            _ => Err(AppError::Validation(
                "The selected role is invalid. Use admin or waiter.".to_string(),
            )),
        }
    }

    /// Parses a role stored in the database.
    pub fn from_db(value: &str) -> Result<Self, DbErr> {
        Self::parse(value).map_err(|_| DbErr::Custom(format!("Unknown member role: {}", value)))
    }
}

/// A user's membership in a business.
#[derive(Debug, Clone, PartialEq)]
pub struct Membership {
    pub id: i32,
    pub business_id: i32,
    pub user_id: i32,
    pub role: MemberRole,
    pub created_at: DateTime<Utc>,
}

impl Membership {
    pub fn from_entity(entity: entity::business_member::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            business_id: entity.business_id,
            user_id: entity.user_id,
            role: MemberRole::from_db(&entity.role)?,
            created_at: entity.created_at,
        })
    }

    pub fn is_admin(&self) -> bool {
        self.role == MemberRole::Admin
    }
}

/// A business together with the viewing user's role in it.
#[derive(Debug, Clone, PartialEq)]
pub struct BusinessWithRole {
    pub business: Business,
    pub role: MemberRole,
}

/// Validated business details used by create and update.
#[derive(Debug, Clone)]
pub struct BusinessDetailsParam {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl BusinessDetailsParam {
    pub fn from_create_dto(dto: CreateBusinessDto) -> Result<Self, AppError> {
        Self::validate(dto.name, dto.address, dto.phone, dto.email)
    }

    pub fn from_update_dto(dto: UpdateBusinessDto) -> Result<Self, AppError> {
        Self::validate(dto.name, dto.address, dto.phone, dto.email)
    }

    fn validate(
        name: String,
        address: Option<String>,
        phone: Option<String>,
        email: Option<String>,
    ) -> Result<Self, AppError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::Validation("The name field is required.".to_string()));
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(AppError::Validation(
                "The name may not be greater than 255 characters.".to_string(),
            ));
        }

        Ok(Self {
            name,
            address: non_blank(address),
            phone: non_blank(phone),
            email: non_blank(email),
        })
    }
}

/// Parameters for inserting a business row, codes already generated.
#[derive(Debug, Clone)]
pub struct CreateBusinessParam {
    pub details: BusinessDetailsParam,
    pub code: String,
    pub join_code: String,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

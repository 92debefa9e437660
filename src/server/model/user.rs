//! User domain models and parameters.
//!
//! Provides the application user, the parameters used by registration and login,
//! and the API token record issued to authenticated clients.

use chrono::{DateTime, Utc};

use crate::{
    model::auth::{LoginDto, RegisterDto, UserDto},
    server::error::AppError,
};

const MIN_PASSWORD_LENGTH: usize = 8;
const MAX_NAME_LENGTH: usize = 255;

/// Application user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Business the user currently operates in, if any.
    pub active_business_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            active_business_id: self.active_business_id,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            active_business_id: entity.active_business_id,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for inserting a user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Validated registration input.
#[derive(Debug, Clone)]
pub struct RegisterParam {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterParam {
    /// Validates the registration payload.
    ///
    /// # Returns
    /// - `Ok(RegisterParam)` - Name trimmed, email lowercased
    /// - `Err(AppError::Validation)` - Empty or overlong name, malformed email or short password
    pub fn from_dto(dto: RegisterDto) -> Result<Self, AppError> {
        let name = dto.name.trim().to_string();
        if name.is_empty() || name.chars().count() > MAX_NAME_LENGTH {
            return Err(AppError::Validation(
                "The name field is required and may not exceed 255 characters.".to_string(),
            ));
        }

        let email = normalize_email(&dto.email)?;

        if dto.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::Validation(format!(
                "The password must be at least {} characters.",
                MIN_PASSWORD_LENGTH
            )));
        }

        Ok(Self {
            name,
            email,
            password: dto.password,
        })
    }
}

/// Login input with a normalized email.
#[derive(Debug, Clone)]
pub struct LoginParam {
    pub email: String,
    pub password: String,
}

impl LoginParam {
    pub fn from_dto(dto: LoginDto) -> Result<Self, AppError> {
        Ok(Self {
            email: normalize_email(&dto.email)?,
            password: dto.password,
        })
    }
}

/// Stored API token (the plain value is never persisted).
#[derive(Debug, Clone, PartialEq)]
pub struct ApiToken {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub abilities: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
}

impl ApiToken {
    pub fn from_entity(entity: entity::api_token::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: entity.name,
            abilities: entity
                .abilities
                .split(',')
                .map(str::trim)
                .filter(|ability| !ability.is_empty())
                .map(str::to_string)
                .collect(),
            created_at: entity.created_at,
            last_used_at: entity.last_used_at,
        }
    }
}

/// Parameters for storing a new API token.
#[derive(Debug, Clone)]
pub struct CreateApiTokenParam {
    pub user_id: i32,
    pub name: String,
    pub token_hash: String,
    pub abilities: Vec<String>,
}

/// A freshly issued token: the stored record plus the plain value for the client.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub plain_text: String,
    pub token: ApiToken,
}

fn normalize_email(email: &str) -> Result<String, AppError> {
    let email = email.trim().to_lowercase();

    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    };

    if !valid || email.len() > MAX_NAME_LENGTH {
        return Err(AppError::Validation(
            "The email must be a valid email address.".to_string(),
        ));
    }

    Ok(email)
}

//! IP block domain models and parameters.

use std::net::{IpAddr, SocketAddr};

use chrono::{DateTime, Duration, Utc};
use sea_orm::DbErr;

use crate::{
    model::ip_block::{BlockIpDto, IpBlockDto},
    server::error::AppError,
};

pub const DEFAULT_BLOCK_HOURS: i64 = 24;
pub const MAX_BLOCK_HOURS: i64 = 720;

const MAX_NOTES_LENGTH: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockReason {
    #[default]
    Spam,
    Abuse,
    Manual,
}

impl BlockReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spam => "spam",
            Self::Abuse => "abuse",
            Self::Manual => "manual",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "spam" => Some(Self::Spam),
            "abuse" => Some(Self::Abuse),
            "manual" => Some(Self::Manual),
            _ => None,
        }
    }

    pub fn from_db(value: &str) -> Result<Self, DbErr> {
        Self::parse(value).ok_or_else(|| DbErr::Custom(format!("Unknown block reason: {}", value)))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IpBlock {
    pub id: i32,
    pub business_id: i32,
    pub ip_address: String,
    pub blocked_by: Option<i32>,
    pub reason: BlockReason,
    pub notes: Option<String>,
    pub blocked_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub unblocked_at: Option<DateTime<Utc>>,
    pub metadata: Option<serde_json::Value>,
}

impl IpBlock {
    pub fn from_entity(entity: entity::ip_block::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            business_id: entity.business_id,
            ip_address: entity.ip_address,
            blocked_by: entity.blocked_by,
            reason: BlockReason::from_db(&entity.reason)?,
            notes: entity.notes,
            blocked_at: entity.blocked_at,
            expires_at: entity.expires_at,
            unblocked_at: entity.unblocked_at,
            metadata: entity.metadata,
        })
    }

    /// Not lifted and not past its expiry.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.unblocked_at.is_none() && self.expires_at.is_none_or(|at| at > now)
    }

    pub fn into_dto(self, now: DateTime<Utc>) -> IpBlockDto {
        let is_active = self.is_active(now);
        IpBlockDto {
            id: self.id,
            business_id: self.business_id,
            ip_address: self.ip_address,
            reason: self.reason.as_str().to_string(),
            notes: self.notes,
            blocked_by: self.blocked_by,
            blocked_at: self.blocked_at,
            expires_at: self.expires_at,
            unblocked_at: self.unblocked_at,
            metadata: self.metadata,
            is_active,
        }
    }
}

/// Validated request to block the IP behind a call.
#[derive(Debug, Clone)]
pub struct BlockIpParam {
    pub call_id: i32,
    pub reason: BlockReason,
    pub duration: Duration,
    pub notes: Option<String>,
}

impl BlockIpParam {
    /// Validates a block request.
    ///
    /// # Returns
    /// - `Ok(BlockIpParam)` - Reason defaults to `spam`, duration to 24 hours
    /// - `Err(AppError::Validation)` - Unknown reason, duration outside 1..=720 hours or long notes
    pub fn from_dto(dto: BlockIpDto) -> Result<Self, AppError> {
        let reason = match dto.reason.as_deref() {
            None => BlockReason::default(),
            Some(value) => BlockReason::parse(value).ok_or_else(|| {
                AppError::Validation("The selected reason is invalid.".to_string())
            })?,
        };

        let hours = dto.duration_hours.unwrap_or(DEFAULT_BLOCK_HOURS);
        if !(1..=MAX_BLOCK_HOURS).contains(&hours) {
            return Err(AppError::Validation(
                "The duration must be between 1 and 720 hours.".to_string(),
            ));
        }

        let notes = dto
            .notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        if let Some(notes) = &notes {
            if notes.chars().count() > MAX_NOTES_LENGTH {
                return Err(AppError::Validation(
                    "The notes may not be greater than 500 characters.".to_string(),
                ));
            }
        }

        Ok(Self {
            call_id: dto.call_id,
            reason,
            duration: Duration::hours(hours),
            notes,
        })
    }
}

/// Parameters for inserting a block row.
#[derive(Debug, Clone)]
pub struct CreateIpBlockParam {
    pub business_id: i32,
    pub ip_address: String,
    pub blocked_by: Option<i32>,
    pub reason: BlockReason,
    pub notes: Option<String>,
    pub blocked_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub metadata: Option<serde_json::Value>,
}

/// Canonical text form of an address, accepting `ip:port` and `[v6]:port` as well.
///
/// Blocks are stored and looked up in this form, so `2001:DB8:0:0::1` and `2001:db8::1`
/// are the same address.
pub fn normalize_ip(value: &str) -> Option<String> {
    let value = value.trim();

    value
        .parse::<IpAddr>()
        .or_else(|_| value.parse::<SocketAddr>().map(|addr| addr.ip()))
        .ok()
        .map(|ip| ip.to_string())
}

/// Parses and normalizes an IPv4 or IPv6 address.
pub fn parse_ip(value: &str) -> Result<String, AppError> {
    normalize_ip(value)
        .ok_or_else(|| AppError::Validation("The ip address must be a valid IP address.".to_string()))
}

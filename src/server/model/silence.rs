//! Table silence domain models and parameters.
//!
//! A silence suppresses customer calls from a table until it expires or is lifted.
//! Waiters create `manual` silences; the anti-spam check creates `automatic` ones.

use chrono::{DateTime, Duration, Utc};
use sea_orm::DbErr;

use crate::{
    model::silence::{SilenceInfoDto, SilenceTableDto},
    server::error::AppError,
};

pub const DEFAULT_SILENCE_MINUTES: i64 = 30;
pub const MAX_SILENCE_MINUTES: i64 = 120;
/// Lifetime of a silence created by the anti-spam check.
pub const AUTO_SILENCE_MINUTES: i64 = 10;

const MAX_NOTES_LENGTH: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SilenceReason {
    Manual,
    Automatic,
}

impl SilenceReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Automatic => "automatic",
        }
    }

    pub fn from_db(value: &str) -> Result<Self, DbErr> {
        match value {
            "manual" => Ok(Self::Manual),
            "automatic" => Ok(Self::Automatic),
            other => Err(DbErr::Custom(format!("Unknown silence reason: {}", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableSilence {
    pub id: i32,
    pub table_id: i32,
    pub silenced_by: Option<i32>,
    pub reason: SilenceReason,
    pub notes: Option<String>,
    pub call_count: Option<i32>,
    pub silenced_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub unsilenced_at: Option<DateTime<Utc>>,
}

impl TableSilence {
    pub fn from_entity(entity: entity::table_silence::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            table_id: entity.table_id,
            silenced_by: entity.silenced_by,
            reason: SilenceReason::from_db(&entity.reason)?,
            notes: entity.notes,
            call_count: entity.call_count,
            silenced_at: entity.silenced_at,
            expires_at: entity.expires_at,
            unsilenced_at: entity.unsilenced_at,
        })
    }

    /// Not lifted and not past its expiry.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.unsilenced_at.is_none() && self.expires_at.is_none_or(|at| at > now)
    }

    /// Whole minutes until expiry, rounded up. `None` for open-ended silences.
    pub fn remaining_minutes(&self, now: DateTime<Utc>) -> Option<i64> {
        self.expires_at.map(|at| {
            let seconds = (at - now).num_seconds().max(0);
            (seconds + 59) / 60
        })
    }

    /// Only manual silences may be lifted by staff.
    pub fn can_unsilence(&self) -> bool {
        self.reason == SilenceReason::Manual
    }

    pub fn into_dto(self, now: DateTime<Utc>) -> SilenceInfoDto {
        let remaining_minutes = self.remaining_minutes(now);
        SilenceInfoDto {
            id: self.id,
            reason: self.reason.as_str().to_string(),
            notes: self.notes,
            silenced_by: self.silenced_by,
            call_count: self.call_count,
            silenced_at: self.silenced_at,
            expires_at: self.expires_at,
            remaining_minutes,
        }
    }
}

/// Validated manual silence request.
#[derive(Debug, Clone)]
pub struct SilenceParam {
    pub duration: Duration,
    pub notes: Option<String>,
}

impl SilenceParam {
    pub fn from_dto(dto: SilenceTableDto) -> Result<Self, AppError> {
        Self::validate(dto.duration_minutes, dto.notes)
    }

    /// Validates duration and notes.
    ///
    /// # Returns
    /// - `Ok(SilenceParam)` - Duration defaults to 30 minutes
    /// - `Err(AppError::Validation)` - Duration outside 1..=120 or notes over 500 characters
    pub fn validate(duration_minutes: Option<i64>, notes: Option<String>) -> Result<Self, AppError> {
        let minutes = duration_minutes.unwrap_or(DEFAULT_SILENCE_MINUTES);
        if !(1..=MAX_SILENCE_MINUTES).contains(&minutes) {
            return Err(AppError::Validation(
                "The duration must be between 1 and 120 minutes.".to_string(),
            ));
        }

        let notes = notes.map(|n| n.trim().to_string()).filter(|n| !n.is_empty());
        if let Some(notes) = &notes {
            if notes.chars().count() > MAX_NOTES_LENGTH {
                return Err(AppError::Validation(
                    "The notes may not be greater than 500 characters.".to_string(),
                ));
            }
        }

        Ok(Self {
            duration: Duration::minutes(minutes),
            notes,
        })
    }
}

/// Parameters for inserting a silence row.
#[derive(Debug, Clone)]
pub struct CreateSilenceParam {
    pub table_id: i32,
    pub silenced_by: Option<i32>,
    pub reason: SilenceReason,
    pub notes: Option<String>,
    pub call_count: Option<i32>,
    pub silenced_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

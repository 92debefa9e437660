use crate::server::{error::AppError, service::expiry::ExpiryService};
use chrono::{Duration, Utc};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};
